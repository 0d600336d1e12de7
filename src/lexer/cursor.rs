//! Source lines and position tracking within a single line
//!
//! A [`LineCursor`] is built fresh for every line and dropped when the line
//! is done. It only ever moves forward; the offset is clamped to the line
//! length so callers cannot run past the end.

/// Cursor over one line of source text
#[derive(Debug, Clone)]
pub struct LineCursor {
    /// Line contents as characters
    chars: Vec<char>,
    /// Line number (1-indexed)
    line: usize,
    /// Current offset within the line
    offset: usize,
}

impl LineCursor {
    /// Creates a cursor at the start of `text`, which is line `line` (1-indexed)
    pub fn new(text: &str, line: usize) -> Self {
        LineCursor {
            chars: text.chars().collect(),
            line,
            offset: 0,
        }
    }

    /// Line number this cursor scans
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current offset within the line, in characters
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Character at the current offset, `None` at end of line
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// True iff the character right after the current one is `expected`
    pub fn peek(&self, expected: char) -> bool {
        self.chars.get(self.offset + 1) == Some(&expected)
    }

    /// Move forward by `n` characters, stopping at end of line
    pub fn advance(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.chars.len());
    }

    /// Consume the remainder of the line
    pub fn skip_to_end(&mut self) {
        self.offset = self.chars.len();
    }

    /// True once every character of the line has been consumed
    pub fn at_end_of_line(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Advance while `pred` holds, returning how many characters were skipped
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.offset;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.offset += 1;
        }
        self.offset - start
    }

    /// Offset of the next `target` strictly after the current character
    pub fn find_after(&self, target: char) -> Option<usize> {
        let from = self.offset + 1;
        self.chars
            .get(from..)?
            .iter()
            .position(|&c| c == target)
            .map(|i| from + i)
    }

    /// Text between two offsets, clamped to the line
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Up to `width` characters starting at the current offset
    pub fn context(&self, width: usize) -> String {
        self.slice(self.offset, self.offset + width)
    }
}

/// Splits source text into lines
///
/// Breaks on `\n`, `\r\n`, a lone `\r`, vertical tab, form feed, the ASCII
/// separators `\x1c`..=`\x1e`, NEL, and the Unicode line and paragraph
/// separators. A break at the very end of the text does not start an extra
/// empty line.
pub fn split_lines(source: &str) -> SourceLines<'_> {
    SourceLines { rest: source }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct SourceLines<'src> {
    rest: &'src str,
}

impl<'src> Iterator for SourceLines<'src> {
    type Item = &'src str;

    fn next(&mut self) -> Option<&'src str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((at, c)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let line = &self.rest[..at];
        let mut next = at + c.len_utf8();
        if c == '\r' && self.rest[next..].starts_with('\n') {
            next += 1;
        }
        self.rest = &self.rest[next..];
        Some(line)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
