//! Parallel scanner for independent sources
//!
//! Uses Rayon for work-stealing parallelism with configurable limits. Each
//! source gets its own [`LineScanner`]; nothing is shared between scans
//! except the read-only keyword tables.

use crate::error::{Error, Result};
use crate::lexer::{LineScanner, ScanConfig, ScanReport};
use rayon::prelude::*;

/// Configuration for parallel scanning
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

/// Scan several sources concurrently
///
/// # Arguments
/// * `sources` - Independent source texts
/// * `config` - Scanner configuration applied to every source
/// * `parallel` - Thread pool limits
///
/// # Returns
/// * `Ok(Vec<ScanReport>)` - One report per source, in input order
/// * `Err(Error)` - First scan error (only with a fail-fast `config`)
///
/// # Example
/// ```ignore
/// let reports = scan_many(&["x = 1", "y = 2"], &ScanConfig::default(), &ParallelConfig::default())?;
/// assert_eq!(reports.len(), 2);
/// ```
pub fn scan_many<S>(
    sources: &[S],
    config: &ScanConfig,
    parallel: &ParallelConfig,
) -> Result<Vec<ScanReport>>
where
    S: AsRef<str> + Sync,
{
    // Empty input fast path
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    // Single source - no pool needed
    if sources.len() == 1 {
        let report = LineScanner::new(sources[0].as_ref(), config.clone()).scan_tokens()?;
        return Ok(vec![report]);
    }

    let threads = parallel.max_parallelism.clamp(1, sources.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::Config(format!("Failed to create thread pool: {}", e)))?;

    tracing::debug!(sources = sources.len(), threads, "parallel scan");

    pool.install(|| {
        sources
            .par_iter()
            .map(|source| LineScanner::new(source.as_ref(), config.clone()).scan_tokens())
            .collect::<Result<Vec<ScanReport>>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_scan_many_basic() {
        let sources = vec!["x = 1", "while (y) { }", "\"s\""];
        let reports =
            scan_many(&sources, &ScanConfig::default(), &ParallelConfig::default()).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].tokens.len(), 3);
        assert_eq!(reports[1].tokens.get(0).unwrap().kind, TokenKind::While);
        assert_eq!(reports[2].tokens.get(0).unwrap().kind, TokenKind::String);
    }

    #[test]
    fn test_scan_many_empty() {
        let sources: Vec<String> = vec![];
        let reports =
            scan_many(&sources, &ScanConfig::default(), &ParallelConfig::default()).unwrap();
        assert_eq!(reports.len(), 0);
    }

    #[test]
    fn test_scan_many_matches_sequential() {
        let sources: Vec<String> = (0..16).map(|i| format!("v{} = {} ** 2", i, i)).collect();
        let parallel = ParallelConfig { max_parallelism: 4 };
        let reports = scan_many(&sources, &ScanConfig::default(), &parallel).unwrap();

        for (source, report) in sources.iter().zip(&reports) {
            assert_eq!(report, &crate::lexer::scan(source));
        }
    }

    #[test]
    fn test_scan_many_error_fail_fast() {
        let sources = vec!["a", "b @", "c"];
        let result = scan_many(&sources, &ScanConfig::fail_fast(), &ParallelConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_many_error_collect_all() {
        let sources = vec!["a", "b @", "c"];
        let reports =
            scan_many(&sources, &ScanConfig::default(), &ParallelConfig::default()).unwrap();

        assert_eq!(reports.len(), 3);
        assert!(reports[0].is_clean());
        assert_eq!(reports[1].diagnostics.len(), 1);
        assert_eq!(reports[1].tokens.len(), 1);
        assert!(reports[2].is_clean());
    }
}
