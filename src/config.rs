//! Configuration for encoding operations

/// Configuration for Reed-Solomon encoding
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Number of threads for multi-block encoding (0 = auto-detect)
    pub threads: usize,
    /// Whether independent blocks are encoded in parallel
    pub parallel: bool,
    /// Whether generator polynomials are shared through the global cache
    pub cache_generators: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
            cache_generators: true,
        }
    }
}

impl EncoderConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self {
            threads,
            parallel,
            ..Self::default()
        }
    }

    /// Sequential, uncached configuration
    pub fn sequential() -> Self {
        Self {
            threads: 1,
            parallel: false,
            cache_generators: false,
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        Self::new(threads, parallel)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.threads, 0);
        assert!(config.parallel);
        assert!(config.cache_generators);
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_sequential_uses_one_thread() {
        assert_eq!(EncoderConfig::new(8, false).effective_threads(), 1);
        assert_eq!(EncoderConfig::sequential().effective_threads(), 1);
        assert_eq!(EncoderConfig::new(3, true).effective_threads(), 3);
    }
}
