//! Per-query evaluation settings

/// Cards a player puts in the crib in a two-player game
pub const DEFAULT_DISCARD_SIZE: usize = 2;

/// Settings for one call to [`crate::evaluate_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Number of cards thrown to the crib
    pub discard_size: usize,
    /// Worker count for a dedicated pool; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl EvaluationConfig {
    pub fn new() -> Self {
        EvaluationConfig {
            discard_size: DEFAULT_DISCARD_SIZE,
            threads: None,
        }
    }

    pub fn with_discard_size(mut self, discard_size: usize) -> Self {
        self.discard_size = discard_size;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_card_discard_on_global_pool() {
        let config = EvaluationConfig::default();
        assert_eq!(config.discard_size, 2);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_builders() {
        let config = EvaluationConfig::new().with_discard_size(1).with_threads(Some(3));
        assert_eq!(config, EvaluationConfig { discard_size: 1, threads: Some(3) });
    }
}
