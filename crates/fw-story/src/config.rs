//! Configuration for a story session.

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// RNG seed for reproducible chance gates.
    pub seed: u64,
    /// Keep each scenario's availability rolls until the player leaves it.
    /// When false, every listing of choices rolls again.
    pub sticky_availability: bool,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sticky_availability: true,
        }
    }
}

impl StoryConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set whether availability rolls are kept for the whole visit.
    pub fn with_sticky_availability(mut self, sticky: bool) -> Self {
        self.sticky_availability = sticky;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoryConfig::default();
        assert_eq!(cfg.seed, 42);
        assert!(cfg.sticky_availability);
    }

    #[test]
    fn builder_methods() {
        let cfg = StoryConfig::default()
            .with_seed(7)
            .with_sticky_availability(false);
        assert_eq!(cfg.seed, 7);
        assert!(!cfg.sticky_availability);
    }
}
