//! Configuration for the progression engine.

/// Tunable knobs for an engine instance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for greeting-template variation.
    pub seed: u64,
    /// Flat XP credited by a blessing.
    pub blessing_xp: u32,
    /// How long the blessing marker stays visible, in milliseconds.
    pub blessing_lifetime_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            blessing_xp: 5,
            blessing_lifetime_ms: 2100,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the flat blessing XP amount.
    pub fn with_blessing_xp(mut self, xp: u32) -> Self {
        self.blessing_xp = xp;
        self
    }

    /// Set the blessing marker lifetime in milliseconds.
    pub fn with_blessing_lifetime_ms(mut self, ms: u64) -> Self {
        self.blessing_lifetime_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.blessing_xp, 5);
        assert_eq!(cfg.blessing_lifetime_ms, 2100);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(7)
            .with_blessing_xp(10)
            .with_blessing_lifetime_ms(500);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.blessing_xp, 10);
        assert_eq!(cfg.blessing_lifetime_ms, 500);
    }
}
