use crate::core::grid::Glyphs;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How the step kernel is dispatched over the interior rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// One row after another on the calling thread.
    Sequential,
    /// Rows spread over the rayon thread pool. Falls back to [`Sequential`](Self::Sequential)
    /// when the crate is built without the `parallel` feature.
    #[default]
    Parallel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub iterations: u64,
    pub strategy: ExecutionStrategy,
    pub glyphs: Glyphs,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    iterations: Option<u64>,
    strategy: Option<ExecutionStrategy>,
    glyphs: Option<Glyphs>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig {
            iterations: self
                .iterations
                .ok_or(ConfigError::MissingParameter("iterations"))?,
            strategy: self.strategy.unwrap_or_default(),
            glyphs: self.glyphs.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fills_defaults() {
        let config = SimulationConfigBuilder::new().iterations(4).build().unwrap();
        assert_eq!(config.iterations, 4);
        assert_eq!(config.strategy, ExecutionStrategy::Parallel);
        assert_eq!(config.glyphs, Glyphs::default());
    }

    #[test]
    fn build_keeps_explicit_values() {
        let glyphs = Glyphs {
            alive: '#',
            dead: ' ',
        };
        let config = SimulationConfigBuilder::new()
            .iterations(0)
            .strategy(ExecutionStrategy::Sequential)
            .glyphs(glyphs)
            .build()
            .unwrap();
        assert_eq!(config.iterations, 0);
        assert_eq!(config.strategy, ExecutionStrategy::Sequential);
        assert_eq!(config.glyphs, glyphs);
    }

    #[test]
    fn build_without_iterations_fails() {
        let result = SimulationConfigBuilder::new()
            .strategy(ExecutionStrategy::Sequential)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("iterations")));
    }
}
