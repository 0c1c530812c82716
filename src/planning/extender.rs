//! Collision-checked straight-line extension between configurations
//!
//! Walks from a start configuration toward a target in fixed-length
//! steps, validating each intermediate placement, and stops at the last
//! collision-free step.

use crate::common::{CollisionOracle, Configuration, PlanningResult};

/// Tunable parameters for straight-line extension
#[derive(Debug, Clone)]
pub struct ExtendConfig {
    /// Step length between consecutive collision checks
    pub resolution: f64,
}

impl Default for ExtendConfig {
    fn default() -> Self {
        Self { resolution: 0.01 }
    }
}

/// Incremental straight-line extender
#[derive(Debug, Clone, Default)]
pub struct LineExtender {
    config: ExtendConfig,
}

impl LineExtender {
    pub fn new(config: ExtendConfig) -> Self {
        Self { config }
    }

    pub fn resolution(&self) -> f64 {
        self.config.resolution
    }

    /// Walk from `start` toward `end`, checking every step.
    ///
    /// Returns `Some(end)` exactly when the whole segment is free (no
    /// accumulated floating-point drift), the last collision-free
    /// intermediate when a step collides, and `None` when even the first
    /// step is blocked. The returned configuration, if present, is
    /// reachable from `start` along a fully collision-free straight line.
    ///
    /// A zero-length request returns `Some(end)` without a collision
    /// check; the endpoint is trivially reached.
    pub fn extend<O: CollisionOracle>(
        &self,
        env: &mut O,
        start: Configuration,
        end: Configuration,
    ) -> PlanningResult<Option<Configuration>> {
        let dist = start.distance(&end);
        if dist == 0.0 {
            return Ok(Some(end));
        }

        let num_steps = (dist / self.config.resolution).ceil().max(1.0) as usize;
        let step = (end.to_vector() - start.to_vector()) / num_steps as f64;

        let mut best_config = None;
        for i in 1..=num_steps {
            let cur = Configuration::from(start.to_vector() + step * i as f64);
            if env.place_and_check_collision(cur)? {
                return Ok(best_config);
            }
            best_config = Some(cur);
        }

        Ok(Some(end))
    }
}
