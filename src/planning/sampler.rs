//! Goal-biased random configuration sampling
//!
//! Draws collision-free configurations uniformly from the workspace
//! rectangle, short-circuiting to a fixed goal configuration with a
//! configurable probability.

use rand::Rng;

use crate::common::{CollisionOracle, Configuration, PlanningError, PlanningResult};

/// Sampler for valid configurations with optional goal bias
///
/// With no goal set the bias is 0 and sampling is purely uniform over
/// the workspace bounds.
#[derive(Debug, Clone, Default)]
pub struct GoalBiasedSampler {
    goal: Option<Configuration>,
    goal_bias: f64,
}

impl GoalBiasedSampler {
    pub fn new() -> Self {
        Self {
            goal: None,
            goal_bias: 0.0,
        }
    }

    /// Store the goal configuration and the probability of returning it
    /// directly from [`sample`](Self::sample).
    ///
    /// `bias` must lie in [0, 1]; 0 never samples the goal, 1 always does.
    pub fn set_goal_parameters(&mut self, goal: Configuration, bias: f64) -> PlanningResult<()> {
        if !(0.0..=1.0).contains(&bias) {
            return Err(PlanningError::InvalidParameter(format!(
                "goal bias {} outside [0, 1]",
                bias
            )));
        }
        self.goal = Some(goal);
        self.goal_bias = bias;
        Ok(())
    }

    /// Set the bias alone, leaving any stored goal untouched.
    ///
    /// Sampling with a positive bias and no stored goal fails with
    /// [`PlanningError::MissingGoal`].
    pub fn set_goal_bias(&mut self, bias: f64) -> PlanningResult<()> {
        if !(0.0..=1.0).contains(&bias) {
            return Err(PlanningError::InvalidParameter(format!(
                "goal bias {} outside [0, 1]",
                bias
            )));
        }
        self.goal_bias = bias;
        Ok(())
    }

    pub fn goal(&self) -> Option<Configuration> {
        self.goal
    }

    pub fn goal_bias(&self) -> f64 {
        self.goal_bias
    }

    /// Draw a configuration: the stored goal with probability `goal_bias`
    /// (returned verbatim, no collision check), otherwise a uniform
    /// collision-free draw from the workspace rectangle.
    ///
    /// The rejection loop has no internal bound; for a workspace with no
    /// free volume this call blocks forever, so callers needing liveness
    /// must impose their own deadline. Oracle failures abort the loop
    /// immediately instead of being retried.
    pub fn sample<O: CollisionOracle>(&self, env: &mut O) -> PlanningResult<Configuration> {
        let mut rng = rand::thread_rng();

        if self.goal_bias > 0.0 {
            let goal = self.goal.ok_or_else(|| {
                PlanningError::MissingGoal(format!(
                    "goal bias is {} but no goal configuration was set",
                    self.goal_bias
                ))
            })?;
            if rng.gen::<f64>() < self.goal_bias {
                return Ok(goal);
            }
        }

        let bounds = env.workspace_bounds();
        let (lower, upper) = (bounds.lower(), bounds.upper());
        loop {
            let candidate = Configuration::new(
                rng.gen_range(lower.x..=upper.x),
                rng.gen_range(lower.y..=upper.y),
            );
            if !env.place_and_check_collision(candidate)? {
                return Ok(candidate);
            }
        }
    }
}
