//! Stochastic path shortcutting under a wall-clock deadline
//!
//! Repeatedly tries to replace a random sub-chain of the path with a
//! single straight shortcut, splicing the path in place, until the
//! timeout expires.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::common::{CollisionOracle, Configuration, Path2D, PlanningError, PlanningResult};
use crate::planning::extender::{ExtendConfig, LineExtender};

/// Tunable parameters for path shortcutting
#[derive(Debug, Clone)]
pub struct ShortenConfig {
    /// A shortcut is accepted when the extension lands within this
    /// distance of its target point
    pub reach_tolerance: f64,
    /// Step length used when collision-checking candidate shortcuts
    pub resolution: f64,
}

impl Default for ShortenConfig {
    fn default() -> Self {
        Self {
            reach_tolerance: 0.01,
            resolution: 0.01,
        }
    }
}

/// Shortcut-based path shortener
#[derive(Debug, Clone, Default)]
pub struct PathShortener {
    config: ShortenConfig,
    extender: LineExtender,
}

impl PathShortener {
    pub fn new(config: ShortenConfig) -> Self {
        let extender = LineExtender::new(ExtendConfig {
            resolution: config.resolution,
        });
        Self { config, extender }
    }

    /// Shorten `path` in place until `timeout` elapses.
    ///
    /// Each attempt picks two non-adjacent edges, a random interior point
    /// on each, and replaces the waypoints between them with the two
    /// points whenever the straight segment connecting them is
    /// collision-free. Accepted shortcuts never increase the total
    /// polyline length. Reaching the deadline is normal termination;
    /// the path keeps its start and goal waypoints throughout.
    ///
    /// The path needs at least 4 waypoints; fewer cannot offer a
    /// non-adjacent edge pair.
    pub fn shorten<O: CollisionOracle>(
        &self,
        env: &mut O,
        path: &mut Path2D,
        timeout: Duration,
    ) -> PlanningResult<()> {
        if path.len() < 4 {
            return Err(PlanningError::DegeneratePath(format!(
                "{} waypoints, shortcutting needs at least 4",
                path.len()
            )));
        }

        let mut rng = rand::thread_rng();
        let started = Instant::now();

        while started.elapsed() < timeout {
            let num_edges = path.len() - 1;

            // two non-adjacent edges; redraw the pair so short paths
            // cannot strand the draw on an edge with no valid partner
            let mut e1 = rng.gen_range(0..num_edges);
            let mut e2 = rng.gen_range(0..num_edges);
            while e1.abs_diff(e2) <= 1 {
                e1 = rng.gen_range(0..num_edges);
                e2 = rng.gen_range(0..num_edges);
            }
            if e1 > e2 {
                std::mem::swap(&mut e1, &mut e2);
            }

            let p1 = self.interior_point(&mut rng, path.waypoints[e1], path.waypoints[e1 + 1]);
            let p2 = self.interior_point(&mut rng, path.waypoints[e2], path.waypoints[e2 + 1]);

            if let Some(reached) = self.extender.extend(env, p1, p2)? {
                if reached.distance(&p2) < self.config.reach_tolerance {
                    // drop the detour between the two edges, keep the
                    // shortcut endpoints
                    path.waypoints.splice(e1 + 1..=e2, vec![p1, p2]);
                }
            }
        }

        Ok(())
    }

    fn interior_point<R: Rng>(
        &self,
        rng: &mut R,
        edge_start: Configuration,
        edge_end: Configuration,
    ) -> Configuration {
        edge_start.interpolate(&edge_end, rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{RectObstacle, SimulatedEnvironment};

    fn detour_path() -> Path2D {
        Path2D::from_waypoints(vec![
            Configuration::new(0.0, 0.0),
            Configuration::new(1.0, 0.0),
            Configuration::new(1.0, 1.0),
            Configuration::new(2.0, 1.0),
        ])
    }

    #[test]
    fn test_too_few_waypoints_fails_fast() {
        let shortener = PathShortener::default();
        let mut env = SimulatedEnvironment::with_default_bounds();
        let mut path = Path2D::from_waypoints(vec![
            Configuration::new(0.0, 0.0),
            Configuration::new(1.0, 0.0),
        ]);
        let result = shortener.shorten(&mut env, &mut path, Duration::from_millis(10));
        assert!(matches!(result, Err(PlanningError::DegeneratePath(_))));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_unobstructed_detour_shrinks() {
        let shortener = PathShortener::default();
        let mut env = SimulatedEnvironment::with_default_bounds();
        let mut path = detour_path();
        let before = path.total_length();
        let start = path.start().unwrap();
        let goal = path.goal().unwrap();

        shortener
            .shorten(&mut env, &mut path, Duration::from_millis(50))
            .unwrap();

        // every accepted shortcut swaps two waypoints for two new ones
        assert_eq!(path.len(), 4);
        assert_eq!(path.start().unwrap(), start);
        assert_eq!(path.goal().unwrap(), goal);
        assert!(path.total_length() <= before + 1e-9);
    }

    #[test]
    fn test_length_never_increases_across_runs() {
        let shortener = PathShortener::default();
        let mut env = SimulatedEnvironment::with_default_bounds();
        let mut path = detour_path();
        let mut last = path.total_length();
        for _ in 0..3 {
            shortener
                .shorten(&mut env, &mut path, Duration::from_millis(20))
                .unwrap();
            let length = path.total_length();
            assert!(length <= last + 1e-9);
            last = length;
        }
    }

    #[test]
    fn test_blocked_shortcut_leaves_path_unchanged() {
        let shortener = PathShortener::default();
        let mut env = SimulatedEnvironment::with_default_bounds();
        // wall between the first and last edge of the detour
        env.add_obstacle(RectObstacle::new(0.2, 1.8, 0.1, 0.9).unwrap());
        let mut path = detour_path();
        let before = path.waypoints.clone();

        shortener
            .shorten(&mut env, &mut path, Duration::from_millis(30))
            .unwrap();

        assert_eq!(path.waypoints, before);
    }

    #[test]
    fn test_deadline_is_honored() {
        let shortener = PathShortener::default();
        let mut env = SimulatedEnvironment::with_default_bounds();
        let mut path = detour_path();
        let timeout = Duration::from_millis(40);
        let started = Instant::now();
        shortener.shorten(&mut env, &mut path, timeout).unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= timeout);
        // one attempt past the deadline at most, each attempt is short
        assert!(elapsed < timeout + Duration::from_millis(500));
    }
}
