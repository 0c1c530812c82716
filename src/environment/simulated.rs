//! Simulated 2D environment with rectangle obstacles

use crate::common::{
    CollisionOracle, Configuration, PlanningError, PlanningResult, Visualizable, WorkspaceBounds,
};
use crate::environment::placement::{PlacementGuard, RobotBody};
use crate::utils::Visualizer;

/// Axis-aligned rectangle obstacle
#[derive(Debug, Clone)]
pub struct RectObstacle {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl RectObstacle {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> PlanningResult<Self> {
        if xmin > xmax || ymin > ymax {
            return Err(PlanningError::InvalidParameter(format!(
                "obstacle rectangle has inverted extents: x [{}, {}], y [{}, {}]",
                xmin, xmax, ymin, ymax
            )));
        }
        Ok(Self { xmin, xmax, ymin, ymax })
    }

    /// Build from a center point and half extents, the shape obstacle
    /// footprints usually arrive in from a physics environment.
    pub fn from_center(center: Configuration, half_width: f64, half_height: f64) -> PlanningResult<Self> {
        Self::new(
            center.x - half_width,
            center.x + half_width,
            center.y - half_height,
            center.y + half_height,
        )
    }

    /// Whether a disc of `radius` centered at `center` overlaps this rectangle
    pub fn intersects_disc(&self, center: Configuration, radius: f64) -> bool {
        let nearest_x = center.x.clamp(self.xmin, self.xmax);
        let nearest_y = center.y.clamp(self.ymin, self.ymax);
        let dx = center.x - nearest_x;
        let dy = center.y - nearest_y;
        (dx * dx + dy * dy).sqrt() <= radius
    }
}

/// Planar environment: workspace bounds, static rectangle obstacles, and
/// the robot body whose placement collision queries temporarily move.
pub struct SimulatedEnvironment {
    bounds: WorkspaceBounds,
    obstacles: Vec<RectObstacle>,
    robot: RobotBody,
}

impl SimulatedEnvironment {
    pub fn new(bounds: WorkspaceBounds, robot: RobotBody) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            robot,
        }
    }

    /// Default session setup: workspace [-5, 5] x [-5, 5], point robot at
    /// the origin.
    pub fn with_default_bounds() -> Self {
        let bounds = WorkspaceBounds::new(
            Configuration::new(-5.0, -5.0),
            Configuration::new(5.0, 5.0),
        )
        .expect("static corners are ordered");
        Self::new(bounds, RobotBody::new(Configuration::origin(), 0.0))
    }

    pub fn add_obstacle(&mut self, obstacle: RectObstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[RectObstacle] {
        &self.obstacles
    }

    /// Current robot placement; collision queries must leave this unchanged
    pub fn robot_placement(&self) -> Configuration {
        self.robot.position()
    }
}

impl CollisionOracle for SimulatedEnvironment {
    fn place_and_check_collision(&mut self, config: Configuration) -> PlanningResult<bool> {
        if !config.is_finite() {
            return Err(PlanningError::CollisionOracle(format!(
                "candidate placement ({}, {}) is not finite",
                config.x, config.y
            )));
        }

        let guard = PlacementGuard::new(&mut self.robot, config);
        let body = guard.body();
        let hit = self
            .obstacles
            .iter()
            .any(|obs| obs.intersects_disc(body.position(), body.radius()));
        Ok(hit)
    }

    fn workspace_bounds(&self) -> WorkspaceBounds {
        self.bounds
    }
}

impl Visualizable for SimulatedEnvironment {
    fn visualize(&self, vis: &mut Visualizer) {
        for obs in &self.obstacles {
            vis.plot_obstacle_rect(obs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_env() -> SimulatedEnvironment {
        let mut env = SimulatedEnvironment::with_default_bounds();
        env.add_obstacle(
            RectObstacle::from_center(Configuration::new(1.0, 0.0), 1.0, 0.5).unwrap(),
        );
        env
    }

    #[test]
    fn test_obstacle_rejects_inverted_extents() {
        assert!(matches!(
            RectObstacle::new(1.0, -1.0, 0.0, 1.0),
            Err(PlanningError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_disc_overlap() {
        let obs = RectObstacle::new(0.4, 0.6, -1.0, 1.0).unwrap();
        // center inside
        assert!(obs.intersects_disc(Configuration::new(0.5, 0.0), 0.0));
        // clear miss
        assert!(!obs.intersects_disc(Configuration::new(0.0, 0.0), 0.1));
        // touching via radius
        assert!(obs.intersects_disc(Configuration::new(0.3, 0.0), 0.1));
    }

    #[test]
    fn test_query_reports_collision_and_restores_placement() {
        let mut env = table_env();
        let home = env.robot_placement();

        let hit = env
            .place_and_check_collision(Configuration::new(1.0, 0.0))
            .unwrap();
        assert!(hit);
        assert_eq!(env.robot_placement(), home);

        let free = env
            .place_and_check_collision(Configuration::new(-4.0, -4.0))
            .unwrap();
        assert!(!free);
        assert_eq!(env.robot_placement(), home);
    }

    #[test]
    fn test_non_finite_placement_is_oracle_failure() {
        let mut env = table_env();
        let home = env.robot_placement();
        let result = env.place_and_check_collision(Configuration::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(PlanningError::CollisionOracle(_))));
        assert_eq!(env.robot_placement(), home);
    }
}
