//! Common traits defining the collaborator boundaries of the planning core

use crate::common::error::PlanningResult;
use crate::common::types::{Configuration, WorkspaceBounds};

/// Collision-checking collaborator used by the sampling and extension
/// primitives.
///
/// An implementation temporarily places the robot at the candidate
/// configuration, runs exactly one collision query, and restores the
/// prior placement before returning - on every exit path, including
/// query failures. The robot placement is a shared resource; leaking a
/// candidate placement would corrupt every later query.
pub trait CollisionOracle {
    /// Place the robot at `config`, query collision against all
    /// obstacles, restore the prior placement.
    ///
    /// Returns `Ok(true)` when the placement collides. A failure of the
    /// placement/query machinery itself is reported as
    /// `PlanningError::CollisionOracle`, never as a collision.
    fn place_and_check_collision(&mut self, config: Configuration) -> PlanningResult<bool>;

    /// The fixed rectangle uniform sampling must respect
    fn workspace_bounds(&self) -> WorkspaceBounds;
}

/// Trait for things that can draw themselves to a visualizer
pub trait Visualizable {
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FreeSpace {
        bounds: WorkspaceBounds,
    }

    impl CollisionOracle for FreeSpace {
        fn place_and_check_collision(&mut self, _config: Configuration) -> PlanningResult<bool> {
            Ok(false)
        }

        fn workspace_bounds(&self) -> WorkspaceBounds {
            self.bounds
        }
    }

    #[test]
    fn test_collision_oracle_trait() {
        let bounds = WorkspaceBounds::new(
            Configuration::new(-1.0, -1.0),
            Configuration::new(1.0, 1.0),
        )
        .unwrap();
        let mut oracle = FreeSpace { bounds };
        let hit = oracle
            .place_and_check_collision(Configuration::origin())
            .unwrap();
        assert!(!hit);
        assert!(oracle.workspace_bounds().contains(&Configuration::origin()));
    }
}
