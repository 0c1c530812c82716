//! Scoped mutation of the shared robot placement

use crate::common::Configuration;

/// The robot body in the simulated environment: a disc with a current
/// placement. The placement is the single shared mutable resource of
/// the planning session.
#[derive(Debug, Clone)]
pub struct RobotBody {
    position: Configuration,
    radius: f64,
}

impl RobotBody {
    pub fn new(position: Configuration, radius: f64) -> Self {
        Self { position, radius }
    }

    pub fn position(&self) -> Configuration {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// RAII guard that moves the robot to a candidate placement and restores
/// the saved placement when dropped.
///
/// Every collision query runs with the body borrowed through a guard, so
/// early returns and error paths restore the placement too.
pub struct PlacementGuard<'a> {
    body: &'a mut RobotBody,
    saved: Configuration,
}

impl<'a> PlacementGuard<'a> {
    pub fn new(body: &'a mut RobotBody, candidate: Configuration) -> Self {
        let saved = body.position;
        body.position = candidate;
        Self { body, saved }
    }

    /// The body at its candidate placement, valid for the guard's lifetime
    pub fn body(&self) -> &RobotBody {
        self.body
    }
}

impl<'a> Drop for PlacementGuard<'a> {
    fn drop(&mut self) {
        self.body.position = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_moves_and_restores() {
        let home = Configuration::new(1.0, 2.0);
        let mut body = RobotBody::new(home, 0.5);
        {
            let guard = PlacementGuard::new(&mut body, Configuration::new(-3.0, 4.0));
            assert_eq!(guard.body().position(), Configuration::new(-3.0, 4.0));
        }
        assert_eq!(body.position(), home);
    }

    #[test]
    fn test_guard_restores_on_early_exit() {
        fn query(body: &mut RobotBody) -> Result<(), ()> {
            let _guard = PlacementGuard::new(body, Configuration::new(9.0, 9.0));
            Err(())
        }

        let home = Configuration::origin();
        let mut body = RobotBody::new(home, 0.2);
        assert!(query(&mut body).is_err());
        assert_eq!(body.position(), home);
    }
}
