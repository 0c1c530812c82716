//! Common types used throughout sampling_planner

use itertools::Itertools;
use nalgebra::Vector2;

use crate::common::error::{PlanningError, PlanningResult};

/// A point in the robot's 2D configuration space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    pub x: f64,
    pub y: f64,
}

impl Configuration {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another configuration
    pub fn distance(&self, other: &Configuration) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Point at fraction `t` along the straight segment from self to `other`
    pub fn interpolate(&self, other: &Configuration, t: f64) -> Configuration {
        Configuration::from(self.to_vector() + (other.to_vector() - self.to_vector()) * t)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Configuration {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Configuration {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Axis-aligned rectangle bounding the sampling workspace
///
/// Fixed for the lifetime of a planning session.
#[derive(Debug, Clone, Copy)]
pub struct WorkspaceBounds {
    lower: Configuration,
    upper: Configuration,
}

impl WorkspaceBounds {
    /// Create bounds from the lower-left and upper-right corners.
    ///
    /// The lower corner must not exceed the upper corner componentwise.
    pub fn new(lower: Configuration, upper: Configuration) -> PlanningResult<Self> {
        if lower.x > upper.x || lower.y > upper.y {
            return Err(PlanningError::InvalidParameter(format!(
                "workspace lower corner ({}, {}) exceeds upper corner ({}, {})",
                lower.x, lower.y, upper.x, upper.y
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Configuration {
        self.lower
    }

    pub fn upper(&self) -> Configuration {
        self.upper
    }

    /// Whether a configuration lies inside the rectangle (boundary inclusive)
    pub fn contains(&self, config: &Configuration) -> bool {
        config.x >= self.lower.x
            && config.x <= self.upper.x
            && config.y >= self.lower.y
            && config.y <= self.upper.y
    }
}

/// Piecewise-linear trajectory as an ordered sequence of configurations
///
/// Owned by the caller; the shortener mutates it in place.
#[derive(Debug, Clone)]
pub struct Path2D {
    pub waypoints: Vec<Configuration>,
}

impl Path2D {
    pub fn new() -> Self {
        Self { waypoints: Vec::new() }
    }

    pub fn from_waypoints(waypoints: Vec<Configuration>) -> Self {
        Self { waypoints }
    }

    pub fn push(&mut self, config: Configuration) {
        self.waypoints.push(config);
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn start(&self) -> Option<Configuration> {
        self.waypoints.first().copied()
    }

    pub fn goal(&self) -> Option<Configuration> {
        self.waypoints.last().copied()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.waypoints.iter().map(|c| c.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.waypoints.iter().map(|c| c.y).collect()
    }

    /// Sum of the Euclidean lengths of all edges
    pub fn total_length(&self) -> f64 {
        self.waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.distance(b))
            .sum()
    }
}

impl Default for Path2D {
    fn default() -> Self {
        Self::new()
    }
}
