//! Utility modules for sampling_planner

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
