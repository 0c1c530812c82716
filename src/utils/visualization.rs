//! Visualization utilities for sampling_planner
//!
//! Provides a unified interface for plotting paths, edges, and obstacle
//! footprints using gnuplot. Entirely decoupled from planning logic;
//! nothing here affects planning results.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{Configuration, Path2D, PlanningError, PlanningResult, WorkspaceBounds};
use crate::environment::RectObstacle;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const OBSTACLE: &str = RED;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = BLACK;
    pub const EDGE: &str = GRAY;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.5,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 2.5,
            caption: "Path".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Clamp the axes to the workspace rectangle and mark the goal
    pub fn init_workspace(&mut self, bounds: &WorkspaceBounds, goal: Configuration) -> &mut Self {
        self.set_x_range(bounds.lower().x, bounds.upper().x);
        self.set_y_range(bounds.lower().y, bounds.upper().y);
        self.plot_goal(goal)
    }

    /// Plot a path as a polyline
    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        let x = path.x_coords();
        let y = path.y_coords();

        self.figure.axes2d().lines(&x, &y, &[
            Caption(&style.caption),
            Color(&style.color),
            LineWidth(style.line_width),
        ]);
        self
    }

    /// Plot a single edge between two configurations
    pub fn plot_edge(&mut self, from: Configuration, to: Configuration) -> &mut Self {
        self.figure.axes2d().lines(&[from.x, to.x], &[from.y, to.y], &[
            Color(colors::EDGE),
            LineWidth(1.0),
        ]);
        self
    }

    /// Plot a rectangle obstacle footprint as a closed outline
    pub fn plot_obstacle_rect(&mut self, obstacle: &RectObstacle) -> &mut Self {
        let x = [
            obstacle.xmin,
            obstacle.xmax,
            obstacle.xmax,
            obstacle.xmin,
            obstacle.xmin,
        ];
        let y = [
            obstacle.ymin,
            obstacle.ymin,
            obstacle.ymax,
            obstacle.ymax,
            obstacle.ymin,
        ];
        self.figure.axes2d().lines(&x, &y, &[
            Color(colors::OBSTACLE),
            LineWidth(1.5),
        ]);
        self
    }

    /// Plot a single point
    pub fn plot_point(&mut self, point: Configuration, style: &PointStyle) -> &mut Self {
        self.figure.axes2d().points(&[point.x], &[point.y], &[
            Caption(&style.caption),
            Color(&style.color),
            PointSymbol(style.symbol),
            PointSize(style.size),
        ]);
        self
    }

    /// Plot start position
    pub fn plot_start(&mut self, point: Configuration) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    /// Plot goal position
    pub fn plot_goal(&mut self, point: Configuration) -> &mut Self {
        self.plot_point(
            point,
            &PointStyle::new(colors::GOAL, "Goal").with_size(1.5).with_symbol('x'),
        )
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_creation() {
        let vis = Visualizer::new();
        assert!(vis.aspect_ratio.is_some());
    }

    #[test]
    fn test_init_workspace_sets_ranges() {
        let bounds = WorkspaceBounds::new(
            Configuration::new(-5.0, -5.0),
            Configuration::new(5.0, 5.0),
        )
        .unwrap();
        let mut vis = Visualizer::new();
        vis.init_workspace(&bounds, Configuration::new(4.0, 4.0));
        assert_eq!(vis.x_range, Some((-5.0, 5.0)));
        assert_eq!(vis.y_range, Some((-5.0, 5.0)));
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Shortened").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }
}
