// Path shortening demo
//
// Builds a planar environment with a table-like obstacle, scatters a few
// goal-biased samples, connects a detour path around the obstacle with
// the collision-checked extender, then runs the wall-clock bounded
// shortcutter and plots the result.

use std::time::Duration;

use sampling_planner::{
    CollisionOracle, Configuration, GoalBiasedSampler, LineExtender, Path2D, PathShortener,
    PlanningResult, RectObstacle, SimulatedEnvironment, Visualizable,
};
use sampling_planner::utils::{colors, PathStyle, PointStyle, Visualizer};

fn main() -> PlanningResult<()> {
    let mut env = SimulatedEnvironment::with_default_bounds();
    env.add_obstacle(RectObstacle::from_center(
        Configuration::new(1.0, 0.0),
        1.5,
        0.75,
    )?);

    let start = Configuration::new(-4.0, -4.0);
    let goal = Configuration::new(4.0, 4.0);

    let mut sampler = GoalBiasedSampler::new();
    sampler.set_goal_parameters(goal, 0.2)?;
    let samples: Vec<Configuration> = (0..40)
        .map(|_| sampler.sample(&mut env))
        .collect::<PlanningResult<_>>()?;

    let extender = LineExtender::default();

    // the maximal free extension from the start toward each sample, the
    // edges an outer tree planner would grow
    let mut grown_edges = Vec::new();
    for sample in &samples {
        if let Some(reached) = extender.extend(&mut env, start, *sample)? {
            grown_edges.push((start, reached));
        }
    }

    // a detour skirting the table, every leg verified by the extender
    let corners = [
        Configuration::new(-3.0, 1.5),
        Configuration::new(1.0, 2.0),
        Configuration::new(3.5, 2.5),
        goal,
    ];

    let mut path = Path2D::from_waypoints(vec![start]);
    let mut cursor = start;
    for corner in corners {
        match extender.extend(&mut env, cursor, corner)? {
            Some(reached) => {
                path.push(reached);
                cursor = reached;
            }
            None => {
                eprintln!(
                    "extension from ({:.2}, {:.2}) blocked immediately",
                    cursor.x, cursor.y
                );
                return Ok(());
            }
        }
    }

    let before = path.total_length();
    let rough = path.clone();

    let shortener = PathShortener::default();
    shortener.shorten(&mut env, &mut path, Duration::from_secs(1))?;
    println!(
        "path length {:.3} -> {:.3} over {} waypoints",
        before,
        path.total_length(),
        path.len()
    );

    let mut vis = Visualizer::new();
    vis.set_title("Shortcut path shortening");
    vis.init_workspace(&env.workspace_bounds(), goal);
    env.visualize(&mut vis);
    for sample in &samples {
        vis.plot_point(*sample, &PointStyle::new(colors::GRAY, "").with_size(0.5));
    }
    for (from, to) in &grown_edges {
        vis.plot_edge(*from, *to);
    }
    vis.plot_path(&rough, &PathStyle::new(colors::GRAY, "Before").with_line_width(1.5));
    vis.plot_path(&path, &PathStyle::new(colors::PATH, "After"));
    vis.plot_start(start);
    vis.save_png("shorten_path.png", 800, 600)?;

    Ok(())
}
