use std::collections::HashSet;

use kestrel_grid::{GridPoint, OccupancyGrid};
use kestrel_planning::{AStarPlanner, Connectivity};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A vertical wall with a single gap forces the search to fan out,
    // which makes the visited overlay worth looking at.
    let mut grid = OccupancyGrid::zeros(12, 12);
    for row in 0..12 {
        if row != 8 {
            grid.set_value(&GridPoint::new(row, 6), 1.0)?;
        }
    }

    let start = GridPoint::new(2, 2);
    let goal = GridPoint::new(2, 10);

    let mut planner = AStarPlanner::new();
    let report = planner.plan_detailed(&grid, start, goal, 0.0, Connectivity::Eight)?;

    println!("{}", report);
    println!(
        "Visited {} cells while expanding {} nodes",
        planner.visited().len(),
        report.nodes_expanded
    );

    let path_set: HashSet<GridPoint> = report.path.iter().copied().collect();
    let visited_set: HashSet<GridPoint> = planner.visited().iter().copied().collect();

    println!("\nLegend: S start, G goal, * path, o visited, X obstacle");
    let (rows, cols) = grid.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            let point = GridPoint::new(row, col);
            let symbol = if point == start {
                'S'
            } else if point == goal {
                'G'
            } else if path_set.contains(&point) {
                '*'
            } else if grid.is_obstacle(&point, 0.0)? {
                'X'
            } else if visited_set.contains(&point) {
                'o'
            } else {
                '.'
            };
            print!("{} ", symbol);
        }
        println!();
    }

    Ok(())
}
