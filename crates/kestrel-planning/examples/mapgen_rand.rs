use kestrel_grid::mapgen::{ObstacleStyle, random_obstacle_map};
use kestrel_grid::{GridPoint, OccupancyGrid};
use kestrel_planning::{AStarPlanner, Connectivity, PlanError};
use rand::Rng;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rows = 30;
    let cols = 40;
    let mut rng = rand::rng();

    println!("Generating a {}x{} map with random blob obstacles...", rows, cols);
    let grid = random_obstacle_map(rows, cols, ObstacleStyle::Blob, 10, 3, &mut rng);

    let (start, goal) = random_clear_endpoints(&grid, &mut rng);
    println!("Moving the robot from {} to {}", start, goal);

    let mut planner = AStarPlanner::new();
    match planner.plan_detailed(&grid, start, goal, 0.0, Connectivity::Eight) {
        Ok(report) => {
            println!("{}", report);
            print_grid(&grid, &start, &goal, &report.path);
        }
        Err(PlanError::NoPathFound) => {
            println!("The random map walled off the goal; no path exists.");
            print_grid(&grid, &start, &goal, &[]);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Draws random start and goal cells until both land on clear space.
fn random_clear_endpoints(grid: &OccupancyGrid, rng: &mut impl Rng) -> (GridPoint, GridPoint) {
    let (rows, cols) = grid.dimensions();
    loop {
        let start = GridPoint::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let goal = GridPoint::new(rng.random_range(0..rows), rng.random_range(0..cols));

        let start_clear = matches!(grid.is_obstacle(&start, 0.0), Ok(false));
        let goal_clear = matches!(grid.is_obstacle(&goal, 0.0), Ok(false));
        if start_clear && goal_clear && start != goal {
            return (start, goal);
        }
    }
}

fn print_grid(grid: &OccupancyGrid, start: &GridPoint, goal: &GridPoint, path: &[GridPoint]) {
    let path_set: std::collections::HashSet<GridPoint> = path.iter().copied().collect();
    let (rows, cols) = grid.dimensions();

    for row in 0..rows {
        for col in 0..cols {
            let point = GridPoint::new(row, col);
            if point == *start {
                print!("S ");
            } else if point == *goal {
                print!("G ");
            } else if path_set.contains(&point) {
                print!("* ");
            } else if matches!(grid.is_obstacle(&point, 0.0), Ok(true)) {
                print!("X ");
            } else {
                print!(". ");
            }
        }
        println!();
    }
}
