use std::collections::HashSet;

use kestrel_grid::{GridPoint, OccupancyGrid};
use kestrel_planning::{AStarPlanner, Connectivity};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Create a 10x10 grid with a fixed obstacle layout
    let mut grid = OccupancyGrid::zeros(10, 10);
    let obstacles = vec![
        (1, 1), (2, 1), (7, 1), (8, 1),
        (4, 2),
        (2, 3), (3, 3), (4, 3), (5, 3), (7, 3),
        (5, 4), (7, 4),
        (1, 5), (2, 5), (3, 5), (5, 5), (7, 5), (8, 5),
        (3, 6),
        (1, 7), (3, 7), (5, 7), (6, 7), (7, 7),
        (1, 8), (8, 8),
        (3, 9), (4, 9), (5, 9),
    ];
    for (row, col) in obstacles {
        grid.set_value(&GridPoint::new(row, col), 1.0)?;
    }

    let start = GridPoint::new(0, 0);
    let goal = GridPoint::new(9, 9);

    println!("Grid:");
    print_grid(&grid, Some(&start), Some(&goal), None);
    println!("\nStart: {}", start);
    println!("Goal: {}", goal);

    let mut planner = AStarPlanner::new();
    match planner.plan(&grid, start, goal, 0.0, Connectivity::Eight) {
        Ok(path) => {
            println!("\nPath found with {} waypoints!", path.len());

            let path_set: HashSet<GridPoint> = path.iter().copied().collect();
            println!("\nGrid with path:");
            print_grid(&grid, Some(&start), Some(&goal), Some(&path_set));
        }
        Err(e) => println!("\nPlanning failed: {}", e),
    }

    Ok(())
}

fn print_grid(
    grid: &OccupancyGrid,
    start: Option<&GridPoint>,
    goal: Option<&GridPoint>,
    path: Option<&HashSet<GridPoint>>,
) {
    let (rows, cols) = grid.dimensions();

    for row in 0..rows {
        print!("{} ", row);
        for col in 0..cols {
            let point = GridPoint::new(row, col);

            if start == Some(&point) {
                print!("S ");
                continue;
            }
            if goal == Some(&point) {
                print!("G ");
                continue;
            }
            if let Some(path_set) = path {
                if path_set.contains(&point) {
                    print!("* ");
                    continue;
                }
            }

            match grid.is_obstacle(&point, 0.0) {
                Ok(true) => print!("X "),
                Ok(false) => print!(". "),
                Err(_) => print!("E "),
            }
        }
        println!();
    }

    // Print column labels
    print!("  ");
    for col in 0..cols {
        print!("{} ", col % 10);
    }
    println!();
}
