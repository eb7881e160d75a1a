use std::env;
use std::error::Error;
use std::process;

use flexi_logger::Logger;
use log::{error, info};
use stopwatch::Stopwatch;

use dense_paths::{DistanceMatrix, NodeId, ShortestPathSolver, WEIGHT_INFINITY};

fn main() {
    // e.g. run like this:
    // cargo run --release -- [matrix-file] [source] [target]
    // without a matrix file the sample graph below is used
    let _logger = match Logger::try_with_env_or_str("info").and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("could not initialize logging: {}", e);
            None
        }
    };
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let mut matrix = match args.get(1) {
        Some(filename) => {
            info!("reading distance matrix from {}", filename);
            DistanceMatrix::from_file(filename)?
        }
        None => sample_matrix()?,
    };
    let num_nodes = matrix.get_num_nodes();
    let source = parse_node(&args, 2, 0, num_nodes)?;
    let target = parse_node(&args, 3, num_nodes.saturating_sub(1), num_nodes)?;
    info!("number of nodes ................... {}", num_nodes);

    let mut solver = ShortestPathSolver::new(num_nodes);
    let mut time = Stopwatch::new();
    time.start();
    solver.solve_in_place(&mut matrix, source)?;
    time.stop();
    info!(
        "solve time ........................ {} micros",
        time.elapsed().as_micros()
    );

    println!(
        "Total shortest path from vertex {} to {}: {}",
        source,
        target,
        matrix.get_weight(target, source)
    );
    println!("Matrix:");
    print!("{}", matrix);
    println!();
    Ok(())
}

//              6
//   (0)-----------------(1)
//    |                   |
// 10 |                   | 2
//    |         1         |
//   (2)-----------------(3)
//    \                  /
//   3 \                / 8
//      -----(4)-------
fn sample_matrix() -> Result<DistanceMatrix, Box<dyn Error>> {
    const INF: i64 = WEIGHT_INFINITY as i64;
    Ok(DistanceMatrix::from_rows(&[
        [0, 6, 10, INF, INF],
        [6, 0, INF, 2, INF],
        [10, INF, 0, 1, 3],
        [INF, 2, 1, 0, 8],
        [INF, INF, 3, 8, 0],
    ])?)
}

fn parse_node(
    args: &[String],
    index: usize,
    default: NodeId,
    num_nodes: usize,
) -> Result<NodeId, Box<dyn Error>> {
    let node = match args.get(index) {
        Some(arg) => arg
            .parse::<NodeId>()
            .map_err(|e| format!("invalid vertex '{}': {}", arg, e))?,
        None => default,
    };
    if node >= num_nodes {
        return Err(format!(
            "vertex {} does not exist, there are {} vertices",
            node, num_nodes
        )
        .into());
    }
    Ok(node)
}
