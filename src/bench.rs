use anyhow::Result;
use clap::Parser;

mod dijkstra;
mod graph;
mod min_heap;

use dijkstra::shortest_paths;
use graph::DenseGraph;

#[derive(Parser, Debug)]
#[command(name = "bench")]
#[command(about = "Time repeated Dijkstra runs over the generated dense graph.", long_about = None)]
struct Cli {
    /// Number of vertices in the generated graph
    #[arg(default_value_t = 256)]
    vertices: usize,

    /// Number of runs. Picks a new (deterministic) source per run (0, 1, 2, ...num_runs).
    #[arg(short, long, default_value_t = 1)]
    num_runs: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let graph = DenseGraph::generate(cli.vertices)?;

    let mut duration_millis = Vec::new();
    for run in 0..cli.num_runs {
        // Wrap around so every source stays in range on small graphs.
        let source = run % cli.vertices;
        use std::time::SystemTime;
        let now = SystemTime::now();
        shortest_paths(&graph, source)?;
        if let Ok(elapsed) = now.elapsed() {
            duration_millis.push(elapsed.as_secs_f64() * 1000.0);
        }
    }
    println!("{:?}", duration_millis);

    Ok(())
}
