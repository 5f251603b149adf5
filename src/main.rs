use anyhow::{Context, Result};
use clap::Parser;
use csv::Writer;

mod dijkstra;
mod graph;
mod min_heap;

use dijkstra::{shortest_paths, UNREACHABLE};
use graph::{DenseGraph, Weight};

#[derive(Parser, Debug)]
#[command(name = "dssp")]
#[command(about = "Generate a deterministic dense graph and run Dijkstra from a source vertex to all vertices.", long_about = None)]
struct Cli {
    /// Number of vertices in the generated graph
    #[arg(default_value_t = 256)]
    vertices: usize,

    /// Source vertex to run from
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Output CSV (vertex, distance). If omitted, only the summary line is printed.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable vertices in output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

/// Fixed-format summary for the distance from the source to the last vertex.
fn report_line(dist: &[Weight], vertices: usize) -> String {
    let target = vertices - 1;
    if dist[target] == UNREACHABLE {
        format!("distance(src→V-1) = inf (V={})", vertices)
    } else {
        format!("distance(src→V-1) = {} (V={})", dist[target], vertices)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let graph = DenseGraph::generate(cli.vertices)?;
    let dist = shortest_paths(&graph, cli.source)?;

    println!("{}", report_line(&dist, cli.vertices));

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        wtr.write_record(["vertex", "distance"])?;
        let mut dist_with_idx: Vec<(usize, Weight)> = dist.iter().copied().enumerate().collect();
        dist_with_idx.sort_by_key(|&(_, d)| d);
        let mut written = 0;
        for (v, d) in &dist_with_idx {
            if *d != UNREACHABLE || cli.include_unreachable {
                let val = if *d != UNREACHABLE {
                    d.to_string()
                } else {
                    String::from("inf")
                };
                wtr.write_record(&[v.to_string(), val])?;
                written += 1;
            }
        }
        wtr.flush()?;
        println!("Wrote distances for {} vertices to {}", written, out_path);
    }

    Ok(())
}
