use anyhow::{bail, Result};

use crate::graph::{DenseGraph, Vertex, Weight, NO_EDGE};
use crate::min_heap::{HeapEntry, MinHeap};

/// Sentinel distance for vertices with no path from the source.
pub const UNREACHABLE: Weight = Weight::MAX;

/// Dijkstra from `source` to all vertices. Returns distances,
/// `UNREACHABLE` when no path exists.
///
/// There is no decrease-key: improving a vertex's distance pushes a fresh
/// heap entry, and whatever stale entries remain are discarded when they
/// surface at the root. Path sums saturate at the sentinel, so a path
/// heavier than `u64::MAX` reads as unreachable instead of wrapping.
pub fn shortest_paths(graph: &DenseGraph, source: Vertex) -> Result<Vec<Weight>> {
    let n = graph.vertex_count();
    if source >= n {
        bail!(
            "source vertex {} out of range for a graph with {} vertices",
            source,
            n
        );
    }
    let (dist, _) = relax_all(graph, source);
    Ok(dist)
}

// Core loop. Alongside the distance table, returns each vertex paired with
// its distance at the moment it was finalized, in finalization order.
fn relax_all(graph: &DenseGraph, source: Vertex) -> (Vec<Weight>, Vec<(Vertex, Weight)>) {
    let n = graph.vertex_count();
    let mut dist = vec![UNREACHABLE; n];
    let mut finalized = vec![false; n];
    let mut finalization_order = Vec::new();
    dist[source] = 0;

    let mut heap = MinHeap::with_capacity(n);
    heap.push(HeapEntry {
        vertex: source,
        priority: 0,
    });

    while let Some(entry) = heap.pop_min() {
        let u = entry.vertex;
        if finalized[u] {
            // Stale entry: a cheaper distance to u was already committed.
            continue;
        }
        finalized[u] = true;
        finalization_order.push((u, dist[u]));

        for v in 0..n {
            let w = graph.weight(u, v);
            if w == NO_EDGE {
                continue;
            }
            // A saturated sum equals the sentinel and never wins the
            // comparison, so over-heavy paths are simply not taken.
            let candidate = dist[u].saturating_add(w);
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(HeapEntry {
                    vertex: v,
                    priority: candidate,
                });
            }
        }
    }

    (dist, finalization_order)
}
