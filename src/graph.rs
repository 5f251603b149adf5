/*
Dense weighted graph stored as a full n x n row-major matrix.

A weight of 0 means "no edge" (every diagonal entry is 0). The
representation cannot distinguish a true zero-cost edge from the absence
of an edge, so real edges must carry weights >= 1. This is a contract of
the matrix encoding, kept as-is.
*/

use anyhow::{bail, Result};

pub type Vertex = usize;
pub type Weight = u64;

pub const NO_EDGE: Weight = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct DenseGraph {
    vertices: usize,
    weights: Vec<Weight>,
}

impl DenseGraph {
    /// Deterministic dense graph: `weight(i, j) = ((i*131 + j*31) mod 23) + 1`
    /// for `i != j`, so every off-diagonal weight lands in `[1, 23]`.
    pub fn generate(vertices: usize) -> Result<Self> {
        if vertices == 0 {
            bail!("graph must have at least one vertex");
        }
        let mut weights = Vec::with_capacity(vertices * vertices);
        for i in 0..vertices {
            for j in 0..vertices {
                let w = if i == j {
                    NO_EDGE
                } else {
                    (i as Weight * 131 + j as Weight * 31) % 23 + 1
                };
                weights.push(w);
            }
        }
        Ok(Self { vertices, weights })
    }

    /// Build a graph from explicit rows. The rows must form a non-empty
    /// square matrix.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let vertices = rows.len();
        if vertices == 0 {
            bail!("graph must have at least one vertex");
        }
        let mut weights = Vec::with_capacity(vertices * vertices);
        for row in &rows {
            if row.len() != vertices {
                bail!(
                    "expected {} weights per row, got {}",
                    vertices,
                    row.len()
                );
            }
            weights.extend_from_slice(row);
        }
        Ok(Self { vertices, weights })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    #[inline]
    pub fn weight(&self, u: Vertex, v: Vertex) -> Weight {
        self.weights[u * self.vertices + v]
    }
}
