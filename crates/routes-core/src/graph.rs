//! Directed graph over a fixed set of integer vertices.

/// Errors from graph construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {index} out of range for graph with {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
    #[error("no strongly connected component contains start vertex {0}")]
    StartVertexNotFound(usize),
}

/// Adjacency-list graph: `adjacency[u]` holds the successors of `u` in insertion order.
///
/// The vertex count is fixed at construction. Parallel edges are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|outs| outs.len()).sum()
    }

    /// Append the edge `u -> v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        Ok(())
    }

    /// Successors of `v` in insertion order.
    pub fn successors(&self, v: usize) -> Result<&[usize], GraphError> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Successors of a vertex already known to be in range.
    pub(crate) fn out_edges(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// All edges as `(source, target)` pairs, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
    }

    /// Graph with every edge reversed. The receiver is left untouched.
    pub fn transpose(&self) -> Self {
        let mut reversed = vec![Vec::new(); self.vertex_count()];
        for (u, v) in self.edges() {
            reversed[v].push(u);
        }
        Self {
            adjacency: reversed,
        }
    }

    /// Mark every vertex reachable from `start` (including `start` itself).
    pub fn reachable_from(&self, start: usize) -> Result<Vec<bool>, GraphError> {
        self.check_vertex(start)?;

        let mut seen = vec![false; self.vertex_count()];
        let mut stack = vec![start];
        seen[start] = true;

        while let Some(v) = stack.pop() {
            for &next in &self.adjacency[v] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }

        Ok(seen)
    }

    pub(crate) fn check_vertex(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
