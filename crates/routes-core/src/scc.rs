//! Strongly connected components via Kosaraju's two-pass algorithm.
//!
//! Pass 1 records vertices in DFS finishing order over the original graph.
//! Pass 2 walks the transposed graph in reverse finishing order; each walk
//! started from an unassigned vertex collects exactly one component.
//!
//! Both passes use explicit stacks, so a chain of any length is handled without
//! growing the call stack.

use crate::graph::DirectedGraph;

const UNASSIGNED: usize = usize::MAX;

/// Partition of a graph's vertices into strongly connected components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccDecomposition {
    /// Components in discovery order; vertices within a component are sorted.
    pub components: Vec<Vec<usize>>,
    /// Component index of every vertex.
    pub component_of: Vec<usize>,
}

impl SccDecomposition {
    /// Decompose `graph` into its strongly connected components.
    pub fn compute(graph: &DirectedGraph) -> Self {
        let order = finish_order(graph);
        let transposed = graph.transpose();

        let n = graph.vertex_count();
        let mut component_of = vec![UNASSIGNED; n];
        let mut components: Vec<Vec<usize>> = Vec::new();

        for &root in order.iter().rev() {
            if component_of[root] != UNASSIGNED {
                continue;
            }

            let id = components.len();
            let mut members = Vec::new();
            let mut stack = vec![root];
            component_of[root] = id;

            while let Some(v) = stack.pop() {
                members.push(v);
                for &pred in transposed.out_edges(v) {
                    if component_of[pred] == UNASSIGNED {
                        component_of[pred] = id;
                        stack.push(pred);
                    }
                }
            }

            members.sort_unstable();
            components.push(members);
        }

        tracing::debug!(
            vertices = n,
            edges = graph.edge_count(),
            components = components.len(),
            "computed strongly connected components"
        );

        Self {
            components,
            component_of,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Index of the component holding `vertex`, if any.
    pub fn component_containing(&self, vertex: usize) -> Option<usize> {
        self.component_of
            .get(vertex)
            .copied()
            .filter(|&id| id != UNASSIGNED)
    }

    /// True when `a` and `b` belong to the same component.
    pub fn same_component(&self, a: usize, b: usize) -> bool {
        match (self.component_containing(a), self.component_containing(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }
}

/// Vertices in increasing DFS finishing time, roots tried in index order.
fn finish_order(graph: &DirectedGraph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    // (vertex, index of the next successor to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        stack.push((root, 0));

        while let Some((v, next_i)) = stack.pop() {
            let outs = graph.out_edges(v);
            if next_i < outs.len() {
                stack.push((v, next_i + 1));
                let to = outs[next_i];
                if !seen[to] {
                    seen[to] = true;
                    stack.push((to, 0));
                }
                continue;
            }
            order.push(v);
        }
    }

    order
}
