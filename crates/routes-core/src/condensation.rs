//! Condensation DAG: one node per strongly connected component.

use crate::graph::DirectedGraph;
use crate::scc::SccDecomposition;
use std::collections::{BTreeSet, VecDeque};

/// Distinct inter-component edges and the in-degree of every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    /// `successors[c]`: components reachable from `c` by a single original edge.
    pub successors: Vec<BTreeSet<usize>>,
    /// Number of distinct components with an edge into `c`.
    pub in_degree: Vec<usize>,
}

impl Condensation {
    /// Collapse `graph` along `scc`.
    ///
    /// Parallel edges between the same pair of components count once; edges
    /// inside a component are dropped.
    pub fn build(graph: &DirectedGraph, scc: &SccDecomposition) -> Self {
        let count = scc.component_count();
        let mut successors = vec![BTreeSet::new(); count];
        let mut in_degree = vec![0; count];

        for (u, v) in graph.edges() {
            let (cu, cv) = (scc.component_of[u], scc.component_of[v]);
            if cu != cv && successors[cu].insert(cv) {
                in_degree[cv] += 1;
            }
        }

        Self {
            successors,
            in_degree,
        }
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(|s| s.len()).sum()
    }

    /// Components nothing else points into.
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(c, _)| c)
    }

    /// Kahn's topological order, or `None` if the condensation has a cycle.
    pub fn topological_order(&self) -> Option<Vec<usize>> {
        let mut remaining = self.in_degree.clone();
        let mut queue: VecDeque<usize> = self.sources().collect();
        let mut order = Vec::with_capacity(self.node_count());

        while let Some(c) = queue.pop_front() {
            order.push(c);
            for &next in &self.successors[c] {
                remaining[next] -= 1;
                if remaining[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        (order.len() == self.node_count()).then_some(order)
    }
}
