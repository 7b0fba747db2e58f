//! Minimum number of new edges that make every vertex reachable from a start vertex.
//!
//! Every source component of the condensation other than the start's own has no
//! way in, so each needs at least one new edge. One edge from the start into
//! each of them is enough, because every other component is reachable from
//! some source.

use crate::condensation::Condensation;
use crate::graph::{DirectedGraph, GraphError};
use crate::scc::SccDecomposition;

/// Result of planning the additional routes for one start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub start: usize,
    /// Component index of `start` in `scc`.
    pub start_component: usize,
    /// Minimum number of edges to add.
    pub additional_routes: usize,
    /// Zero in-degree components other than the start's, ascending by index.
    pub unreached_sources: Vec<usize>,
    /// One edge per unreached source: start -> smallest vertex of that component.
    pub suggested_routes: Vec<(usize, usize)>,
    pub scc: SccDecomposition,
}

impl RoutePlan {
    /// Vertices of each unreached source component, in `unreached_sources` order.
    pub fn unreached_components(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.unreached_sources
            .iter()
            .map(|&c| self.scc.components[c].as_slice())
    }
}

impl DirectedGraph {
    /// Minimum number of directed edges to add so every vertex is reachable from `start`.
    pub fn calculate_additional_routes(&self, start: usize) -> Result<usize, GraphError> {
        self.plan_additional_routes(start)
            .map(|plan| plan.additional_routes)
    }

    /// Same as [`Self::calculate_additional_routes`], keeping the components and
    /// a concrete set of edges that achieves the minimum.
    pub fn plan_additional_routes(&self, start: usize) -> Result<RoutePlan, GraphError> {
        self.check_vertex(start)?;

        let scc = SccDecomposition::compute(self);
        let condensation = Condensation::build(self, &scc);

        let start_component = scc
            .component_containing(start)
            .ok_or(GraphError::StartVertexNotFound(start))?;

        let unreached_sources: Vec<usize> = condensation
            .sources()
            .filter(|&c| c != start_component)
            .collect();

        let suggested_routes = unreached_sources
            .iter()
            .map(|&c| {
                // Components are never empty and are sorted ascending.
                let target = scc.components[c][0];
                tracing::trace!(component = c, vertex = target, "source component needs a route");
                (start, target)
            })
            .collect();

        tracing::debug!(
            start,
            start_component,
            components = condensation.node_count(),
            condensation_edges = condensation.edge_count(),
            additional_routes = unreached_sources.len(),
            "planned additional routes"
        );

        Ok(RoutePlan {
            start,
            start_component,
            additional_routes: unreached_sources.len(),
            unreached_sources,
            suggested_routes,
            scc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_inside_chain_needs_route_to_head() {
        // 0 -> 1 -> 2, starting at 1: only {0} is unreachable.
        let mut g = DirectedGraph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();

        let plan = g.plan_additional_routes(1).unwrap();
        assert_eq!(plan.additional_routes, 1);
        assert_eq!(plan.suggested_routes, vec![(1, 0)]);
    }

    #[test]
    fn test_start_at_source_needs_nothing() {
        let mut g = DirectedGraph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();

        assert_eq!(g.calculate_additional_routes(0).unwrap(), 0);
    }

    #[test]
    fn test_suggested_target_is_smallest_member() {
        // 0 isolated start; {2,3} cycle with no way in.
        let mut g = DirectedGraph::new(4);
        g.add_edge(3, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(2, 1).unwrap();

        let plan = g.plan_additional_routes(0).unwrap();
        assert_eq!(plan.additional_routes, 1);
        assert_eq!(plan.suggested_routes, vec![(0, 2)]);
        let comps: Vec<&[usize]> = plan.unreached_components().collect();
        assert_eq!(comps, vec![&[2, 3][..]]);
    }

    #[test]
    fn test_start_out_of_range() {
        let g = DirectedGraph::new(2);
        assert_eq!(
            g.calculate_additional_routes(2),
            Err(GraphError::IndexOutOfRange {
                index: 2,
                vertex_count: 2
            })
        );
    }
}
