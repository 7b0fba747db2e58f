//! Airport codes on top of [`DirectedGraph`] vertex indices.

use crate::config::NetworkConfig;
use crate::graph::{DirectedGraph, GraphError};
use serde::Serialize;
use std::collections::HashMap;

/// Errors from building or querying a [`RouteNetwork`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown airport: {0}")]
    UnknownAirport(String),
    #[error("airport listed twice: {0}")]
    DuplicateAirport(String),
    #[error("airport code must not be empty")]
    EmptyCode,
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Airports in registration order, each bound to the vertex of the same index.
///
/// Routes are stored as index pairs; the graph is built once the airport set
/// is known, since a [`DirectedGraph`] has a fixed vertex count.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    codes: Vec<String>,
    index: HashMap<String, usize>,
    routes: Vec<(usize, usize)>,
}

/// Labelled outcome of planning from one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub start: String,
    pub additional_routes: usize,
    /// Airports the start cannot reach before any routes are added.
    pub unreachable_airports: Vec<String>,
    /// Airport groups without any inbound route from the rest of the network.
    pub unreached_groups: Vec<Vec<String>>,
    /// One new route per group that is enough to reach everything.
    pub suggested_routes: Vec<(String, String)>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from configuration, registering airports in listed order.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        let mut network = Self::new();
        for code in &config.airports {
            network.add_airport(code)?;
        }
        for route in &config.routes {
            network.add_route(&route.from, &route.to)?;
        }
        Ok(network)
    }

    /// Register a new airport and return its vertex index.
    pub fn add_airport(&mut self, code: &str) -> Result<usize, NetworkError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(NetworkError::EmptyCode);
        }
        if self.index.contains_key(code) {
            return Err(NetworkError::DuplicateAirport(code.to_string()));
        }

        let idx = self.codes.len();
        self.codes.push(code.to_string());
        self.index.insert(code.to_string(), idx);
        Ok(idx)
    }

    /// Add a one-way route between two registered airports.
    pub fn add_route(&mut self, from: &str, to: &str) -> Result<(), NetworkError> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        self.routes.push((u, v));
        Ok(())
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.index.get(code.trim()).copied()
    }

    pub fn code_of(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    pub fn airports(&self) -> &[String] {
        &self.codes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Graph over all registered airports, routes in insertion order.
    pub fn graph(&self) -> Result<DirectedGraph, NetworkError> {
        let mut graph = DirectedGraph::new(self.codes.len());
        for &(u, v) in &self.routes {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Minimum number of new routes so every airport is reachable from `start`.
    pub fn additional_routes(&self, start: &str) -> Result<usize, NetworkError> {
        let start = self.require(start)?;
        Ok(self.graph()?.calculate_additional_routes(start)?)
    }

    /// Plan from `start` and translate the result back to airport codes.
    pub fn report(&self, start: &str) -> Result<RouteReport, NetworkError> {
        let start_idx = self.require(start)?;
        let graph = self.graph()?;
        let plan = graph.plan_additional_routes(start_idx)?;
        let reachable = graph.reachable_from(start_idx)?;

        let unreachable_airports = reachable
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| !seen)
            .map(|(v, _)| self.codes[v].clone())
            .collect();

        let unreached_groups = plan
            .unreached_components()
            .map(|members| members.iter().map(|&v| self.codes[v].clone()).collect())
            .collect();

        let suggested_routes = plan
            .suggested_routes
            .iter()
            .map(|&(u, v)| (self.codes[u].clone(), self.codes[v].clone()))
            .collect();

        Ok(RouteReport {
            start: self.codes[start_idx].clone(),
            additional_routes: plan.additional_routes,
            unreachable_airports,
            unreached_groups,
            suggested_routes,
        })
    }

    fn require(&self, code: &str) -> Result<usize, NetworkError> {
        self.index_of(code)
            .ok_or_else(|| NetworkError::UnknownAirport(code.trim().to_string()))
    }
}
