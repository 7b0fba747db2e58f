//! Reachability analysis for directed route graphs.
//!
//! Provides the adjacency-list graph ([`graph::DirectedGraph`]), Kosaraju SCC
//! decomposition, the condensation DAG, and the "minimum additional routes"
//! metric, plus label bookkeeping for airport codes and TOML configuration.

pub mod condensation;
pub mod config;
pub mod graph;
pub mod network;
pub mod routes;
pub mod scc;
