//!
//! Maximum flow of a directed network with capacitated edges.
//!
//! The solver repeats two steps until no augmenting path remains:
//! build the residue graph of the current flow, and push the bottleneck
//! amount along a shortest source-to-sink path in it.
//! Shortest paths are found by BFS, so the number of augmentation
//! rounds is bounded independently of the capacity magnitudes.
//!
pub mod base;
pub mod flow;
pub mod flow_edge;
pub mod flow_rate;
pub mod mocks;
pub mod network;
pub mod residue;
pub mod utils;

pub use base::{FlowEdgeBase, FlowEdgeRaw, FlowGraph, FlowGraphRaw};
pub use flow::Flow;
pub use flow_edge::FlowEdge;
pub use flow_rate::FlowRateLike;
pub use network::{solve_max_flow, MaxFlowResult};

use flow::{flow_value, is_valid_flow};
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use residue::improve_flow;
use thiserror::Error;

///
/// Ways a solve can fail.
///
/// Input problems are reported before any augmentation starts.
/// `CapacityExceeded` aborts a solve whose augmentation step tried to
/// push more than a residual amount; paths returned by the path finder
/// never trigger it.
///
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// source, sink, or an arc endpoint is not a member of the node set
    #[error("node {0} is not a member of the node set")]
    UnknownNode(String),
    /// an arc was given a negative capacity
    #[error("arc {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: String, to: String },
    /// source and sink are the same node, which is rejected
    #[error("source and sink are the same node {0}")]
    SameSourceAndSink(String),
    /// an augmentation tried to push more than the remaining residual amount
    #[error("push exceeds the residual capacity of edge e{edge}")]
    CapacityExceeded { edge: usize },
}

//
// public functions
//

///
/// Find maximum flow from `source` to `sink` on the FlowGraph
///
/// Returns the flow value together with the amount assigned to each edge.
/// The value is unique; the per-edge assignment may differ between
/// networks that admit more than one optimal flow, depending on the
/// neighbor order BFS visits them in.
///
pub fn max_flow<F: FlowRateLike, N, E: FlowEdge<F>>(
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Result<(F, Flow<F>), FlowError> {
    validate_network(graph, source, sink)?;
    let flow = max_flow_from(graph, source, sink, &Flow::zero(graph))?;
    Ok((flow_value(&flow, graph, source), flow))
}

//
// internal functions
//

///
/// Augment starting from the specified flow values until no
/// source-to-sink path with positive residual capacity remains.
///
fn max_flow_from<F: FlowRateLike, N, E: FlowEdge<F>>(
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
    init_flow: &Flow<F>,
) -> Result<Flow<F>, FlowError> {
    let mut flow = init_flow.clone();
    let mut n_rounds = 0usize;

    loop {
        debug_assert!(is_valid_flow(&flow, graph, source, sink));
        match improve_flow(graph, &flow, source, sink)? {
            Some(new_flow) => {
                flow = new_flow;
                n_rounds += 1;
                continue;
            }
            None => {
                break;
            }
        };
    }

    debug!(
        "terminated after {} augmentations, value={}",
        n_rounds,
        flow_value(&flow, graph, source)
    );
    Ok(flow)
}

///
/// Check the inputs once, before any algorithmic work begins.
///
/// * `source` and `sink` must be nodes of the graph and must differ.
/// * all capacities must be non-negative.
///
fn validate_network<F: FlowRateLike, N, E: FlowEdge<F>>(
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Result<(), FlowError> {
    for v in [source, sink] {
        if graph.node_weight(v).is_none() {
            return Err(FlowError::UnknownNode(format!("v{}", v.index())));
        }
    }
    if source == sink {
        return Err(FlowError::SameSourceAndSink(format!("v{}", source.index())));
    }
    for e in graph.edge_indices() {
        let ew = graph.edge_weight(e).unwrap();
        if ew.capacity() < F::zero() {
            let (v, w) = graph.edge_endpoints(e).unwrap();
            return Err(FlowError::NegativeCapacity {
                from: format!("v{}", v.index()),
                to: format!("v{}", w.index()),
            });
        }
    }
    Ok(())
}

//
// tests
//
