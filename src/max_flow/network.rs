//!
//! Label-based problem assembly
//!
//! Callers describe the network as opaque node labels and
//! `(from, to, capacity)` arc triples; this module validates the
//! description, builds the petgraph representation, runs the solver
//! and projects the flow back onto the input arcs.
//!
use super::base::FlowEdgeBase;
use super::flow::Flow;
use super::{max_flow, FlowError, FlowRateLike};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

///
/// Result of one solve: the maximum flow value and the flow carried by
/// every input arc, in input order. Arcs that carry nothing are listed
/// with an explicit zero.
///
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlowResult<L, F: FlowRateLike> {
    /// total amount moved from source into sink
    pub value: F,
    /// `(from, to, flow)` per input arc instance
    pub arc_flows: Vec<(L, L, F)>,
}

///
/// Compute the maximum flow of the network described by `nodes` and
/// `arcs` from `source` to `sink`.
///
/// * Node labels are arbitrary hashable tokens; duplicates in `nodes`
///   collapse to one node.
/// * Parallel arcs are kept apart, each with its own flow.
/// * A self-loop arc is legal and always carries zero flow.
/// * `source == sink` is rejected as `SameSourceAndSink`.
///
/// All input checks happen before the first augmentation; on any
/// `FlowError` the solve never starts.
///
pub fn solve_max_flow<L, F>(
    nodes: &[L],
    arcs: &[(L, L, F)],
    source: &L,
    sink: &L,
) -> Result<MaxFlowResult<L, F>, FlowError>
where
    L: Clone + Eq + Hash + Display,
    F: FlowRateLike,
{
    let mut graph: DiGraph<L, FlowEdgeBase<F>> = DiGraph::new();
    let mut index: HashMap<&L, NodeIndex> = HashMap::new();
    for label in nodes {
        index
            .entry(label)
            .or_insert_with(|| graph.add_node(label.clone()));
    }

    let s = *index
        .get(source)
        .ok_or_else(|| FlowError::UnknownNode(source.to_string()))?;
    let t = *index
        .get(sink)
        .ok_or_else(|| FlowError::UnknownNode(sink.to_string()))?;
    if s == t {
        return Err(FlowError::SameSourceAndSink(source.to_string()));
    }

    let mut arc_edges: Vec<EdgeIndex> = Vec::with_capacity(arcs.len());
    for (from, to, capacity) in arcs {
        let v = *index
            .get(from)
            .ok_or_else(|| FlowError::UnknownNode(from.to_string()))?;
        let w = *index
            .get(to)
            .ok_or_else(|| FlowError::UnknownNode(to.to_string()))?;
        if *capacity < F::zero() {
            return Err(FlowError::NegativeCapacity {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        arc_edges.push(graph.add_edge(v, w, FlowEdgeBase::new(*capacity)));
    }

    let (value, flow) = max_flow(&graph, s, t)?;
    Ok(MaxFlowResult {
        value,
        arc_flows: assignment_per_arc(arcs, &arc_edges, &flow),
    })
}

/// read the solved flow back in input-arc order
fn assignment_per_arc<L: Clone, F: FlowRateLike>(
    arcs: &[(L, L, F)],
    arc_edges: &[EdgeIndex],
    flow: &Flow<F>,
) -> Vec<(L, L, F)> {
    arcs.iter()
        .zip(arc_edges.iter())
        .map(|((from, to, _), &e)| (from.clone(), to.clone(), flow[e]))
        .collect()
}

//
// tests
//
