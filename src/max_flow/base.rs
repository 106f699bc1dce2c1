//! # `FlowGraphRaw` and `FlowGraph`
//!
//! Basic example implementation of a capacitated flow network
//!
//! `FlowGraphRaw` is a DiGraph whose edge is `FlowEdgeRaw`.
//!
//! `FlowEdgeRaw` has
//! * `capacity`
//! and additional information about an edge in `info`
//!
use super::{FlowEdge, FlowRateLike};
use petgraph::graph::DiGraph;

/// FlowGraph definition
pub type FlowGraph<F> = DiGraph<(), FlowEdgeBase<F>>;
pub type FlowGraphRaw<F, T> = DiGraph<(), FlowEdgeRaw<F, T>>;

/// Edge attributes used in FlowGraph.
/// This is a minimal example of max-flow problem definition.
///
/// It has
/// * Capacity u(e)
///
/// It can contain additional information in T.
#[derive(Debug, Copy, Clone)]
pub struct FlowEdgeRaw<F: FlowRateLike, T> {
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: F,
    /// auxiliary informations
    pub info: T,
}

pub type FlowEdgeBase<F> = FlowEdgeRaw<F, ()>;

impl<F: FlowRateLike> FlowEdgeBase<F> {
    pub fn new(capacity: F) -> FlowEdgeBase<F> {
        FlowEdgeBase { capacity, info: () }
    }
}

impl<F: FlowRateLike, T> std::fmt::Display for FlowEdgeRaw<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[0,{}]", self.capacity)
    }
}

impl<F: FlowRateLike, T> FlowEdge<F> for FlowEdgeRaw<F, T> {
    fn capacity(&self) -> F {
        self.capacity
    }
}
