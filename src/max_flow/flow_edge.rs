//!
//! FlowEdge trait definition
//!
use super::FlowRateLike;

/// Edge of FlowGraph
///
/// * `capacity()`: capacity `u(e)`
///
/// A maximum flow assigns each edge an amount in `[0, u]`.
pub trait FlowEdge<F: FlowRateLike> {
    /// Capacity of the edge, Upper limit of the flow
    fn capacity(&self) -> F;
}
