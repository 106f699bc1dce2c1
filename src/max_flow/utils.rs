//!
//! utils
//!
use super::flow::Flow;
use super::{FlowEdge, FlowRateLike};
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, Graph};
use petgraph::EdgeType;

pub fn draw<'a, N: 'a, E: 'a, Ty, Ix>(graph: &'a Graph<N, E, Ty, Ix>)
where
    E: std::fmt::Debug,
    N: std::fmt::Debug,
    Ty: EdgeType,
    Ix: petgraph::graph::IndexType,
{
    println!("{:?}", Dot::with_config(&graph, &[]));
}

///
/// draw the network with each edge labeled `flow/capacity`
///
pub fn draw_with_flow<F: FlowRateLike, N, E: FlowEdge<F>>(
    graph: &DiGraph<N, E>,
    flow: &Flow<F>,
) {
    let labeled: DiGraph<(), String> =
        graph.map(|_, _| (), |e, ew| format!("{}/{}", flow[e], ew.capacity()));
    println!("{:?}", Dot::with_config(&labeled, &[]));
}
