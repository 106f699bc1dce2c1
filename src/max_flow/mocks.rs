use super::base::{FlowEdgeBase, FlowGraph};
use petgraph::graph::{Graph, NodeIndex};

/// mock graph generation functions
///
/// each returns `(graph, source, sink)`
pub fn mock_flow_network() -> (FlowGraph<usize>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<usize> = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    let c = graph.add_node(());
    graph.add_edge(a, b, FlowEdgeBase::new(5));
    graph.add_edge(b, c, FlowEdgeBase::new(3));
    (graph, a, c)
}

/// sink is unreachable, the maximum flow is zero
pub fn mock_flow_network_disconnected() -> (FlowGraph<usize>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<usize> = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    let c = graph.add_node(());
    graph.add_edge(a, b, FlowEdgeBase::new(5));
    (graph, a, c)
}

/// two arcs between the same node pair, each with its own capacity
pub fn mock_flow_network_parallel_edge() -> (FlowGraph<usize>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<usize> = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    graph.add_edge(a, b, FlowEdgeBase::new(2));
    graph.add_edge(a, b, FlowEdgeBase::new(3));
    (graph, a, b)
}

/// two disjoint routes, one choked by a unit-capacity arc
pub fn mock_flow_network_diamond() -> (FlowGraph<usize>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<usize> = Graph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    graph.add_edge(s, a, FlowEdgeBase::new(10));
    graph.add_edge(s, b, FlowEdgeBase::new(10));
    graph.add_edge(a, t, FlowEdgeBase::new(1));
    graph.add_edge(b, t, FlowEdgeBase::new(10));
    (graph, s, t)
}

/// mock network cited from Introduction to Algorithms (CLRS) fig 26.1,
/// its maximum flow is 23
pub fn mock_flow_network_clrs() -> (FlowGraph<usize>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<usize> = Graph::new();
    let s = graph.add_node(());
    let v1 = graph.add_node(());
    let v2 = graph.add_node(());
    let v3 = graph.add_node(());
    let v4 = graph.add_node(());
    let t = graph.add_node(());
    graph.add_edge(s, v1, FlowEdgeBase::new(16));
    graph.add_edge(s, v2, FlowEdgeBase::new(13));
    graph.add_edge(v1, v3, FlowEdgeBase::new(12));
    graph.add_edge(v2, v1, FlowEdgeBase::new(4));
    graph.add_edge(v2, v4, FlowEdgeBase::new(14));
    graph.add_edge(v3, v2, FlowEdgeBase::new(9));
    graph.add_edge(v3, t, FlowEdgeBase::new(20));
    graph.add_edge(v4, v3, FlowEdgeBase::new(7));
    graph.add_edge(v4, t, FlowEdgeBase::new(4));
    (graph, s, t)
}

/// float capacities, maximum flow 2.5
pub fn mock_flow_network_float() -> (FlowGraph<f64>, NodeIndex, NodeIndex) {
    let mut graph: FlowGraph<f64> = Graph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    graph.add_edge(s, a, FlowEdgeBase::new(2.5));
    graph.add_edge(s, b, FlowEdgeBase::new(1.5));
    graph.add_edge(a, t, FlowEdgeBase::new(1.0));
    graph.add_edge(b, t, FlowEdgeBase::new(2.0));
    (graph, s, t)
}
