//! Flow definitions
//! - Flow<F>
//! - validity checkers of a flow against its network
use super::{FlowEdge, FlowRateLike};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()
use petgraph::Direction;
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// Flow definitions
///
/// Flow f is a mapping of F f(e) to each edge e
#[derive(PartialEq, Debug, Clone)]
pub struct Flow<F: FlowRateLike>(HashMap<EdgeIndex, F>);

impl<F: FlowRateLike> Flow<F> {
    pub fn empty() -> Flow<F> {
        let hm = HashMap::new();
        Flow(hm)
    }
    pub fn zero<N, E>(graph: &DiGraph<N, E>) -> Flow<F> {
        let mut hm = HashMap::new();
        for e in graph.edge_indices() {
            hm.insert(e, F::zero());
        }
        Flow(hm)
    }
    pub fn from_vec(vec: &[(EdgeIndex, F)]) -> Flow<F> {
        let mut hm = HashMap::new();
        for (e, f) in vec.iter() {
            hm.insert(*e, *f);
        }
        Flow(hm)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, e: EdgeIndex) -> Option<F> {
        self.0.get(&e).cloned()
    }
    pub fn set(&mut self, e: EdgeIndex, v: F) {
        self.0.insert(e, v);
    }
    pub fn has(&self, e: EdgeIndex) -> bool {
        self.0.contains_key(&e)
    }
}

impl<F: FlowRateLike> Index<EdgeIndex> for Flow<F> {
    type Output = F;
    fn index(&self, e: EdgeIndex) -> &F {
        self.0.get(&e).expect("flow is not defined for the edge")
    }
}

impl<F: FlowRateLike> IndexMut<EdgeIndex> for Flow<F> {
    fn index_mut(&mut self, e: EdgeIndex) -> &mut F {
        self.0.get_mut(&e).expect("flow is not defined for the edge")
    }
}

///
/// Check if the flow is valid, i.e. it satisfies
/// - flows of all edges are defined
/// - capacity constraint
/// - conservation constraint on every node except source and sink
///
pub fn is_valid_flow<F: FlowRateLike, N, E: FlowEdge<F>>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool {
    is_defined_for_all_edges(flow, graph)
        && is_within_capacity(flow, graph)
        && is_conserving(flow, graph, source, sink)
}

///
/// Check if the flow contains all edges
///
pub fn is_defined_for_all_edges<F: FlowRateLike, N, E>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
) -> bool {
    graph.edge_indices().all(|e| flow.get(e).is_some())
}

///
/// For each edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_within_capacity<F: FlowRateLike, N, E: FlowEdge<F>>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
) -> bool {
    graph.edge_indices().all(|e| {
        let ew = graph.edge_weight(e).unwrap();
        match flow.get(e) {
            Some(f) => (F::zero() <= f) && (f <= ew.capacity()),
            None => false,
        }
    })
}

///
/// For each node other than source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_conserving<F: FlowRateLike, N, E>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool {
    graph.node_indices().filter(|&v| v != source && v != sink).all(|v| {
        let in_flow: F = graph
            .edges_directed(v, Direction::Incoming)
            .map(|er| flow[er.id()])
            .sum();
        let out_flow: F = graph
            .edges_directed(v, Direction::Outgoing)
            .map(|er| flow[er.id()])
            .sum();
        in_flow.sim_eq(out_flow)
    })
}

///
/// Net amount leaving the source, i.e. the value of the flow.
///
/// Assumes a valid flow; source-incident in-flow never exceeds out-flow then.
///
pub fn flow_value<F: FlowRateLike, N, E>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
    source: NodeIndex,
) -> F {
    let out_flow: F = graph
        .edges_directed(source, Direction::Outgoing)
        .map(|er| flow[er.id()])
        .sum();
    let in_flow: F = graph
        .edges_directed(source, Direction::Incoming)
        .map(|er| flow[er.id()])
        .sum();
    out_flow - in_flow
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::mock_flow_network;
    use super::super::utils::draw;
    use super::*;

    #[test]
    fn flow_valid_tests() {
        let (g, s, t) = mock_flow_network();
        draw(&g);

        // this is a valid flow
        let f1 = Flow::from_vec(&[(EdgeIndex::new(0), 3), (EdgeIndex::new(1), 3)]);
        assert!(is_defined_for_all_edges(&f1, &g));
        assert!(is_within_capacity(&f1, &g));
        assert!(is_conserving(&f1, &g, s, t));
        assert!(is_valid_flow(&f1, &g, s, t));

        // this flow overs the capacity
        let f2 = Flow::from_vec(&[(EdgeIndex::new(0), 100), (EdgeIndex::new(1), 100)]);
        assert!(is_defined_for_all_edges(&f2, &g));
        assert!(!is_within_capacity(&f2, &g));
        assert!(!is_valid_flow(&f2, &g, s, t));

        // this is a flow which not satisfies the conservation at the middle node
        let f3 = Flow::from_vec(&[(EdgeIndex::new(0), 5), (EdgeIndex::new(1), 3)]);
        assert!(is_defined_for_all_edges(&f3, &g));
        assert!(is_within_capacity(&f3, &g));
        assert!(!is_conserving(&f3, &g, s, t));
        assert!(!is_valid_flow(&f3, &g, s, t));

        // this is a partial flow
        let f4 = Flow::from_vec(&[(EdgeIndex::new(0), 1)]);
        assert!(!is_defined_for_all_edges(&f4, &g));
        assert!(!is_valid_flow(&f4, &g, s, t));
    }

    #[test]
    fn flow_value_of_chain() {
        let (g, s, _) = mock_flow_network();
        let mut f = Flow::zero(&g);
        assert_eq!(flow_value(&f, &g, s), 0);

        f.set(EdgeIndex::new(0), 3);
        f[EdgeIndex::new(1)] = 3;
        assert!(f.has(EdgeIndex::new(1)));
        assert_eq!(flow_value(&f, &g, s), 3);
    }
}
