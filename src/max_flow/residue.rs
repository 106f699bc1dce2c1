//! Residue graph related definitions
//! - ResidueEdge
//! - ResidueGraph
//! - ResidueDirection
//!
use super::flow::Flow;
use super::{FlowEdge, FlowError, FlowRateLike};
use itertools::Itertools; // for join
use log::debug;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::prelude::*;
use petgraph::visit::{VisitMap, Visitable};
use std::collections::VecDeque;

// basic definitions

/// Edge attributes used in ResidueGraph
#[derive(Debug, Default, Copy, Clone)]
pub struct ResidueEdge<F: FlowRateLike> {
    /// The movable amount of the flow
    pub count: F,
    /// Original edge index of the source graph
    pub target: EdgeIndex,
    /// +1 or -1
    pub direction: ResidueDirection,
}

impl<F: FlowRateLike> ResidueEdge<F> {
    pub fn new(count: F, target: EdgeIndex, direction: ResidueDirection) -> ResidueEdge<F> {
        ResidueEdge {
            count,
            target,
            direction,
        }
    }
}

/// Residue direction enum
/// residue edge has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResidueDirection {
    /// Up edge: it can increase(+1) flow
    Up,
    /// Down edge: it can decrease(-1) flow
    Down,
}

impl ResidueDirection {
    /// Map ResidueDirection into i32
    /// * Up   -> +1
    /// * Down -> -1
    pub fn int(&self) -> i32 {
        match *self {
            ResidueDirection::Up => 1,
            ResidueDirection::Down => -1,
        }
    }
}

impl std::fmt::Display for ResidueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResidueDirection::Up => write!(f, "+"),
            ResidueDirection::Down => write!(f, "-"),
        }
    }
}

impl Default for ResidueDirection {
    fn default() -> Self {
        ResidueDirection::Up
    }
}

/// ResidueGraph definition
pub type ResidueGraph<F> = DiGraph<(), ResidueEdge<F>>;

//
// conversion functions
//

/// Convert FlowGraph with Flow into ResidueGraph.
///
/// FlowGraph and Flow
/// v -> w
///  e = u, f
///
/// into
///
/// ResidueGraph
/// v -> w
///  e1 = (u-f, +) if u-f>0
/// w -> v
///  e2 = (f, -) if f>0
///
/// Self-loops never appear on an augmenting path and are left out entirely.
pub fn flow_to_residue<F: FlowRateLike, N, E: FlowEdge<F>>(
    graph: &DiGraph<N, E>,
    flow: &Flow<F>,
) -> ResidueGraph<F> {
    assert_eq!(
        flow.len(),
        graph.edge_count(),
        "flow (len={}) does not match network (E={})",
        flow.len(),
        graph.edge_count()
    );

    let mut rg: ResidueGraph<F> = ResidueGraph::new();

    // residue nodes mirror the original node indices
    for _ in graph.node_indices() {
        rg.add_node(());
    }

    // create two edges (Up and Down) for each edge
    for e in graph.edge_indices() {
        let f = flow[e];
        let ew = graph.edge_weight(e).unwrap();
        let (v, w) = graph.edge_endpoints(e).unwrap();
        if v == w {
            continue;
        }

        let mut edges = Vec::new();
        if f < ew.capacity() {
            // up movable
            edges.push((v, w, ResidueEdge::new(ew.capacity() - f, e, ResidueDirection::Up)));
        }
        if f > F::zero() {
            // down movable
            edges.push((w, v, ResidueEdge::new(f, e, ResidueDirection::Down)));
        }
        rg.extend_with_edges(&edges);
    }
    rg
}

///
/// Total movable amount from node v to node w,
/// summed over parallel residue edges. Zero if no such edge exists.
///
pub fn residual_capacity<F: FlowRateLike>(
    rg: &ResidueGraph<F>,
    v: NodeIndex,
    w: NodeIndex,
) -> F {
    rg.edges_connecting(v, w).map(|er| er.weight().count).sum()
}

//
// internal functions to find an update of the flow
// (i.e. the shortest augmenting path in ResidueGraph)
//

///
/// Find a source-to-sink path in the residue graph by BFS,
/// as the ordered list of residue edges along it.
///
/// BFS always returns a fewest-hop path, so the number of augmentation
/// rounds stays polynomial regardless of the capacity values.
/// Every residue edge has a positive count by construction, so any
/// found path can carry flow.
///
/// Which of several same-depth nodes is expanded first follows the
/// adjacency order of the residue graph; networks with more than one
/// optimal flow can therefore get different (equally optimal) assignments.
///
pub fn find_augmenting_path<F: FlowRateLike>(
    rg: &ResidueGraph<F>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<Vec<EdgeIndex>> {
    if source == sink {
        return None;
    }

    // parent node and the residue edge used to reach each discovered node
    let mut parent: Vec<Option<(NodeIndex, EdgeIndex)>> = vec![None; rg.node_count()];
    let mut visited = rg.visit_map();
    let mut queue = VecDeque::new();

    visited.visit(source);
    queue.push_back(source);

    'bfs: while let Some(v) = queue.pop_front() {
        for er in rg.edges(v) {
            let w = er.target();
            if visited.visit(w) {
                parent[w.index()] = Some((v, er.id()));
                if w == sink {
                    break 'bfs;
                }
                queue.push_back(w);
            }
        }
    }

    if !visited.is_visited(&sink) {
        return None;
    }

    // trace the parents back from sink into source
    let mut edges = Vec::new();
    let mut v = sink;
    while v != source {
        let (u, e) = parent[v.index()].expect("visited node has no BFS parent");
        edges.push(e);
        v = u;
    }
    edges.reverse();
    Some(edges)
}

///
/// The minimum movable amount along the path,
/// i.e. how much flow one augmentation along it can add.
///
/// Strictly positive for any path returned by `find_augmenting_path`.
///
pub fn bottleneck<F: FlowRateLike>(rg: &ResidueGraph<F>, edges: &[EdgeIndex]) -> F {
    edges
        .iter()
        .map(|&e| {
            let ew = rg.edge_weight(e).unwrap();
            ew.count
        })
        .min_by(|a, b| a.partial_cmp(b).unwrap())
        .unwrap()
}

///
/// Change Flow by `amount` along the edges of a path in residue graph
///
/// An Up edge adds to the original edge's flow and a Down edge removes
/// from it, so residual capacities of the two directions stay paired.
/// Fails with `CapacityExceeded` when `amount` exceeds the movable
/// amount of any edge; callers that respect `bottleneck` never hit it.
///
pub fn change_flow_along_edges<F: FlowRateLike>(
    flow: &Flow<F>,
    rg: &ResidueGraph<F>,
    edges: &[EdgeIndex],
    amount: F,
) -> Result<Flow<F>, FlowError> {
    let mut new_flow = flow.clone();
    for edge in edges {
        let ew = rg.edge_weight(*edge).unwrap();
        if amount > ew.count {
            return Err(FlowError::CapacityExceeded {
                edge: ew.target.index(),
            });
        }
        // convert back to the original edgeindex
        let original_edge = ew.target;

        new_flow[original_edge] = match ew.direction {
            ResidueDirection::Up => new_flow[original_edge] + amount,
            ResidueDirection::Down => new_flow[original_edge] - amount,
        };
    }
    Ok(new_flow)
}

fn format_path<F: FlowRateLike>(rg: &ResidueGraph<F>, path: &[EdgeIndex]) -> String {
    path.iter()
        .map(|&edge| {
            let weight = rg.edge_weight(edge).unwrap();
            format!("e{}{}", weight.target.index(), weight.direction)
        })
        .join(",")
}

//
// public functions
//

/// create a new improved flow from current flow
/// by augmenting along a shortest source-to-sink path in the residual graph,
/// or None when no such path remains (the flow is maximum).
pub fn improve_flow<F: FlowRateLike, N, E: FlowEdge<F>>(
    graph: &DiGraph<N, E>,
    flow: &Flow<F>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Result<Option<Flow<F>>, FlowError> {
    let rg = flow_to_residue(graph, flow);
    match find_augmenting_path(&rg, source, sink) {
        Some(path) => {
            let amount = bottleneck(&rg, &path);
            debug!("augmenting {} by {}", format_path(&rg, &path), amount);
            let new_flow = change_flow_along_edges(flow, &rg, &path, amount)?;
            Ok(Some(new_flow))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::super::base::{FlowEdgeBase, FlowGraph};
    use super::super::mocks::*;
    use super::*;

    fn ei(i: usize) -> EdgeIndex {
        EdgeIndex::new(i)
    }

    fn ni(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn residue_direction_basic() {
        let up = ResidueDirection::Up;
        assert_eq!(up.to_string(), "+");
        assert_eq!(up.int(), 1);

        let down = ResidueDirection::Down;
        assert_eq!(down.to_string(), "-");
        assert_eq!(down.int(), -1);
    }

    #[test]
    fn residue_of_zero_flow_has_up_edges_only() {
        let (g, _, _) = mock_flow_network();
        let rg = flow_to_residue(&g, &Flow::zero(&g));

        assert_eq!(rg.node_count(), g.node_count());
        assert_eq!(rg.edge_count(), 2);
        assert!(rg
            .edge_references()
            .all(|er| er.weight().direction == ResidueDirection::Up));
        assert_eq!(residual_capacity(&rg, ni(0), ni(1)), 5);
        assert_eq!(residual_capacity(&rg, ni(1), ni(2)), 3);
        // no backward capacity yet
        assert_eq!(residual_capacity(&rg, ni(1), ni(0)), 0);
    }

    #[test]
    fn residue_pairs_forward_and_backward_amounts() {
        let (g, _, _) = mock_flow_network();
        let f = Flow::from_vec(&[(ei(0), 2), (ei(1), 2)]);
        let rg = flow_to_residue(&g, &f);

        // forward + backward always equals the original capacity
        assert_eq!(residual_capacity(&rg, ni(0), ni(1)), 3);
        assert_eq!(residual_capacity(&rg, ni(1), ni(0)), 2);
        assert_eq!(residual_capacity(&rg, ni(1), ni(2)), 1);
        assert_eq!(residual_capacity(&rg, ni(2), ni(1)), 2);
    }

    #[test]
    fn residue_excludes_self_loops() {
        let mut g: FlowGraph<usize> = FlowGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, a, FlowEdgeBase::new(5));
        g.add_edge(a, b, FlowEdgeBase::new(2));

        let rg = flow_to_residue(&g, &Flow::zero(&g));
        assert_eq!(rg.edge_count(), 1);
        assert_eq!(residual_capacity(&rg, a, a), 0);
        assert_eq!(residual_capacity(&rg, a, b), 2);
    }

    #[test]
    fn find_augmenting_path_on_chain() {
        let (g, s, t) = mock_flow_network();
        let rg = flow_to_residue(&g, &Flow::zero(&g));
        let path = find_augmenting_path(&rg, s, t).unwrap();

        let targets: Vec<EdgeIndex> = path.iter().map(|&e| rg[e].target).collect();
        assert_eq!(targets, vec![ei(0), ei(1)]);
        assert!(path.iter().all(|&e| rg[e].direction == ResidueDirection::Up));
        assert_eq!(bottleneck(&rg, &path), 3);
    }

    #[test]
    fn find_augmenting_path_none_when_disconnected() {
        let (g, s, t) = mock_flow_network_disconnected();
        let rg = flow_to_residue(&g, &Flow::zero(&g));
        assert!(find_augmenting_path(&rg, s, t).is_none());
    }

    #[test]
    fn find_augmenting_path_none_when_saturated() {
        let (g, s, t) = mock_flow_network();
        let f = Flow::from_vec(&[(ei(0), 3), (ei(1), 3)]);
        let rg = flow_to_residue(&g, &f);
        assert!(find_augmenting_path(&rg, s, t).is_none());
    }

    #[test]
    fn change_flow_along_chain_path() {
        let (g, s, t) = mock_flow_network();
        let zero = Flow::zero(&g);
        let rg = flow_to_residue(&g, &zero);
        let path = find_augmenting_path(&rg, s, t).unwrap();

        let f = change_flow_along_edges(&zero, &rg, &path, 3).unwrap();
        assert_eq!(f[ei(0)], 3);
        assert_eq!(f[ei(1)], 3);

        // more than the movable amount is refused
        assert_eq!(
            change_flow_along_edges(&zero, &rg, &path, 10),
            Err(FlowError::CapacityExceeded { edge: 0 })
        );
    }

    #[test]
    fn improve_flow_round_trip() {
        let (g, s, t) = mock_flow_network();
        let f0 = Flow::zero(&g);
        let f1 = improve_flow(&g, &f0, s, t).unwrap().unwrap();
        assert_eq!(f1[ei(0)], 3);
        assert_eq!(f1[ei(1)], 3);
        // saturated, no further improvement
        assert!(improve_flow(&g, &f1, s, t).unwrap().is_none());
    }
}
