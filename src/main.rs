use maxflow::max_flow::{max_flow, mocks, solve_max_flow, utils};

fn main() {
    env_logger::init();

    // label-based interface
    let nodes = vec!["S", "A", "B", "T"];
    let arcs: Vec<(&str, &str, usize)> =
        vec![("S", "A", 10), ("S", "B", 10), ("A", "T", 1), ("B", "T", 10)];
    match solve_max_flow(&nodes, &arcs, &"S", &"T") {
        Ok(result) => {
            println!("max_flow_value={}", result.value);
            for (from, to, flow) in result.arc_flows.iter() {
                println!("{} -> {}: {}", from, to, flow);
            }
        }
        Err(err) => eprintln!("solve failed: {}", err),
    }

    // petgraph-based interface
    let (graph, source, sink) = mocks::mock_flow_network_clrs();
    match max_flow(&graph, source, sink) {
        Ok((value, flow)) => {
            println!("max_flow_value={}", value);
            utils::draw_with_flow(&graph, &flow);
        }
        Err(err) => eprintln!("solve failed: {}", err),
    }
}
