use dijkstra_table::graph::LabeledGraph;
use dijkstra_table::report::{render_graph, render_shortest_paths, GraphReport, ShortestPathReport};
use dijkstra_table::runner::{execute, OutputFormat, RunConfig};
use dijkstra_table::{Dijkstra, Error, Selection};
use serde_json::Value;

fn graph() -> LabeledGraph<u64> {
    LabeledGraph::from_edges(
        &["A", "B", "C", "D", "E"],
        &[("A", "B", 1), ("A", "C", 4), ("B", "C", 2), ("B", "D", 5), ("C", "D", 1)],
    )
    .unwrap()
}

#[test]
fn test_render_graph() {
    let text = render_graph(&graph()).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "-----------------GRAPH-----------------");
    assert_eq!(lines[1], "A: B(1), C(4)");
    assert_eq!(lines[2], "B: C(2), D(5)");
    assert_eq!(lines[3], "C: D(1)");
    assert_eq!(lines[4], "D: ");
    assert_eq!(lines[5], "E: ");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_render_shortest_paths() {
    let table = Dijkstra::new().compute(&graph(), "A").unwrap();
    let text = render_shortest_paths(&table).unwrap();

    assert!(text.starts_with("-----------SHORTEST PATHS--------------\nStarting vertex: A\n"));
    assert!(text.contains(
        "Label: D\nDistance: 4\nFrom: C\nIs explored: true\nPath: A -> B -> C -> D\n"
    ));
    assert!(text.contains(
        "Label: E\nDistance: unreachable\nFrom: -\nIs explored: false\nPath: unreachable\n"
    ));
    assert!(text.contains("Label: A\nDistance: 0\nFrom: -\nIs explored: true\nPath: A\n"));
}

#[test]
fn test_shortest_path_report_model() {
    let table = Dijkstra::new().compute(&graph(), "A").unwrap();
    let report = ShortestPathReport::from_table(&table).unwrap();

    assert_eq!(report.source, "A");
    assert_eq!(report.reachable, 4);
    assert_eq!(report.explored, 4);

    let c = &report.vertices[2];
    assert_eq!(c.label, "C");
    assert_eq!(c.distance, Some(3));
    assert_eq!(c.predecessor.as_deref(), Some("B"));
    assert_eq!(c.path, Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]));

    let e = &report.vertices[4];
    assert_eq!(e.distance, None);
    assert_eq!(e.path, None);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["vertices"][4]["distance"], Value::Null);
    assert!(json["vertices"][4].get("path").is_none());
    assert_eq!(json["vertices"][3]["path"], serde_json::json!(["A", "B", "C", "D"]));
}

#[test]
fn test_graph_report_model() {
    let report = GraphReport::from_graph(&graph()).unwrap();

    assert_eq!(report.vertices.len(), 5);
    assert_eq!(report.vertices[1].label, "B");
    assert_eq!(report.vertices[1].edges[1].target, "D");
    assert_eq!(report.vertices[1].edges[1].weight, 5);
}

#[test]
fn test_execute_text() {
    let config = RunConfig::default();
    let output = execute(&config, &graph()).unwrap();

    assert!(output.contains("-----------------GRAPH-----------------"));
    assert!(output.contains("Starting vertex: A"));
}

#[test]
fn test_execute_json_without_graph() {
    let config = RunConfig {
        format: OutputFormat::Json,
        selection: Selection::BinaryHeap,
        show_graph: false,
        source: "B".to_string(),
        ..RunConfig::default()
    };
    let output = execute(&config, &graph()).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    assert!(json.get("graph").is_none());
    assert_eq!(json["shortest_paths"]["source"], "B");
    assert_eq!(json["shortest_paths"]["reachable"], 3);
    assert_eq!(json["shortest_paths"]["vertices"][0]["distance"], Value::Null);
}

#[test]
fn test_execute_unknown_source_produces_no_output() {
    let config = RunConfig {
        source: "Q".to_string(),
        ..RunConfig::default()
    };

    assert!(matches!(execute(&config, &graph()), Err(Error::NotFound(_))));
}

#[test]
fn test_weights_wider_than_u64_are_rejected_in_reports() {
    let too_wide = u64::MAX as u128 + 1;
    let graph: LabeledGraph<u128> =
        LabeledGraph::from_edges(&["A", "B"], &[("A", "B", too_wide)]).unwrap();

    assert!(matches!(GraphReport::from_graph(&graph), Err(Error::WeightConversion(_))));

    let table = Dijkstra::new().compute(&graph, "A").unwrap();
    assert_eq!(table.get("B").unwrap().distance, Some(too_wide));
    assert!(matches!(ShortestPathReport::from_table(&table), Err(Error::WeightConversion(_))));
}
