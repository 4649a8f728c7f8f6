use dijkstra_table::graph::generators::{generate_chain, generate_grid, vertex_label};
use dijkstra_table::graph::{Graph, LabeledGraph, MutableGraph};
use dijkstra_table::{path_to_label, Dijkstra, Error, Selection};

// Test helper function to create a grid with a wall in column `wall_x`,
// open only at the bottom row
fn create_walled_grid(width: usize, height: usize, wall_x: usize) -> LabeledGraph<u64> {
    let mut graph = LabeledGraph::new();

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&format!("r{y}c{x}")).unwrap();
        }
    }

    let blocked = |x: usize, y: usize| x == wall_x && y + 1 < height;
    for y in 0..height {
        for x in 0..width {
            if blocked(x, y) {
                continue;
            }
            let from = graph.resolve(&format!("r{y}c{x}")).unwrap();
            let neighbours = [
                (x + 1 < width).then(|| (x + 1, y)),
                (x > 0).then(|| (x - 1, y)),
                (y + 1 < height).then(|| (x, y + 1)),
                (y > 0).then(|| (x, y - 1)),
            ];
            for (nx, ny) in neighbours.into_iter().flatten() {
                if !blocked(nx, ny) {
                    graph.add_edge(from, &format!("r{ny}c{nx}"), 1).unwrap();
                }
            }
        }
    }

    graph
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10, 1).unwrap();

    for selection in [Selection::LinearScan, Selection::BinaryHeap] {
        let table = Dijkstra::with_selection(selection).compute(&graph, "r0c0").unwrap();

        assert_eq!(table.get("r9c9").unwrap().distance, Some(18));
        let path = path_to_label(&table, "r9c9").unwrap();
        assert_eq!(path.first().map(String::as_str), Some("r0c0"), "Path should start at source");
        assert_eq!(path.last().map(String::as_str), Some("r9c9"), "Path should end at target");
        assert_eq!(path.len(), 19);
    }
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let graph = create_walled_grid(10, 10, 5);
    let table = Dijkstra::new().compute(&graph, "r0c0").unwrap();

    // Around the wall through the bottom row
    assert_eq!(table.get("r0c9").unwrap().distance, Some(9 + 9 + 9));
    let path = path_to_label(&table, "r0c9").unwrap();
    assert!(path.contains(&"r9c5".to_string()), "Path should pass the gap");

    // Wall cells have no edges at all
    assert!(matches!(path_to_label(&table, "r0c5"), Err(Error::Unreachable(_))));
}

#[test]
fn test_path_along_a_chain() {
    let graph = generate_chain(6, 3).unwrap();
    let table = Dijkstra::new().compute(&graph, &vertex_label(0)).unwrap();

    let expected: Vec<String> = (0..6).map(vertex_label).collect();
    assert_eq!(path_to_label(&table, &vertex_label(5)).unwrap(), expected);
    assert_eq!(table.get(&vertex_label(5)).unwrap().distance, Some(15));

    // Nothing points back up the chain
    let table = Dijkstra::new().compute(&graph, &vertex_label(3)).unwrap();
    assert_eq!(table.reachable_count(), 3);
    assert!(matches!(path_to_label(&table, &vertex_label(0)), Err(Error::Unreachable(_))));
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_path_to_source_is_just_the_source() {
    let graph = generate_grid(3, 3, 2).unwrap();
    let table = Dijkstra::new().compute(&graph, "r1c1").unwrap();

    assert_eq!(path_to_label(&table, "r1c1").unwrap(), vec!["r1c1".to_string()]);
    assert!(matches!(path_to_label(&table, "r7c7"), Err(Error::NotFound(_))));
}

#[test]
fn test_path_extraction_is_restartable() {
    let graph = generate_grid(4, 4, 1).unwrap();
    let table = Dijkstra::new().compute(&graph, "r0c0").unwrap();

    let first = path_to_label(&table, "r3c3").unwrap();
    let second = path_to_label(&table, "r3c3").unwrap();
    assert_eq!(first, second);
}
