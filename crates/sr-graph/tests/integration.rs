//! Integration tests for sr-graph.

use sr_graph::{GraphError, NetworkView, RoadNetwork, Route};

fn build(roads: &[(&str, &str, f64)]) -> RoadNetwork {
    let mut network = RoadNetwork::new();
    for &(a, b, w) in roads {
        network.add_road(a, b, w).unwrap();
    }
    network
}

#[test]
fn every_road_is_stored_on_both_endpoints() {
    let roads = [
        ("A", "B", 1.0),
        ("B", "C", 2.0),
        ("C", "A", 3.5),
        ("A", "B", 0.25),
    ];
    let network = build(&roads);

    for &(a, b, w) in &roads {
        let a_id = network.registry().id(a).unwrap();
        let b_id = network.registry().id(b).unwrap();
        assert!(
            network
                .neighbors(a_id)
                .iter()
                .any(|e| e.neighbor == b_id && e.weight == w)
        );
        assert!(
            network
                .neighbors(b_id)
                .iter()
                .any(|e| e.neighbor == a_id && e.weight == w)
        );
    }
    assert!(network.validate().is_ok());
}

#[test]
fn triangle_route_and_highlight() {
    let network = build(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 10.0)]);
    let route = network.shortest_path("A", "C").unwrap();
    assert_eq!(
        route,
        Route {
            distance: 3.0,
            path: vec!["A".into(), "B".into(), "C".into()],
        }
    );

    let view = NetworkView::highlighted(&network, &route).unwrap();
    assert_eq!(view.on_path_count(), 2);
    assert_eq!(view.path_edges(&route).len(), route.hops());
}

#[test]
fn registered_but_isolated_pair() {
    let network = build(&[("A", "B", 1.0), ("C", "D", 1.0)]);
    let route = network.shortest_path("B", "C").unwrap();
    assert!(!route.is_reachable());
    assert!(route.distance.is_infinite());
    assert!(route.path.is_empty());
}

#[test]
fn identity_route_for_every_location() {
    let network = build(&[("A", "B", 1.0), ("B", "C", 2.0)]);
    for label in network.registry().labels() {
        let route = network.shortest_path(label, label).unwrap();
        assert_eq!(route.distance, 0.0);
        assert_eq!(route.path, [label.clone()]);
    }
}

#[test]
fn invalid_input_is_rejected_without_side_effects() {
    let mut network = build(&[("A", "B", 1.0)]);
    let before = network.adjacency_listing().unwrap();

    assert!(network.add_road("", "B", 1.0).is_err());
    assert!(matches!(
        network.add_road("A", "Z", -1.0),
        Err(GraphError::NegativeWeight { .. })
    ));

    assert_eq!(network.adjacency_listing().unwrap(), before);
    assert!(!network.registry().contains("Z"));
}

#[test]
fn query_on_unregistered_location() {
    let network = build(&[("A", "B", 1.0)]);
    assert_eq!(
        network.shortest_path("A", "Nowhere"),
        Err(GraphError::UnknownLocation {
            label: "Nowhere".into()
        })
    );
}

#[test]
fn large_chain() {
    let mut network = RoadNetwork::new();
    for i in 0..99 {
        network
            .add_road(&format!("L{i}"), &format!("L{}", i + 1), 1.0)
            .unwrap();
    }
    // A long detour that should lose to the chain
    network.add_road("L0", "L99", 150.0).unwrap();

    assert_eq!(network.location_count(), 100);
    assert_eq!(network.road_count(), 100);

    let route = network.shortest_path("L0", "L99").unwrap();
    assert_eq!(route.distance, 99.0);
    assert_eq!(route.hops(), 99);
    assert_eq!(route.path.first().map(String::as_str), Some("L0"));
    assert_eq!(route.path.last().map(String::as_str), Some("L99"));
}
