//! Integration tests for shortest-path traversal.
//!
//! These tests verify ShortestPath and SingleSourceShortestPaths on
//! various graph topologies.

use graphsocial_core::{UserId, UserRecord};
use graphsocial_graph::store::{GraphError, GraphStore};
use graphsocial_graph::traversal::{ShortestPath, SingleSourceShortestPaths};

fn record(id: &str) -> UserRecord {
    UserRecord::new(id, id.to_uppercase(), "2000-01-01", "555-0000", "Springfield")
}

fn store_with(ids: &[&str]) -> GraphStore {
    let mut store = GraphStore::new();
    for id in ids {
        store.insert(record(id)).unwrap();
    }
    store
}

fn link(store: &mut GraphStore, edges: &[(&str, &str)]) {
    for (src, dest) in edges {
        store.follow(&UserId::new(*src), &UserId::new(*dest)).unwrap();
    }
}

/// A -> B -> C -> D
fn create_chain() -> GraphStore {
    let mut store = store_with(&["a", "b", "c", "d"]);
    link(&mut store, &[("a", "b"), ("b", "c"), ("c", "d")]);
    store
}

/// Center node following five leaves.
fn create_star() -> GraphStore {
    let mut store = store_with(&["hub", "l1", "l2", "l3", "l4", "l5"]);
    link(&mut store, &[("hub", "l1"), ("hub", "l2"), ("hub", "l3"), ("hub", "l4"), ("hub", "l5")]);
    store
}

/// A -> B -> C -> A
fn create_cycle() -> GraphStore {
    let mut store = store_with(&["a", "b", "c"]);
    link(&mut store, &[("a", "b"), ("b", "c"), ("c", "a")]);
    store
}

/// Two routes from A to D: a direct edge and a two-hop detour.
fn create_shortcut() -> GraphStore {
    let mut store = store_with(&["a", "b", "c", "d"]);
    link(&mut store, &[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]);
    store
}

#[test]
fn chain_path_follows_every_hop() {
    let store = create_chain();
    let path = ShortestPath::new("a", "d").find(&store).unwrap();

    assert_eq!(path.length, 3);
    let ids: Vec<&str> = path.nodes.iter().map(UserId::as_str).collect();
    assert_eq!(ids, ["a", "b", "c", "d"]);
}

#[test]
fn edges_are_directed() {
    let store = create_chain();

    // Forward works, reverse does not: no edge points backward.
    assert_eq!(ShortestPath::new("a", "c").distance(&store).unwrap(), 2);
    let err = ShortestPath::new("c", "a").find(&store).unwrap_err();
    assert!(matches!(err, GraphError::NoPathExists { .. }));
}

#[test]
fn source_equals_target() {
    let store = create_chain();
    let path = ShortestPath::new("b", "b").find(&store).unwrap();

    assert_eq!(path.length, 0);
    assert_eq!(path.nodes, vec![UserId::new("b")]);
}

#[test]
fn unknown_endpoint_fails() {
    let store = create_chain();

    let err = ShortestPath::new("ghost", "a").find(&store).unwrap_err();
    assert_eq!(err, GraphError::UserNotFound(UserId::new("ghost")));

    let err = ShortestPath::new("a", "ghost").find(&store).unwrap_err();
    assert_eq!(err, GraphError::UserNotFound(UserId::new("ghost")));
}

#[test]
fn shortcut_beats_detour() {
    let store = create_shortcut();
    let path = ShortestPath::new("a", "d").find(&store).unwrap();

    assert_eq!(path.length, 1);
    let ids: Vec<&str> = path.nodes.iter().map(UserId::as_str).collect();
    assert_eq!(ids, ["a", "d"]);
}

#[test]
fn cycle_terminates_and_finds_way_around() {
    let store = create_cycle();

    // c reaches b only by going through a.
    let path = ShortestPath::new("c", "b").find(&store).unwrap();
    assert_eq!(path.length, 2);
    let ids: Vec<&str> = path.nodes.iter().map(UserId::as_str).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn star_leaves_cannot_reach_each_other() {
    let store = create_star();

    assert_eq!(ShortestPath::new("hub", "l3").distance(&store).unwrap(), 1);
    let err = ShortestPath::new("l1", "l2").find(&store).unwrap_err();
    assert!(matches!(err, GraphError::NoPathExists { .. }));
}

#[test]
fn single_source_distances_cover_reachable_set() {
    let store = create_chain();
    let distances = SingleSourceShortestPaths::new("b").compute(&store).unwrap();

    assert_eq!(distances.get(&UserId::new("b")), Some(&0));
    assert_eq!(distances.get(&UserId::new("c")), Some(&1));
    assert_eq!(distances.get(&UserId::new("d")), Some(&2));
    // a is upstream of b and therefore unreachable.
    assert!(!distances.contains_key(&UserId::new("a")));
}

#[test]
fn single_source_unknown_user_fails() {
    let store = create_chain();
    let err = SingleSourceShortestPaths::new("ghost").compute(&store).unwrap_err();
    assert_eq!(err, GraphError::UserNotFound(UserId::new("ghost")));
}

#[test]
fn path_survives_unrelated_removal() {
    let mut store = create_shortcut();
    store.remove(&UserId::new("b")).unwrap();

    // The direct edge a -> d is untouched by removing the detour.
    let path = ShortestPath::new("a", "d").find(&store).unwrap();
    assert_eq!(path.length, 1);
}
