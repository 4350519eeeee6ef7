use planroute_lib::{Edge, Node, PathArena, Point};

#[test]
fn start_path_has_zero_weight() {
    let a = Node::new("A", Point::new(4.0, 2.0));
    let mut arena = PathArena::new();

    let id = arena.start(a.id());
    let path = arena.get(id);
    assert_eq!(path.node(), a.id());
    assert_eq!(path.cumulative_weight(), 0.0);
    assert!(path.previous().is_none());
    assert_eq!(path.route(), vec![a.id()]);
}

#[test]
fn two_hop_path_sums_edge_weights() {
    let a = Node::new("A", Point::new(0.0, 0.0));
    let b = Node::new("B", Point::new(10.0, 0.0));
    let c = Node::new("C", Point::new(10.0, 10.0));

    let ab = Edge::between(&a, &b);
    let bc = Edge::between(&b, &c);

    let mut arena = PathArena::new();
    let start = arena.start(a.id());
    let via_b = arena.extend(start, &ab);
    let full = arena.extend(via_b, &bc);

    let path = arena.get(full);
    assert_eq!(path.cumulative_weight(), 20.0);
    assert_eq!(path.route(), vec![a.id(), b.id(), c.id()]);
}

#[test]
fn previous_walks_back_to_the_start() {
    let a = Node::new("A", Point::new(0.0, 0.0));
    let b = Node::new("B", Point::new(1.0, 0.0));

    let ab = Edge::between(&a, &b);

    let mut arena = PathArena::new();
    let start = arena.start(a.id());
    let full = arena.extend(start, &ab);

    let path = arena.get(full);
    let prefix = path.previous().expect("prefix exists");
    assert_eq!(prefix.node(), a.id());
    assert_eq!(prefix.cumulative_weight(), 0.0);
    assert!(prefix.previous().is_none());
}

#[test]
fn extending_shares_the_prefix() {
    let a = Node::new("A", Point::new(0.0, 0.0));
    let b = Node::new("B", Point::new(1.0, 0.0));
    let c = Node::new("C", Point::new(0.0, 2.0));

    let ab = Edge::between(&a, &b);
    let ac = Edge::between(&a, &c);

    let mut arena = PathArena::new();
    let start = arena.start(a.id());
    let via_b = arena.extend(start, &ab);
    let via_c = arena.extend(start, &ac);

    assert_eq!(arena.len(), 3, "prefix is stored once");
    assert_eq!(arena.get(via_b).cumulative_weight(), 1.0);
    assert_eq!(arena.get(via_c).cumulative_weight(), 2.0);
}

#[test]
fn clear_empties_the_arena() {
    let a = Node::new("A", Point::new(0.0, 0.0));
    let mut arena = PathArena::new();
    arena.start(a.id());
    assert!(!arena.is_empty());

    arena.clear();
    assert!(arena.is_empty());
    assert_eq!(arena.len(), 0);
}
