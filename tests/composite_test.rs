//! Tests for leaf/composite behavior on TreeArena

use comptree::domain::{DomainError, NodeId, NodeKind, Operation, TreeArena};
use comptree::util::testing;
use rstest::{fixture, rstest};

struct Org {
    arena: TreeArena,
    root: NodeId,
    device1: NodeId,
    dept1: NodeId,
    device2: NodeId,
}

#[fixture]
fn org() -> Org {
    testing::init_test_setup();
    let mut arena = TreeArena::new();
    let root = arena.composite("root");
    let device1 = arena.leaf("device1");
    let dept1 = arena.composite("dept1");
    let device2 = arena.leaf("device2");
    arena.add(root, device1).unwrap();
    arena.add(root, dept1).unwrap();
    arena.add(dept1, device2).unwrap();
    Org {
        arena,
        root,
        device1,
        dept1,
        device2,
    }
}

fn render(arena: &TreeArena, root: NodeId, depth: usize) -> String {
    let mut out = Vec::new();
    arena.write_display(root, depth, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn occurrences(arena: &TreeArena, parent: NodeId, child: NodeId) -> usize {
    arena
        .children(parent)
        .unwrap()
        .iter()
        .filter(|&&c| c == child)
        .count()
}

// ============================================================
// Display
// ============================================================

#[rstest]
fn given_sample_org_when_display_at_zero_then_prints_marked_lines(org: Org) {
    assert_eq!(
        render(&org.arena, org.root, 0),
        "root\n*device1\n*dept1\n**device2\n"
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn given_sample_org_when_display_then_one_line_per_node_with_node_depth(
    org: Org,
    #[case] depth: usize,
) {
    let output = render(&org.arena, org.root, depth);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), org.arena.node_count(org.root));

    let expected = [
        (depth, "root"),
        (depth + 1, "device1"),
        (depth + 1, "dept1"),
        (depth + 2, "device2"),
    ];
    for (line, (markers, name)) in lines.iter().zip(expected) {
        assert_eq!(*line, format!("{}{}", "*".repeat(markers), name));
    }
}

#[rstest]
fn given_subtree_when_display_then_subtree_root_uses_given_depth(org: Org) {
    assert_eq!(render(&org.arena, org.dept1, 0), "dept1\n*device2\n");
    assert_eq!(render(&org.arena, org.device2, 3), "***device2\n");
}

#[rstest]
fn given_display_when_called_twice_then_tree_unchanged(org: Org) {
    let first = render(&org.arena, org.root, 0);
    let second = render(&org.arena, org.root, 0);
    assert_eq!(first, second);
    assert_eq!(org.arena.children(org.root).unwrap(), &[org.device1, org.dept1]);
}

#[rstest]
fn given_node_listed_twice_when_display_then_printed_twice(mut org: Org) {
    org.arena.add(org.root, org.device2).unwrap();
    assert_eq!(
        render(&org.arena, org.root, 0),
        "root\n*device1\n*dept1\n**device2\n*device2\n"
    );
}

// ============================================================
// Leaf misuse
// ============================================================

#[rstest]
fn given_leaf_when_add_then_structural_violation(mut org: Org) {
    let err = org.arena.add(org.device1, org.device2).unwrap_err();
    match err {
        DomainError::StructuralViolation { name, operation } => {
            assert_eq!(name, "device1");
            assert_eq!(operation, Operation::Add);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(org.arena.children(org.device1).unwrap().is_empty());
    assert_eq!(render(&org.arena, org.root, 0), "root\n*device1\n*dept1\n**device2\n");
}

#[rstest]
fn given_leaf_when_remove_then_structural_violation(mut org: Org) {
    let err = org.arena.remove(org.device2, org.device1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::StructuralViolation {
            operation: Operation::Remove,
            ..
        }
    ));
    assert_eq!(err.to_string(), "leaf 'device2' cannot remove children");
    assert_eq!(org.arena.kind(org.device2).unwrap(), &NodeKind::Leaf);
}

#[rstest]
fn given_unnamed_leaf_when_add_to_itself_then_rejected() {
    let mut arena = TreeArena::new();
    let leaf = arena.insert_leaf();
    assert!(arena.add(leaf, leaf).unwrap_err().is_structural_violation());
    assert_eq!(arena.name(leaf).unwrap(), "");
}

// ============================================================
// Composite add / remove
// ============================================================

#[rstest]
fn given_composite_when_add_then_child_appended_at_tail(mut org: Org) {
    let before = occurrences(&org.arena, org.root, org.device1);
    org.arena.add(org.root, org.device1).unwrap();

    assert_eq!(occurrences(&org.arena, org.root, org.device1), before + 1);
    assert_eq!(org.arena.children(org.root).unwrap().last(), Some(&org.device1));
}

#[rstest]
fn given_duplicates_when_remove_then_all_occurrences_gone_and_order_kept(mut org: Org) {
    let extra = org.arena.leaf("device3");
    for child in [org.device1, org.device1, extra, org.device1] {
        org.arena.add(org.root, child).unwrap();
    }
    // root: device1, dept1, device1, device1, device3, device1
    org.arena.remove(org.root, org.device1).unwrap();

    assert_eq!(occurrences(&org.arena, org.root, org.device1), 0);
    assert_eq!(org.arena.children(org.root).unwrap(), &[org.dept1, extra]);
}

#[rstest]
fn given_absent_node_when_remove_then_noop(mut org: Org) {
    let stranger = org.arena.leaf("device1");
    let before = org.arena.children(org.root).unwrap().to_vec();

    org.arena.remove(org.root, stranger).unwrap();

    assert_eq!(org.arena.children(org.root).unwrap(), before.as_slice());
    assert_eq!(org.arena.children(org.root).unwrap().len(), 2);
}

#[rstest]
fn given_same_name_different_node_when_remove_then_only_identity_matches(mut org: Org) {
    let twin = org.arena.leaf("device2");
    org.arena.add(org.dept1, twin).unwrap();

    org.arena.remove(org.dept1, org.device2).unwrap();

    assert_eq!(org.arena.children(org.dept1).unwrap(), &[twin]);
    assert_eq!(render(&org.arena, org.dept1, 0), "dept1\n*device2\n");
}

#[rstest]
fn given_shared_node_when_removed_from_one_parent_then_other_keeps_it(mut org: Org) {
    org.arena.add(org.root, org.device2).unwrap();
    org.arena.remove(org.dept1, org.device2).unwrap();

    assert!(org.arena.children(org.dept1).unwrap().is_empty());
    assert_eq!(occurrences(&org.arena, org.root, org.device2), 1);
}

// ============================================================
// Naming and lifecycle
// ============================================================

#[rstest]
fn given_new_nodes_when_named_then_display_uses_names() {
    let mut arena = TreeArena::new();
    let root = arena.insert_composite();
    let leaf = arena.insert_leaf();
    assert_eq!(arena.name(root).unwrap(), "");

    arena.set_name(root, "hq").unwrap();
    arena.set_name(leaf, "laptop").unwrap();
    arena.add(root, leaf).unwrap();

    assert_eq!(render(&arena, root, 0), "hq\n*laptop\n");
    arena.set_name(leaf, "desktop").unwrap();
    assert_eq!(render(&arena, root, 0), "hq\n*desktop\n");
}

#[rstest]
fn given_handle_from_other_arena_when_used_as_parent_then_unknown_node() {
    let mut arena = TreeArena::new();
    let root = arena.composite("root");
    let mut other = TreeArena::new();
    let _ = other.composite("a");
    let foreign = other.composite("b");

    assert!(matches!(
        arena.remove(foreign, root),
        Err(DomainError::UnknownNode(id)) if id == foreign
    ));
    assert!(matches!(
        arena.set_name(foreign, "x"),
        Err(DomainError::UnknownNode(_))
    ));
    assert_eq!(arena.len(), 1);
}
