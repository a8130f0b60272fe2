//! Integration tests for the plain binary search tree.

use rstest::rstest;

use treelab::util::testing::init_test_setup;
use treelab::{Balancing, Tree};

fn tree_with(values: &[i64]) -> Tree {
    let mut tree = Tree::new(Balancing::Plain);
    for &value in values {
        tree.add(value);
    }
    tree
}

// ============================================================
// Empty Tree Tests
// ============================================================

#[test]
fn given_empty_tree_when_queried_then_reports_empty() {
    init_test_setup();
    let tree = Tree::new(Balancing::Plain);

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.minimum(), None);
    assert_eq!(tree.maximum(), None);
    assert!(tree.inorder().is_empty());
    assert!(tree.preorder().is_empty());
    assert!(tree.postorder().is_empty());
    assert!(tree.level_order_with_gaps().is_empty());
    assert!(!tree.is_member(0));
}

// ============================================================
// Ordering Tests
// ============================================================

#[rstest]
#[case(vec![5, 3, 8, 1, 4, 7, 9])]
#[case(vec![1, 2, 3, 4, 5])]
#[case(vec![5, 4, 3, 2, 1])]
#[case(vec![10, -5, 0, 42, 7])]
fn given_distinct_values_when_added_then_inorder_is_sorted(#[case] values: Vec<i64>) {
    init_test_setup();
    let tree = tree_with(&values);

    let mut expected = values.clone();
    expected.sort();
    assert_eq!(tree.inorder(), expected);
}

#[test]
fn given_known_tree_when_traversed_then_orderings_match() {
    init_test_setup();
    let tree = tree_with(&[50, 30, 70, 20, 40, 60, 80]);

    assert_eq!(tree.preorder(), vec![50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.postorder(), vec![20, 40, 30, 60, 80, 70, 50]);
}

#[test]
fn given_values_when_added_then_minimum_and_maximum_are_extremes() {
    init_test_setup();
    let tree = tree_with(&[10, -5, 0, 42, 7]);

    assert_eq!(tree.minimum(), Some(-5));
    assert_eq!(tree.maximum(), Some(42));
}

// ============================================================
// Membership Tests
// ============================================================

#[test]
fn given_added_values_when_testing_membership_then_all_present() {
    init_test_setup();
    let values = [5, 3, 8, 1, 4];
    let tree = tree_with(&values);

    for value in values {
        assert!(tree.is_member(value), "{} should be a member", value);
    }
    assert!(!tree.is_member(2));
    assert!(!tree.is_member(100));
}

#[test]
fn given_deleted_value_when_testing_membership_then_only_that_value_gone() {
    init_test_setup();
    let values = [5, 3, 8, 1, 4, 7, 9];
    let mut tree = tree_with(&values);

    tree.delete(8);

    assert!(!tree.is_member(8));
    for value in values.iter().filter(|&&v| v != 8) {
        assert!(tree.is_member(*value), "{} should still be a member", value);
    }
}

// ============================================================
// Size Tests
// ============================================================

#[test]
fn given_distinct_values_when_added_then_size_matches_count() {
    init_test_setup();
    let tree = tree_with(&[5, 3, 8, 1, 4]);
    assert_eq!(tree.size(), 5);
}

#[test]
fn given_duplicate_value_when_added_then_tree_unchanged() {
    init_test_setup();
    let mut tree = tree_with(&[5, 3, 8]);
    let before = tree.preorder();

    tree.add(3);

    assert_eq!(tree.size(), 3);
    assert_eq!(tree.preorder(), before);
}

// ============================================================
// Deletion Tests
// ============================================================

#[test]
fn given_absent_value_when_deleted_then_tree_unchanged() {
    init_test_setup();
    let mut tree = tree_with(&[5, 3, 8]);
    let before = tree.preorder();

    tree.delete(42);

    assert_eq!(tree.preorder(), before);
}

#[test]
fn given_leaf_when_deleted_then_parent_loses_child() {
    init_test_setup();
    let mut tree = tree_with(&[5, 3, 8]);

    tree.delete(3);

    assert_eq!(tree.preorder(), vec![5, 8]);
    assert_eq!(tree.size(), 2);
}

#[test]
fn given_node_with_one_child_when_deleted_then_child_spliced_up() {
    init_test_setup();
    let mut tree = tree_with(&[10, 5, 3]);

    tree.delete(5);

    assert_eq!(tree.preorder(), vec![10, 3]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn given_node_with_two_children_when_deleted_then_successor_spliced_in() {
    init_test_setup();
    let mut tree = tree_with(&[50, 30, 70, 20, 40, 60, 80]);

    tree.delete(50);

    // in-order successor of 50 is 60
    assert_eq!(tree.preorder(), vec![60, 30, 20, 40, 70, 80]);
    assert_eq!(tree.inorder(), vec![20, 30, 40, 60, 70, 80]);
}

#[rstest]
#[case(vec![5, 3, 8, 1, 4, 7, 9], vec![5, 3, 8, 1, 4, 7, 9])]
#[case(vec![5, 3, 8, 1, 4, 7, 9], vec![9, 7, 4, 1, 8, 3, 5])]
#[case(vec![5, 3, 8, 1, 4, 7, 9], vec![1, 9, 5, 3, 7, 8, 4])]
fn given_all_values_when_deleted_in_any_order_then_tree_is_empty(
    #[case] values: Vec<i64>,
    #[case] deletions: Vec<i64>,
) {
    init_test_setup();
    let mut tree = tree_with(&values);

    for value in deletions {
        tree.delete(value);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
}

// ============================================================
// Shape Tests
// ============================================================

#[test]
fn given_ascending_run_when_added_then_tree_degenerates() {
    init_test_setup();
    let mut tree = Tree::new(Balancing::Plain);
    for value in 1..=16 {
        tree.add(value);
    }

    assert_eq!(tree.height(), 16);
    assert!(!tree.is_balanced());
}

#[test]
fn given_leaf_without_right_child_when_listing_gaps_then_slots_marked() {
    init_test_setup();
    let tree = tree_with(&[10, 5, 15, 20]);

    assert_eq!(
        tree.level_order_with_gaps(),
        vec![
            Some(10),
            Some(5),
            Some(15),
            None,
            None,
            None,
            Some(20)
        ]
    );
}

#[test]
fn given_single_node_when_listing_gaps_then_one_slot() {
    init_test_setup();
    let tree = tree_with(&[7]);
    assert_eq!(tree.level_order_with_gaps(), vec![Some(7)]);
}

#[test]
fn given_left_only_child_when_listing_gaps_then_right_slot_empty() {
    init_test_setup();
    let tree = tree_with(&[10, 5]);
    assert_eq!(tree.level_order_with_gaps(), vec![Some(10), Some(5), None]);
}
