//! Tests for OrderedIndex
//!
//! These tests verify:
//! - BST insertion and point lookup
//! - First-wins behavior on duplicate keys
//! - In-order iteration in ascending key order
//! - Removal (leaf, one child, two children, root)
//! - Length tracking and clearing

use linedex::OrderedIndex;

// =============================================================================
// Helper Functions
// =============================================================================

fn index_with_keys(keys: &[u32]) -> OrderedIndex<u32> {
    let mut index = OrderedIndex::new();
    for (i, &key) in keys.iter().enumerate() {
        index.insert(key, i as u64 * 10);
    }
    index
}

fn collect_keys(index: &OrderedIndex<u32>) -> Vec<u32> {
    index.in_order().map(|(key, _)| *key).collect()
}

// =============================================================================
// Insert / Lookup Tests
// =============================================================================

#[test]
fn test_empty_index() {
    let index: OrderedIndex<u32> = OrderedIndex::new();

    assert_eq!(index.len(), 0);
    assert!(index.is_empty());
    assert_eq!(index.get(&1), None);
    assert_eq!(index.in_order().count(), 0);
}

#[test]
fn test_insert_and_get() {
    let mut index = OrderedIndex::new();
    index.insert(5u32, 100);
    index.insert(3, 200);
    index.insert(8, 300);

    assert_eq!(index.get(&5), Some(100));
    assert_eq!(index.get(&3), Some(200));
    assert_eq!(index.get(&8), Some(300));
    assert_eq!(index.get(&7), None);
    assert_eq!(index.len(), 3);
}

#[test]
fn test_duplicate_insert_keeps_first_offset() {
    let mut index = OrderedIndex::new();
    index.insert(1u32, 0);
    index.insert(1, 999);

    assert_eq!(index.get(&1), Some(0));
    assert_eq!(index.len(), 1);
}

#[test]
fn test_contains() {
    let index = index_with_keys(&[2, 1, 3]);

    assert!(index.contains(&1));
    assert!(index.contains(&3));
    assert!(!index.contains(&4));
}

#[test]
fn test_monotonic_insertion_still_correct() {
    // Worst case for an unbalanced tree, but lookups must stay correct
    let index = index_with_keys(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    for key in 1u32..=10 {
        assert_eq!(index.get(&key), Some((key as u64 - 1) * 10));
    }
    assert_eq!(collect_keys(&index), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_string_keys() {
    let mut index = OrderedIndex::new();
    index.insert("20260830_CARD".to_string(), 0);
    index.insert("20260829_DERM".to_string(), 40);
    index.insert("20260830_DERM".to_string(), 80);

    let keys: Vec<&String> = index.in_order().map(|(key, _)| key).collect();
    assert_eq!(keys, ["20260829_DERM", "20260830_CARD", "20260830_DERM"]);
}

// =============================================================================
// In-Order Iteration Tests
// =============================================================================

#[test]
fn test_in_order_is_sorted() {
    let index = index_with_keys(&[50, 20, 70, 10, 30, 60, 80, 25]);

    let keys = collect_keys(&index);
    assert_eq!(keys, [10, 20, 25, 30, 50, 60, 70, 80]);
}

#[test]
fn test_in_order_pairs_offsets() {
    let mut index = OrderedIndex::new();
    index.insert(3u32, 30);
    index.insert(1, 10);
    index.insert(2, 20);

    let pairs: Vec<(u32, u64)> = index.in_order().map(|(key, off)| (*key, off)).collect();
    assert_eq!(pairs, [(1, 10), (2, 20), (3, 30)]);
}

#[test]
fn test_in_order_is_restartable() {
    let index = index_with_keys(&[2, 1, 3]);

    let first: Vec<u32> = collect_keys(&index);
    let second: Vec<u32> = collect_keys(&index);
    assert_eq!(first, second);
}

#[test]
fn test_in_order_is_lazy() {
    let index = index_with_keys(&[4, 2, 6, 1, 3, 5, 7]);

    // Taking a prefix must not require visiting the whole tree
    let first_two: Vec<u32> = index.in_order().map(|(key, _)| *key).take(2).collect();
    assert_eq!(first_two, [1, 2]);
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_missing_key() {
    let mut index = index_with_keys(&[2, 1, 3]);

    assert_eq!(index.remove(&9), None);
    assert_eq!(index.len(), 3);
}

#[test]
fn test_remove_leaf() {
    let mut index = index_with_keys(&[2, 1, 3]);

    assert_eq!(index.remove(&1), Some(10));
    assert_eq!(index.get(&1), None);
    assert_eq!(index.len(), 2);
    assert_eq!(collect_keys(&index), [2, 3]);
}

#[test]
fn test_remove_node_with_one_child() {
    // 5 → 3 → 2 (left chain): removing 3 must splice 2 up
    let mut index = index_with_keys(&[5, 3, 2]);

    assert_eq!(index.remove(&3), Some(10));
    assert_eq!(index.get(&2), Some(20));
    assert_eq!(collect_keys(&index), [2, 5]);
}

#[test]
fn test_remove_node_with_two_children() {
    let mut index = index_with_keys(&[50, 20, 70, 10, 30, 60, 80]);

    assert_eq!(index.remove(&20), Some(10));
    assert_eq!(index.get(&20), None);
    assert_eq!(index.get(&10), Some(30));
    assert_eq!(index.get(&30), Some(40));
    assert_eq!(collect_keys(&index), [10, 30, 50, 60, 70, 80]);
}

#[test]
fn test_remove_root_with_two_children() {
    let mut index = index_with_keys(&[50, 20, 70, 60, 80]);

    assert_eq!(index.remove(&50), Some(0));
    assert_eq!(collect_keys(&index), [20, 60, 70, 80]);

    // Remaining keys still resolve
    assert_eq!(index.get(&60), Some(30));
    assert_eq!(index.get(&80), Some(40));
}

#[test]
fn test_remove_all_keys() {
    let mut index = index_with_keys(&[4, 2, 6, 1, 3, 5, 7]);

    for key in [4u32, 2, 6, 1, 3, 5, 7] {
        assert!(index.remove(&key).is_some());
    }
    assert!(index.is_empty());
    assert_eq!(index.in_order().count(), 0);
}

#[test]
fn test_reinsert_after_remove() {
    let mut index = index_with_keys(&[2, 1, 3]);

    index.remove(&2);
    index.insert(2, 777);

    assert_eq!(index.get(&2), Some(777));
    assert_eq!(collect_keys(&index), [1, 2, 3]);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear() {
    let mut index = index_with_keys(&[2, 1, 3]);

    index.clear();

    assert!(index.is_empty());
    assert_eq!(index.get(&2), None);

    index.insert(9, 90);
    assert_eq!(index.get(&9), Some(90));
}
