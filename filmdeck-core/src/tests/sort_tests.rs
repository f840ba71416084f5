use super::*;

#[test]
fn bubble_sorts_ascending() {
    let mut items = vec![5, 1, 4, 2, 8, 0];
    bubble_sort_by(&mut items, |a, b| a.cmp(b));
    assert_eq!(items, [0, 1, 2, 4, 5, 8]);
}

#[test]
fn bubble_handles_empty_and_single() {
    let mut empty: Vec<i32> = vec![];
    bubble_sort_by(&mut empty, |a, b| a.cmp(b));
    assert!(empty.is_empty());

    let mut single = vec![7];
    bubble_sort_by(&mut single, |a, b| a.cmp(b));
    assert_eq!(single, [7]);
}

#[test]
fn bubble_is_stable() {
    // Sort by key only; the sequence number must keep insertion order
    // among equal keys.
    let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
    bubble_sort_by(&mut items, |a, b| a.0.cmp(&b.0));
    assert_eq!(items, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
}

#[test]
fn bubble_sorted_input_exits_early() {
    let mut items = vec![1, 2, 3, 4];
    bubble_sort_by(&mut items, |a, b| a.cmp(b));
    assert_eq!(items, [1, 2, 3, 4]);
}

#[test]
fn quicksort_sorts_ascending() {
    let mut items = vec![9, 3, 7, 1, 7, 0, 2];
    quicksort_by(&mut items, |a, b| a.cmp(b));
    assert_eq!(items, [0, 1, 2, 3, 7, 7, 9]);
}

#[test]
fn quicksort_sorts_descending_with_reversed_comparator() {
    let mut items = vec![3, 1, 4, 1, 5, 9, 2, 6];
    quicksort_by(&mut items, |a, b| b.cmp(a));
    assert_eq!(items, [9, 6, 5, 4, 3, 2, 1, 1]);
}

#[test]
fn quicksort_reverse_sorted_input() {
    let mut items: Vec<i32> = (0..50).rev().collect();
    quicksort_by(&mut items, |a, b| a.cmp(b));
    let expected: Vec<i32> = (0..50).collect();
    assert_eq!(items, expected);
}

#[test]
fn quicksort_all_equal_keys() {
    let mut items = vec![4, 4, 4, 4];
    quicksort_by(&mut items, |a, b| a.cmp(b));
    assert_eq!(items, [4, 4, 4, 4]);
}

#[test]
fn quicksort_handles_empty_and_single() {
    let mut empty: Vec<i32> = vec![];
    quicksort_by(&mut empty, |a, b| a.cmp(b));
    assert!(empty.is_empty());

    let mut single = vec![3];
    quicksort_by(&mut single, |a, b| a.cmp(b));
    assert_eq!(single, [3]);
}

#[test]
fn quicksort_sorts_strings_lexicographically() {
    let mut items = vec!["delta", "alpha", "charlie", "bravo"];
    quicksort_by(&mut items, |a, b| a.cmp(b));
    assert_eq!(items, ["alpha", "bravo", "charlie", "delta"]);
}
