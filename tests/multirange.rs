// SPDX-License-Identifier: MPL-2.0

use pgrange::Multirange;
use range_core::{BoundValue, Range, RangeOptions};

fn r(lo: i32, hi: i32) -> Range<i32> {
    Range::new(
        BoundValue::Value(lo),
        BoundValue::Value(hi),
        RangeOptions {
            lower_inclusive: true,
            upper_inclusive: false,
        },
    )
    .unwrap()
}

#[test]
fn construction_sorts_merges_and_drops_empties() {
    let mr = Multirange::new(vec![r(20, 30), Range::empty(), r(0, 5), r(5, 10)]);
    assert_eq!(mr.ranges(), &[r(0, 10), r(20, 30)]);
}

#[test]
fn construction_matches_concrete_scenario() {
    // Multirange.new([[1,10), [5,15), [20,30)]) -> two segments [1,15) and [20,30)
    let mr = Multirange::new(vec![r(1, 10), r(5, 15), r(20, 30)]);
    assert_eq!(mr.ranges(), &[r(1, 15), r(20, 30)]);
}

#[test]
fn empty_multirange_has_no_members() {
    let mr = Multirange::<i32>::empty();
    assert!(mr.is_empty());
    assert_eq!(mr.ranges(), &[]);
}

#[test]
fn contains_uses_member_binary_search() {
    let mr = Multirange::new(vec![r(0, 5), r(20, 30)]);
    assert!(mr.contains(&3));
    assert!(!mr.contains(&7));
    assert!(!mr.contains(&19));
    assert!(mr.contains(&29));
}

#[test]
fn contains_range_may_span_gaps_within_a_single_member() {
    let mr = Multirange::new(vec![r(0, 10), r(20, 30)]);
    assert!(mr.contains_range(&r(2, 8)));
    // [5, 25) is not covered: there's a gap in the multirange at [10, 20).
    assert!(!mr.contains_range(&r(5, 25)));
}

#[test]
fn union_merges_overlapping_members_across_operands() {
    let a = Multirange::new(vec![r(0, 10), r(20, 30)]);
    let b = Multirange::new(vec![r(5, 25)]);
    assert_eq!(a.union(&b).ranges(), &[r(0, 30)]);
}

#[test]
fn intersection_is_the_union_of_pairwise_overlaps() {
    let a = Multirange::new(vec![r(0, 10), r(20, 30)]);
    let b = Multirange::new(vec![r(5, 25)]);
    assert_eq!(a.intersection(&b).ranges(), &[r(5, 10), r(20, 25)]);
}

#[test]
fn difference_can_split_a_single_member_into_two() {
    let a = Multirange::new(vec![r(0, 10)]);
    let b = Multirange::new(vec![r(3, 7)]);
    assert_eq!(a.difference(&b).ranges(), &[r(0, 3), r(7, 10)]);
}

#[test]
fn difference_across_many_members() {
    let a = Multirange::new(vec![r(0, 10), r(20, 30)]);
    let b = Multirange::new(vec![r(5, 25)]);
    assert_eq!(a.difference(&b).ranges(), &[r(0, 5), r(25, 30)]);
}

#[test]
fn merge_produces_the_single_spanning_range() {
    let mr = Multirange::new(vec![r(0, 5), r(20, 30)]);
    assert_eq!(mr.merge(), r(0, 30));
    assert!(Multirange::<i32>::empty().merge().is_empty());
}

#[test]
fn lifting_a_range_preserves_emptiness() {
    let full: Multirange<i32> = r(1, 5).into();
    assert_eq!(full.ranges(), &[r(1, 5)]);

    let empty: Multirange<i32> = Range::empty().into();
    assert!(empty.is_empty());
}

#[test]
fn compare_orders_lexicographically_by_member() {
    let a = Multirange::new(vec![r(0, 5)]);
    let b = Multirange::new(vec![r(0, 5), r(10, 15)]);
    assert_eq!(a.compare(&b), std::cmp::Ordering::Less);
    assert_eq!(a.compare(&a), std::cmp::Ordering::Equal);
}

#[test]
fn free_functions_mirror_the_method_forms() {
    let mr = Multirange::new(vec![r(0, 10)]);
    assert!(pgrange::range_overlaps_multirange(&r(5, 15), &mr));
    assert!(pgrange::range_contained_by_multirange(&r(2, 8), &mr));
    assert!(pgrange::multirange_contained_by_range(&mr, &r(-5, 20)));
    assert!(pgrange::range_adjacent_to_multirange(&r(10, 20), &mr));
    assert!(pgrange::range_is_left_of_multirange(&r(-10, 0), &mr));
    assert!(pgrange::range_is_right_of_multirange(&r(10, 20), &mr));
}

#[test]
fn adjacent_checks_first_and_last_member_only() {
    // Multirange.adjacent?(new([[1,10)]), [10,20)) -> true
    let mr = Multirange::new(vec![r(1, 10)]);
    assert!(mr.is_adjacent(&r(10, 20)));
    assert!(!mr.is_adjacent(&r(11, 20)));

    let spread = Multirange::new(vec![r(0, 5), r(20, 30)]);
    assert!(spread.is_adjacent(&r(5, 10)));
    assert!(spread.is_adjacent(&r(15, 20)));
    assert!(!spread.is_adjacent(&r(6, 10)));
}

#[test]
fn adjacent_multirange_checks_both_crossings() {
    let a = Multirange::new(vec![r(0, 10)]);
    let b = Multirange::new(vec![r(10, 20)]);
    assert!(a.is_adjacent_multirange(&b));
    assert!(b.is_adjacent_multirange(&a));

    let c = Multirange::new(vec![r(11, 20)]);
    assert!(!a.is_adjacent_multirange(&c));
}

#[test]
fn left_right_no_extend_and_adjacent_are_false_on_empty() {
    let empty = Multirange::<i32>::empty();
    let mr = Multirange::new(vec![r(0, 10)]);

    assert!(!empty.is_left_of(&r(0, 10)));
    assert!(!empty.is_right_of(&r(0, 10)));
    assert!(!empty.does_not_extend_right_of(&r(0, 10)));
    assert!(!empty.does_not_extend_left_of(&r(0, 10)));
    assert!(!empty.is_adjacent(&r(0, 10)));

    assert!(!empty.is_left_of_multirange(&mr));
    assert!(!mr.is_left_of_multirange(&empty));
    assert!(!empty.is_right_of_multirange(&mr));
    assert!(!mr.is_right_of_multirange(&empty));
    assert!(!empty.does_not_extend_right_of_multirange(&mr));
    assert!(!mr.does_not_extend_right_of_multirange(&empty));
    assert!(!empty.does_not_extend_left_of_multirange(&mr));
    assert!(!mr.does_not_extend_left_of_multirange(&empty));
    assert!(!empty.is_adjacent_multirange(&mr));
    assert!(!mr.is_adjacent_multirange(&empty));
    assert!(!empty.is_adjacent_multirange(&empty));
}

#[test]
fn left_right_no_extend_multirange_forms() {
    let a = Multirange::new(vec![r(0, 10)]);
    let b = Multirange::new(vec![r(20, 30)]);
    let overlapping = Multirange::new(vec![r(5, 25)]);

    assert!(a.is_left_of_multirange(&b));
    assert!(b.is_right_of_multirange(&a));
    assert!(!a.is_right_of_multirange(&b));
    assert!(!a.is_left_of_multirange(&overlapping));

    assert!(a.does_not_extend_right_of_multirange(&b));
    assert!(!b.does_not_extend_right_of_multirange(&a));
    assert!(!a.does_not_extend_left_of_multirange(&b));
    assert!(b.does_not_extend_left_of_multirange(&a));
}

#[test]
fn multirange_difference_matches_concrete_scenario() {
    // Multirange.difference(new([[5,20)]), new([[10,15)])) -> [[5,10), [15,20)]
    let a = Multirange::new(vec![r(5, 20)]);
    let b = Multirange::new(vec![r(10, 15)]);
    assert_eq!(a.difference(&b).ranges(), &[r(5, 10), r(15, 20)]);
}
