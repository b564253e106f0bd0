// SPDX-License-Identifier: MPL-2.0

//! A single, possibly-empty interval over an [`Element`] domain.

use std::cmp::Ordering;
use std::fmt;

use crate::bound::{bounds_touch, canonicalize_point, compare_bounds, BoundPoint, BoundValue, Side};
use crate::element::Element;
use crate::error::{BoundOrder, DisjointRanges, NotContiguous, NotIterable};

/// One side of a range, as actually stored (no `side` tag needed: the field
/// name carries it).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: serde::Serialize", deserialize = "E: serde::Deserialize<'de>"))
)]
pub struct LowerBound<E> {
    pub value: BoundValue<E>,
    pub inclusive: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: serde::Serialize", deserialize = "E: serde::Deserialize<'de>"))
)]
pub struct UpperBound<E> {
    pub value: BoundValue<E>,
    pub inclusive: bool,
}

impl<E: Clone> LowerBound<E> {
    fn as_point(&self) -> BoundPoint<E> {
        BoundPoint::new(self.value.clone(), self.inclusive, Side::Lower)
    }
}

impl<E: Clone> UpperBound<E> {
    fn as_point(&self) -> BoundPoint<E> {
        BoundPoint::new(self.value.clone(), self.inclusive, Side::Upper)
    }
}

impl<E> From<BoundPoint<E>> for LowerBound<E> {
    fn from(point: BoundPoint<E>) -> Self {
        LowerBound {
            value: point.value,
            inclusive: point.inclusive,
        }
    }
}

impl<E> From<BoundPoint<E>> for UpperBound<E> {
    fn from(point: BoundPoint<E>) -> Self {
        UpperBound {
            value: point.value,
            inclusive: point.inclusive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: serde::Serialize", deserialize = "E: serde::Deserialize<'de>"))
)]
enum Inner<E> {
    Empty,
    Bounded(LowerBound<E>, UpperBound<E>),
}

/// Options accepted by [`Range::new`]. The default mirrors PostgreSQL's
/// `range()` constructor: lower-inclusive, upper-exclusive.
#[derive(Clone, Copy, Debug)]
pub struct RangeOptions {
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
}

impl Default for RangeOptions {
    fn default() -> Self {
        RangeOptions {
            lower_inclusive: true,
            upper_inclusive: false,
        }
    }
}

/// A single interval over `E`: either the canonical empty range, or a
/// lower/upper bound pair, each a value or `unbound`.
///
/// For discrete `E`, every non-empty `Range` produced by this crate satisfies
/// `lower_inclusive == true && upper_inclusive == false` (or is unbound on
/// that side) — see [`Range::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: serde::Serialize", deserialize = "E: serde::Deserialize<'de>"))
)]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Range<E> {
    inner: Inner<E>,
}

impl<E: Element + fmt::Display> Range<E> {
    /// The canonical empty range.
    pub fn empty() -> Self {
        Range { inner: Inner::Empty }
    }

    /// Builds a range from a lower and upper bound value (or `unbound`),
    /// applying PostgreSQL-style canonicalization and empty-collapse rules.
    ///
    /// Fails with [`BoundOrder`] when the lower bound strictly exceeds the
    /// upper bound.
    pub fn new(
        lower: BoundValue<E>,
        upper: BoundValue<E>,
        options: RangeOptions,
    ) -> Result<Self, BoundOrder<E>> {
        let lower_point = BoundPoint::new(lower, options.lower_inclusive, Side::Lower);
        let upper_point = BoundPoint::new(upper, options.upper_inclusive, Side::Upper);

        match compare_bounds(&lower_point, &upper_point) {
            Ordering::Greater => match (&lower_point.value, &upper_point.value) {
                (BoundValue::Value(lv), BoundValue::Value(uv)) if lv == uv => Ok(Range::empty()),
                (BoundValue::Value(lv), BoundValue::Value(uv)) => Err(BoundOrder {
                    lower: lv.clone(),
                    upper: uv.clone(),
                }),
                _ => unreachable!(
                    "compare_bounds only returns Greater for a lower/upper pair when both sides are concrete values"
                ),
            },
            Ordering::Equal => Ok(Self::from_points(lower_point, upper_point)),
            Ordering::Less => {
                if let (BoundValue::Value(lv), BoundValue::Value(uv)) =
                    (&lower_point.value, &upper_point.value)
                {
                    if !lower_point.inclusive && !upper_point.inclusive && E::consecutive(lv, uv) {
                        return Ok(Range::empty());
                    }
                }
                Ok(Self::from_points(lower_point, upper_point))
            }
        }
    }

    /// Same as [`Range::new`], but panics on [`BoundOrder`] instead of
    /// returning it. For call sites that treat a malformed bound pair as a
    /// programmer error.
    pub fn new_or_panic(lower: BoundValue<E>, upper: BoundValue<E>, options: RangeOptions) -> Self {
        match Self::new(lower, upper, options) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    fn from_points(lower: BoundPoint<E>, upper: BoundPoint<E>) -> Self {
        let lower = canonicalize_point(lower);
        let upper = canonicalize_point(upper);
        Range {
            inner: Inner::Bounded(lower.into(), upper.into()),
        }
    }

    /// Builds a bounded range directly from already-canonical bounds,
    /// skipping [`Range::new`]'s canonicalization pass. Exposed for callers
    /// (such as a multirange layer) that already hold canonical bounds
    /// derived from an existing `Range`, e.g. after a merge or split.
    pub fn from_parts(lower: LowerBound<E>, upper: UpperBound<E>) -> Self {
        Range {
            inner: Inner::Bounded(lower, upper),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.inner, Inner::Empty)
    }

    fn lower_point(&self) -> Option<BoundPoint<E>> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded(lower, _) => Some(lower.as_point()),
        }
    }

    fn upper_point(&self) -> Option<BoundPoint<E>> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded(_, upper) => Some(upper.as_point()),
        }
    }

    /// The lower bound, or `None` for the empty range.
    pub fn lower_bound(&self) -> Option<&LowerBound<E>> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded(lower, _) => Some(lower),
        }
    }

    /// The upper bound, or `None` for the empty range.
    pub fn upper_bound(&self) -> Option<&UpperBound<E>> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded(_, upper) => Some(upper),
        }
    }

    /// True iff `item` lies within this range.
    pub fn contains(&self, item: &E) -> bool {
        match &self.inner {
            Inner::Empty => false,
            Inner::Bounded(lower, upper) => {
                let above_lower = match &lower.value {
                    BoundValue::Unbound => true,
                    BoundValue::Value(v) => {
                        if lower.inclusive {
                            item >= v
                        } else {
                            item > v
                        }
                    }
                };
                if !above_lower {
                    return false;
                }
                match &upper.value {
                    BoundValue::Unbound => true,
                    BoundValue::Value(v) => {
                        if upper.inclusive {
                            item <= v
                        } else {
                            item < v
                        }
                    }
                }
            }
        }
    }

    /// Where `item` sits relative to this range: `Less` if before it,
    /// `Equal` if contained, `Greater` if after it. Used by multirange
    /// binary search; meaningless on an empty range (never placed in a
    /// normalized multirange).
    pub fn locate(&self, item: &E) -> Ordering {
        match &self.inner {
            Inner::Empty => Ordering::Less,
            Inner::Bounded(lower, upper) => {
                let below_lower = match &lower.value {
                    BoundValue::Unbound => false,
                    BoundValue::Value(v) => {
                        if lower.inclusive {
                            item < v
                        } else {
                            item <= v
                        }
                    }
                };
                if below_lower {
                    return Ordering::Less;
                }
                let within_upper = match &upper.value {
                    BoundValue::Unbound => true,
                    BoundValue::Value(v) => {
                        if upper.inclusive {
                            item <= v
                        } else {
                            item < v
                        }
                    }
                };
                if within_upper {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
        }
    }

    /// True iff every element of `other` is an element of `self`. An empty
    /// `other` is always contained; an empty `self` contains nothing.
    pub fn contains_range(&self, other: &Range<E>) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return true;
        }
        let (fl, fu) = (self.lower_point().unwrap(), self.upper_point().unwrap());
        let (sl, su) = (other.lower_point().unwrap(), other.upper_point().unwrap());
        compare_bounds(&fl, &sl) != Ordering::Greater && compare_bounds(&fu, &su) != Ordering::Less
    }

    /// True iff `self` and `other` share at least one element.
    pub fn overlaps(&self, other: &Range<E>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (fl, fu) = (self.lower_point().unwrap(), self.upper_point().unwrap());
        let (sl, su) = (other.lower_point().unwrap(), other.upper_point().unwrap());
        compare_bounds(&fl, &su) != Ordering::Greater && compare_bounds(&fu, &sl) != Ordering::Less
    }

    /// True iff `self` lies entirely below `other`, with a gap between them.
    pub fn is_left_of(&self, other: &Range<E>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let fu = self.upper_point().unwrap();
        let sl = other.lower_point().unwrap();
        compare_bounds(&fu, &sl) == Ordering::Less
    }

    /// True iff `self` lies entirely above `other`, with a gap between them.
    pub fn is_right_of(&self, other: &Range<E>) -> bool {
        other.is_left_of(self)
    }

    /// True iff `self`'s upper bound does not extend past `other`'s.
    pub fn does_not_extend_right_of(&self, other: &Range<E>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        compare_bounds(&self.upper_point().unwrap(), &other.upper_point().unwrap()) != Ordering::Greater
    }

    /// True iff `self`'s lower bound does not extend past `other`'s.
    pub fn does_not_extend_left_of(&self, other: &Range<E>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        compare_bounds(&self.lower_point().unwrap(), &other.lower_point().unwrap()) != Ordering::Less
    }

    /// True iff `self` and `other` share a boundary with no value, and no
    /// gap, between them (one side inclusive, the other exclusive, same
    /// value). Two unbound edges are never adjacent.
    pub fn is_adjacent(&self, other: &Range<E>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let fu = self.upper_point().unwrap();
        let fl = self.lower_point().unwrap();
        let su = other.upper_point().unwrap();
        let sl = other.lower_point().unwrap();
        bounds_touch(&fu, &sl) || bounds_touch(&su, &fl)
    }

    /// The union of `self` and `other`, provided they overlap or are
    /// adjacent (i.e. are contiguous). Fails with [`NotContiguous`]
    /// otherwise.
    pub fn union(&self, other: &Range<E>) -> Result<Range<E>, NotContiguous<E>> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if !(self.overlaps(other) || self.is_adjacent(other)) {
            return Err(NotContiguous {
                first: self.clone(),
                second: other.clone(),
            });
        }
        let fl = self.lower_point().unwrap();
        let sl = other.lower_point().unwrap();
        let fu = self.upper_point().unwrap();
        let su = other.upper_point().unwrap();
        let lower = if compare_bounds(&fl, &sl) == Ordering::Greater { sl } else { fl };
        let upper = if compare_bounds(&fu, &su) == Ordering::Less { su } else { fu };
        Ok(Range::from_parts(lower.into(), upper.into()))
    }

    /// Same as [`Range::union`], but panics on [`NotContiguous`].
    pub fn union_or_panic(&self, other: &Range<E>) -> Range<E> {
        match self.union(other) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    /// The intersection of `self` and `other`. Never fails: the empty range
    /// is returned when either operand is empty, or when they don't
    /// overlap.
    pub fn intersection(&self, other: &Range<E>) -> Range<E> {
        if !self.overlaps(other) {
            return Range::empty();
        }
        let fl = self.lower_point().unwrap();
        let sl = other.lower_point().unwrap();
        let fu = self.upper_point().unwrap();
        let su = other.upper_point().unwrap();
        let lower = if compare_bounds(&fl, &sl) == Ordering::Less { sl } else { fl };
        let upper = if compare_bounds(&fu, &su) == Ordering::Greater { su } else { fu };
        Range::from_parts(lower.into(), upper.into())
    }

    /// `self` minus `other`. Fails with [`DisjointRanges`] when `other` sits
    /// strictly inside `self`, splitting it into two fragments that cannot
    /// be represented as a single `Range`.
    pub fn difference(&self, other: &Range<E>) -> Result<Range<E>, DisjointRanges<E>> {
        if self.is_empty() {
            return Ok(Range::empty());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        let fl = self.lower_point().unwrap();
        let fu = self.upper_point().unwrap();
        let sl = other.lower_point().unwrap();
        let su = other.upper_point().unwrap();

        let c_ll = compare_bounds(&fl, &sl);
        let c_lu = compare_bounds(&fl, &su);
        let c_ul = compare_bounds(&fu, &sl);
        let c_uu = compare_bounds(&fu, &su);

        if c_ll == Ordering::Less && c_uu == Ordering::Greater {
            // `other` sits strictly inside `self`: splits it into two fragments.
            let left_upper = BoundPoint::new(sl.value.clone(), !sl.inclusive, Side::Upper);
            let right_lower = BoundPoint::new(su.value.clone(), !su.inclusive, Side::Lower);
            let left = Range::from_parts(fl.clone().into(), left_upper.into());
            let right = Range::from_parts(right_lower.into(), fu.clone().into());
            return Err(DisjointRanges { lower: left, upper: right });
        }

        if c_lu == Ordering::Greater || c_ul == Ordering::Less {
            // disjoint: nothing to remove.
            return Ok(self.clone());
        }

        if matches!(c_ll, Ordering::Equal | Ordering::Greater) && matches!(c_uu, Ordering::Less | Ordering::Equal) {
            // `other` covers `self`.
            return Ok(Range::empty());
        }

        if matches!(c_ll, Ordering::Less | Ordering::Equal)
            && matches!(c_ul, Ordering::Equal | Ordering::Greater)
            && matches!(c_uu, Ordering::Less | Ordering::Equal)
        {
            // `other` clips `self`'s right side.
            let new_upper = BoundPoint::new(sl.value.clone(), !sl.inclusive, Side::Upper);
            return Ok(Range::from_parts(fl.into(), new_upper.into()));
        }

        if matches!(c_ll, Ordering::Equal | Ordering::Greater)
            && matches!(c_uu, Ordering::Equal | Ordering::Greater)
            && matches!(c_lu, Ordering::Less | Ordering::Equal)
        {
            // `other` clips `self`'s left side.
            let new_lower = BoundPoint::new(su.value.clone(), !su.inclusive, Side::Lower);
            return Ok(Range::from_parts(new_lower.into(), fu.into()));
        }

        unreachable!("the four bound comparisons exhaust every non-empty, non-disjoint case")
    }

    /// Same as [`Range::difference`], but panics on [`DisjointRanges`].
    pub fn difference_or_panic(&self, other: &Range<E>) -> Range<E> {
        match self.difference(other) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    /// The smallest range covering both `self` and `other`. Unlike
    /// [`Range::union`], this never fails: it also covers the gap when the
    /// two ranges are disjoint.
    pub fn merge(&self, other: &Range<E>) -> Range<E> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Range::empty(),
            (true, false) => other.clone(),
            (false, true) => self.clone(),
            (false, false) => {
                let fl = self.lower_point().unwrap();
                let sl = other.lower_point().unwrap();
                let fu = self.upper_point().unwrap();
                let su = other.upper_point().unwrap();
                let lower = if compare_bounds(&fl, &sl) == Ordering::Greater { sl } else { fl };
                let upper = if compare_bounds(&fu, &su) == Ordering::Less { su } else { fu };
                Range::from_parts(lower.into(), upper.into())
            }
        }
    }

    /// Total order over ranges: empties sort greatest and compare equal to
    /// each other; otherwise lower bounds are compared first, upper bounds
    /// break ties. This is the order multirange normalization relies on.
    pub fn compare(&self, other: &Range<E>) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let fl = self.lower_point().unwrap();
                let sl = other.lower_point().unwrap();
                match compare_bounds(&fl, &sl) {
                    Ordering::Equal => {
                        let fu = self.upper_point().unwrap();
                        let su = other.upper_point().unwrap();
                        compare_bounds(&fu, &su)
                    }
                    other => other,
                }
            }
        }
    }

    /// Iterates the elements of a discrete, lower-bounded range in
    /// ascending order. Fails with [`NotIterable`] for indiscrete element
    /// types or a range unbounded on the lower side.
    pub fn iter(&self) -> Result<Iter<E>, NotIterable> {
        if !E::is_discrete() {
            return Err(NotIterable);
        }
        match &self.inner {
            Inner::Empty => Ok(Iter {
                current: None,
                range: self.clone(),
            }),
            Inner::Bounded(lower, _) => match &lower.value {
                BoundValue::Unbound => Err(NotIterable),
                BoundValue::Value(v) => {
                    let start = if lower.inclusive { Some(v.clone()) } else { v.successor() };
                    Ok(Iter {
                        current: start,
                        range: self.clone(),
                    })
                }
            },
        }
    }
}

impl<E: Element + fmt::Display> fmt::Display for Range<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Empty => write!(f, "empty"),
            Inner::Bounded(lower, upper) => {
                match &lower.value {
                    BoundValue::Unbound => write!(f, "(")?,
                    BoundValue::Value(v) => {
                        write!(f, "{}{v}", if lower.inclusive { '[' } else { '(' })?
                    }
                }
                write!(f, ",")?;
                match &upper.value {
                    BoundValue::Unbound => write!(f, ")"),
                    BoundValue::Value(v) => {
                        write!(f, "{v}{}", if upper.inclusive { ']' } else { ')' })
                    }
                }
            }
        }
    }
}

/// Iterator over the elements of a discrete range, produced by [`Range::iter`].
pub struct Iter<E> {
    current: Option<E>,
    range: Range<E>,
}

impl<E: Element> Iterator for Iter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let value = self.current.take()?;
        if !self.range.contains(&value) {
            return None;
        }
        self.current = value.successor();
        Some(value)
    }
}

/// Generates random bounded `Range<i32>` values (and, rarely, an unbounded
/// or empty one) from a sequence of deltas between randomly inclusive or
/// exclusive bounds. Exposed for downstream property tests (gated the same
/// way the element proptest support is: available whenever `proptest` is
/// pulled in as a dependency, or under `cfg(test)` for this crate's own
/// suite).
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl proptest::strategy::Strategy<Value = Range<i32>> {
    use proptest::prelude::*;

    (any::<bool>(), prop::collection::vec(any::<(u16, bool, bool)>(), 0..6)).prop_map(
        |(start_unbounded, deltas)| {
            if deltas.is_empty() {
                return if start_unbounded {
                    Range::new(BoundValue::Unbound, BoundValue::Unbound, RangeOptions::default()).unwrap()
                } else {
                    Range::empty()
                };
            }
            let mut cursor: i32 = 0;
            let mut lower = if start_unbounded {
                BoundValue::Unbound
            } else {
                BoundValue::Value(cursor)
            };
            let mut lower_inclusive = true;
            let mut upper = BoundValue::Unbound;
            let mut upper_inclusive = false;
            for (i, (delta, inclusive, is_last)) in deltas.iter().enumerate() {
                cursor = cursor.saturating_add((*delta % 1000) as i32 + 1);
                if i == 0 && !start_unbounded {
                    lower = BoundValue::Value(cursor);
                    lower_inclusive = *inclusive;
                    continue;
                }
                upper = BoundValue::Value(cursor);
                upper_inclusive = *inclusive;
                if *is_last {
                    break;
                }
            }
            Range::new(
                lower,
                upper,
                RangeOptions {
                    lower_inclusive,
                    upper_inclusive,
                },
            )
            .unwrap_or_else(|_| Range::empty())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: i32, lo_inc: bool, hi: i32, hi_inc: bool) -> Range<i32> {
        Range::new(
            BoundValue::Value(lo),
            BoundValue::Value(hi),
            RangeOptions {
                lower_inclusive: lo_inc,
                upper_inclusive: hi_inc,
            },
        )
        .unwrap()
    }

    #[test]
    fn scenario_new_basic() {
        assert_eq!(range(1, true, 10, false), range(1, true, 10, false));
        // new(1, 10, upper_inclusive: true) canonicalizes to [1, 11)
        assert_eq!(range(1, true, 10, true), range(1, true, 11, false));
    }

    #[test]
    fn scenario_bound_order_error() {
        let err = Range::new(
            BoundValue::Value(10),
            BoundValue::Value(1),
            RangeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.lower, 10);
        assert_eq!(err.upper, 1);
    }

    #[test]
    fn scenario_empty_collapse() {
        let r = Range::new(
            BoundValue::Value(1),
            BoundValue::Value(1),
            RangeOptions {
                lower_inclusive: true,
                upper_inclusive: false,
            },
        )
        .unwrap();
        assert!(r.is_empty());

        let single = Range::new(
            BoundValue::Value(1),
            BoundValue::Value(1),
            RangeOptions {
                lower_inclusive: true,
                upper_inclusive: true,
            },
        )
        .unwrap();
        assert_eq!(single, range(1, true, 2, false));
    }

    #[test]
    fn scenario_contains() {
        let big = range(1, true, 101, false);
        let small = range(11, true, 33, false);
        assert!(big.contains_range(&small));
        assert!(!small.contains(&101));
        assert!(big.contains(&33));
    }

    #[test]
    fn scenario_union() {
        let a = range(0, true, 10, false);
        let b = range(10, true, 20, false);
        assert_eq!(a.union(&b).unwrap(), range(0, true, 20, false));

        let c = range(12, true, 20, false);
        assert!(a.union(&c).is_err());
    }

    #[test]
    fn scenario_difference() {
        let a = range(1, true, 10, false);
        let b = range(2, true, 8, false);
        let err = a.difference(&b).unwrap_err();
        assert_eq!(err.lower, range(1, true, 2, false));
        assert_eq!(err.upper, range(8, true, 10, false));

        let c = range(5, true, 15, false);
        assert_eq!(a.difference(&c).unwrap(), range(1, true, 5, false));
    }

    #[test]
    fn canonical_form_absorbs_inclusivity() {
        // (n-1, n] survives as a single-point discrete range.
        let r = Range::new(
            BoundValue::Value(4),
            BoundValue::Value(5),
            RangeOptions {
                lower_inclusive: false,
                upper_inclusive: true,
            },
        )
        .unwrap();
        assert_eq!(r, range(5, true, 6, false));

        // (n, n+1) is empty on a discrete domain.
        let empty = Range::new(
            BoundValue::Value(4),
            BoundValue::Value(5),
            RangeOptions {
                lower_inclusive: false,
                upper_inclusive: false,
            },
        )
        .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn unbound_ordering() {
        let unbounded = Range::<i32>::new(BoundValue::Unbound, BoundValue::Unbound, RangeOptions::default()).unwrap();
        assert!(unbounded.contains(&i32::MIN));
        assert!(unbounded.contains(&i32::MAX));
    }

    #[test]
    fn iteration_over_discrete_range() {
        let r = range(1, true, 5, false);
        assert_eq!(r.iter().unwrap().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn iteration_fails_on_indiscrete_or_unbound_lower() {
        let r = Range::new(
            BoundValue::Unbound,
            BoundValue::Value(5),
            RangeOptions::default(),
        )
        .unwrap();
        assert!(r.iter().is_err());
    }

    #[test]
    fn compare_orders_empties_last() {
        let a = range(1, true, 5, false);
        let empty = Range::<i32>::empty();
        assert_eq!(a.compare(&empty), Ordering::Less);
        assert_eq!(empty.compare(&Range::<i32>::empty()), Ordering::Equal);
    }
}
