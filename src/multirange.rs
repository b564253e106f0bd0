// SPDX-License-Identifier: MPL-2.0

//! A sorted, disjoint collection of non-adjacent [`Range`]s.

use std::fmt;

use log::debug;
use range_core::{BoundValue, Element, Range, RangeOptions};
use smallvec::SmallVec;

/// A multirange is the union of zero or more non-empty, pairwise disjoint,
/// pairwise non-adjacent ranges, stored in ascending order.
///
/// The invariant is enforced structurally: the only way to build a
/// `Multirange` is through [`Multirange::new`] (which sorts, merges
/// touching/overlapping members, and drops empties) or the operations below,
/// all of which preserve it. There is no public way to push a raw, unsorted
/// list of ranges into a `Multirange`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: serde::Serialize", deserialize = "E: serde::Deserialize<'de>"))
)]
pub struct Multirange<E> {
    members: SmallVec<[Range<E>; 1]>,
}

impl<E: Element> Multirange<E> {
    /// The empty multirange (the union of zero ranges).
    pub fn empty() -> Self {
        Multirange { members: SmallVec::new() }
    }

    /// Builds a multirange from an arbitrary collection of ranges, sorting
    /// them and merging any that overlap or are adjacent. Empty member
    /// ranges are silently dropped. This is the single normalizing
    /// constructor every other `Multirange`-producing operation in this
    /// module routes through.
    pub fn new(ranges: impl IntoIterator<Item = Range<E>>) -> Self {
        let mut members: SmallVec<[Range<E>; 1]> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
        let input_count = members.len();
        members.sort_by(|a, b| a.compare(b));

        let mut merged: SmallVec<[Range<E>; 1]> = SmallVec::new();
        for range in members {
            match merged.last_mut() {
                Some(last) if last.overlaps(&range) || last.is_adjacent(&range) => {
                    *last = last.union_or_panic(&range);
                }
                _ => merged.push(range),
            }
        }
        debug!("multirange normalized {input_count} input ranges to {} members", merged.len());
        Multirange { members: merged }
    }

    /// The members of this multirange, in ascending order. Never contains
    /// empty ranges, and no two members overlap or are adjacent.
    pub fn ranges(&self) -> &[Range<E>] {
        &self.members
    }

    /// True iff this multirange has no members (I-7's canonical empty form).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True iff `item` lies within some member range.
    pub fn contains(&self, item: &E) -> bool {
        self.members
            .binary_search_by(|range| range.locate(item))
            .is_ok()
    }

    /// True iff every element of `range` is covered by this multirange's
    /// members (possibly spanning more than one of them, provided there is
    /// no gap within `range`).
    pub fn contains_range(&self, range: &Range<E>) -> bool {
        if range.is_empty() {
            return true;
        }
        self.members.iter().any(|member| member.contains_range(range))
    }

    /// True iff every element of `other` is covered by `self`.
    pub fn contains_multirange(&self, other: &Multirange<E>) -> bool {
        other.members.iter().all(|m| self.contains_range(m))
    }

    /// True iff `self` and `range` share at least one element.
    pub fn overlaps(&self, range: &Range<E>) -> bool {
        self.members.iter().any(|member| member.overlaps(range))
    }

    /// True iff `self` and `other` share at least one element.
    pub fn overlaps_multirange(&self, other: &Multirange<E>) -> bool {
        self.members.iter().any(|m| other.overlaps(m))
    }

    /// True iff every member of `self` lies entirely below `range`, with a
    /// gap before it. `false` for an empty multirange, like every other
    /// predicate here except `contains?`.
    pub fn is_left_of(&self, range: &Range<E>) -> bool {
        match self.members.last() {
            None => false,
            Some(last) => last.is_left_of(range),
        }
    }

    /// True iff every member of `self` lies entirely above `range`, with a
    /// gap after it. `false` for an empty multirange.
    pub fn is_right_of(&self, range: &Range<E>) -> bool {
        match self.members.first() {
            None => false,
            Some(first) => first.is_right_of(range),
        }
    }

    /// True iff `self`'s rightmost extent does not reach past `range`'s.
    /// `false` for an empty multirange.
    pub fn does_not_extend_right_of(&self, range: &Range<E>) -> bool {
        match self.members.last() {
            None => false,
            Some(last) => last.does_not_extend_right_of(range),
        }
    }

    /// True iff `self`'s leftmost extent does not reach past `range`'s.
    /// `false` for an empty multirange.
    pub fn does_not_extend_left_of(&self, range: &Range<E>) -> bool {
        match self.members.first() {
            None => false,
            Some(first) => first.does_not_extend_left_of(range),
        }
    }

    /// True iff every member of `self` lies entirely below every member of
    /// `other`, with a gap before it. `false` if either multirange is empty.
    pub fn is_left_of_multirange(&self, other: &Multirange<E>) -> bool {
        match (self.members.last(), other.members.first()) {
            (Some(last), Some(first)) => last.is_left_of(first),
            _ => false,
        }
    }

    /// True iff every member of `self` lies entirely above every member of
    /// `other`, with a gap after it. `false` if either multirange is empty.
    pub fn is_right_of_multirange(&self, other: &Multirange<E>) -> bool {
        match (self.members.first(), other.members.last()) {
            (Some(first), Some(last)) => first.is_right_of(last),
            _ => false,
        }
    }

    /// True iff `self`'s rightmost extent does not reach past `other`'s.
    /// `false` if either multirange is empty.
    pub fn does_not_extend_right_of_multirange(&self, other: &Multirange<E>) -> bool {
        match (self.members.last(), other.members.last()) {
            (Some(self_last), Some(other_last)) => self_last.does_not_extend_right_of(other_last),
            _ => false,
        }
    }

    /// True iff `self`'s leftmost extent does not reach past `other`'s.
    /// `false` if either multirange is empty.
    pub fn does_not_extend_left_of_multirange(&self, other: &Multirange<E>) -> bool {
        match (self.members.first(), other.members.first()) {
            (Some(self_first), Some(other_first)) => self_first.does_not_extend_left_of(other_first),
            _ => false,
        }
    }

    /// True iff `self` and `range` share a boundary with no value, and no
    /// gap, between them. Only the first and last members can ever touch an
    /// external range: by I-6 no interior member sits at a boundary another
    /// range could be adjacent to.
    pub fn is_adjacent(&self, range: &Range<E>) -> bool {
        match (self.members.first(), self.members.last()) {
            (Some(first), Some(last)) => first.is_adjacent(range) || last.is_adjacent(range),
            _ => false,
        }
    }

    /// True iff `self` and `other` share a boundary with no gap, tested both
    /// ways: `self`'s last member against `other`'s first, and `self`'s
    /// first against `other`'s last.
    pub fn is_adjacent_multirange(&self, other: &Multirange<E>) -> bool {
        match (
            self.members.first(),
            self.members.last(),
            other.members.first(),
            other.members.last(),
        ) {
            (Some(a_first), Some(a_last), Some(b_first), Some(b_last)) => {
                a_last.is_adjacent(b_first) || a_first.is_adjacent(b_last)
            }
            _ => false,
        }
    }

    /// The union of `self` and `other`'s member ranges. Always succeeds: a
    /// multirange union never needs contiguity between operands.
    pub fn union(&self, other: &Multirange<E>) -> Multirange<E> {
        Multirange::new(self.members.iter().chain(other.members.iter()).cloned())
    }

    /// The intersection of `self` and `other`: the union of every pairwise
    /// member intersection.
    pub fn intersection(&self, other: &Multirange<E>) -> Multirange<E> {
        let mut out = Vec::new();
        for a in &self.members {
            for b in &other.members {
                let i = a.intersection(b);
                if !i.is_empty() {
                    out.push(i);
                }
            }
        }
        Multirange::new(out)
    }

    /// `self` minus `other`. Unlike [`Range::difference`], this always
    /// succeeds: a multirange can represent the two fragments left behind
    /// when a member is split.
    pub fn difference(&self, other: &Multirange<E>) -> Multirange<E> {
        let mut remaining: Vec<Range<E>> = self.members.to_vec();
        for sub in &other.members {
            let mut next = Vec::with_capacity(remaining.len());
            for range in remaining {
                match range.difference(sub) {
                    Ok(r) => next.push(r),
                    Err(split) => {
                        next.push(split.lower);
                        next.push(split.upper);
                    }
                }
            }
            remaining = next;
        }
        Multirange::new(remaining)
    }

    /// The smallest single [`Range`] covering every member of `self`,
    /// including the gaps between them. Empty for an empty multirange.
    pub fn merge(&self) -> Range<E> {
        self.members
            .iter()
            .fold(Range::empty(), |acc, member| acc.merge(member))
    }

    /// Total order over multiranges: lexicographic comparison of member
    /// ranges, shorter-is-less when one is a prefix of the other.
    pub fn compare(&self, other: &Multirange<E>) -> std::cmp::Ordering {
        self.members
            .iter()
            .map(Some)
            .chain(std::iter::repeat(None))
            .zip(
                other
                    .members
                    .iter()
                    .map(Some)
                    .chain(std::iter::repeat(None)),
            )
            .take(self.members.len().max(other.members.len()))
            .map(|pair| match pair {
                (Some(a), Some(b)) => a.compare(b),
                (Some(_), None) => std::cmp::Ordering::Greater,
                (None, Some(_)) => std::cmp::Ordering::Less,
                (None, None) => std::cmp::Ordering::Equal,
            })
            .find(|o| *o != std::cmp::Ordering::Equal)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl<E: Element> From<Range<E>> for Multirange<E> {
    /// Lifts a single range into a one-member multirange (zero members if
    /// the range is empty). The only direction this crate's layering
    /// allows: `range-core` never references `Multirange`.
    fn from(range: Range<E>) -> Self {
        Multirange::new(std::iter::once(range))
    }
}

/// True iff `range` and `multirange` share at least one element. The
/// free-function counterpart to [`Multirange::overlaps`], for call sites
/// that start from a bare [`Range`].
pub fn range_overlaps_multirange<E: Element>(range: &Range<E>, multirange: &Multirange<E>) -> bool {
    multirange.overlaps(range)
}

/// True iff every element of `range` is covered by `multirange`.
pub fn range_contained_by_multirange<E: Element>(range: &Range<E>, multirange: &Multirange<E>) -> bool {
    multirange.contains_range(range)
}

/// True iff every element of `multirange` is covered by `range`.
pub fn multirange_contained_by_range<E: Element>(multirange: &Multirange<E>, range: &Range<E>) -> bool {
    multirange.ranges().iter().all(|m| range.contains_range(m))
}

/// True iff `range` lies entirely below every member of `multirange`, with a
/// gap before it. Vacuously false for an empty multirange (mirroring
/// [`Range::is_left_of`]'s empty-operand behavior).
pub fn range_is_left_of_multirange<E: Element>(range: &Range<E>, multirange: &Multirange<E>) -> bool {
    match multirange.ranges().first() {
        None => false,
        Some(first) => range.is_left_of(first),
    }
}

/// True iff `range` lies entirely above every member of `multirange`, with a
/// gap after it.
pub fn range_is_right_of_multirange<E: Element>(range: &Range<E>, multirange: &Multirange<E>) -> bool {
    match multirange.ranges().last() {
        None => false,
        Some(last) => range.is_right_of(last),
    }
}

/// True iff `range`'s upper bound does not extend past `multirange`'s.
pub fn range_does_not_extend_right_of_multirange<E: Element>(
    range: &Range<E>,
    multirange: &Multirange<E>,
) -> bool {
    match multirange.ranges().last() {
        None => false,
        Some(last) => range.does_not_extend_right_of(last),
    }
}

/// True iff `range`'s lower bound does not extend past `multirange`'s.
pub fn range_does_not_extend_left_of_multirange<E: Element>(
    range: &Range<E>,
    multirange: &Multirange<E>,
) -> bool {
    match multirange.ranges().first() {
        None => false,
        Some(first) => range.does_not_extend_left_of(first),
    }
}

/// True iff `range` and `multirange` share a boundary with no gap between
/// them. The free-function counterpart to [`Multirange::is_adjacent`].
pub fn range_adjacent_to_multirange<E: Element>(range: &Range<E>, multirange: &Multirange<E>) -> bool {
    multirange.is_adjacent(range)
}

impl<E: Element + fmt::Display> fmt::Display for Multirange<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, range) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{range}")?;
        }
        write!(f, "}}")
    }
}

/// Convenience constructor mirroring [`range_core::Range::new`], producing a
/// one-member multirange directly from bound values.
pub fn single<E: Element>(
    lower: BoundValue<E>,
    upper: BoundValue<E>,
    options: RangeOptions,
) -> Result<Multirange<E>, range_core::BoundOrder<E>> {
    Range::new(lower, upper, options).map(Multirange::from)
}
