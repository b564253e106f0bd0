// SPDX-License-Identifier: MPL-2.0

//! Structured errors for range construction and combination.

use thiserror::Error;

use crate::element::Element;
use crate::range::Range;

/// Returned by [`crate::Range::new`] when the lower bound strictly exceeds
/// the upper bound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("range lower bound {lower:?} is greater than upper bound {upper:?}")]
pub struct BoundOrder<E: Element> {
    pub lower: E,
    pub upper: E,
}

/// Returned by [`crate::Range::union`] when the two ranges neither overlap
/// nor touch, so no single range can represent their union.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ranges {first} and {second} are not contiguous")]
pub struct NotContiguous<E: Element + std::fmt::Display> {
    pub first: Range<E>,
    pub second: Range<E>,
}

/// Returned by [`crate::Range::difference`] when the subtrahend sits
/// strictly inside the range, splitting it into two disjoint fragments that
/// cannot be represented as a single range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("subtracted range leaves two disjoint fragments: {lower} and {upper}")]
pub struct DisjointRanges<E: Element + std::fmt::Display> {
    pub lower: Range<E>,
    pub upper: Range<E>,
}

/// Returned by [`crate::Range::iter`] when the range's element type is
/// indiscrete, or the range has no lower bound to start iterating from.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("range is not iterable: element type is indiscrete, or the range has no lower bound")]
pub struct NotIterable;
