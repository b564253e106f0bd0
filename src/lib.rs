// SPDX-License-Identifier: MPL-2.0

//! Ranges and multiranges over totally-ordered element types, with
//! PostgreSQL-compatible range algebra.
//!
//! A [`Range<E>`](range_core::Range) is a single, possibly-empty interval:
//! either the canonical empty range or a lower/upper bound pair, each a
//! concrete value or unbound. A [`Multirange<E>`] is the union of zero or
//! more such ranges, kept sorted, disjoint, and non-adjacent.
//!
//! The single-range algebra — bound comparison, canonicalization,
//! predicates, and the three set operations — lives in the
//! [`range_core`] crate this one depends on. This crate builds the
//! multi-range layer, a database adapter boundary ([`pg`]), and SQL
//! expression builders ([`sql`]) on top of it. Data flows one way:
//! `range_core` never references [`Multirange`].
//!
//! # Discrete vs indiscrete domains
//!
//! Element types that implement [`Element::successor`](range_core::Element::successor)
//! are *discrete* (integers, dates): every non-empty range over them is
//! canonicalized to half-open `[lower, upper)` form, matching PostgreSQL's
//! own `int4range`/`daterange` behavior. Indiscrete types (decimals,
//! timestamps, floats) keep whatever inclusivity the caller asked for.
//!
//! # Basic example
//!
//! ```
//! use pgrange::Multirange;
//! use range_core::{BoundValue, Range, RangeOptions};
//!
//! let a = Range::new(
//!     BoundValue::Value(0),
//!     BoundValue::Value(10),
//!     RangeOptions::default(),
//! )
//! .unwrap();
//! let b = Range::new(
//!     BoundValue::Value(20),
//!     BoundValue::Value(30),
//!     RangeOptions::default(),
//! )
//! .unwrap();
//!
//! let mr = Multirange::new(vec![a, b]);
//! assert!(mr.contains(&5));
//! assert!(!mr.contains(&15));
//! ```

#![warn(missing_docs)]

mod multirange;
pub mod pg;
pub mod sql;

pub use multirange::{
    multirange_contained_by_range, range_adjacent_to_multirange, range_contained_by_multirange,
    range_does_not_extend_left_of_multirange, range_does_not_extend_right_of_multirange,
    range_is_left_of_multirange, range_is_right_of_multirange, range_overlaps_multirange, single,
    Multirange,
};
pub use range_core::{
    BoundOrder, BoundValue, DisjointRanges, Element, LowerBound, NotContiguous, NotIterable, Range,
    RangeOptions, UpperBound,
};
