// SPDX-License-Identifier: MPL-2.0

//! Single-interval range algebra over totally-ordered element types.
//!
//! This crate implements the bound-comparison and canonicalization rules
//! that give PostgreSQL-compatible range semantics: a [`Range`] is either
//! empty or a lower/upper bound pair (each a concrete value or unbound),
//! where discrete element types ([`Element::is_discrete`]) are always
//! canonicalized to a half-open `[lower, upper)` form.
//!
//! [`Multirange`](https://docs.rs/pgrange), built on top of this crate,
//! depends on it but never the other way around: nothing here knows that
//! multiranges exist.

mod bound;
mod element;
mod error;
mod range;

pub use bound::{compare_bounds, BoundPoint, BoundValue, Side};
pub use element::Element;
pub use error::{BoundOrder, DisjointRanges, NotContiguous, NotIterable};
pub use range::{Iter, LowerBound, Range, RangeOptions, UpperBound};

#[cfg(any(feature = "proptest", test))]
pub use range::proptest_strategy;
