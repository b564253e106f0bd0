// SPDX-License-Identifier: MPL-2.0

//! The bound triple `(value, inclusive, side)` and its comparison.
//!
//! Every operation in [`crate::range`] that reasons about where a range
//! starts or ends goes through [`compare_bounds`]. It is the single place
//! that knows how value equality, inclusivity, side (lower/upper), and
//! unboundedness interact, so that every predicate and operation built on
//! top of it agrees with every other one.

use std::cmp::Ordering;

use crate::element::Element;

/// Either a concrete value or the `unbound` sentinel (±∞ depending on side).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: serde::Serialize", deserialize = "E: serde::Deserialize<'de>"))
)]
pub enum BoundValue<E> {
    Unbound,
    Value(E),
}

/// Which end of a range a bound sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Lower,
    Upper,
}

/// A bound in isolation: a value (or unbound), whether it includes that
/// value, and which side of an interval it plays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundPoint<E> {
    pub value: BoundValue<E>,
    pub inclusive: bool,
    pub side: Side,
}

impl<E> BoundPoint<E> {
    pub fn new(value: BoundValue<E>, inclusive: bool, side: Side) -> Self {
        BoundPoint {
            value,
            inclusive,
            side,
        }
    }
}

/// A small signed "nudge" that linearizes bound geometry at a shared value:
/// an inclusive lower bound and an inclusive upper bound sit exactly on the
/// value (0); an exclusive lower bound sits just after it (+1); an exclusive
/// upper bound sits just before it (-1). Comparing these nudges after
/// comparing the underlying values reproduces every rule in the bound
/// comparison contract, including the cross-side cases it only gives
/// examples for.
fn nudge<E>(point: &BoundPoint<E>) -> i8 {
    match (point.side, point.inclusive) {
        (Side::Lower, true) => 0,
        (Side::Lower, false) => 1,
        (Side::Upper, true) => 0,
        (Side::Upper, false) => -1,
    }
}

fn side_rank(side: Side) -> u8 {
    match side {
        Side::Lower => 0,
        Side::Upper => 1,
    }
}

/// Compares two bound points under the full contract:
///
/// 1. Two `unbound` points compare by side (lower-unbound < upper-unbound,
///    same side is equal).
/// 2. A lower-unbound point is less than any value point; an upper-unbound
///    point is greater than any value point.
/// 3. Otherwise the underlying values are compared; ties are broken by
///    [`nudge`].
pub fn compare_bounds<E: Element>(a: &BoundPoint<E>, b: &BoundPoint<E>) -> Ordering {
    use BoundValue::{Unbound, Value};
    match (&a.value, &b.value) {
        (Unbound, Unbound) => side_rank(a.side).cmp(&side_rank(b.side)),
        (Unbound, Value(_)) => {
            if a.side == Side::Lower {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (Value(_), Unbound) => {
            if b.side == Side::Lower {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Value(x), Value(y)) => match x.cmp(y) {
            Ordering::Equal => nudge(a).cmp(&nudge(b)),
            other => other,
        },
    }
}

/// True iff `upper` and `lower` sit at the same value with exactly opposite
/// inclusivity, i.e. one range's upper edge touches the other's lower edge
/// with no value, and no gap, between them. Two unbound bounds are never
/// adjacent.
pub fn bounds_touch<E: Element>(upper: &BoundPoint<E>, lower: &BoundPoint<E>) -> bool {
    match (&upper.value, &lower.value) {
        (BoundValue::Value(u), BoundValue::Value(l)) => u == l && upper.inclusive != lower.inclusive,
        _ => false,
    }
}

/// Rewrites a bound point into canonical form.
///
/// For discrete element types: an exclusive lower bound is bumped to the
/// inclusive successor; an inclusive upper bound is bumped to the exclusive
/// successor. For indiscrete types the value is left untouched. In either
/// case, `unbound` bounds are normalized to `inclusive = (side == Lower)`
/// while keeping `Unbound` as the stored value — this never changes what the
/// bound compares equal to, since [`compare_bounds`] ignores `inclusive` for
/// unbound points.
///
/// If a discrete value has no successor (it sits at the edge of the
/// representable range, e.g. `i32::MAX`), the bump is skipped and the bound
/// is returned as-is: there is no representable canonical form to bump to.
pub fn canonicalize_point<E: Element>(point: BoundPoint<E>) -> BoundPoint<E> {
    let BoundPoint {
        value,
        inclusive,
        side,
    } = point;
    match value {
        BoundValue::Unbound => BoundPoint {
            value: BoundValue::Unbound,
            inclusive: side == Side::Lower,
            side,
        },
        BoundValue::Value(v) => {
            if !E::is_discrete() {
                return BoundPoint {
                    value: BoundValue::Value(v),
                    inclusive,
                    side,
                };
            }
            match (side, inclusive) {
                (Side::Lower, false) => match v.successor() {
                    Some(s) => BoundPoint {
                        value: BoundValue::Value(s),
                        inclusive: true,
                        side,
                    },
                    None => BoundPoint {
                        value: BoundValue::Value(v),
                        inclusive: false,
                        side,
                    },
                },
                (Side::Upper, true) => match v.successor() {
                    Some(s) => BoundPoint {
                        value: BoundValue::Value(s),
                        inclusive: false,
                        side,
                    },
                    None => BoundPoint {
                        value: BoundValue::Value(v),
                        inclusive: true,
                        side,
                    },
                },
                _ => BoundPoint {
                    value: BoundValue::Value(v),
                    inclusive,
                    side,
                },
            }
        }
    }
}
