// SPDX-License-Identifier: MPL-2.0

//! The database adapter boundary: converting between a [`Range`]/[`Multirange`]
//! and the wire representation a SQL driver sends and receives for `range`
//! and `multirange` columns.
//!
//! This module defines the *shape* of that boundary — the wire types, the
//! parameters a driver passes in, and the errors that can occur translating
//! across it — without depending on any particular driver or connection.
//! A real integration plugs a driver's row/column API into [`cast`],
//! [`dump`], and [`load`].

use std::fmt;

use range_core::{BoundValue, Element, Range, RangeOptions};
use thiserror::Error;

use crate::multirange::Multirange;

/// Identifies which built-in (or user-defined) element type a range column
/// holds, mirroring the handful of range subtypes PostgreSQL ships with
/// (`int4range`, `int8range`, `numrange`, `tsrange`, `tstzrange`, `daterange`)
/// plus an escape hatch for user-defined range types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InnerType {
    Int4,
    Int8,
    Numeric,
    Timestamp,
    TimestampTz,
    Date,
    Custom(String),
}

impl fmt::Display for InnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InnerType::Int4 => write!(f, "int4"),
            InnerType::Int8 => write!(f, "int8"),
            InnerType::Numeric => write!(f, "numeric"),
            InnerType::Timestamp => write!(f, "timestamp"),
            InnerType::TimestampTz => write!(f, "timestamptz"),
            InnerType::Date => write!(f, "date"),
            InnerType::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// The parameters a driver adapter passes into [`cast`]/[`load`]: which
/// element type the column holds. Threaded through explicitly rather than
/// hardcoded, so a single adapter can serve every range subtype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterParams {
    pub inner_type: InnerType,
}

/// A single bound as it appears on the wire: a textual value (already
/// formatted by the driver/server, e.g. `"5"` or `"2024-01-01"`), or one of
/// the two unbounded sentinels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WireBound {
    Unbound,
    Value(String),
}

/// The wire form of a range: PostgreSQL's own flag byte plus two optional
/// bound strings, matching what `RangeBound`/range binary and text I/O
/// produce on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireRange {
    pub lower: WireBound,
    pub lower_inclusive: bool,
    pub upper: WireBound,
    pub upper_inclusive: bool,
    /// True for the canonical empty range (`'empty'` on the wire); when
    /// true the bound fields above are meaningless.
    pub is_empty: bool,
}

/// The wire form of a multirange: an ordered list of [`WireRange`]s, as
/// `multirange_send`/`multirange_recv` represent them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireMultirange {
    pub ranges: Vec<WireRange>,
}

/// Failure translating a wire value into a [`Range`] or [`Multirange`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    #[error("could not parse {inner_type} bound value {value:?}")]
    BadValue { inner_type: InnerType, value: String },
    #[error("range bounds are out of order: {0}")]
    BoundOrder(String),
}

/// Parses one textual bound value for the element type named by `params`.
/// This is the single seam a real adapter replaces with a driver's native
/// decoding; it is provided here only for the element types this crate
/// itself knows how to parse from their canonical textual form.
fn parse_value<E: Element + std::str::FromStr>(
    params: &AdapterParams,
    raw: &str,
) -> Result<E, CastError> {
    raw.parse().map_err(|_| CastError::BadValue {
        inner_type: params.inner_type.clone(),
        value: raw.to_string(),
    })
}

/// Converts a wire range into a [`Range<E>`], for an element type that can
/// parse itself from the textual form PostgreSQL sends.
pub fn cast<E: Element + fmt::Display + std::str::FromStr>(
    wire: &WireRange,
    params: &AdapterParams,
) -> Result<Range<E>, CastError> {
    if wire.is_empty {
        return Ok(Range::empty());
    }
    let lower = match &wire.lower {
        WireBound::Unbound => BoundValue::Unbound,
        WireBound::Value(raw) => BoundValue::Value(parse_value(params, raw)?),
    };
    let upper = match &wire.upper {
        WireBound::Unbound => BoundValue::Unbound,
        WireBound::Value(raw) => BoundValue::Value(parse_value(params, raw)?),
    };
    Range::new(
        lower,
        upper,
        RangeOptions {
            lower_inclusive: wire.lower_inclusive,
            upper_inclusive: wire.upper_inclusive,
        },
    )
    .map_err(|err| CastError::BoundOrder(err.to_string()))
}

/// Converts a wire multirange into a [`Multirange<E>`], casting every
/// member range with the same `params`.
pub fn cast_multirange<E: Element + fmt::Display + std::str::FromStr>(
    wire: &WireMultirange,
    params: &AdapterParams,
) -> Result<Multirange<E>, CastError> {
    let mut ranges = Vec::with_capacity(wire.ranges.len());
    for member in &wire.ranges {
        ranges.push(cast(member, params)?);
    }
    Ok(Multirange::new(ranges))
}

/// Converts a [`Range<E>`] into its wire form, ready for a driver to encode.
pub fn dump<E: Element + fmt::Display>(range: &Range<E>) -> WireRange {
    if range.is_empty() {
        return WireRange {
            lower: WireBound::Unbound,
            lower_inclusive: false,
            upper: WireBound::Unbound,
            upper_inclusive: false,
            is_empty: true,
        };
    }
    let lower = range.lower_bound().expect("non-empty range has a lower bound");
    let upper = range.upper_bound().expect("non-empty range has an upper bound");
    WireRange {
        lower: match &lower.value {
            BoundValue::Unbound => WireBound::Unbound,
            BoundValue::Value(v) => WireBound::Value(v.to_string()),
        },
        lower_inclusive: lower.inclusive,
        upper: match &upper.value {
            BoundValue::Unbound => WireBound::Unbound,
            BoundValue::Value(v) => WireBound::Value(v.to_string()),
        },
        upper_inclusive: upper.inclusive,
        is_empty: false,
    }
}

/// Converts a [`Multirange<E>`] into its wire form.
pub fn dump_multirange<E: Element + fmt::Display>(multirange: &Multirange<E>) -> WireMultirange {
    WireMultirange {
        ranges: multirange.ranges().iter().map(dump).collect(),
    }
}

/// Failure loading a wire value from a raw driver row/column (as opposed to
/// [`CastError`], which fails translating an already-decoded [`WireRange`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("column is not a range or multirange value")]
    NotARange,
    #[error(transparent)]
    Cast(#[from] CastError),
}

/// Loads a [`Range<E>`] from a raw wire payload already split into
/// [`WireRange`] form. A real adapter's driver-specific entry point would
/// first decode the driver's native row/column format into a `WireRange`
/// and then delegate here.
pub fn load<E: Element + fmt::Display + std::str::FromStr>(
    wire: Option<&WireRange>,
    params: &AdapterParams,
) -> Result<Range<E>, LoadError> {
    let wire = wire.ok_or(LoadError::NotARange)?;
    Ok(cast(wire, params)?)
}

/// Loads a [`Multirange<E>`] from a raw wire payload already split into
/// [`WireMultirange`] form.
pub fn load_multirange<E: Element + fmt::Display + std::str::FromStr>(
    wire: Option<&WireMultirange>,
    params: &AdapterParams,
) -> Result<Multirange<E>, LoadError> {
    let wire = wire.ok_or(LoadError::NotARange)?;
    Ok(cast_multirange(wire, params)?)
}
