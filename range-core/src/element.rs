// SPDX-License-Identifier: MPL-2.0

//! The element capability: a total order plus an optional discrete successor.

use std::fmt::Debug;

/// A type that can sit inside a [`crate::Range`].
///
/// Every `Element` has a total order. Some element domains are *discrete*:
/// every value has a well-defined next value ([`successor`](Element::successor)
/// returns `Some`). Domains without a next value (floats, decimals,
/// timestamps, ...) are *indiscrete* and always return `None`.
///
/// [`is_discrete`](Element::is_discrete) is a property of the *type*, not of
/// any particular value: a discrete type may still return `None` from
/// `successor` at the edge of its representable range (e.g. `i32::MAX`),
/// which is treated as an unrepresentable bump rather than a sign that the
/// type itself is indiscrete.
pub trait Element: Clone + Ord + Debug {
    /// The smallest strictly greater value, or `None` if `self` has no
    /// successor (either because the domain is indiscrete, or because
    /// `self` is at the edge of the representable range).
    fn successor(&self) -> Option<Self>;

    /// Whether this element type has a successor operation at all.
    ///
    /// Defaults to `false`; discrete implementations override it to `true`.
    fn is_discrete() -> bool {
        false
    }

    /// True iff `successor(a) == b`. Always `false` for indiscrete domains.
    fn consecutive(a: &Self, b: &Self) -> bool {
        a.successor().as_ref() == Some(b)
    }
}

macro_rules! impl_discrete_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn is_discrete() -> bool {
                    true
                }
            }
        )*
    };
}

impl_discrete_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Element for chrono::NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }

    fn is_discrete() -> bool {
        true
    }
}

macro_rules! impl_indiscrete {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn successor(&self) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

impl_indiscrete!(
    rust_decimal::Decimal,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::NaiveTime,
    ordered_float::OrderedFloat<f32>,
    ordered_float::OrderedFloat<f64>
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_discrete() {
        assert!(i64::is_discrete());
        assert_eq!(5i64.successor(), Some(6));
        assert_eq!(i64::MAX.successor(), None);
        assert!(i64::consecutive(&5, &6));
        assert!(!i64::consecutive(&5, &7));
    }

    #[test]
    fn dates_are_discrete() {
        use chrono::NaiveDate;
        assert!(NaiveDate::is_discrete());
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(d.successor(), Some(next));
        assert!(NaiveDate::consecutive(&d, &next));
    }

    #[test]
    fn decimals_are_indiscrete() {
        use rust_decimal::Decimal;
        assert!(!Decimal::is_discrete());
        let a = Decimal::new(10, 1);
        let b = Decimal::new(11, 1);
        assert_eq!(a.successor(), None);
        assert!(!Decimal::consecutive(&a, &b));
    }

    #[test]
    fn floats_are_indiscrete() {
        use ordered_float::OrderedFloat;
        let a = OrderedFloat(1.0f64);
        assert_eq!(a.successor(), None);
        assert!(!OrderedFloat::<f64>::is_discrete());
    }
}
