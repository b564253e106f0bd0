// SPDX-License-Identifier: MPL-2.0

//! Pure string builders for the PostgreSQL range/multirange operators and
//! functions, for callers assembling raw SQL fragments. These build text
//! only: no connection, no parameter binding, no query execution.

/// `@>` — contains.
pub const OP_CONTAINS: &str = "@>";
/// `<@` — contained by.
pub const OP_CONTAINED_BY: &str = "<@";
/// `&&` — overlaps.
pub const OP_OVERLAPS: &str = "&&";
/// `<<` — strictly left of.
pub const OP_LEFT_OF: &str = "<<";
/// `>>` — strictly right of.
pub const OP_RIGHT_OF: &str = ">>";
/// `&<` — does not extend to the right of.
pub const OP_NOT_EXTEND_RIGHT: &str = "&<";
/// `&>` — does not extend to the left of.
pub const OP_NOT_EXTEND_LEFT: &str = "&>";
/// `-|-` — is adjacent to.
pub const OP_ADJACENT: &str = "-|-";
/// `+` — union (only defined when operands are contiguous).
pub const OP_UNION: &str = "+";
/// `*` — intersection.
pub const OP_INTERSECTION: &str = "*";
/// `-` — difference.
pub const OP_DIFFERENCE: &str = "-";

fn binary_op(left: &str, op: &str, right: &str) -> String {
    format!("{left} {op} {right}")
}

/// `left @> right`
pub fn contains(left: &str, right: &str) -> String {
    binary_op(left, OP_CONTAINS, right)
}

/// `left <@ right`
pub fn contained_by(left: &str, right: &str) -> String {
    binary_op(left, OP_CONTAINED_BY, right)
}

/// `left && right`
pub fn overlaps(left: &str, right: &str) -> String {
    binary_op(left, OP_OVERLAPS, right)
}

/// `left << right`
pub fn left_of(left: &str, right: &str) -> String {
    binary_op(left, OP_LEFT_OF, right)
}

/// `left >> right`
pub fn right_of(left: &str, right: &str) -> String {
    binary_op(left, OP_RIGHT_OF, right)
}

/// `left &< right`
pub fn not_extend_right(left: &str, right: &str) -> String {
    binary_op(left, OP_NOT_EXTEND_RIGHT, right)
}

/// `left &> right`
pub fn not_extend_left(left: &str, right: &str) -> String {
    binary_op(left, OP_NOT_EXTEND_LEFT, right)
}

/// `left -|- right`
pub fn adjacent(left: &str, right: &str) -> String {
    binary_op(left, OP_ADJACENT, right)
}

/// `left + right`
pub fn union(left: &str, right: &str) -> String {
    binary_op(left, OP_UNION, right)
}

/// `left * right`
pub fn intersection(left: &str, right: &str) -> String {
    binary_op(left, OP_INTERSECTION, right)
}

/// `left - right`
pub fn difference(left: &str, right: &str) -> String {
    binary_op(left, OP_DIFFERENCE, right)
}

/// `lower(expr)`
pub fn lower(expr: &str) -> String {
    format!("lower({expr})")
}

/// `upper(expr)`
pub fn upper(expr: &str) -> String {
    format!("upper({expr})")
}

/// `isempty(expr)`
pub fn is_empty(expr: &str) -> String {
    format!("isempty({expr})")
}

/// `lower_inc(expr)`
pub fn lower_inc(expr: &str) -> String {
    format!("lower_inc({expr})")
}

/// `upper_inc(expr)`
pub fn upper_inc(expr: &str) -> String {
    format!("upper_inc({expr})")
}

/// `lower_inf(expr)`
pub fn lower_inf(expr: &str) -> String {
    format!("lower_inf({expr})")
}

/// `upper_inf(expr)`
pub fn upper_inf(expr: &str) -> String {
    format!("upper_inf({expr})")
}

/// `range_merge(left, right)`
pub fn range_merge(left: &str, right: &str) -> String {
    format!("range_merge({left}, {right})")
}

/// `multirange(expr)` — lifts a range expression to a one-member multirange.
pub fn multirange(expr: &str) -> String {
    format!("multirange({expr})")
}

/// `unnest(expr)` — expands a multirange expression into its member ranges.
pub fn unnest(expr: &str) -> String {
    format!("unnest({expr})")
}

/// `expr::type_name` — casts a textual or numeric expression to the given
/// range/multirange type name (e.g. `int4range`, `datemultirange`).
pub fn cast_to(expr: &str, type_name: &str) -> String {
    format!("{expr}::{type_name}")
}
