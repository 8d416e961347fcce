//! Call-site capture macros.
//!
//! Each macro forwards to the matching function in [`crate::check`] and
//! labels the violation with the source text of the argument expression.
//! They evaluate to a [`crate::PrecheckResult`], so callers propagate with `?`:
//!
//! ```ignore
//! fn rename(user: Option<&User>, name: Option<&str>) -> precheck::PrecheckResult<()> {
//!     precheck::not_null!(user)?;
//!     precheck::not_null_or_empty_str!(name)?;
//!     Ok(())
//! }
//! ```

#[macro_export]
macro_rules! not_null {
    ($value:expr $(,)?) => {
        $crate::check::not_null(&$value, stringify!($value))
    };
}

#[macro_export]
macro_rules! not_null_or_empty_str {
    ($value:expr $(,)?) => {
        $crate::check::not_null_or_empty_str($value, stringify!($value))
    };
}

/// Takes the sequence by value; pass a reference to keep ownership.
#[macro_export]
macro_rules! not_null_or_empty {
    ($value:expr $(,)?) => {
        $crate::check::not_null_or_empty($value, stringify!($value))
    };
}

#[macro_export]
macro_rules! has_no_nulls {
    ($value:expr $(,)?) => {
        $crate::check::has_no_nulls($value, stringify!($value))
    };
}

#[macro_export]
macro_rules! not_empty {
    ($id:expr $(,)?) => {
        $crate::check::not_empty(&$id, stringify!($id))
    };
}

/// The label is the expression text, so a literal is labelled by itself.
#[macro_export]
macro_rules! is_positive {
    ($value:expr $(,)?) => {
        $crate::check::is_positive($value, stringify!($value))
    };
}

#[macro_export]
macro_rules! meets_condition {
    ($cond:expr $(,)?) => {
        $crate::check::meets_condition($cond, stringify!($cond))
    };
}

/// `is_of_type!(Expected, value)` where `value` is an `Option<&V>`.
#[macro_export]
macro_rules! is_of_type {
    ($expected:ty, $value:expr $(,)?) => {
        $crate::check::is_of_type::<$expected, _>($value, stringify!($value))
    };
}

/// `ensure_that!(cond, factory)` or `ensure_that!(cond, => error)` for an
/// error expression that is only evaluated when `cond` is false.
#[macro_export]
macro_rules! ensure_that {
    ($cond:expr, => $err:expr $(,)?) => {
        $crate::ensure::that($cond, || $err)
    };
    ($cond:expr, $factory:expr $(,)?) => {
        $crate::ensure::that($cond, $factory)
    };
}
