//! Argument checks.
//!
//! Every check returns `Ok(())` without side effects when its predicate holds
//! and `Err(Violation)` otherwise. Absence is always reported before any
//! finer-grained condition on the same value.
//!
//! The `argument` parameter labels the checked value in the resulting
//! [`Violation`]. The macros in this crate fill it with the source text of the
//! argument expression.

use crate::error::{PrecheckResult, Violation};
use crate::types::{Nullable, RuntimeType};
use std::any::TypeId;
use std::cmp::Ordering;
use uuid::Uuid;

/// Require that `value` is present.
pub fn not_null<V: Nullable + ?Sized>(value: &V, argument: &str) -> PrecheckResult<()> {
    if value.is_null() {
        return Err(Violation::null(argument));
    }
    Ok(())
}

/// Require that a string is present and non-empty.
pub fn not_null_or_empty_str(value: Option<&str>, argument: &str) -> PrecheckResult<()> {
    match value {
        None => Err(Violation::null(argument)),
        Some(s) if s.is_empty() => Err(Violation::empty(argument)),
        Some(_) => Ok(()),
    }
}

/// Require that a sequence is present and yields at least one element.
///
/// Only the first iteration step is taken. Passing `&mut iter` for a
/// single-pass iterator consumes its first element.
pub fn not_null_or_empty<I: IntoIterator>(value: Option<I>, argument: &str) -> PrecheckResult<()> {
    let Some(sequence) = value else {
        return Err(Violation::null(argument));
    };
    if sequence.into_iter().next().is_none() {
        return Err(Violation::empty(argument));
    }
    Ok(())
}

/// Require that a sequence is present and none of its elements are null.
///
/// Iteration stops at the first null element, whose zero-based position is
/// reported.
pub fn has_no_nulls<I>(value: Option<I>, argument: &str) -> PrecheckResult<()>
where
    I: IntoIterator,
    I::Item: Nullable,
{
    not_null(&value, argument)?;
    let Some(sequence) = value else {
        return Ok(());
    };
    match sequence.into_iter().position(|item| item.is_null()) {
        Some(position) => Err(Violation::element_null(argument, position)),
        None => Ok(()),
    }
}

/// Require that an identifier is not the nil (all-zero) identifier.
pub fn not_empty(id: &Uuid, argument: &str) -> PrecheckResult<()> {
    if id.is_nil() {
        return Err(Violation::empty(argument));
    }
    Ok(())
}

/// Require that a value is positive (greater than zero).
pub fn is_positive<T: PartialOrd + Default>(value: T, argument: &str) -> PrecheckResult<()> {
    // unordered values (NaN) fail as well
    match value.partial_cmp(&T::default()) {
        Some(Ordering::Greater) => Ok(()),
        _ => Err(Violation::not_positive(argument)),
    }
}

/// Require that `condition` holds. `expression` is its source text.
pub fn meets_condition(condition: bool, expression: &str) -> PrecheckResult<()> {
    if !condition {
        return Err(Violation::condition_not_met(expression));
    }
    Ok(())
}

/// Require that a value is present and is, or derives from, `Expected`.
///
/// `Expected` may be a concrete type or a trait object type such as
/// `dyn Shape`; see [`RuntimeType`] for how derivation is declared.
pub fn is_of_type<Expected, V>(value: Option<&V>, argument: &str) -> PrecheckResult<()>
where
    Expected: ?Sized + 'static,
    V: RuntimeType + ?Sized,
{
    not_null(&value, argument)?;
    let Some(value) = value else {
        return Ok(());
    };
    if !value.conforms_to(TypeId::of::<Expected>()) {
        return Err(Violation::incompatible_type(argument, value.runtime_type_name()));
    }
    Ok(())
}
