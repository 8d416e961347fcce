//! Conditions with caller-supplied errors.

use crate::error::Violation;

/// Argument label reported when [`that_with`] receives no factory.
pub const FACTORY_ARGUMENT: &str = "factory";

/// Require that `condition` holds, otherwise return the error built by `factory`.
///
/// `factory` runs at most once, and only when `condition` is false.
pub fn that<E, F>(condition: bool, factory: F) -> Result<(), E>
where
    F: FnOnce() -> E,
{
    if !condition {
        return Err(factory());
    }
    Ok(())
}

/// Like [`that`], for callers whose factory may be missing.
///
/// A missing factory fails with a null violation labelled
/// [`FACTORY_ARGUMENT`] before the condition is considered.
pub fn that_with<E, F>(condition: bool, factory: Option<F>) -> Result<(), E>
where
    F: FnOnce() -> E,
    E: From<Violation>,
{
    let Some(factory) = factory else {
        return Err(Violation::null(FACTORY_ARGUMENT).into());
    };
    that(condition, factory)
}
