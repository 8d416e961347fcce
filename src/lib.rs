//! precheck - precondition checks for function arguments
//!
//! One-line argument checks that fail with a structured [`Violation`] naming
//! the offending parameter.

mod macros;

pub mod check;
pub mod ensure;
pub mod error;
pub mod report;
pub mod types;

pub use error::{PrecheckResult, UnknownViolationKind, Violation, ViolationKind};
pub use report::{parse_message, MessageFacts, ViolationSummary};
pub use types::{Nullable, RuntimeType};
