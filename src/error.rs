//! Error types for precheck.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of precondition that was violated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Required value is absent.
    NullViolation,
    /// Value is present but has no content.
    EmptyViolation,
    /// Container is present but holds an absent element.
    ElementNullViolation,
    /// Numeric value is outside the required range.
    RangeViolation,
    /// Runtime type is incompatible with the expected type.
    TypeViolation,
    /// Arbitrary boolean condition was false.
    ConditionViolation,
}

impl ViolationKind {
    /// Parse a violation kind from string, returning `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "null" | "null_violation" | "nullviolation" => Some(Self::NullViolation),
            "empty" | "empty_violation" | "emptyviolation" => Some(Self::EmptyViolation),
            "element_null" | "element_null_violation" | "elementnullviolation" => {
                Some(Self::ElementNullViolation)
            }
            "range" | "range_violation" | "rangeviolation" => Some(Self::RangeViolation),
            "type" | "type_violation" | "typeviolation" => Some(Self::TypeViolation),
            "condition" | "condition_violation" | "conditionviolation" => {
                Some(Self::ConditionViolation)
            }
            _ => None,
        }
    }

    /// Convert violation kind to canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NullViolation => "null_violation",
            Self::EmptyViolation => "empty_violation",
            Self::ElementNullViolation => "element_null_violation",
            Self::RangeViolation => "range_violation",
            Self::TypeViolation => "type_violation",
            Self::ConditionViolation => "condition_violation",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViolationKind {
    type Err = UnknownViolationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownViolationKind { value: s.to_string() })
    }
}

/// Returned when a string does not name a known [`ViolationKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown violation kind: '{value}'")]
pub struct UnknownViolationKind {
    pub value: String,
}

/// A failed precondition check.
///
/// The message is fixed per kind and embeds the structured facts
/// (position, type name, condition text). The argument identity is kept
/// apart so consumers can filter on it without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}{}", parameter_suffix(.argument))]
pub struct Violation {
    kind: ViolationKind,
    message: String,
    argument: Option<String>,
    position: Option<usize>,
    type_name: Option<String>,
    condition: Option<String>,
}

fn parameter_suffix(argument: &Option<String>) -> String {
    match argument {
        Some(name) => format!(" (Parameter '{}')", name),
        None => String::new(),
    }
}

impl Violation {
    fn new(kind: ViolationKind, message: String, argument: Option<&str>) -> Self {
        let violation = Self {
            kind,
            message,
            argument: argument.map(str::to_string),
            position: None,
            type_name: None,
            condition: None,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = %violation.kind,
            argument = ?violation.argument,
            "argument check failed"
        );
        violation
    }

    /// Required value `argument` is absent.
    pub fn null(argument: &str) -> Self {
        Self::new(ViolationKind::NullViolation, "Argument is null.".to_string(), Some(argument))
    }

    /// Value `argument` is present but has no content.
    pub fn empty(argument: &str) -> Self {
        Self::new(ViolationKind::EmptyViolation, "Argument is empty.".to_string(), Some(argument))
    }

    /// Container `argument` holds an absent element at `position`.
    pub fn element_null(argument: &str, position: usize) -> Self {
        let mut violation = Self::new(
            ViolationKind::ElementNullViolation,
            format!("Argument has null elements. (Position {})", position),
            Some(argument),
        );
        violation.position = Some(position);
        violation
    }

    /// Numeric value `argument` is zero or negative.
    pub fn not_positive(argument: &str) -> Self {
        Self::new(
            ViolationKind::RangeViolation,
            "Argument is not positive.".to_string(),
            Some(argument),
        )
    }

    /// Value `argument` has runtime type `type_name`, which is not the expected one.
    pub fn incompatible_type(argument: &str, type_name: &str) -> Self {
        let mut violation = Self::new(
            ViolationKind::TypeViolation,
            format!("Argument is of incompatible type. (Type '{}')", type_name),
            Some(argument),
        );
        violation.type_name = Some(type_name.to_string());
        violation
    }

    /// Condition with source text `condition` evaluated to false.
    ///
    /// Carries no argument identity.
    pub fn condition_not_met(condition: &str) -> Self {
        let mut violation = Self::new(
            ViolationKind::ConditionViolation,
            format!("Arguments condition was not met. (Condition '{}')", condition),
            None,
        );
        violation.condition = Some(condition.to_string());
        violation
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Message without the parameter suffix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Argument identity, absent for condition violations.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Zero-based index of the first null element.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Runtime type name of an incompatible value.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Source text of an unmet condition.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }
}

/// Result type alias for precondition checks.
pub type PrecheckResult<T> = Result<T, Violation>;
