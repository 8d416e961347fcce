//! Structured views of violations for error-consuming layers.

use crate::error::{Violation, ViolationKind};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Serializable summary of a [`Violation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViolationSummary {
    pub kind: ViolationKind,
    pub message: String,
    pub argument: Option<String>,
    pub position: Option<usize>,
    pub type_name: Option<String>,
    pub condition: Option<String>,
}

impl From<&Violation> for ViolationSummary {
    fn from(v: &Violation) -> Self {
        Self {
            kind: v.kind(),
            message: v.message().to_string(),
            argument: v.argument().map(str::to_string),
            position: v.position(),
            type_name: v.type_name().map(str::to_string),
            condition: v.condition().map(str::to_string),
        }
    }
}

impl Violation {
    /// Structured summary of this violation.
    pub fn summary(&self) -> ViolationSummary {
        ViolationSummary::from(self)
    }

    /// Summary as JSON, for loggers and API error translators.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.summary()).unwrap_or_else(|_| {
            serde_json::json!({
                "kind": self.kind().as_str(),
                "message": self.message(),
            })
        })
    }
}

/// Facts recovered from a rendered violation message.
///
/// Only the facts the detected kind carries are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFacts {
    pub kind: Option<ViolationKind>,
    pub position: Option<usize>,
    pub type_name: Option<String>,
    pub condition: Option<String>,
    pub parameter: Option<String>,
}

static CONDITION_RE: OnceLock<Regex> = OnceLock::new();
static ELEMENT_NULL_RE: OnceLock<Regex> = OnceLock::new();
static TYPE_RE: OnceLock<Regex> = OnceLock::new();
static PLAIN_RE: OnceLock<Regex> = OnceLock::new();

// Every pattern is anchored on the fixed message text, and captures run to
// the closing `')` at the end so labels and conditions may contain quotes.

fn get_condition_re() -> &'static Regex {
    CONDITION_RE.get_or_init(|| {
        Regex::new(r"(?s)^Arguments condition was not met\. \(Condition '(?P<condition>.*)'\)$")
            .expect("valid regex")
    })
}

fn get_element_null_re() -> &'static Regex {
    ELEMENT_NULL_RE.get_or_init(|| {
        Regex::new(
            r"(?s)^Argument has null elements\. \(Position (?P<position>\d+)\)(?: \(Parameter '(?P<parameter>.*)'\))?$",
        )
        .expect("valid regex")
    })
}

fn get_type_re() -> &'static Regex {
    TYPE_RE.get_or_init(|| {
        Regex::new(
            r"(?s)^Argument is of incompatible type\. \(Type '(?P<type_name>.*?)'\)(?: \(Parameter '(?P<parameter>.*)'\))?$",
        )
        .expect("valid regex")
    })
}

fn get_plain_re() -> &'static Regex {
    PLAIN_RE.get_or_init(|| {
        Regex::new(
            r"(?s)^Argument is (?P<what>null|empty|not positive)\.(?: \(Parameter '(?P<parameter>.*)'\))?$",
        )
        .expect("valid regex")
    })
}

fn group(captures: &Captures<'_>, name: &str) -> Option<String> {
    captures.name(name).map(|m| m.as_str().to_string())
}

/// Parse the structured facts out of a message produced by `Violation`'s `Display`.
///
/// The kind is read from the fixed message text first. Unknown text yields
/// an empty [`MessageFacts`].
pub fn parse_message(message: &str) -> MessageFacts {
    let message = message.trim();

    if let Some(c) = get_condition_re().captures(message) {
        return MessageFacts {
            kind: Some(ViolationKind::ConditionViolation),
            condition: group(&c, "condition"),
            ..MessageFacts::default()
        };
    }

    if let Some(c) = get_element_null_re().captures(message) {
        return MessageFacts {
            kind: Some(ViolationKind::ElementNullViolation),
            position: group(&c, "position").and_then(|p| p.parse().ok()),
            parameter: group(&c, "parameter"),
            ..MessageFacts::default()
        };
    }

    if let Some(c) = get_type_re().captures(message) {
        return MessageFacts {
            kind: Some(ViolationKind::TypeViolation),
            type_name: group(&c, "type_name"),
            parameter: group(&c, "parameter"),
            ..MessageFacts::default()
        };
    }

    if let Some(c) = get_plain_re().captures(message) {
        let kind = match c.name("what").map(|m| m.as_str()) {
            Some("null") => ViolationKind::NullViolation,
            Some("empty") => ViolationKind::EmptyViolation,
            _ => ViolationKind::RangeViolation,
        };
        return MessageFacts {
            kind: Some(kind),
            parameter: group(&c, "parameter"),
            ..MessageFacts::default()
        };
    }

    MessageFacts::default()
}
