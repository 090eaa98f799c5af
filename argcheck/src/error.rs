//! Validation failure type shared by every check.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a check: the validated value, or the failure that rejected it.
pub type Result<T, E = ValidationFailure> = std::result::Result<T, E>;

/// Identifies which check produced a failure.
///
/// Serialized in kebab-case (`not-empty`, `contains-key`, ...) so the same
/// names work as config keys, CLI subcommands and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Equals,
    NotEquals,
    Same,
    NotSame,
    NotNull,
    NotEmpty,
    IsTrue,
    IsFalse,
    Contains,
    NotContains,
    ContainsKey,
    NotContainsKey,
    ContainsValue,
    NotContainsValue,
}

impl CheckKind {
    pub const ALL: [CheckKind; 14] = [
        CheckKind::Equals,
        CheckKind::NotEquals,
        CheckKind::Same,
        CheckKind::NotSame,
        CheckKind::NotNull,
        CheckKind::NotEmpty,
        CheckKind::IsTrue,
        CheckKind::IsFalse,
        CheckKind::Contains,
        CheckKind::NotContains,
        CheckKind::ContainsKey,
        CheckKind::NotContainsKey,
        CheckKind::ContainsValue,
        CheckKind::NotContainsValue,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Equals => "equals",
            CheckKind::NotEquals => "not-equals",
            CheckKind::Same => "same",
            CheckKind::NotSame => "not-same",
            CheckKind::NotNull => "not-null",
            CheckKind::NotEmpty => "not-empty",
            CheckKind::IsTrue => "is-true",
            CheckKind::IsFalse => "is-false",
            CheckKind::Contains => "contains",
            CheckKind::NotContains => "not-contains",
            CheckKind::ContainsKey => "contains-key",
            CheckKind::NotContainsKey => "not-contains-key",
            CheckKind::ContainsValue => "contains-value",
            CheckKind::NotContainsValue => "not-contains-value",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed check.
///
/// `Display` yields the assembled message exactly, so tooling that parses the
/// `actual:` / `expected:` lines can work from `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    check: CheckKind,
    message: String,
}

impl ValidationFailure {
    pub(crate) fn new(check: CheckKind, message: String) -> Self {
        Self { check, message }
    }

    /// The check that rejected the value.
    pub fn check(&self) -> CheckKind {
        self.check
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Keyed {
        kind: CheckKind,
    }

    #[test]
    fn names_match_serde_representation() {
        for kind in CheckKind::ALL {
            let doc = format!("kind = \"{}\"", kind.name());
            let parsed: Keyed = toml::from_str(&doc).expect("parse kind");
            assert_eq!(parsed.kind, kind);
        }
    }

    #[test]
    fn display_is_the_bare_message() {
        let failure = ValidationFailure::new(CheckKind::NotNull, "The actual is null.".to_string());
        assert_eq!(failure.to_string(), "The actual is null.");
        assert_eq!(failure.check(), CheckKind::NotNull);
        assert_eq!(failure.into_message(), "The actual is null.");
    }
}
