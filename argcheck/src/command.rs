//! Single checks over shell arguments, as run by the `argcheck` binary.
//!
//! Every value arrives as text. An omitted `actual` is null, so
//! `argcheck not-null` fails and `argcheck equals a` reports `actual: null`.
//! Identity checks are not offered: process arguments have no identity.

use std::collections::BTreeMap;
use std::str::FromStr;

use clap::{ArgAction, Subcommand};

use crate::check;
use crate::error::{CheckKind, Result};

/// A `key=value` mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl FromStr for Entry {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
        Ok(Entry {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CheckRequest {
    /// Fail unless ACTUAL equals EXPECTED.
    Equals {
        expected: String,
        actual: Option<String>,
    },
    /// Fail if ACTUAL equals EXPECTED.
    NotEquals {
        expected: String,
        actual: Option<String>,
    },
    /// Fail if ACTUAL is omitted.
    NotNull { actual: Option<String> },
    /// Fail if ACTUAL is omitted or blank.
    NotEmpty { actual: Option<String> },
    /// Fail unless ACTUAL is `true`.
    IsTrue {
        #[arg(action = ArgAction::Set)]
        actual: bool,
    },
    /// Fail unless ACTUAL is `false`.
    IsFalse {
        #[arg(action = ArgAction::Set)]
        actual: bool,
    },
    /// Fail unless ACTUAL is one of ITEMS.
    Contains { actual: String, items: Vec<String> },
    /// Fail if ACTUAL is one of ITEMS.
    NotContains { actual: String, items: Vec<String> },
    /// Fail unless ACTUAL is a key of ENTRIES (`key=value`).
    ContainsKey { actual: String, entries: Vec<Entry> },
    /// Fail if ACTUAL is a key of ENTRIES (`key=value`).
    NotContainsKey { actual: String, entries: Vec<Entry> },
    /// Fail unless ACTUAL is a value of ENTRIES (`key=value`).
    ContainsValue { actual: String, entries: Vec<Entry> },
    /// Fail if ACTUAL is a value of ENTRIES (`key=value`).
    NotContainsValue { actual: String, entries: Vec<Entry> },
}

/// Calls `check::$plain`, or `check::$with` when a message is given.
macro_rules! dispatch {
    ($message:expr, $plain:ident, $with:ident, $($arg:expr),+ $(,)?) => {
        match $message {
            Some(message) => check::$with(message, $($arg),+),
            None => check::$plain($($arg),+),
        }
    };
}

impl CheckRequest {
    pub fn kind(&self) -> CheckKind {
        match self {
            CheckRequest::Equals { .. } => CheckKind::Equals,
            CheckRequest::NotEquals { .. } => CheckKind::NotEquals,
            CheckRequest::NotNull { .. } => CheckKind::NotNull,
            CheckRequest::NotEmpty { .. } => CheckKind::NotEmpty,
            CheckRequest::IsTrue { .. } => CheckKind::IsTrue,
            CheckRequest::IsFalse { .. } => CheckKind::IsFalse,
            CheckRequest::Contains { .. } => CheckKind::Contains,
            CheckRequest::NotContains { .. } => CheckKind::NotContains,
            CheckRequest::ContainsKey { .. } => CheckKind::ContainsKey,
            CheckRequest::NotContainsKey { .. } => CheckKind::NotContainsKey,
            CheckRequest::ContainsValue { .. } => CheckKind::ContainsValue,
            CheckRequest::NotContainsValue { .. } => CheckKind::NotContainsValue,
        }
    }

    /// Run the check; on success returns the text to print (the actual
    /// value, empty for a null one).
    pub fn run(self, message: Option<&str>) -> Result<String> {
        match self {
            CheckRequest::Equals { expected, actual } => {
                dispatch!(message, equals, equals_with, Some(expected), actual)
                    .map(Option::unwrap_or_default)
            }
            CheckRequest::NotEquals { expected, actual } => {
                dispatch!(message, not_equals, not_equals_with, Some(expected), actual)
                    .map(Option::unwrap_or_default)
            }
            CheckRequest::NotNull { actual } => {
                dispatch!(message, not_null, not_null_with, actual)
            }
            CheckRequest::NotEmpty { actual } => {
                dispatch!(message, not_empty, not_empty_with, actual)
            }
            CheckRequest::IsTrue { actual } => {
                dispatch!(message, is_true, is_true_with, actual).map(|value| value.to_string())
            }
            CheckRequest::IsFalse { actual } => {
                dispatch!(message, is_false, is_false_with, actual).map(|value| value.to_string())
            }
            CheckRequest::Contains { actual, items } => {
                dispatch!(message, contains, contains_with, &items, actual)
            }
            CheckRequest::NotContains { actual, items } => {
                dispatch!(message, not_contains, not_contains_with, &items, actual)
            }
            CheckRequest::ContainsKey { actual, entries } => {
                let mapping = to_mapping(entries);
                dispatch!(message, contains_key, contains_key_with, &mapping, actual)
            }
            CheckRequest::NotContainsKey { actual, entries } => {
                let mapping = to_mapping(entries);
                dispatch!(message, not_contains_key, not_contains_key_with, &mapping, actual)
            }
            CheckRequest::ContainsValue { actual, entries } => {
                let mapping = to_mapping(entries);
                dispatch!(message, contains_value, contains_value_with, &mapping, actual)
            }
            CheckRequest::NotContainsValue { actual, entries } => {
                let mapping = to_mapping(entries);
                dispatch!(
                    message,
                    not_contains_value,
                    not_contains_value_with,
                    &mapping,
                    actual
                )
            }
        }
    }
}

/// Later entries win on duplicate keys.
fn to_mapping(entries: Vec<Entry>) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|entry| (entry.key, entry.value))
        .collect()
}
