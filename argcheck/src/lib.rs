//! Precondition checks for API boundaries.
//!
//! Each check either hands the validated value back or returns a
//! [`ValidationFailure`] whose message follows one greppable layout:
//!
//! ```text
//! The actual is NOT equal to the expected;
//! 	actual: '8081'
//! 	expected: '8080'
//! ```
//!
//! The checks are available two ways with identical behavior:
//!
//! - **free functions**: [`check`], re-exported at the crate root
//!   (`argcheck::not_null(x)?`);
//! - **[`CheckMixin`]**: the same checks as default methods, for types that
//!   prefer `self.not_null(x)?`.
//!
//! The rest of the crate serves the `argcheck` binary: [`boundary`] logs and
//! converts failures, [`config`] loads message overrides, [`command`] maps
//! shell arguments onto checks.

pub mod boundary;
pub mod check;
pub mod command;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod membership;
pub mod message;
pub mod mixin;
pub mod subject;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use check::{
    contains, contains_key, contains_key_with, contains_value, contains_value_with, contains_with,
    equals, equals_with, is_false, is_false_with, is_true, is_true_with, not_contains,
    not_contains_key, not_contains_key_with, not_contains_value, not_contains_value_with,
    not_contains_with, not_empty, not_empty_with, not_equals, not_equals_with, not_null,
    not_null_with, not_same, not_same_with, same, same_with,
};
pub use error::{CheckKind, Result, ValidationFailure};
pub use membership::{Collection, Mapping};
pub use mixin::CheckMixin;
pub use subject::{Identity, OptionalText, Subject};
