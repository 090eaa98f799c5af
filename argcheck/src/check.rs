//! The checks.
//!
//! Every check hands the validated value back on success so it can be used in
//! expression position:
//!
//! ```
//! # fn build(name: Option<String>, port: u16) -> argcheck::Result<(String, u16)> {
//! let name = argcheck::not_empty(argcheck::not_null(name)?)?;
//! let port = argcheck::not_contains(&[0, 22], port)?;
//! # Ok((name, port))
//! # }
//! # assert!(build(Some("db".into()), 5432).is_ok());
//! # assert!(build(Some("  ".into()), 5432).is_err());
//! ```
//!
//! Each check has a `_with` twin taking a caller message that replaces the
//! default sentence. The `actual:` / `expected:` lines are kept either way.
//!
//! The equality and identity checks panic when `expected` is null. That is a
//! mistake at the call site, not a rejected value, and must not look like one.

use crate::error::{CheckKind, Result, ValidationFailure};
use crate::membership::{Collection, Mapping};
use crate::message::{self, Prefix};
use crate::subject::{Identity, OptionalText, Subject};

/// Fails unless `actual == expected`.
#[track_caller]
pub fn equals<E, O>(expected: E, actual: O) -> Result<O>
where
    E: Subject + PartialEq<O>,
    O: Subject,
{
    compare(
        CheckKind::Equals,
        Prefix::Default(message::THE_ACTUAL_IS_NOT_EQUAL_TO_THE_EXPECTED),
        expected,
        actual,
    )
}

#[track_caller]
pub fn equals_with<E, O>(message: &str, expected: E, actual: O) -> Result<O>
where
    E: Subject + PartialEq<O>,
    O: Subject,
{
    compare(CheckKind::Equals, Prefix::Custom(message), expected, actual)
}

/// Fails when `actual == expected`.
#[track_caller]
pub fn not_equals<E, O>(expected: E, actual: O) -> Result<O>
where
    E: Subject + PartialEq<O>,
    O: Subject,
{
    compare(
        CheckKind::NotEquals,
        Prefix::Default(message::THE_ACTUAL_MUST_NOT_EQUAL_THE_EXPECTED),
        expected,
        actual,
    )
}

#[track_caller]
pub fn not_equals_with<E, O>(message: &str, expected: E, actual: O) -> Result<O>
where
    E: Subject + PartialEq<O>,
    O: Subject,
{
    compare(CheckKind::NotEquals, Prefix::Custom(message), expected, actual)
}

/// Fails unless `actual` is the very same allocation as `expected`.
#[track_caller]
pub fn same<O>(expected: O, actual: O) -> Result<O>
where
    O: Subject + Identity,
{
    identify(
        CheckKind::Same,
        Prefix::Default(message::THE_ACTUAL_MUST_BE_THE_SAME_AS_THE_EXPECTED),
        expected,
        actual,
    )
}

#[track_caller]
pub fn same_with<O>(message: &str, expected: O, actual: O) -> Result<O>
where
    O: Subject + Identity,
{
    identify(CheckKind::Same, Prefix::Custom(message), expected, actual)
}

/// Fails when `actual` is the very same allocation as `expected`. Equal but
/// distinct values pass.
#[track_caller]
pub fn not_same<O>(expected: O, actual: O) -> Result<O>
where
    O: Subject + Identity,
{
    identify(
        CheckKind::NotSame,
        Prefix::Default(message::THE_ACTUAL_MUST_NOT_BE_THE_SAME_AS_THE_EXPECTED),
        expected,
        actual,
    )
}

#[track_caller]
pub fn not_same_with<O>(message: &str, expected: O, actual: O) -> Result<O>
where
    O: Subject + Identity,
{
    identify(CheckKind::NotSame, Prefix::Custom(message), expected, actual)
}

/// Unwraps `actual`, failing with `The actual is null.` when it is `None`.
///
/// Only the outer `Option` is inspected: `Some(None)` passes and comes back
/// as `None`. Chain another `not_null` to reject the inner one. Rendering
/// still treats `Some(None)` as null, so it prints as `actual: null` in
/// other checks' messages.
pub fn not_null<O>(actual: Option<O>) -> Result<O> {
    actual.ok_or_else(|| fail(CheckKind::NotNull, message::THE_ACTUAL_IS_NULL))
}

/// Like [`not_null`]; `message` is the whole failure message.
pub fn not_null_with<O>(message: &str, actual: Option<O>) -> Result<O> {
    actual.ok_or_else(|| fail(CheckKind::NotNull, message))
}

/// Fails when `actual` is null or only whitespace. The returned text is not
/// trimmed.
pub fn not_empty<T: OptionalText>(actual: T) -> Result<T::Text> {
    match actual.into_text() {
        None => Err(fail(CheckKind::NotEmpty, message::THE_ACTUAL_IS_NULL)),
        Some(text) if text.as_ref().trim().is_empty() => {
            Err(fail(CheckKind::NotEmpty, message::THE_ACTUAL_IS_EMPTY))
        }
        Some(text) => Ok(text),
    }
}

/// Like [`not_empty`]; `message` is the whole failure message for both the
/// null and the blank case.
pub fn not_empty_with<T: OptionalText>(message: &str, actual: T) -> Result<T::Text> {
    match actual.into_text() {
        Some(text) if !text.as_ref().trim().is_empty() => Ok(text),
        _ => Err(fail(CheckKind::NotEmpty, message)),
    }
}

pub fn is_true(actual: bool) -> Result<bool> {
    truth(CheckKind::IsTrue, message::TRUE_IS_REQUIRED, true, actual)
}

pub fn is_true_with(message: &str, actual: bool) -> Result<bool> {
    truth(CheckKind::IsTrue, message, true, actual)
}

pub fn is_false(actual: bool) -> Result<bool> {
    truth(CheckKind::IsFalse, message::FALSE_IS_REQUIRED, false, actual)
}

pub fn is_false_with(message: &str, actual: bool) -> Result<bool> {
    truth(CheckKind::IsFalse, message, false, actual)
}

/// Fails unless `collection` holds `actual`.
pub fn contains<C>(collection: &C, actual: C::Item) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Subject,
{
    let found = collection.includes(&actual);
    membership(
        CheckKind::Contains,
        Prefix::Default(message::THE_COLLECTION_MUST_CONTAIN),
        found,
        actual,
    )
}

pub fn contains_with<C>(message: &str, collection: &C, actual: C::Item) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Subject,
{
    let found = collection.includes(&actual);
    membership(CheckKind::Contains, Prefix::Custom(message), found, actual)
}

/// Fails when `collection` holds `actual`.
pub fn not_contains<C>(collection: &C, actual: C::Item) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Subject,
{
    let absent = !collection.includes(&actual);
    membership(
        CheckKind::NotContains,
        Prefix::Default(message::THE_COLLECTION_MUST_NOT_CONTAIN),
        absent,
        actual,
    )
}

pub fn not_contains_with<C>(message: &str, collection: &C, actual: C::Item) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Subject,
{
    let absent = !collection.includes(&actual);
    membership(CheckKind::NotContains, Prefix::Custom(message), absent, actual)
}

/// Fails unless `mapping` has `actual` as a key.
pub fn contains_key<M>(mapping: &M, actual: M::Key) -> Result<M::Key>
where
    M: Mapping + ?Sized,
    M::Key: Subject,
{
    let found = mapping.has_key(&actual);
    membership(
        CheckKind::ContainsKey,
        Prefix::Default(message::THE_MAP_MUST_CONTAIN_KEY),
        found,
        actual,
    )
}

pub fn contains_key_with<M>(message: &str, mapping: &M, actual: M::Key) -> Result<M::Key>
where
    M: Mapping + ?Sized,
    M::Key: Subject,
{
    let found = mapping.has_key(&actual);
    membership(CheckKind::ContainsKey, Prefix::Custom(message), found, actual)
}

/// Fails when `mapping` has `actual` as a key.
pub fn not_contains_key<M>(mapping: &M, actual: M::Key) -> Result<M::Key>
where
    M: Mapping + ?Sized,
    M::Key: Subject,
{
    let absent = !mapping.has_key(&actual);
    membership(
        CheckKind::NotContainsKey,
        Prefix::Default(message::THE_MAP_MUST_NOT_CONTAIN_KEY),
        absent,
        actual,
    )
}

pub fn not_contains_key_with<M>(message: &str, mapping: &M, actual: M::Key) -> Result<M::Key>
where
    M: Mapping + ?Sized,
    M::Key: Subject,
{
    let absent = !mapping.has_key(&actual);
    membership(CheckKind::NotContainsKey, Prefix::Custom(message), absent, actual)
}

/// Fails unless some entry of `mapping` has `actual` as its value.
pub fn contains_value<M>(mapping: &M, actual: M::Value) -> Result<M::Value>
where
    M: Mapping + ?Sized,
    M::Value: Subject,
{
    let found = mapping.has_value(&actual);
    membership(
        CheckKind::ContainsValue,
        Prefix::Default(message::THE_MAP_MUST_CONTAIN_VALUE),
        found,
        actual,
    )
}

pub fn contains_value_with<M>(message: &str, mapping: &M, actual: M::Value) -> Result<M::Value>
where
    M: Mapping + ?Sized,
    M::Value: Subject,
{
    let found = mapping.has_value(&actual);
    membership(CheckKind::ContainsValue, Prefix::Custom(message), found, actual)
}

/// Fails when any entry of `mapping` has `actual` as its value.
pub fn not_contains_value<M>(mapping: &M, actual: M::Value) -> Result<M::Value>
where
    M: Mapping + ?Sized,
    M::Value: Subject,
{
    let absent = !mapping.has_value(&actual);
    membership(
        CheckKind::NotContainsValue,
        Prefix::Default(message::THE_MAP_MUST_NOT_CONTAIN_VALUE),
        absent,
        actual,
    )
}

pub fn not_contains_value_with<M>(
    message: &str,
    mapping: &M,
    actual: M::Value,
) -> Result<M::Value>
where
    M: Mapping + ?Sized,
    M::Value: Subject,
{
    let absent = !mapping.has_value(&actual);
    membership(CheckKind::NotContainsValue, Prefix::Custom(message), absent, actual)
}

fn fail(check: CheckKind, message: &str) -> ValidationFailure {
    ValidationFailure::new(check, message.to_owned())
}

/// Panics when `expected` is null; see the module docs.
#[track_caller]
fn require_expected(check: CheckKind, expected: &dyn Subject) {
    if expected.is_null() {
        panic!("expected value MUST NOT be null ({check})");
    }
}

#[track_caller]
fn compare<E, O>(check: CheckKind, prefix: Prefix<'_>, expected: E, actual: O) -> Result<O>
where
    E: Subject + PartialEq<O>,
    O: Subject,
{
    require_expected(check, &expected);
    let wanted = check == CheckKind::Equals;
    if (expected == actual) == wanted {
        return Ok(actual);
    }
    Err(ValidationFailure::new(
        check,
        message::with_actual_and_expected(prefix, &actual, &expected),
    ))
}

#[track_caller]
fn identify<O>(check: CheckKind, prefix: Prefix<'_>, expected: O, actual: O) -> Result<O>
where
    O: Subject + Identity,
{
    require_expected(check, &expected);
    let wanted = check == CheckKind::Same;
    if expected.same_as(&actual) == wanted {
        return Ok(actual);
    }
    Err(ValidationFailure::new(
        check,
        message::with_actual_and_expected(prefix, &actual, &expected),
    ))
}

fn truth(check: CheckKind, message: &str, wanted: bool, actual: bool) -> Result<bool> {
    if actual == wanted {
        return Ok(actual);
    }
    Err(fail(check, message))
}

fn membership<O: Subject>(
    check: CheckKind,
    prefix: Prefix<'_>,
    holds: bool,
    actual: O,
) -> Result<O> {
    if holds {
        return Ok(actual);
    }
    Err(ValidationFailure::new(check, message::with_actual(prefix, &actual)))
}
