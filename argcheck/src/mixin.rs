//! The checks as methods.
//!
//! `impl CheckMixin for MyType {}` lets `MyType` write `self.not_null(x)?`
//! instead of `argcheck::not_null(x)?`. Every method forwards to
//! [`crate::check`] unchanged.

use crate::check;
use crate::error::Result;
use crate::membership::{Collection, Mapping};
use crate::subject::{Identity, OptionalText, Subject};

pub trait CheckMixin {
    #[track_caller]
    fn equals<E, O>(&self, expected: E, actual: O) -> Result<O>
    where
        E: Subject + PartialEq<O>,
        O: Subject,
    {
        check::equals(expected, actual)
    }

    #[track_caller]
    fn equals_with<E, O>(&self, message: &str, expected: E, actual: O) -> Result<O>
    where
        E: Subject + PartialEq<O>,
        O: Subject,
    {
        check::equals_with(message, expected, actual)
    }

    #[track_caller]
    fn not_equals<E, O>(&self, expected: E, actual: O) -> Result<O>
    where
        E: Subject + PartialEq<O>,
        O: Subject,
    {
        check::not_equals(expected, actual)
    }

    #[track_caller]
    fn not_equals_with<E, O>(&self, message: &str, expected: E, actual: O) -> Result<O>
    where
        E: Subject + PartialEq<O>,
        O: Subject,
    {
        check::not_equals_with(message, expected, actual)
    }

    #[track_caller]
    fn same<O: Subject + Identity>(&self, expected: O, actual: O) -> Result<O> {
        check::same(expected, actual)
    }

    #[track_caller]
    fn same_with<O: Subject + Identity>(&self, message: &str, expected: O, actual: O) -> Result<O> {
        check::same_with(message, expected, actual)
    }

    #[track_caller]
    fn not_same<O: Subject + Identity>(&self, expected: O, actual: O) -> Result<O> {
        check::not_same(expected, actual)
    }

    #[track_caller]
    fn not_same_with<O: Subject + Identity>(
        &self,
        message: &str,
        expected: O,
        actual: O,
    ) -> Result<O> {
        check::not_same_with(message, expected, actual)
    }

    fn not_null<O>(&self, actual: Option<O>) -> Result<O> {
        check::not_null(actual)
    }

    fn not_null_with<O>(&self, message: &str, actual: Option<O>) -> Result<O> {
        check::not_null_with(message, actual)
    }

    fn not_empty<T: OptionalText>(&self, actual: T) -> Result<T::Text> {
        check::not_empty(actual)
    }

    fn not_empty_with<T: OptionalText>(&self, message: &str, actual: T) -> Result<T::Text> {
        check::not_empty_with(message, actual)
    }

    fn is_true(&self, actual: bool) -> Result<bool> {
        check::is_true(actual)
    }

    fn is_true_with(&self, message: &str, actual: bool) -> Result<bool> {
        check::is_true_with(message, actual)
    }

    fn is_false(&self, actual: bool) -> Result<bool> {
        check::is_false(actual)
    }

    fn is_false_with(&self, message: &str, actual: bool) -> Result<bool> {
        check::is_false_with(message, actual)
    }

    fn contains<C>(&self, collection: &C, actual: C::Item) -> Result<C::Item>
    where
        C: Collection + ?Sized,
        C::Item: Subject,
    {
        check::contains(collection, actual)
    }

    fn contains_with<C>(&self, message: &str, collection: &C, actual: C::Item) -> Result<C::Item>
    where
        C: Collection + ?Sized,
        C::Item: Subject,
    {
        check::contains_with(message, collection, actual)
    }

    fn not_contains<C>(&self, collection: &C, actual: C::Item) -> Result<C::Item>
    where
        C: Collection + ?Sized,
        C::Item: Subject,
    {
        check::not_contains(collection, actual)
    }

    fn not_contains_with<C>(
        &self,
        message: &str,
        collection: &C,
        actual: C::Item,
    ) -> Result<C::Item>
    where
        C: Collection + ?Sized,
        C::Item: Subject,
    {
        check::not_contains_with(message, collection, actual)
    }

    fn contains_key<M>(&self, mapping: &M, actual: M::Key) -> Result<M::Key>
    where
        M: Mapping + ?Sized,
        M::Key: Subject,
    {
        check::contains_key(mapping, actual)
    }

    fn contains_key_with<M>(&self, message: &str, mapping: &M, actual: M::Key) -> Result<M::Key>
    where
        M: Mapping + ?Sized,
        M::Key: Subject,
    {
        check::contains_key_with(message, mapping, actual)
    }

    fn not_contains_key<M>(&self, mapping: &M, actual: M::Key) -> Result<M::Key>
    where
        M: Mapping + ?Sized,
        M::Key: Subject,
    {
        check::not_contains_key(mapping, actual)
    }

    fn not_contains_key_with<M>(
        &self,
        message: &str,
        mapping: &M,
        actual: M::Key,
    ) -> Result<M::Key>
    where
        M: Mapping + ?Sized,
        M::Key: Subject,
    {
        check::not_contains_key_with(message, mapping, actual)
    }

    fn contains_value<M>(&self, mapping: &M, actual: M::Value) -> Result<M::Value>
    where
        M: Mapping + ?Sized,
        M::Value: Subject,
    {
        check::contains_value(mapping, actual)
    }

    fn contains_value_with<M>(
        &self,
        message: &str,
        mapping: &M,
        actual: M::Value,
    ) -> Result<M::Value>
    where
        M: Mapping + ?Sized,
        M::Value: Subject,
    {
        check::contains_value_with(message, mapping, actual)
    }

    fn not_contains_value<M>(&self, mapping: &M, actual: M::Value) -> Result<M::Value>
    where
        M: Mapping + ?Sized,
        M::Value: Subject,
    {
        check::not_contains_value(mapping, actual)
    }

    fn not_contains_value_with<M>(
        &self,
        message: &str,
        mapping: &M,
        actual: M::Value,
    ) -> Result<M::Value>
    where
        M: Mapping + ?Sized,
        M::Value: Subject,
    {
        check::not_contains_value_with(message, mapping, actual)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Registry {
        names: HashMap<&'static str, u32>,
    }

    impl CheckMixin for Registry {}

    impl Registry {
        fn lookup(&self, name: &'static str) -> Result<&'static str> {
            let name = self.not_empty(name)?;
            self.contains_key_with("unknown service", &self.names, name)
        }
    }

    #[test]
    fn methods_forward_to_free_functions() {
        let registry = Registry {
            names: HashMap::from([("db", 5432)]),
        };
        assert_eq!(registry.lookup("db"), Ok("db"));
        assert_eq!(
            registry.lookup("cache").unwrap_err(),
            check::contains_key_with("unknown service", &registry.names, "cache").unwrap_err()
        );
        assert_eq!(registry.lookup(" ").unwrap_err(), check::not_empty(" ").unwrap_err());
    }
}
