// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::any::Any;
use std::panic::panic_any;

use crate::{NotPresent, OptionalFloat, OptionalInt, OptionalString, ZeroValue};

/// A value that is either present or empty.
///
/// An `Optional` is immutable once built: filters and maps hand back new
/// instances and leave the receiver alone. [`scan`](Optional::scan) is the
/// one exception. The default value is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T> Optional<T> {
    /// Creates an empty optional
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Creates an optional holding `value`.
    ///
    /// Zero values (`0`, `""`, ...) are present like any other.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an optional from a nullable value; `None` is empty.
    #[must_use]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// Returns true if no value is held
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns true if a value is held
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the held value, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the held value or [`NotPresent`].
    pub const fn try_get(&self) -> Result<&T, NotPresent> {
        match &self.value {
            Some(value) => Ok(value),
            None => Err(NotPresent),
        }
    }

    /// Unwraps the optional into a plain [`Option`]
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// Borrows the held value as an `Optional<&T>`
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`NOT_PRESENT`](crate::NOT_PRESENT) as the payload when
    /// the optional is empty.
    #[track_caller]
    pub fn must_get(self) -> T {
        match self.value {
            Some(value) => value,
            None => panic_any(NotPresent),
        }
    }

    /// Returns the held value, or `default` if empty
    pub fn or_else(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the held value, or the result of `supplier` if empty.
    /// `supplier` is not called when a value is held.
    pub fn or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.value.unwrap_or_else(supplier)
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with the value produced by `fault` as the payload when empty.
    /// The payload is not wrapped, so `catch_unwind` callers can downcast it
    /// back to `E`.
    #[track_caller]
    pub fn or_else_panic<E, F>(self, fault: F) -> T
    where
        E: Any + Send + 'static,
        F: FnOnce() -> E,
    {
        match self.value {
            Some(value) => value,
            None => panic_any(fault()),
        }
    }

    /// Calls `consumer` with the held value, if any
    pub fn if_present<F: FnOnce(&T)>(&self, consumer: F) {
        if let Some(value) = &self.value {
            consumer(value);
        }
    }

    /// Calls `action` if empty
    pub fn if_empty<F: FnOnce()>(&self, action: F) {
        if self.value.is_none() {
            action();
        }
    }

    /// Calls `consumer` with the held value, or `action` if empty.
    /// Exactly one of the two runs.
    pub fn if_present_or_else<F, G>(&self, consumer: F, action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(value) => consumer(value),
            None => action(),
        }
    }

    /// Returns `self` if a value is held and `predicate` accepts it,
    /// otherwise an empty optional.
    #[must_use]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        let keep = match &self.value {
            Some(value) => predicate(value),
            None => false,
        };
        if keep { self } else { Self::empty() }
    }

    /// Returns `self` if a value is held and `predicate` rejects it,
    /// otherwise an empty optional.
    #[must_use]
    pub fn filter_not<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.filter(|value| !predicate(value))
    }

    /// Applies `f` to the held value. An empty optional stays empty and `f`
    /// is not called. A zero result is present; see [`map_with`](Self::map_with).
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        Optional {
            value: self.value.map(f),
        }
    }

    /// Like [`map`](Self::map), with `zero` deciding whether a result equal
    /// to `U::default()` is kept.
    pub fn map_with<U, F>(self, f: F, zero: ZeroValue) -> Optional<U>
    where
        F: FnOnce(T) -> U,
        U: Default + PartialEq,
    {
        self.map(f).drop_zero(zero)
    }

    /// Like [`map`](Self::map) for a mapper that may produce nothing: a
    /// `None` result yields an empty optional.
    pub fn map_nullable<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Optional<U> {
        Optional {
            value: self.value.and_then(f),
        }
    }

    /// Applies `f`, which already returns an optional, to the held value.
    /// The result of `f` is returned as is.
    pub fn flat_map<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self.value {
            Some(value) => f(value),
            None => Optional::empty(),
        }
    }

    /// Maps into a generic optional of any payload; same as [`map`](Self::map)
    pub fn map_to<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        self.map(f)
    }

    /// Maps into a generic optional, with `zero` deciding whether a zero
    /// result is kept; same as [`map_with`](Self::map_with)
    pub fn map_to_with<U, F>(self, f: F, zero: ZeroValue) -> Optional<U>
    where
        F: FnOnce(T) -> U,
        U: Default + PartialEq,
    {
        self.map_with(f, zero)
    }

    /// Maps into an [`OptionalInt`]
    pub fn map_to_int<F: FnOnce(T) -> i64>(self, f: F) -> OptionalInt {
        self.map(f)
    }

    /// Maps into an [`OptionalFloat`]
    pub fn map_to_float<F: FnOnce(T) -> f64>(self, f: F) -> OptionalFloat {
        self.map(f)
    }

    /// Maps into an [`OptionalString`]
    pub fn map_to_string<F: FnOnce(T) -> String>(self, f: F) -> OptionalString {
        self.map(f)
    }

    /// Flat maps into a generic optional; same as [`flat_map`](Self::flat_map)
    pub fn flat_map_to<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        self.flat_map(f)
    }

    /// Flat maps into an [`OptionalInt`]
    pub fn flat_map_to_int<F: FnOnce(T) -> OptionalInt>(self, f: F) -> OptionalInt {
        self.flat_map(f)
    }

    /// Flat maps into an [`OptionalFloat`]
    pub fn flat_map_to_float<F: FnOnce(T) -> OptionalFloat>(self, f: F) -> OptionalFloat {
        self.flat_map(f)
    }

    /// Flat maps into an [`OptionalString`]
    pub fn flat_map_to_string<F: FnOnce(T) -> OptionalString>(self, f: F) -> OptionalString {
        self.flat_map(f)
    }

    pub(crate) fn set(&mut self, value: Option<T>) {
        self.value = value;
    }
}

impl<T: PartialEq> Optional<T> {
    /// True if both are empty, or both hold equal values; same as `==`
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Complement of [`equal`](Self::equal)
    #[must_use]
    pub fn not_equal(&self, other: &Self) -> bool {
        self != other
    }

    /// True if a value is held and it equals `value`.
    /// An empty optional equals nothing.
    #[must_use]
    pub fn equal_value(&self, value: &T) -> bool {
        self.value.as_ref() == Some(value)
    }

    /// Complement of [`equal_value`](Self::equal_value)
    #[must_use]
    pub fn not_equal_value(&self, value: &T) -> bool {
        !self.equal_value(value)
    }
}

impl<T: Default + PartialEq> Optional<T> {
    fn drop_zero(self, zero: ZeroValue) -> Self {
        match zero {
            ZeroValue::Present => self,
            ZeroValue::Empty => self.filter_not(|value| *value == T::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::catch_unwind;

    use super::*;
    use crate::{NOT_PRESENT, of_float, of_int, of_string};
    use test_case::test_case;

    #[test]
    fn empty_and_default_agree() {
        let explicit = Optional::<i32>::empty();
        let zeroed = Optional::<i32>::default();
        assert_eq!(explicit, zeroed);
        assert!(zeroed.is_empty());
        assert!(!zeroed.is_present());
        assert_eq!(zeroed.get(), None);
        assert_eq!(zeroed.try_get(), Err(NOT_PRESENT));
    }

    #[test_case(0 ; "zero")]
    #[test_case(1 ; "one")]
    #[test_case(-7 ; "negative")]
    fn of_is_always_present(value: i32) {
        let opt = Optional::of(value);
        assert!(opt.is_present());
        assert!(!opt.is_empty());
        assert_eq!(opt.get(), Some(&value));
        assert_eq!(opt.try_get(), Ok(&value));
        assert_eq!(opt.must_get(), value);
    }

    #[test]
    fn of_nullable_treats_none_as_empty() {
        assert!(Optional::<&str>::of_nullable(None).is_empty());
        assert!(Optional::of_nullable(Some("")).is_present());
        assert!(Optional::<Box<u8>>::from(None).is_empty());
        let plain: Option<i32> = Optional::of(3).into();
        assert_eq!(plain, Some(3));
    }

    #[test]
    fn must_get_panics_with_not_present() {
        let err = catch_unwind(|| Optional::<i32>::empty().must_get())
            .expect_err("must_get on empty should panic");
        assert_eq!(err.downcast_ref::<NotPresent>(), Some(&NOT_PRESENT));
    }

    #[test]
    fn conditional_execution() {
        let seen = Cell::new(None);
        let empty_ran = Cell::new(false);

        let present = Optional::of(0);
        present.if_present(|v| seen.set(Some(*v)));
        present.if_empty(|| empty_ran.set(true));
        assert_eq!(seen.get(), Some(0));
        assert!(!empty_ran.get());

        seen.set(None);
        let empty = Optional::<i32>::empty();
        empty.if_present(|v| seen.set(Some(*v)));
        empty.if_empty(|| empty_ran.set(true));
        assert_eq!(seen.get(), None);
        assert!(empty_ran.get());
    }

    #[test]
    fn if_present_or_else_runs_one_branch() {
        let result = Cell::new(1);
        Optional::of(0).if_present_or_else(|v| result.set(v + 2), || result.set(3));
        assert_eq!(result.get(), 2);

        Optional::<i32>::empty().if_present_or_else(|v| result.set(v + 2), || result.set(3));
        assert_eq!(result.get(), 3);
    }

    #[test]
    fn equality() {
        assert!(Optional::<i32>::empty().equal(&Optional::empty()));
        assert!(Optional::of("a").equal(&Optional::of("a")));
        assert!(Optional::of(1).not_equal(&Optional::of(2)));
        assert!(Optional::of(1).not_equal(&Optional::empty()));
        assert!(Optional::<i32>::empty().not_equal(&Optional::of(0)));
        assert_eq!(Optional::of(vec![1, 2]), Optional::of(vec![1, 2]));
    }

    #[test]
    fn equal_value() {
        assert!(Optional::of(0).equal_value(&0));
        assert!(Optional::of(0).not_equal_value(&1));
        assert!(!Optional::<i32>::empty().equal_value(&0));
        assert!(Optional::<i32>::empty().not_equal_value(&0));
        assert!(!Optional::<Option<i32>>::empty().equal_value(&None));
    }

    #[test]
    fn filter() {
        let opt = Optional::of(1);
        assert_eq!(opt.filter(|_| true), opt);
        assert!(opt.filter(|_| false).is_empty());
        assert!(Optional::<i32>::empty().filter(|_| true).is_empty());
        assert!(of_int(3).filter(|x| *x > 5).is_empty());
    }

    #[test]
    fn filter_not() {
        let opt = of_float(1.5);
        assert_eq!(opt.filter_not(|_| false), opt);
        assert!(opt.filter_not(|_| true).is_empty());
        assert!(Optional::<f64>::empty().filter_not(|_| false).is_empty());
    }

    #[test]
    fn map() {
        let called = Cell::new(false);
        let empty = Optional::<i32>::empty().map(|x| {
            called.set(true);
            x + 1
        });
        assert!(empty.is_empty());
        assert!(!called.get());

        assert_eq!(Optional::of(5).map(|x| x + 1).must_get(), 6);
        assert_eq!(Optional::of(1).map(|x| x.to_string()).must_get(), "1");
    }

    #[test_case(ZeroValue::Present, true ; "zero kept")]
    #[test_case(ZeroValue::Empty, false ; "zero dropped")]
    fn map_with_zero(zero: ZeroValue, present: bool) {
        assert_eq!(Optional::of(1).map_with(|_| 0, zero).is_present(), present);
        assert_eq!(
            Optional::of(1).map_to_with(|_| String::new(), zero).is_present(),
            present
        );
        // non-zero results are unaffected by the flag
        assert!(Optional::of(1).map_with(|x| x + 1, zero).is_present());
    }

    #[test]
    fn map_zero_is_present_by_default() {
        assert!(Optional::of(1).map(|_| 0).is_present());
        assert!(of_int(1).map_to(|_| 0u8).is_present());
        assert!(of_int(1).map_to_string(|_| String::new()).is_present());
    }

    #[test]
    fn map_nullable() {
        assert!(Optional::of(1).map_nullable(|_| None::<i32>).is_empty());
        assert_eq!(Optional::of(1).map_nullable(|x| Some(x * 10)).must_get(), 10);
        assert!(Optional::<i32>::empty().map_nullable(Some).is_empty());
    }

    #[test]
    fn flat_map_returns_result_verbatim() {
        let f = |x: i32| Optional::of(x + 1);
        assert_eq!(Optional::of(1).flat_map(f), f(1));
        assert!(Optional::of(1).flat_map(|_| Optional::<i32>::empty()).is_empty());
        // no zero check on the way through
        assert!(Optional::of(1).flat_map(|_| Optional::of(0)).is_present());

        let called = Cell::new(false);
        let result = Optional::<i32>::empty().flat_map(|x| {
            called.set(true);
            Optional::of(x)
        });
        assert!(result.is_empty());
        assert!(!called.get());
    }

    #[test]
    fn cross_type_maps() {
        assert_eq!(of_int(2).map_to_float(|x| x as f64 / 4.0), of_float(0.5));
        assert_eq!(of_int(2).map_to_string(|x| x.to_string()), of_string("2"));
        assert_eq!(of_string("12").map_to_int(|s| s.len() as i64), of_int(2));
        assert!(of_float(1.0).map_to(|x| x > 0.0).must_get());

        assert_eq!(of_float(2.5).flat_map_to_int(|x| of_int(x as i64)), of_int(2));
        assert_eq!(
            of_string("1.5").flat_map_to_float(|s| s.parse().map(of_float).unwrap_or_default()),
            of_float(1.5)
        );
        assert!(
            of_string("x")
                .flat_map_to_float(|s| s.parse().map(of_float).unwrap_or_default())
                .is_empty()
        );
        assert_eq!(of_int(3).flat_map_to_string(|x| of_string(x.to_string())), of_string("3"));
        assert_eq!(of_int(3).flat_map_to(|x| Optional::of([x; 2])).must_get(), [3, 3]);
        assert!(OptionalInt::empty().map_to_float(|x| x as f64).is_empty());
    }

    #[test]
    fn or_else() {
        assert_eq!(Optional::<i32>::empty().or_else(1), 1);
        assert_eq!(Optional::of(3).or_else(1), 3);
        assert_eq!(Optional::<i32>::empty().or_else_get(|| 42), 42);

        let called = Cell::new(false);
        let value = Optional::of(3).or_else_get(|| {
            called.set(true);
            2
        });
        assert_eq!(value, 3);
        assert!(!called.get());
    }

    #[test]
    fn or_else_panic() {
        assert_eq!(Optional::of(3).or_else_panic(|| "unused"), 3);

        let err = catch_unwind(|| Optional::<i32>::empty().or_else_panic(|| "no row"))
            .expect_err("or_else_panic on empty should panic");
        assert_eq!(err.downcast_ref::<&str>(), Some(&"no row"));

        let err = catch_unwind(|| OptionalString::empty().or_else_panic(|| NOT_PRESENT))
            .expect_err("or_else_panic on empty should panic");
        assert!(err.downcast_ref::<NotPresent>().is_some());
    }

    #[test]
    fn as_ref_and_into_inner() {
        let opt = of_string("a");
        assert_eq!(opt.as_ref().map(String::len).must_get(), 1);
        assert_eq!(opt.into_inner(), Some(String::from("a")));
    }
}
