// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

//! Shorthands for the payloads a nullable SQL column carries.

use crate::Optional;

/// An optional 64-bit integer, matching an `INTEGER` column
pub type OptionalInt = Optional<i64>;

/// An optional 64-bit float, matching a `REAL` column
pub type OptionalFloat = Optional<f64>;

/// An optional owned string, matching a `TEXT` column
pub type OptionalString = Optional<String>;

/// Creates a present [`OptionalInt`]; `0` is present
#[must_use]
pub const fn of_int(value: i64) -> OptionalInt {
    Optional::of(value)
}

/// Creates a present [`OptionalFloat`]; `0.0` is present
#[must_use]
pub const fn of_float(value: f64) -> OptionalFloat {
    Optional::of(value)
}

/// Creates a present [`OptionalString`]; `""` is present
#[must_use]
pub fn of_string(value: impl Into<String>) -> OptionalString {
    Optional::of(value.into())
}

/// Creates an empty [`OptionalInt`]
#[must_use]
pub const fn empty_int() -> OptionalInt {
    Optional::empty()
}

/// Creates an empty [`OptionalFloat`]
#[must_use]
pub const fn empty_float() -> OptionalFloat {
    Optional::empty()
}

/// Creates an empty [`OptionalString`]
#[must_use]
pub const fn empty_string() -> OptionalString {
    Optional::empty()
}
