// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![deny(unsafe_code)]

//! # optional implements a present/absent wrapper around a single value
//!
//! An [`Optional`] either holds a value or it does not. Every combinator
//! returns a new [`Optional`]; the only operation that changes an existing
//! instance is [`Optional::scan`], which overwrites it from a raw database
//! column.
//!
//! The [`OptionalInt`], [`OptionalFloat`] and [`OptionalString`] aliases pin
//! the payload to the types a nullable SQL column usually carries. They differ
//! from the generic form in two places only:
//!
//! - [`Display`](std::fmt::Display) labels them `OptionalInt`, `OptionalFloat`
//!   and `OptionalString` (see [`Payload`]).
//! - Scanning a SQL `NULL` into them yields a present zero value, whereas the
//!   generic [`Optional<Value>`](rusqlite::types::Value) becomes empty
//!   (see [`Column`]).
//!
//! ```
//! use optional::{Optional, of_int};
//!
//! assert_eq!(Optional::of(5).map(|x| x + 1).must_get(), 6);
//! assert_eq!(Optional::<i32>::empty().or_else_get(|| 42), 42);
//! assert!(of_int(3).filter(|x| *x > 5).is_empty());
//! assert_eq!(of_int(1).to_string(), "OptionalInt (1)");
//! ```

mod column;
mod config;
mod display;
mod error;
mod iter;
mod optional;
mod ser;
mod typed;

/// Logger module for handling logging functionality
pub mod logger;

#[macro_use]
/// Macros for constructing an [`Optional`]
pub mod macros;

// re-export these so callers don't need to know where they are
pub use column::Column;
pub use config::{NullPolicy, ScanOptions, ZeroValue};
pub use display::Payload;
pub use error::{NOT_PRESENT, NotPresent, ScanError};
pub use iter::{IntoIter, Iter};
pub use optional::Optional;
pub use typed::{
    OptionalFloat, OptionalInt, OptionalString, empty_float, empty_int, empty_string, of_float,
    of_int, of_string,
};
