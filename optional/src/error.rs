// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use rusqlite::types::{FromSqlError, Type};
use thiserror::Error;

/// The fault raised when the value of an empty [`Optional`](crate::Optional) is demanded.
///
/// [`Optional::must_get`](crate::Optional::must_get) panics with this value as
/// the panic payload, so it can be recovered with
/// [`std::panic::catch_unwind`] and identified by downcasting to `NotPresent`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("No value present")]
pub struct NotPresent;

/// The single [`NotPresent`] fault
pub const NOT_PRESENT: NotPresent = NotPresent;

/// Errors returned when a raw column cannot be scanned into an [`Optional`](crate::Optional)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// The column type has no conversion to the target payload
    #[error("cannot scan a {found} column into {target}")]
    InvalidType {
        /// The payload being scanned into
        target: &'static str,
        /// The storage class of the column
        found: Type,
    },

    /// The column holds a number the target payload cannot represent
    #[error("value {value} cannot be represented as {target}")]
    OutOfRange {
        /// The payload being scanned into
        target: &'static str,
        /// The offending value, rendered as text
        value: String,
    },

    /// A NULL column was refused by [`NullPolicy::Reject`](crate::NullPolicy::Reject)
    #[error("NULL column refused for {target}")]
    Null {
        /// The payload being scanned into
        target: &'static str,
    },

    /// Text could not be parsed as an integer
    #[error("invalid integer text: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Text could not be parsed as a float
    #[error("invalid float text: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Text or blob bytes are not valid UTF-8
    #[error("column bytes are not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl From<ScanError> for FromSqlError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::InvalidType { .. } => FromSqlError::InvalidType,
            other => FromSqlError::Other(Box::new(other)),
        }
    }
}
