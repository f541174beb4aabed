// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

//! Nullable column adapter.
//!
//! An [`Optional`] reads a raw column with [`Optional::scan`] (or through
//! [`FromSql`] when fetched from a row) and writes itself back with
//! [`Optional::value`] (or through [`ToSql`] when bound as a parameter).
//! Empty optionals are written as `NULL`.
//!
//! Reading `NULL` is where the payloads part ways. The raw [`Value`] payload
//! treats `NULL` as empty. The numeric and string payloads follow the usual
//! null-aware scan and produce a present zero value instead.

use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, Value, ValueRef};

use crate::display::RealText;
use crate::logger::{debug, trace};
use crate::{NullPolicy, Optional, ScanError, ScanOptions};

/// A payload that can be scanned out of a raw column.
pub trait Column: Sized {
    /// Name of the payload, used in errors and logs
    const TARGET: &'static str;

    /// What a NULL column scans into under [`NullPolicy::Default`].
    fn null() -> Option<Self>;

    /// Coerces a non-NULL column into the payload.
    fn from_column(raw: ValueRef<'_>, options: &ScanOptions) -> Result<Self, ScanError>;
}

impl Column for Value {
    const TARGET: &'static str = "Optional";

    fn null() -> Option<Self> {
        None
    }

    fn from_column(raw: ValueRef<'_>, _options: &ScanOptions) -> Result<Self, ScanError> {
        Ok(raw.into())
    }
}

impl Column for i64 {
    const TARGET: &'static str = "OptionalInt";

    fn null() -> Option<Self> {
        Some(0)
    }

    fn from_column(raw: ValueRef<'_>, options: &ScanOptions) -> Result<Self, ScanError> {
        match raw {
            ValueRef::Integer(int) => Ok(int),
            ValueRef::Real(real) => {
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if real.fract() == 0.0 && real >= i64::MIN as f64 && real < i64::MAX as f64 {
                    Ok(real as i64)
                } else {
                    Err(ScanError::OutOfRange {
                        target: Self::TARGET,
                        value: real.to_string(),
                    })
                }
            }
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) if options.parse_text => {
                Ok(std::str::from_utf8(bytes)?.parse()?)
            }
            other => Err(invalid_type::<Self>(other)),
        }
    }
}

impl Column for f64 {
    const TARGET: &'static str = "OptionalFloat";

    fn null() -> Option<Self> {
        Some(0.0)
    }

    fn from_column(raw: ValueRef<'_>, options: &ScanOptions) -> Result<Self, ScanError> {
        match raw {
            ValueRef::Real(real) => Ok(real),
            ValueRef::Integer(int) => Ok(int as f64),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) if options.parse_text => {
                Ok(std::str::from_utf8(bytes)?.parse()?)
            }
            other => Err(invalid_type::<Self>(other)),
        }
    }
}

impl Column for String {
    const TARGET: &'static str = "OptionalString";

    fn null() -> Option<Self> {
        Some(String::new())
    }

    fn from_column(raw: ValueRef<'_>, _options: &ScanOptions) -> Result<Self, ScanError> {
        match raw {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Ok(std::str::from_utf8(bytes)?.to_owned())
            }
            ValueRef::Integer(int) => Ok(int.to_string()),
            ValueRef::Real(real) => Ok(RealText(real).to_string()),
            ValueRef::Null => Err(invalid_type::<Self>(raw)),
        }
    }
}

fn invalid_type<T: Column>(raw: ValueRef<'_>) -> ScanError {
    ScanError::InvalidType {
        target: T::TARGET,
        found: raw.data_type(),
    }
}

fn scan_column<T: Column>(
    raw: ValueRef<'_>,
    options: &ScanOptions,
) -> Result<Option<T>, ScanError> {
    if let ValueRef::Null = raw {
        return match options.null {
            NullPolicy::Default => Ok(T::null()),
            NullPolicy::Empty => Ok(None),
            NullPolicy::Reject => Err(ScanError::Null { target: T::TARGET }),
        };
    }
    T::from_column(raw, options).map(Some)
}

impl<T: Column> Optional<T> {
    /// Overwrites this optional from a raw column, whatever it held before.
    ///
    /// On error the optional is left untouched.
    pub fn scan(&mut self, raw: ValueRef<'_>) -> Result<(), ScanError> {
        self.scan_with(raw, &ScanOptions::default())
    }

    /// [`scan`](Self::scan) with explicit [`ScanOptions`].
    pub fn scan_with(&mut self, raw: ValueRef<'_>, options: &ScanOptions) -> Result<(), ScanError> {
        let scanned = scan_column::<T>(raw, options).inspect_err(|err| {
            debug!(
                "scan of {} column into {} failed: {err}",
                raw.data_type(),
                T::TARGET
            );
        })?;
        trace!(
            "scanned {} column into {} (present: {})",
            raw.data_type(),
            T::TARGET,
            scanned.is_some()
        );
        self.set(scanned);
        Ok(())
    }
}

impl<T: ToSql> Optional<T> {
    /// The column value to write: the payload if present, `NULL` if empty.
    pub fn value(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.to_sql()
    }
}

impl<T: ToSql> ToSql for Optional<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.get() {
            Some(value) => value.to_sql(),
            None => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

impl<T: Column> FromSql for Optional<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let mut optional = Self::empty();
        optional.scan(value)?;
        Ok(optional)
    }
}
