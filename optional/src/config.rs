// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use typed_builder::TypedBuilder;

/// Whether a mapped zero value ([`Default::default`]) counts as present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroValue {
    /// A zero result is wrapped like any other value
    #[default]
    Present,

    /// A zero result yields an empty optional
    Empty,
}

/// What scanning a SQL `NULL` produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    /// Each payload's own rule, see [`Column::null`](crate::Column::null)
    #[default]
    Default,

    /// NULL is always empty, for every payload
    Empty,

    /// NULL is an error
    Reject,
}

/// Options for [`Optional::scan_with`](crate::Optional::scan_with).
#[derive(Clone, TypedBuilder, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// How a NULL column is scanned.
    #[builder(default)]
    pub null: NullPolicy,

    /// Whether numeric payloads may be parsed out of TEXT and BLOB columns.
    #[builder(default = true)]
    pub parse_text: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
