// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

/// Builds an [`Optional`](crate::Optional) from zero or more arguments.
///
/// With no arguments the optional is empty. Otherwise it holds the first
/// argument; any further arguments are evaluated and discarded.
///
/// ```
/// use optional::{Optional, of};
///
/// let empty: Optional<i32> = of![];
/// assert!(empty.is_empty());
/// assert_eq!(of![1, 2, 3], Optional::of(1));
/// ```
#[macro_export]
macro_rules! of {
    () => {
        $crate::Optional::empty()
    };
    ($value:expr $(, $rest:expr)* $(,)?) => {{
        let value = $value;
        $(let _ = $rest;)*
        $crate::Optional::of(value)
    }};
}
