// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::sync::Arc;

use rusqlite::types::Value;

use crate::Optional;

/// A payload that can be rendered inside an [`Optional`].
///
/// `LABEL` names the optional in its [`Display`] output and `fmt_payload`
/// renders the held value. A type with its own [`Display`] just forwards:
///
/// ```
/// use std::fmt::{self, Display, Formatter};
///
/// use optional::{Optional, Payload};
///
/// struct Celsius(i32);
///
/// impl Display for Celsius {
///     fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// impl Payload for Celsius {
///     fn fmt_payload(&self, f: &mut Formatter<'_>) -> fmt::Result {
///         Display::fmt(self, f)
///     }
/// }
///
/// assert_eq!(Optional::of(Celsius(21)).to_string(), "Optional (21°C)");
/// ```
pub trait Payload {
    /// The label shown by [`Display`]
    const LABEL: &'static str = "Optional";

    /// Writes the held value between the parentheses
    fn fmt_payload(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! display_payload {
    ($($ty:ty $(=> $label:literal)?),+ $(,)?) => {
        $(
            impl Payload for $ty {
                $(const LABEL: &'static str = $label;)?

                fn fmt_payload(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Display::fmt(self, f)
                }
            }
        )+
    };
}

display_payload!(
    i64 => "OptionalInt",
    f64 => "OptionalFloat",
    String => "OptionalString",
    bool, char, str, i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    Cow<'_, str>,
);

impl<T: Payload + ?Sized> Payload for &T {
    const LABEL: &'static str = T::LABEL;

    fn fmt_payload(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_payload(f)
    }
}

macro_rules! pointer_payload {
    ($($ptr:ident),+) => {
        $(
            impl<T: Payload + ?Sized> Payload for $ptr<T> {
                fn fmt_payload(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    (**self).fmt_payload(f)
                }
            }
        )+
    };
}

pointer_payload!(Box, Rc, Arc);

/// Raw column values render by storage class: numbers and text as written,
/// blobs as their bytes.
impl Payload for Value {
    fn fmt_payload(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(int) => Display::fmt(int, f),
            Value::Real(real) => Display::fmt(&RealText(*real), f),
            Value::Text(text) => f.write_str(text),
            Value::Blob(bytes) => {
                f.write_str("[")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    Display::fmt(byte, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Shortest text for a float: plain notation for decimal exponents in
/// `-4..6`, otherwise `<mantissa>e<sign><two or more digits>`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RealText(pub(crate) f64);

impl Display for RealText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let real = self.0;
        if real.is_nan() {
            return f.write_str("NaN");
        }
        if real.is_infinite() {
            return f.write_str(if real > 0.0 { "+Inf" } else { "-Inf" });
        }
        let scientific = format!("{real:e}");
        let split = scientific
            .split_once('e')
            .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));
        match split {
            Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            _ => Display::fmt(&real, f),
        }
    }
}

/// `"<Label> (<value>)"` when present, the bare label when empty.
impl<T: Payload> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(T::LABEL)?;
        if let Some(value) = self.get() {
            f.write_str(" (")?;
            value.fmt_payload(f)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}
