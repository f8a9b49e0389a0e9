use std::time::Duration;

use crate::{duration, error::ValueError, parser::ParseResult};

/// Scalar kinds with built-in conversions.
///
/// An empty raw value converts to the kind's zero value.
pub trait Primitive: Sized {
    fn from_raw(raw: &str) -> ParseResult<Self>;
}

impl Primitive for bool {
    fn from_raw(raw: &str) -> ParseResult<Self> {
        match raw {
            "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            _ => Err(ValueError::Bool(raw.to_owned()).into()),
        }
    }
}

impl Primitive for String {
    fn from_raw(raw: &str) -> ParseResult<Self> {
        Ok(raw.to_owned())
    }
}

impl Primitive for Duration {
    fn from_raw(raw: &str) -> ParseResult<Self> {
        if raw.is_empty() {
            return Ok(Duration::ZERO);
        }
        Ok(duration::parse(raw)?)
    }
}

macro_rules! impl_number {
    ($zero:expr => $($ty:ty),+) => {
        $(
            impl Primitive for $ty {
                fn from_raw(raw: &str) -> ParseResult<Self> {
                    if raw.is_empty() {
                        return Ok($zero);
                    }
                    Ok(raw.parse::<$ty>()?)
                }
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);
