//! Field-level conversion hooks.
//!
//! A `with = path` attribute takes any [`Parser`], which every
//! `Fn(&str) -> ParseResult<T>` is. [`from_str`] and [`into`] are the two
//! parsers the attribute accepts by bare name. Types can instead opt in for
//! every field they appear in by implementing [`Decoder`] or [`Setter`].

use std::str::FromStr;

use crate::BoxError;

/// Return type for parsers used with the `with` attribute and for the
/// extension protocols.
pub type ParseResult<T> = Result<T, BoxError>;

/// Converts one raw value into a field value.
pub trait Parser<T> {
    fn parse(&self, raw: &str) -> ParseResult<T>;
}

impl<T, F> Parser<T> for F
where
    F: for<'a> Fn(&'a str) -> ParseResult<T>,
{
    fn parse(&self, raw: &str) -> ParseResult<T> {
        self(raw)
    }
}

/// `with = from_str`: forces the `FromStr` conversion, skipping the
/// built-in kinds.
pub fn from_str<T>(raw: &str) -> ParseResult<T>
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    raw.parse::<T>().map_err(Into::into)
}

/// `with = into`: wraps the raw string with `From<String>`, for newtypes
/// such as secret strings.
pub fn into<T>(raw: &str) -> ParseResult<T>
where
    T: From<String>,
{
    Ok(T::from(raw.to_owned()))
}

/// Types that decode themselves from a raw value.
///
/// A field whose type implements `Decoder` is always converted through it,
/// ahead of [`Setter`], the built-in kinds and `FromStr`.
///
/// ```
/// use std::net::Ipv4Addr;
///
/// use envconfig::{Decoder, ParseResult};
///
/// pub struct DnsServer(Ipv4Addr);
///
/// impl Decoder for DnsServer {
///     fn decode(value: &str) -> ParseResult<Self> {
///         Ok(DnsServer(value.parse()?))
///     }
/// }
/// ```
pub trait Decoder: Sized {
    fn decode(value: &str) -> ParseResult<Self>;
}

/// Types that assign themselves from a raw value.
///
/// The target starts out as `Default::default()`. Tried after [`Decoder`] and
/// before the built-in kinds.
pub trait Setter {
    fn set(&mut self, value: &str) -> ParseResult<()>;
}
