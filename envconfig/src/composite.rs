//! Converters for collection and optional field types.
//!
//! Each function wraps the converters of the inner types and returns a new
//! converter, so the derive can build one for arbitrarily nested types.

use crate::{
    error::ValueError,
    parser::{ParseResult, Parser},
};

/// Comma separated elements, in input order. A blank value is an empty
/// collection.
pub fn sequence<C, T, P>(element: P) -> impl Fn(&str) -> ParseResult<C>
where
    C: FromIterator<T>,
    P: Parser<T>,
{
    move |raw: &str| -> ParseResult<C> {
        if raw.trim().is_empty() {
            return Ok(C::from_iter(std::iter::empty()));
        }
        raw.split(',').map(|item| element.parse(item)).collect()
    }
}

/// Comma separated `key:value` pairs. Later duplicates win.
pub fn map<C, K, V, PK, PV>(key: PK, value: PV) -> impl Fn(&str) -> ParseResult<C>
where
    C: FromIterator<(K, V)>,
    PK: Parser<K>,
    PV: Parser<V>,
{
    move |raw: &str| -> ParseResult<C> {
        if raw.trim().is_empty() {
            return Ok(C::from_iter(std::iter::empty()));
        }
        raw.split(',')
            .map(|pair| -> ParseResult<(K, V)> {
                let mut parts = pair.split(':');
                let (Some(k), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(ValueError::MapItem(pair.to_owned()).into());
                };
                Ok((key.parse(k)?, value.parse(v)?))
            })
            .collect()
    }
}

/// Raw bytes of the value, without any splitting.
pub fn bytes(raw: &str) -> ParseResult<Vec<u8>> {
    Ok(raw.as_bytes().to_vec())
}

pub fn optional<T, P>(inner: P) -> impl Fn(&str) -> ParseResult<Option<T>>
where
    P: Parser<T>,
{
    move |raw: &str| -> ParseResult<Option<T>> { inner.parse(raw).map(Some) }
}
