//! Picks the conversion for a scalar field type at compile time.
//!
//! The derive expands every scalar conversion to
//! `(&&&&Probe::<T>::new()).convert(raw)`. Method resolution strips one
//! reference per step until an impl whose bounds hold is found, so the first
//! match in this order wins:
//!
//! 1. [`Decoder`]
//! 2. [`Setter`] + `Default`
//! 3. [`Primitive`]
//! 4. `FromStr`
//!
//! A type matching none of them fails to compile.

use std::{marker::PhantomData, str::FromStr};

use crate::{
    BoxError,
    parser::{Decoder, ParseResult, Setter},
    primitive::Primitive,
};

pub struct Probe<T>(PhantomData<T>);

impl<T> Probe<T> {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

pub trait ViaDecoder<T> {
    fn convert(&self, raw: &str) -> ParseResult<T>;
}

impl<T: Decoder> ViaDecoder<T> for &&&Probe<T> {
    fn convert(&self, raw: &str) -> ParseResult<T> {
        T::decode(raw)
    }
}

pub trait ViaSetter<T> {
    fn convert(&self, raw: &str) -> ParseResult<T>;
}

impl<T: Setter + Default> ViaSetter<T> for &&Probe<T> {
    fn convert(&self, raw: &str) -> ParseResult<T> {
        let mut value = T::default();
        value.set(raw)?;
        Ok(value)
    }
}

pub trait ViaPrimitive<T> {
    fn convert(&self, raw: &str) -> ParseResult<T>;
}

impl<T: Primitive> ViaPrimitive<T> for &Probe<T> {
    fn convert(&self, raw: &str) -> ParseResult<T> {
        T::from_raw(raw)
    }
}

pub trait ViaFromStr<T> {
    fn convert(&self, raw: &str) -> ParseResult<T>;
}

impl<T> ViaFromStr<T> for Probe<T>
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    fn convert(&self, raw: &str) -> ParseResult<T> {
        raw.parse::<T>().map_err(Into::into)
    }
}
