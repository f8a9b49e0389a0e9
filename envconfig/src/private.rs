//! Internal items used by the derive macro.
//!
//! They are not meant to be used directly by users of the library.
//!
//! Generated code imports the `Via*` traits anonymously so that
//! `(&&&&Probe::<T>::new()).convert(raw)` resolves to the first conversion
//! `T` supports.
pub use crate::composite::{bytes, map, optional, sequence};
pub use crate::dispatch::{Probe, ViaDecoder, ViaFromStr, ViaPrimitive, ViaSetter};
pub use crate::parser::{Parser, from_str, into};
pub use crate::{Envconfig, Field, Var, Walker};
