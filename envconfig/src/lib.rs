//! Bind environment variables onto strongly typed configuration structs.
//!
//! ```
//! use std::{collections::HashMap, time::Duration};
//!
//! use envconfig::Envconfig;
//!
//! #[derive(Envconfig, Debug, Default)]
//! pub struct Config {
//!     debug: bool,
//!     #[envconfig(required)]
//!     port: u16,
//!     users: Vec<String>,
//!     #[envconfig(split_words, default = "30s")]
//!     read_timeout: Duration,
//!     color_codes: HashMap<String, i32>,
//! }
//!
//! let source = HashMap::from([
//!     ("MYAPP_PORT".to_owned(), "8080".to_owned()),
//!     ("MYAPP_USERS".to_owned(), "rob,ken".to_owned()),
//!     ("MYAPP_COLOR_CODES".to_owned(), "red:1,green:2".to_owned()),
//! ]);
//!
//! let config = Config::from_source("myapp", &source).unwrap();
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.users, ["rob", "ken"]);
//! assert_eq!(config.read_timeout, Duration::from_secs(30));
//! assert_eq!(config.color_codes["green"], 2);
//! ```
//!
//! # Field attributes
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `name = "NAME"` | Look up `PREFIX_NAME`, then the bare `NAME` |
//! | `default = "value"` | Raw value used when no key is set |
//! | `required` | Missing values are an error |
//! | `ignored` | Never looked up or assigned |
//! | `split_words` | `maxConns` is looked up as `MAX_CONNS` |
//! | `nested` | Bind a struct under `PREFIX_FIELD_` |
//! | `flatten` | Bind a struct under the parent's prefix |
//! | `with = path` | Convert with a custom `Fn(&str) -> ParseResult<T>` |
//! | `desc = "text"` | Description for [`Envconfig::usage`] |
//!
//! Values are converted through [`Decoder`], then [`Setter`], then the
//! built-in kinds (booleans, numbers, strings, durations), then `FromStr`.
//! Sequences are comma separated and maps are comma separated `key:value`
//! pairs.

mod composite;
mod dispatch;
mod duration;
mod error;
mod field;
mod names;
mod parser;
mod primitive;
mod source;
mod usage;
mod walker;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use envconfig_derive::Envconfig;
pub use error::{Error, Errors, ValueError};
pub use field::Field;
pub use names::{resolve, split_words};
pub use parser::{Decoder, ParseResult, Setter};
pub use source::{Env, FnSource, Source, from_fn};
pub use usage::Var;
pub use walker::Walker;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A configuration schema that can be bound from a [`Source`].
///
/// Usually derived. A hand-written implementation calls [`Walker::value`]
/// for each leaf field and recurses into nested schemas.
pub trait Envconfig {
    /// Binds every field of `self` under `prefix`.
    fn walk(&mut self, walker: &mut Walker<'_>, prefix: &str);

    /// Appends the variables of every leaf field under `prefix`.
    fn describe(prefix: &str, vars: &mut Vec<Var>)
    where
        Self: Sized;

    /// Binds from the process environment, in place.
    fn process(&mut self, prefix: &str) -> Result<(), Errors> {
        self.process_from(prefix, &Env)
    }

    /// Binds from `source`, in place.
    ///
    /// Fields bound before an error keep their new values.
    fn process_from(&mut self, prefix: &str, source: &dyn Source) -> Result<(), Errors> {
        let mut walker = Walker::new(source);
        self.walk(&mut walker, prefix);
        walker.finish()
    }

    fn from_env(prefix: &str) -> Result<Self, Errors>
    where
        Self: Sized + Default,
    {
        Self::from_source(prefix, &Env)
    }

    fn from_source(prefix: &str, source: &dyn Source) -> Result<Self, Errors>
    where
        Self: Sized + Default,
    {
        let mut config = Self::default();
        config.process_from(prefix, source)?;
        Ok(config)
    }

    fn vars(prefix: &str) -> Vec<Var>
    where
        Self: Sized,
    {
        let mut vars = Vec::new();
        Self::describe(prefix, &mut vars);
        vars
    }

    /// A table of every variable with its type, default, whether it is
    /// required and its description.
    fn usage(prefix: &str) -> String
    where
        Self: Sized,
    {
        usage::table(&Self::vars(prefix))
    }

    /// One `KEY=default` line per variable.
    fn requirements(prefix: &str) -> String
    where
        Self: Sized,
    {
        usage::requirements(&Self::vars(prefix))
    }

    /// Reports every key in `source` that starts with `PREFIX_` but does not
    /// belong to any field.
    fn check_disallowed(prefix: &str, source: &dyn Source) -> Result<(), Errors>
    where
        Self: Sized,
    {
        if prefix.is_empty() {
            return Ok(());
        }

        let namespace = format!("{}_", prefix.to_uppercase());
        let known: Vec<String> = Self::vars(prefix).into_iter().map(|var| var.key).collect();

        let mut unknown: Vec<String> = source
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&namespace) && !known.contains(key))
            .collect();
        unknown.sort();

        let mut errors = Errors::new();
        for key in unknown {
            errors.add(Error::Unknown { key });
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

/// Binds `config` from the process environment under `prefix`.
pub fn process<T: Envconfig>(prefix: &str, config: &mut T) -> Result<(), Errors> {
    config.process(prefix)
}
