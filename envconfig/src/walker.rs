use tracing::{debug, trace};

use crate::{
    Envconfig,
    error::{Error, Errors},
    field::Field,
    parser::Parser,
    source::Source,
};

/// Binding state for one call: the source and the errors seen so far.
///
/// Generated `walk` implementations call [`Walker::value`] for every leaf
/// field and recurse into nested structs with [`Envconfig::walk`] or
/// [`Walker::optional`].
pub struct Walker<'a> {
    source: &'a dyn Source,
    errors: Errors,
    /// Fields given a value from the source or a default.
    supplied: usize,
}

impl<'a> Walker<'a> {
    pub fn new(source: &'a dyn Source) -> Self {
        Self {
            source,
            errors: Errors::new(),
            supplied: 0,
        }
    }

    /// Looks up `field` and stores the converted value in `slot`.
    ///
    /// Missing values fall back to the default, then to a
    /// [`MissingRequired`](Error::MissingRequired) error for required fields.
    /// Otherwise `slot` is left as it is.
    pub fn value<T, P>(&mut self, prefix: &str, field: &'static Field, slot: &mut T, parser: P)
    where
        P: Parser<T>,
    {
        let candidates = field.candidates(prefix);

        let (key, raw) = match self.lookup(&candidates) {
            Some(hit) => hit,
            None => match field.default {
                Some(default) => {
                    trace!(path = field.path, "using default value");
                    self.supplied += 1;
                    (candidates[0].clone(), default.to_owned())
                }
                None if field.required => {
                    self.errors.add(Error::MissingRequired {
                        path: field.path,
                        key: candidates[0].clone(),
                    });
                    return;
                }
                None => return,
            },
        };

        match parser.parse(&raw) {
            Ok(value) => *slot = value,
            Err(source) => self.errors.add(Error::Conversion {
                path: field.path,
                key,
                value: raw,
                ty: field.ty,
                source,
            }),
        }
    }

    /// Binds an optional nested struct.
    ///
    /// An existing value is bound in place. An absent one is only created
    /// when at least one of its fields is found in the source or has a
    /// default; otherwise it stays `None` and the errors of its fields are
    /// discarded.
    pub fn optional<T>(&mut self, prefix: &str, slot: &mut Option<T>)
    where
        T: Envconfig + Default,
    {
        if let Some(inner) = slot.as_mut() {
            inner.walk(self, prefix);
            return;
        }

        let supplied = self.supplied;
        let errors = self.errors.len();

        let mut inner = T::default();
        inner.walk(self, prefix);

        if self.supplied > supplied {
            *slot = Some(inner);
        } else {
            debug!(prefix, "no values found for optional section");
            self.errors.truncate(errors);
        }
    }

    pub fn finish(self) -> Result<(), Errors> {
        if self.errors.has_errors() {
            Err(self.errors)
        } else {
            Ok(())
        }
    }

    fn lookup(&mut self, candidates: &[String]) -> Option<(String, String)> {
        let hit = candidates.iter().find_map(|key| {
            self.source
                .lookup(key)
                .map(|value| (key.to_owned(), value))
        });

        match &hit {
            Some((key, _)) => {
                self.supplied += 1;
                trace!(key = key.as_str(), "found value");
            }
            None => trace!(?candidates, "no value found"),
        }

        hit
    }
}
