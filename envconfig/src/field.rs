use std::borrow::Cow;

use crate::names;

/// Static description of one bound field.
///
/// The derive emits one `Field` per non-ignored struct field. Ignored fields
/// have no descriptor and are never looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// `Struct.field`, used in error messages.
    pub path: &'static str,
    /// The field identifier, without any `r#` marker.
    pub ident: &'static str,
    /// Explicit external name.
    pub name: Option<&'static str>,
    pub split_words: bool,
    pub required: bool,
    pub default: Option<&'static str>,
    /// Type label shown in errors and usage output.
    pub ty: &'static str,
    pub desc: Option<&'static str>,
}

impl Field {
    /// A descriptor with no directives, for hand-written schemas.
    pub const fn new(path: &'static str, ident: &'static str, ty: &'static str) -> Self {
        Self {
            path,
            ident,
            name: None,
            split_words: false,
            required: false,
            default: None,
            ty,
            desc: None,
        }
    }

    fn name(&self) -> Cow<'static, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None if self.split_words => Cow::Owned(names::split_words(self.ident)),
            None => Cow::Borrowed(self.ident),
        }
    }

    /// The prefixed key, always the first candidate.
    pub fn key(&self, prefix: &str) -> String {
        names::key(prefix, &self.name())
    }

    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        names::resolve(self.ident, self.name, self.split_words, prefix)
    }

    /// Prefix for the fields of a nested struct stored in this field.
    ///
    /// Embedded structs share the parent's prefix unless they carry an
    /// explicit name. Other nested structs live under this field's key.
    pub fn namespace(&self, prefix: &str, embedded: bool) -> String {
        if embedded && self.name.is_none() {
            prefix.to_owned()
        } else {
            self.key(prefix)
        }
    }
}
