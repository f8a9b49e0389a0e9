use darling::FromField;
use syn::{Attribute, Expr, ExprLit, ExprPath, Ident, Lit, LitStr, Meta, Type, ext::IdentExt};

use crate::helpers::parse_option;

#[derive(FromField)]
#[darling(attributes(envconfig), forward_attrs(doc))]
pub struct EnvconfigFieldReceiver {
    pub ident: Option<Ident>,
    pub ty: Type,
    pub attrs: Vec<Attribute>,
    pub name: Option<LitStr>,
    pub default: Option<LitStr>,
    pub with: Option<ExprPath>,
    pub desc: Option<LitStr>,
    #[darling(default)]
    pub required: bool,
    #[darling(default)]
    pub ignored: bool,
    #[darling(default)]
    pub split_words: bool,
    #[darling(default)]
    pub nested: bool,
    #[darling(default)]
    pub flatten: bool,
}

pub enum FieldKind {
    /// #[envconfig(ignored)]
    Ignored,
    /// A leaf field looked up in the source.
    Value,
    /// #[envconfig(nested)] or #[envconfig(flatten)]
    Nested { embedded: bool },
}

impl EnvconfigFieldReceiver {
    pub fn ident(&self) -> &Ident {
        self.ident
            .as_ref()
            .expect("darling only accepts structs with named fields")
    }

    /// The identifier as written, without `r#`.
    pub fn ident_str(&self) -> String {
        self.ident().unraw().to_string()
    }

    pub fn option(&self) -> Option<&Type> {
        parse_option(&self.ty)
    }

    pub fn kind(&self) -> darling::Result<FieldKind> {
        let err = |msg: &str| Err(darling::Error::custom(msg).with_span(self.ident()));

        if self.ignored {
            let has_other = self.name.is_some()
                || self.default.is_some()
                || self.with.is_some()
                || self.desc.is_some()
                || self.required
                || self.split_words
                || self.nested
                || self.flatten;
            if has_other {
                return err("ignored must not be used with other attributes");
            }
            return Ok(FieldKind::Ignored);
        }

        if self.nested && self.flatten {
            return err("nested and flatten are mutually exclusive");
        }

        if self.nested || self.flatten {
            if self.default.is_some() || self.required || self.with.is_some() {
                return err("nested structs cannot take `default`, `required` or `with`");
            }
            return Ok(FieldKind::Nested {
                embedded: self.flatten,
            });
        }

        Ok(FieldKind::Value)
    }

    /// The `desc` attribute, or else the first line of the doc comment.
    pub fn description(&self) -> Option<String> {
        if let Some(desc) = &self.desc {
            return Some(desc.value());
        }

        self.attrs.iter().find_map(|attr| {
            let Meta::NameValue(meta) = &attr.meta else {
                return None;
            };
            let Expr::Lit(ExprLit {
                lit: Lit::Str(doc), ..
            }) = &meta.value
            else {
                return None;
            };
            let line = doc.value().trim().to_owned();
            (!line.is_empty()).then_some(line)
        })
    }
}
