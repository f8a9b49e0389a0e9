mod field;
mod helpers;

use darling::{
    FromDeriveInput,
    ast::{Data, Fields},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, ExprPath, Generics, Ident, LitStr, Type, parse_macro_input};

use crate::{
    field::{EnvconfigFieldReceiver, FieldKind},
    helpers::{is_bytes, parse_map, parse_option, parse_sequence, type_label},
};

#[proc_macro_derive(Envconfig, attributes(envconfig))]
pub fn derive_envconfig(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_derive(input: DeriveInput) -> darling::Result<TokenStream> {
    let config_struct = EnvconfigReceiver::from_derive_input(&input)?;

    let plans = config_struct.plans()?;

    Ok(config_struct.expand(&plans))
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct EnvconfigReceiver {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<(), EnvconfigFieldReceiver>,
}

struct ConstTokens {
    private_path: TokenStream,
}

/// One bound field with its descriptor static.
struct Plan<'a> {
    field: &'a EnvconfigFieldReceiver,
    kind: FieldKind,
    descriptor: Ident,
}

impl EnvconfigReceiver {
    fn expand(&self, plans: &[Plan<'_>]) -> TokenStream {
        let consts = ConstTokens {
            private_path: quote!(__envconfig::__private),
        };
        let private_path = &consts.private_path;
        let struct_name = &self.ident;

        let descriptors = plans.iter().map(|plan| self.descriptor(plan, &consts));
        let walks = plans.iter().map(|plan| self.walk_field(plan, &consts));
        let describes = plans.iter().map(|plan| self.describe_field(plan, &consts));

        quote! {
            const _: () = {
                extern crate envconfig as __envconfig;
                #[allow(unused_imports)]
                use #private_path::{
                    ViaDecoder as _, ViaFromStr as _, ViaPrimitive as _, ViaSetter as _,
                };

                #(#descriptors)*

                #[allow(unused_variables)]
                impl #private_path::Envconfig for #struct_name {
                    fn walk(&mut self, walker: &mut #private_path::Walker<'_>, prefix: &str) {
                        #(#walks)*
                    }

                    fn describe(prefix: &str, vars: &mut ::std::vec::Vec<#private_path::Var>) {
                        #(#describes)*
                    }
                }
            };
        }
    }

    /// Validates every field and pairs each bound one with its descriptor.
    fn plans(&self) -> darling::Result<Vec<Plan<'_>>> {
        let mut accumulator = darling::Error::accumulator();

        if !self.generics.params.is_empty() {
            accumulator.push(
                darling::Error::custom("Envconfig derive does not support generic structs")
                    .with_span(&self.ident),
            );
        }

        let plans = self
            .get_fields()
            .iter()
            .enumerate()
            .filter_map(|(index, field)| match accumulator.handle(field.kind())? {
                FieldKind::Ignored => None,
                kind => Some(Plan {
                    field,
                    kind,
                    descriptor: format_ident!("__ENVCONFIG_FIELD_{}", index),
                }),
            })
            .collect();

        accumulator.finish_with(plans)
    }

    fn descriptor(&self, plan: &Plan<'_>, consts: &ConstTokens) -> TokenStream {
        let private_path = &consts.private_path;
        let field = plan.field;
        let descriptor = &plan.descriptor;

        let ident = field.ident_str();
        let path = format!("{}.{}", self.ident, ident);
        let name = optional_str(field.name.as_ref().map(LitStr::value));
        let default = optional_str(field.default.as_ref().map(LitStr::value));
        let desc = optional_str(field.description());
        let ty = type_label(&field.ty);
        let split_words = field.split_words;
        let required = field.required;

        quote! {
            static #descriptor: #private_path::Field = #private_path::Field {
                path: #path,
                ident: #ident,
                name: #name,
                split_words: #split_words,
                required: #required,
                default: #default,
                ty: #ty,
                desc: #desc,
            };
        }
    }

    fn walk_field(&self, plan: &Plan<'_>, consts: &ConstTokens) -> TokenStream {
        let private_path = &consts.private_path;
        let field = plan.field;
        let ident = field.ident();
        let descriptor = &plan.descriptor;

        match (&plan.kind, field.option()) {
            (FieldKind::Value, option) => {
                let parser = match (&field.with, option) {
                    (Some(with), Some(_)) => {
                        let with = parser_path(consts, with);
                        quote!(#private_path::optional(#with))
                    }
                    (Some(with), None) => parser_path(consts, with),
                    (None, _) => converter(consts, &field.ty),
                };

                quote! {
                    walker.value(prefix, &#descriptor, &mut self.#ident, #parser);
                }
            }
            (FieldKind::Nested { embedded }, None) => {
                quote! {
                    #private_path::Envconfig::walk(
                        &mut self.#ident,
                        walker,
                        &#descriptor.namespace(prefix, #embedded),
                    );
                }
            }
            (FieldKind::Nested { embedded }, Some(_)) => {
                quote! {
                    walker.optional(&#descriptor.namespace(prefix, #embedded), &mut self.#ident);
                }
            }
            (FieldKind::Ignored, _) => TokenStream::new(),
        }
    }

    fn describe_field(&self, plan: &Plan<'_>, consts: &ConstTokens) -> TokenStream {
        let private_path = &consts.private_path;
        let field = plan.field;
        let descriptor = &plan.descriptor;

        match &plan.kind {
            FieldKind::Value => {
                quote! {
                    vars.push(#private_path::Var::new(prefix, &#descriptor));
                }
            }
            FieldKind::Nested { embedded } => {
                let ty = field.option().unwrap_or(&field.ty);
                quote! {
                    <#ty as #private_path::Envconfig>::describe(
                        &#descriptor.namespace(prefix, #embedded),
                        vars,
                    );
                }
            }
            FieldKind::Ignored => TokenStream::new(),
        }
    }

    fn get_fields(&self) -> &Fields<EnvconfigFieldReceiver> {
        let Data::Struct(fields) = &self.data else {
            panic!("we've asserted that it's a struct");
        };

        fields
    }
}

/// Builds the conversion for `ty`, recursing through collections and
/// options down to scalar types.
fn converter(consts: &ConstTokens, ty: &Type) -> TokenStream {
    let private_path = &consts.private_path;

    if is_bytes(ty) {
        return quote!(#private_path::bytes);
    }

    if let Some(inner) = parse_option(ty) {
        let inner = converter(consts, inner);
        return quote!(#private_path::optional(#inner));
    }

    if let Some(element) = parse_sequence(ty) {
        let element = converter(consts, element);
        return quote!(#private_path::sequence::<#ty, _, _>(#element));
    }

    if let Some((key, value)) = parse_map(ty) {
        let key = converter(consts, key);
        let value = converter(consts, value);
        return quote!(#private_path::map::<#ty, _, _, _, _>(#key, #value));
    }

    quote! {
        |raw: &str| (&&&&#private_path::Probe::<#ty>::new()).convert(raw)
    }
}

fn parser_path(consts: &ConstTokens, expr_path: &ExprPath) -> TokenStream {
    let private_path = &consts.private_path;

    if let Some(ident) = expr_path.path.get_ident() {
        let ident_str = ident.to_string();

        match ident_str.as_str() {
            "from_str" => return quote!(#private_path::from_str),
            "into" => return quote!(#private_path::into),
            _ => {}
        }
    }

    quote!(#expr_path)
}

fn optional_str(value: Option<String>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}
