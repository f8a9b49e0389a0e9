use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

const SEQUENCES: &[&str] = &["Vec", "VecDeque", "HashSet", "BTreeSet"];
const MAPS: &[&str] = &["HashMap", "BTreeMap"];

/// Type arguments of `ty` when its last path segment is one of `names`.
fn generic_args<'a>(ty: &'a Type, names: &[&str]) -> Option<Vec<&'a Type>> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if !names.iter().any(|name| segment.ident == name) {
        return None;
    }

    let PathArguments::AngleBracketed(generic_args) = &segment.arguments else {
        return None;
    };

    generic_args
        .args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(Some(ty)),
            GenericArgument::Lifetime(_) => None,
            _ => Some(None),
        })
        .collect()
}

pub fn parse_option(ty: &Type) -> Option<&Type> {
    match generic_args(ty, &["Option"])?.as_slice() {
        [inner] => Some(*inner),
        _ => None,
    }
}

pub fn parse_sequence(ty: &Type) -> Option<&Type> {
    match generic_args(ty, SEQUENCES)?.as_slice() {
        [element] => Some(*element),
        _ => None,
    }
}

pub fn parse_map(ty: &Type) -> Option<(&Type, &Type)> {
    match generic_args(ty, MAPS)?.as_slice() {
        [key, value] => Some((*key, *value)),
        // HashMap<K, V, S>
        [key, value, _] => Some((*key, *value)),
        _ => None,
    }
}

/// `Vec<u8>` binds the raw bytes of the value.
pub fn is_bytes(ty: &Type) -> bool {
    matches!(
        generic_args(ty, &["Vec"]).as_deref(),
        Some([Type::Path(elem)]) if elem.path.is_ident("u8")
    )
}

/// The type as written, without the spaces `quote` puts between tokens.
pub fn type_label(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
