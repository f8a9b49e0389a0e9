use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// A key to string lookup that fields are bound from.
///
/// The walker queries at most two keys per field and does not cache results,
/// so a source backed by live state may change between two lookups of the
/// same call. Use [`Env::snapshot`] when that matters.
pub trait Source {
    fn lookup(&self, key: &str) -> Option<String>;

    /// All keys the source knows about, used by
    /// [`check_disallowed`](crate::Envconfig::check_disallowed). Sources that
    /// cannot enumerate return nothing.
    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Env {
    /// Copies the current environment so every lookup sees the same state.
    pub fn snapshot() -> HashMap<String, String> {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

impl Source for Env {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn keys(&self) -> Vec<String> {
        std::env::vars_os()
            .map(|(k, _)| k.to_string_lossy().into_owned())
            .collect()
    }
}

impl<S: BuildHasher> Source for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        HashMap::keys(self).cloned().collect()
    }
}

impl Source for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).cloned().collect()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

/// A source backed by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(F);

/// Adapts a closure into a [`Source`].
///
/// ```
/// use envconfig::{Source, from_fn};
///
/// let source = from_fn(|key| (key == "APP_PORT").then(|| "8080".to_owned()));
/// assert_eq!(source.lookup("APP_PORT").as_deref(), Some("8080"));
/// assert_eq!(source.lookup("APP_HOST"), None);
/// ```
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnSource(f)
}

impl<F> Source for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_are_sources() {
        let hash = HashMap::from([("A".to_owned(), "1".to_owned())]);
        let tree = BTreeMap::from([("A".to_owned(), "1".to_owned())]);

        assert_eq!(hash.lookup("A").as_deref(), Some("1"));
        assert_eq!(tree.lookup("A").as_deref(), Some("1"));
        assert_eq!(hash.lookup("B"), None);
        assert_eq!(Source::keys(&tree), ["A"]);
    }

    #[test]
    fn env_reads_the_process_environment() {
        temp_env::with_var("ENVCONFIG_SOURCE_TEST", Some("yes"), || {
            assert_eq!(Env.lookup("ENVCONFIG_SOURCE_TEST").as_deref(), Some("yes"));
            assert!(Env.keys().iter().any(|k| k == "ENVCONFIG_SOURCE_TEST"));

            let snapshot = Env::snapshot();
            assert_eq!(
                snapshot.get("ENVCONFIG_SOURCE_TEST").map(String::as_str),
                Some("yes")
            );
        });
    }

    #[test]
    fn empty_value_is_found() {
        temp_env::with_var("ENVCONFIG_EMPTY_TEST", Some(""), || {
            assert_eq!(Env.lookup("ENVCONFIG_EMPTY_TEST").as_deref(), Some(""));
        });
    }
}
