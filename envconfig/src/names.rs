//! Derivation of external keys from field identifiers.

/// Splits an identifier into words and joins them as `UPPER_SNAKE_CASE`.
///
/// Words break on `_`, on a lower-to-upper case transition, on a
/// letter-to-digit transition, and before the last capital of an acronym
/// followed by a lowercase letter.
///
/// ```
/// use envconfig::split_words;
///
/// assert_eq!(split_words("autoSplitVar"), "AUTO_SPLIT_VAR");
/// assert_eq!(split_words("HTTPServer"), "HTTP_SERVER");
/// assert_eq!(split_words("listen_port2"), "LISTEN_PORT_2");
/// ```
pub fn split_words(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|j| chars.get(j)) {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() && c.is_ascii_digit())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(char::is_lowercase));

            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_uppercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("_")
}

/// Joins a prefix and a name into an uppercased key.
pub fn key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_uppercase()
    } else {
        format!("{prefix}_{name}").to_uppercase()
    }
}

/// Returns the ordered lookup keys for one field.
///
/// The first candidate is the prefixed key. When an explicit name is given
/// and differs from it, the bare uppercased name follows as a fallback.
///
/// ```
/// use envconfig::resolve;
///
/// assert_eq!(resolve("port", None, false, "myapp"), ["MYAPP_PORT"]);
/// assert_eq!(
///     resolve("host", Some("service_host"), false, "myapp"),
///     ["MYAPP_SERVICE_HOST", "SERVICE_HOST"]
/// );
/// ```
pub fn resolve(
    ident: &str,
    explicit: Option<&str>,
    split: bool,
    prefix: &str,
) -> Vec<String> {
    let name = match explicit {
        Some(name) => name.to_owned(),
        None if split => split_words(ident),
        None => ident.to_owned(),
    };

    let primary = key(prefix, &name);
    let mut candidates = vec![primary];

    if let Some(explicit) = explicit {
        let bare = explicit.to_uppercase();
        if bare != candidates[0] {
            candidates.push(bare);
        }
    }

    candidates
}
