//! Cache key construction shared by the proxy handlers.

/// Separator between the namespace tag and each parameter.
pub const KEY_DELIMITER: char = ':';

/// Builds a cache key from a namespace tag and parameter values.
///
/// Parameters are trimmed and embedded verbatim (case preserved, no hashing),
/// so identical requests yield byte-identical keys.
///
/// ```
/// use media_proxy::cache::cache_key;
///
/// assert_eq!(cache_key("tmdb:search", &["MOVIE", " matrix "]), "tmdb:search:MOVIE:matrix");
/// ```
pub fn cache_key(namespace: &str, params: &[&str]) -> String {
    let capacity = namespace.len() + params.iter().map(|p| p.len() + 1).sum::<usize>();
    let mut key = String::with_capacity(capacity);
    key.push_str(namespace);
    for param in params {
        key.push(KEY_DELIMITER);
        key.push_str(param.trim());
    }
    key
}
