//! URL path joining.
//!
//! Every resource path and every request URL is built with [`url_join`],
//! so a token or endpoint with stray leading or trailing slashes never
//! produces `//` or a missing separator.
//!
//! # Example
//!
//! ```rust
//! use smis::rest::url_join;
//!
//! assert_eq!(url_join("projects", "42"), "projects/42");
//! assert_eq!(url_join("projects/", "/42"), "projects/42");
//! assert_eq!(url_join("https://svc.example.com/api", ""), "https://svc.example.com/api");
//! assert_eq!(url_join("", "projects"), "projects");
//! ```

/// Joins two URL path fragments with exactly one `/` between them.
///
/// An empty fragment contributes nothing: the other fragment is returned
/// verbatim. When both are non-empty, trailing slashes of `base` and
/// leading slashes of `segment` are dropped before joining.
#[must_use]
pub fn url_join(base: &str, segment: &str) -> String {
    if segment.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return segment.to_string();
    }

    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}
