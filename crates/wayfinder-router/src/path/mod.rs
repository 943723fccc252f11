/// Path utilities for tree building and route resolution
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
///
/// These helpers look only at the path string. They know nothing about which routes
/// were actually declared, so `parent_path` is a structural guess, not a lookup.

use std::borrow::Cow;

/// Returns the remainder of `path` once `prefix` has been stripped
///
/// An empty remainder becomes `/`, so the result is always usable as a path.
/// Callers check `path.starts_with(prefix)` first; when they don't, `path` is returned as-is.
///
/// # Examples
///
/// ```
/// use wayfinder_router::path::child_path;
///
/// assert_eq!(child_path("/docs/api", "/docs"), "/api");
/// assert_eq!(child_path("/docs", "/docs"), "/");
/// assert_eq!(child_path("/docsapi", "/docs"), "api");
/// ```
pub fn child_path<'a>(path: &'a str, prefix: &str) -> &'a str {
    match path.strip_prefix(prefix) {
        Some("") => "/",
        Some(rest) => rest,
        None => path,
    }
}

/// Derives the parent path from a path string
///
/// Splits on `/`, discards empty segments, drops the last one and re-joins with a
/// leading `/`. Paths with zero or one segment have `/` as their parent.
///
/// Returns `Cow::Borrowed("/")` for top-level paths (zero allocations).
///
/// # Examples
///
/// ```
/// use wayfinder_router::path::parent_path;
///
/// assert_eq!(parent_path("/docs/api/methods"), "/docs/api");
/// assert_eq!(parent_path("/docs"), "/");
/// assert_eq!(parent_path("/docs//api/"), "/docs");
/// assert_eq!(parent_path(""), "/");
/// ```
pub fn parent_path(path: &str) -> Cow<'static, str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.split_last() {
        Some((_, parents)) if !parents.is_empty() => Cow::Owned(format!("/{}", parents.join("/"))),
        _ => Cow::Borrowed("/"),
    }
}

/// Checks whether a path has at most one non-empty segment
///
/// # Examples
///
/// ```
/// use wayfinder_router::path::is_leaf_segment;
///
/// assert!(is_leaf_segment("/"));
/// assert!(is_leaf_segment("/about"));
/// assert!(is_leaf_segment("/about/"));
/// assert!(!is_leaf_segment("/docs/api"));
/// ```
pub fn is_leaf_segment(path: &str) -> bool {
    path.split('/').filter(|s| !s.is_empty()).nth(1).is_none()
}
