/// Route resolution against a route forest
///
/// Two phases per sibling list:
///
/// 1. **Exact match**: first sibling whose path equals the input byte-for-byte.
///    An exact match is returned as-is, whether or not it has children.
/// 2. **Prefix match**: first sibling with children whose path prefixes the input.
///    Custom-render siblings are returned directly; otherwise the remainder is resolved
///    against the children, falling back to the sibling itself.
///
/// Siblings are never reordered, so overlapping prefixes must be declared
/// most-specific-first.

use thiserror::Error;

use crate::path::child_path;
use crate::route::RouteNode;

/// No route in the forest matches the path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path `{path}`")]
pub struct NotFound {
    pub path: String,
}

/// Resolves `path` to the most specific matching node
///
/// Pure: the forest is only read.
///
/// # Examples
///
/// ```
/// use wayfinder_router::{resolve, RouteNode};
///
/// let forest = vec![
///     RouteNode::new("/level1", 1).with_children([
///         RouteNode::new("/level2", 2).with_children([RouteNode::new("/level3", 3)]),
///     ]),
/// ];
///
/// let node = resolve("/level1/level2/level3", &forest).unwrap();
/// assert_eq!(node.path, "/level3");
/// assert!(resolve("/other", &forest).is_err());
/// ```
pub fn resolve<'a, H>(path: &str, forest: &'a [RouteNode<H>]) -> Result<&'a RouteNode<H>, NotFound> {
    find_route(path, forest).ok_or_else(|| NotFound {
        path: path.to_string(),
    })
}

fn find_route<'a, H>(path: &str, routes: &'a [RouteNode<H>]) -> Option<&'a RouteNode<H>> {
    tracing::debug!(path, candidates = routes.len(), "searching route");

    if let Some(exact) = routes.iter().find(|route| route.path == path) {
        return Some(exact);
    }

    let route = routes
        .iter()
        .find(|route| route.has_children() && path.starts_with(route.path.as_str()))?;

    if route.custom_render().is_some() {
        return Some(route);
    }

    find_route(child_path(path, &route.path), &route.children).or(Some(route))
}
