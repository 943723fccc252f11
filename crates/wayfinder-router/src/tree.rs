/// Route tree assembly from flat declarations
///
/// Parent/child links are inferred from path strings alone: a declaration attaches to
/// the declaration whose path equals its [`parent_path`]. Two policies apply and both
/// are silent:
///
/// - **Duplicates**: a later declaration with the same path replaces the earlier one
///   completely, keeping the earlier one's position.
/// - **Orphans**: a declaration whose computed parent was never declared goes to the top level.

use std::collections::HashMap;

use crate::path::parent_path;
use crate::route::{RouteDeclaration, RouteNode};

/// Capability that describes route metadata attached to a handler reference
///
/// Stands in for reading route descriptors off registered components.
pub trait RouteRegistry<H> {
    /// Returns the route declaration attached to `handler`, if any
    fn describe(&self, handler: &H) -> Option<RouteDeclaration<H>>;
}

/// Builds a forest from flat route declarations
///
/// Declarations at `/x` (one segment) are always top-level, even if `/` itself is
/// declared. The returned forest may be empty.
///
/// # Examples
///
/// ```
/// use wayfinder_router::{build_forest, RouteDeclaration};
///
/// let forest = build_forest(vec![
///     RouteDeclaration::new("/", "home"),
///     RouteDeclaration::new("/docs", "docs"),
///     RouteDeclaration::new("/docs/guide", "guide"),
/// ]);
///
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[1].children[0].path, "/docs/guide");
/// ```
pub fn build_forest<H, I>(declarations: I) -> Vec<RouteNode<H>>
where
    I: IntoIterator<Item = RouteDeclaration<H>>,
{
    // Insertion-ordered map: slots keep first-seen order, index maps path → slot
    let mut slots: Vec<Option<RouteNode<H>>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for declaration in declarations {
        match index.get(&declaration.path) {
            Some(&slot) => {
                tracing::debug!(path = %declaration.path, "duplicate route declaration, last one wins");
                slots[slot] = Some(declaration.into_node());
            }
            None => {
                index.insert(declaration.path.clone(), slots.len());
                slots.push(Some(declaration.into_node()));
            }
        }
    }

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];

    for (slot, node) in slots.iter().enumerate() {
        let Some(node) = node else { continue };
        let parent = parent_path(&node.path);

        match index.get(&*parent) {
            Some(&parent_slot) if parent != "/" => children[parent_slot].push(slot),
            Some(_) => roots.push(slot),
            None => {
                tracing::debug!(path = %node.path, parent = %parent, "orphaned route promoted to top level");
                roots.push(slot);
            }
        }
    }

    roots
        .into_iter()
        .filter_map(|slot| assemble(slot, &mut slots, &children))
        .collect()
}

/// Moves the node at `slot` out of `slots`, attaching its children recursively
///
/// Parents always have fewer segments than their children, so the recursion terminates.
fn assemble<H>(
    slot: usize,
    slots: &mut [Option<RouteNode<H>>],
    children: &[Vec<usize>],
) -> Option<RouteNode<H>> {
    let mut node = slots[slot].take()?;
    node.children = children[slot]
        .iter()
        .filter_map(|&child| assemble(child, slots, children))
        .collect();
    Some(node)
}

/// Builds a forest from handler references via a [`RouteRegistry`]
///
/// References the registry cannot describe are skipped.
///
/// # Examples
///
/// ```
/// use wayfinder_router::{build_from_registry, RouteDeclaration, RouteRegistry};
///
/// struct Pages;
///
/// impl RouteRegistry<&'static str> for Pages {
///     fn describe(&self, handler: &&'static str) -> Option<RouteDeclaration<&'static str>> {
///         match *handler {
///             "about" => Some(RouteDeclaration::new("/about", "about")),
///             _ => None,
///         }
///     }
/// }
///
/// let forest = build_from_registry(["about", "widget"], &Pages);
/// assert_eq!(forest.len(), 1);
/// ```
pub fn build_from_registry<H, I, R>(handlers: I, registry: &R) -> Vec<RouteNode<H>>
where
    I: IntoIterator<Item = H>,
    R: RouteRegistry<H> + ?Sized,
{
    build_forest(
        handlers
            .into_iter()
            .filter_map(|handler| registry.describe(&handler)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths<H>(nodes: &[RouteNode<H>]) -> Vec<&str> {
        nodes.iter().map(|n| n.path.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let forest = build_forest(Vec::<RouteDeclaration<()>>::new());
        assert!(forest.is_empty());
    }

    #[test]
    fn test_flat_routes_stay_top_level() {
        let forest = build_forest(vec![
            RouteDeclaration::new("/", 0),
            RouteDeclaration::new("/about", 1),
            RouteDeclaration::new("/contact", 2),
        ]);
        assert_eq!(paths(&forest), vec!["/", "/about", "/contact"]);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_children_follow_declaration_order() {
        let forest = build_forest(vec![
            RouteDeclaration::new("/docs/api", 1),
            RouteDeclaration::new("/docs", 0),
            RouteDeclaration::new("/docs/guide", 2),
        ]);
        assert_eq!(paths(&forest), vec!["/docs"]);
        assert_eq!(paths(&forest[0].children), vec!["/docs/api", "/docs/guide"]);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let forest = build_forest(vec![
            RouteDeclaration::new("/a", 1),
            RouteDeclaration::new("/b", 2),
            RouteDeclaration::new("/a", 3).with_default(),
        ]);
        assert_eq!(paths(&forest), vec!["/a", "/b"]);
        assert_eq!(*forest[0].handler(), 3);
        assert!(forest[0].is_default);
    }

    #[test]
    fn test_duplicate_replaces_custom_render() {
        let forest = build_forest(vec![
            RouteDeclaration::new("/a", 1).with_render(|_| {}),
            RouteDeclaration::new("/a", 2),
        ]);
        assert!(forest[0].custom_render().is_none());
    }

    #[test]
    fn test_grandchild_of_orphan_attaches_to_orphan() {
        let forest = build_forest(vec![
            RouteDeclaration::new("/x/y", 1),
            RouteDeclaration::new("/x/y/z", 2),
        ]);
        assert_eq!(paths(&forest), vec!["/x/y"]);
        assert_eq!(paths(&forest[0].children), vec!["/x/y/z"]);
    }
}
