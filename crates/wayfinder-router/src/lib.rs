//! # Wayfinder Router
//!
//! Route tree building and hierarchical path resolution for client-side navigation:
//! - Flat declarations assembled into a nested forest (`build_forest`)
//! - Parent/child links inferred from path strings (`/docs/api` nests under `/docs`)
//! - Exact-match-first resolution with prefix fallback (`resolve`)
//! - Custom render callbacks that take over their whole subtree
//!
//! ## Functional Approach
//!
//! - **Pure functions**: `build_forest` and `resolve` hold no state
//! - **Immutable forest**: built once, only read afterwards
//! - **Zero-copy** path remainders (`child_path` returns a slice of the input)
//!
//! ## Example
//!
//! ```
//! use wayfinder_router::{build_forest, resolve, RouteDeclaration};
//!
//! let forest = build_forest(vec![
//!     RouteDeclaration::new("/home", "home-page"),
//!     RouteDeclaration::new("/docs", "docs-page"),
//!     RouteDeclaration::new("/docs/api", "api-page"),
//! ]);
//!
//! let node = resolve("/home", &forest).unwrap();
//! assert_eq!(*node.handler(), "home-page");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod path;
mod resolve;
pub mod route;
mod tree;

pub use path::{child_path, is_leaf_segment, parent_path};
pub use resolve::{resolve, NotFound};
pub use route::{find_default, CustomRender, RouteDeclaration, RouteNode, RouteTarget};
pub use tree::{build_forest, build_from_registry, RouteRegistry};
