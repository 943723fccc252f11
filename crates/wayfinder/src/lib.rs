// Wayfinder - navigation dispatch for single-page apps
// Builds a route forest once, then resolves and renders every navigation against it

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod navigation;
pub mod registry;
pub mod render;
pub mod service;

// Re-export framework types
pub use config::RouterConfig;
pub use dispatcher::{Dispatch, DispatchContext, Dispatcher};
pub use error::RouterError;
pub use navigation::{
    HistoryStrategy, NavigateEvent, NavigationApiStrategy, NavigationHandler, NavigationHistory,
    NavigationKind, NavigationListener, NavigationOptions, NavigationSource, NavigationStrategy,
};
pub use registry::{ComponentRef, ComponentRegistry, RenderDescriptor, RenderRegistry};
pub use render::{MarkupRegion, RenderRequest, RenderSink};
pub use service::{RouterOptions, RouterService};

// Re-export the core router
pub use wayfinder_router as router;
pub use wayfinder_router::{build_forest, resolve, RouteDeclaration, RouteNode};
