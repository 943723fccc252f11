// File: src/error.rs
// Purpose: Router error taxonomy

use crate::registry::ComponentRef;
use thiserror::Error;

/// Errors surfaced by the router service and the dispatcher
///
/// None of these are fatal. By the time a dispatch returns one, the dispatcher has
/// already logged it and taken its recovery action (redirect or no-op).
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    NotFound(#[from] wayfinder_router::NotFound),

    #[error("component `{component}` has no render descriptor (path `{path}`)")]
    MissingRenderCapability { component: ComponentRef, path: String },

    #[error("error route component `{0}` has no render descriptor")]
    MissingErrorRoute(ComponentRef),

    #[error("routes are required to create a router service")]
    MissingRoutes,

    #[error("components are required to create a router service")]
    MissingComponents,

    #[error("router service used before init()")]
    NotInitialized,
}
