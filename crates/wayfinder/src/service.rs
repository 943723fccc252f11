// File: src/service.rs
// Purpose: Entry point that builds the route forest and owns the running dispatcher

use std::sync::{Arc, OnceLock};
use wayfinder_router::{build_from_registry, RouteNode, RouteRegistry};

use crate::dispatcher::{DispatchContext, Dispatcher};
use crate::error::RouterError;
use crate::navigation::NavigationOptions;
use crate::registry::ComponentRef;

/// Inputs for creating a [`RouterService`]
///
/// Exactly one of `routes` (for [`RouterService::of`]) or `components`
/// (for [`RouterService::from_components`]) is expected.
#[derive(Clone)]
pub struct RouterOptions {
    pub routes: Option<Vec<RouteNode<ComponentRef>>>,
    pub components: Option<Vec<ComponentRef>>,
    pub error_route: ComponentRef,
    pub context: DispatchContext,
}

impl RouterOptions {
    pub fn new(error_route: impl Into<ComponentRef>, context: DispatchContext) -> Self {
        Self {
            routes: None,
            components: None,
            error_route: error_route.into(),
            context,
        }
    }

    /// Sets explicit routes (functional builder)
    pub fn with_routes(mut self, routes: Vec<RouteNode<ComponentRef>>) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Sets the components to build routes from (functional builder)
    pub fn with_components<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ComponentRef>,
    {
        self.components = Some(components.into_iter().map(Into::into).collect());
        self
    }
}

/// Router service: holds the forest until `init()` starts dispatching
pub struct RouterService {
    routes: Arc<[RouteNode<ComponentRef>]>,
    error_route: ComponentRef,
    context: DispatchContext,
    dispatcher: OnceLock<Arc<Dispatcher>>,
}

impl RouterService {
    /// Creates a service from explicit routes
    pub fn of(options: RouterOptions) -> Result<Self, RouterError> {
        let routes = options.routes.ok_or(RouterError::MissingRoutes)?;
        Ok(Self::with_forest(routes, options.error_route, options.context))
    }

    /// Creates a service by building routes from registered components
    ///
    /// Components without a route descriptor are skipped.
    pub fn from_components<R>(options: RouterOptions, registry: &R) -> Result<Self, RouterError>
    where
        R: RouteRegistry<ComponentRef> + ?Sized,
    {
        let components = options.components.ok_or(RouterError::MissingComponents)?;
        let routes = build_from_registry(components, registry);
        tracing::debug!(roots = routes.len(), "built route forest from components");
        Ok(Self::with_forest(routes, options.error_route, options.context))
    }

    fn with_forest(
        routes: Vec<RouteNode<ComponentRef>>,
        error_route: ComponentRef,
        context: DispatchContext,
    ) -> Self {
        Self {
            routes: routes.into(),
            error_route,
            context,
            dispatcher: OnceLock::new(),
        }
    }

    pub fn routes(&self) -> &[RouteNode<ComponentRef>] {
        &self.routes
    }

    /// Starts the dispatcher: subscribes to navigation and renders the current path
    ///
    /// Calling `init()` again is a no-op returning the running dispatcher.
    pub fn init(&self) -> Arc<Dispatcher> {
        let mut created = false;
        let dispatcher = Arc::clone(self.dispatcher.get_or_init(|| {
            created = true;
            Arc::new(Dispatcher::new(
                Arc::clone(&self.routes),
                self.error_route.clone(),
                self.context.clone(),
            ))
        }));

        if created {
            if let Err(err) = dispatcher.init() {
                tracing::debug!(%err, "initial navigation handled with error");
            }
        }
        dispatcher
    }

    /// Navigates to `path` through the running dispatcher
    pub fn route(&self, path: &str) -> Result<(), RouterError> {
        self.route_with(path, &NavigationOptions::new())
    }

    pub fn route_with(&self, path: &str, options: &NavigationOptions) -> Result<(), RouterError> {
        let dispatcher = self.dispatcher.get().ok_or(RouterError::NotInitialized)?;
        dispatcher.route(path, options);
        Ok(())
    }

    pub fn dispatcher(&self) -> Option<&Arc<Dispatcher>> {
        self.dispatcher.get()
    }
}
