// File: src/dispatcher.rs
// Purpose: Resolves navigation paths against the route forest and renders the result

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, error, info, warn};
use wayfinder_router::{find_default, resolve, RouteNode, RouteTarget};

use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::navigation::strategy::normalize_destination;
use crate::navigation::{NavigationOptions, NavigationStrategy};
use crate::registry::{ComponentRef, RenderRegistry};
use crate::render::{RenderRequest, RenderSink};

/// Outcome of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A component was rendered into the content region
    Rendered { component: ComponentRef, path: String },
    /// A route's custom render callback handled the path
    Custom { path: String },
    /// The error route was rendered
    ErrorPage { message: String },
    /// An empty path was redirected to the default route
    Redirected { to: String },
}

/// Capabilities the dispatcher renders through
#[derive(Clone)]
pub struct DispatchContext {
    pub strategy: Arc<dyn NavigationStrategy>,
    pub renders: Arc<dyn RenderRegistry>,
    pub sink: Arc<dyn RenderSink>,
    pub config: RouterConfig,
}

/// Owns the route forest and turns navigation paths into renders
///
/// The forest is shared read-only; dispatching never modifies it.
pub struct Dispatcher {
    forest: Arc<[RouteNode<ComponentRef>]>,
    error_route: ComponentRef,
    context: DispatchContext,
    subscribed: AtomicBool,
}

impl Dispatcher {
    pub fn new(
        forest: impl Into<Arc<[RouteNode<ComponentRef>]>>,
        error_route: impl Into<ComponentRef>,
        mut context: DispatchContext,
    ) -> Self {
        context.config = context.config.normalized();
        Self {
            forest: forest.into(),
            error_route: error_route.into(),
            context,
            subscribed: AtomicBool::new(false),
        }
    }

    pub fn forest(&self) -> &[RouteNode<ComponentRef>] {
        &self.forest
    }

    pub fn config(&self) -> &RouterConfig {
        &self.context.config
    }

    /// Wires the navigation subscription and renders the current path
    ///
    /// The subscription is made once; later calls only render the current path again.
    pub fn init(self: &Arc<Self>) -> Result<Dispatch, RouterError> {
        if !self.subscribed.swap(true, Ordering::SeqCst) {
            let dispatcher: Weak<Self> = Arc::downgrade(self);
            self.context
                .strategy
                .listen(Arc::new(move |path: &str, options: &NavigationOptions| {
                    if let Some(dispatcher) = dispatcher.upgrade() {
                        if let Err(err) = dispatcher.render(path, options) {
                            debug!(%err, "navigation handled with error");
                        }
                    }
                }));
        } else {
            debug!("dispatcher already subscribed");
        }

        let initial = self.context.strategy.source().current_path();
        self.render(&initial, &NavigationOptions::new())
    }

    /// Requests navigation through the strategy
    pub fn route(&self, path: &str, options: &NavigationOptions) {
        self.context.strategy.route(path, options);
    }

    /// Resolves `path` and renders the match
    ///
    /// - the error path renders the error route with the previous path and a message
    /// - an empty path redirects to the default route
    /// - an unmatched path redirects to the error path
    pub fn render(&self, path: &str, options: &NavigationOptions) -> Result<Dispatch, RouterError> {
        let config = &self.context.config;

        if self.is_error_path(path) {
            return self.render_error(options);
        }

        if path.is_empty() {
            if let Some(target) = self.default_path() {
                info!(to = %target, "redirecting to default route");
                self.route(&target, options);
                return Ok(Dispatch::Redirected { to: target });
            }
        }

        let node = match resolve(path, self.forest()) {
            Ok(node) => node,
            Err(not_found) => {
                warn!(path, "route not found");
                let options = NavigationOptions::new()
                    .with("message", config.render.not_found_message.as_str());
                self.route(&config.routing.error_path, &options);
                return Err(not_found.into());
            }
        };

        match &node.target {
            RouteTarget::Custom { render, .. } => {
                info!(path, route = %node.path, "rendering route with custom render function");
                render.call(path);
                Ok(Dispatch::Custom {
                    path: path.to_string(),
                })
            }
            RouteTarget::Handler(component) => self.render_component(component, path),
        }
    }

    fn render_component(&self, component: &ComponentRef, path: &str) -> Result<Dispatch, RouterError> {
        let Some(descriptor) = self.context.renders.render_descriptor(component) else {
            error!(%component, path, "component not found for path");
            return Err(RouterError::MissingRenderCapability {
                component: component.clone(),
                path: path.to_string(),
            });
        };

        debug!(%component, selector = %descriptor.selector, path, "rendering component");
        self.context.sink.replace_content(&RenderRequest {
            container: self.context.config.render.container.clone(),
            selector: descriptor.selector,
            path: path.to_string(),
            message: None,
        });

        Ok(Dispatch::Rendered {
            component: component.clone(),
            path: path.to_string(),
        })
    }

    fn render_error(&self, options: &NavigationOptions) -> Result<Dispatch, RouterError> {
        let Some(descriptor) = self.context.renders.render_descriptor(&self.error_route) else {
            error!(component = %self.error_route, "error route component not found");
            return Err(RouterError::MissingErrorRoute(self.error_route.clone()));
        };

        let message = options
            .message()
            .unwrap_or(&self.context.config.render.not_found_message)
            .to_string();
        let previous = self.context.strategy.source().previous_path();

        info!(previous = %previous, %message, "rendering error route");
        self.context.sink.replace_content(&RenderRequest {
            container: self.context.config.render.container.clone(),
            selector: descriptor.selector,
            path: previous,
            message: Some(message.clone()),
        });

        Ok(Dispatch::ErrorPage { message })
    }

    fn is_error_path(&self, path: &str) -> bool {
        !path.is_empty() && normalize_destination(path) == self.context.config.routing.error_path
    }

    fn default_path(&self) -> Option<String> {
        find_default(self.forest())
            .map(|node| node.path.clone())
            .or_else(|| self.context.config.routing.default_path.clone())
    }
}
