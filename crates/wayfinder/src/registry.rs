// File: src/registry.rs
// Purpose: Component registration store for route and render descriptors

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use wayfinder_router::{RouteDeclaration, RouteRegistry};

/// Opaque reference to a registered component
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentRef(Cow<'static, str>);

impl ComponentRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ComponentRef {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a component is placed in the content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDescriptor {
    /// Element name the component is rendered as, e.g. "docs-page"
    pub selector: String,
}

impl RenderDescriptor {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

/// Capability that looks up render descriptors for components
pub trait RenderRegistry: Send + Sync {
    fn render_descriptor(&self, component: &ComponentRef) -> Option<RenderDescriptor>;

    fn has_render_descriptor(&self, component: &ComponentRef) -> bool {
        self.render_descriptor(component).is_some()
    }
}

/// In-memory registry of route and render descriptors keyed by component
///
/// A component can carry a route descriptor, a render descriptor, or both. The route
/// descriptor's handler does not have to be the component it is attached to.
///
/// # Examples
///
/// ```
/// use wayfinder::{ComponentRegistry, RenderRegistry};
///
/// let registry = ComponentRegistry::new()
///     .with_component("docs", "docs-page")
///     .with_route("docs", "/docs");
///
/// assert!(registry.has_route_descriptor(&"docs".into()));
/// assert_eq!(registry.render_descriptor(&"docs".into()).unwrap().selector, "docs-page");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    routes: HashMap<ComponentRef, RouteDeclaration<ComponentRef>>,
    renders: HashMap<ComponentRef, RenderDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a render descriptor (functional builder)
    pub fn with_component(mut self, component: impl Into<ComponentRef>, selector: impl Into<String>) -> Self {
        self.register_component(component, selector);
        self
    }

    /// Attaches a route at `path` handled by the component itself (functional builder)
    pub fn with_route(self, component: impl Into<ComponentRef>, path: impl Into<String>) -> Self {
        let component = component.into();
        let declaration = RouteDeclaration::new(path, component.clone());
        self.with_declaration(component, declaration)
    }

    /// Attaches a full route declaration to a component (functional builder)
    pub fn with_declaration(
        mut self,
        component: impl Into<ComponentRef>,
        declaration: RouteDeclaration<ComponentRef>,
    ) -> Self {
        self.register_route(component, declaration);
        self
    }

    pub fn register_component(&mut self, component: impl Into<ComponentRef>, selector: impl Into<String>) {
        self.renders
            .insert(component.into(), RenderDescriptor::new(selector));
    }

    pub fn register_route(
        &mut self,
        component: impl Into<ComponentRef>,
        declaration: RouteDeclaration<ComponentRef>,
    ) {
        self.routes.insert(component.into(), declaration);
    }

    pub fn has_route_descriptor(&self, component: &ComponentRef) -> bool {
        self.routes.contains_key(component)
    }

    pub fn route_descriptor(&self, component: &ComponentRef) -> Option<&RouteDeclaration<ComponentRef>> {
        self.routes.get(component)
    }
}

impl RouteRegistry<ComponentRef> for ComponentRegistry {
    fn describe(&self, handler: &ComponentRef) -> Option<RouteDeclaration<ComponentRef>> {
        self.routes.get(handler).cloned()
    }
}

impl RenderRegistry for ComponentRegistry {
    fn render_descriptor(&self, component: &ComponentRef) -> Option<RenderDescriptor> {
        self.renders.get(component).cloned()
    }
}
