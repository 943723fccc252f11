/// Route types shared by the tree builder and the resolver
///
/// A [`RouteDeclaration`] is the flat input record; a [`RouteNode`] is the same
/// declaration once it has a position in the tree. Neither is mutated after construction.

use std::fmt;
use std::sync::Arc;

// ============================================================================
// Custom Render
// ============================================================================

/// Callback that renders a route on its own, bypassing the handler
///
/// Receives the full navigation path. Cheap to clone (shared callback).
#[derive(Clone)]
pub struct CustomRender(Arc<dyn Fn(&str) + Send + Sync>);

impl CustomRender {
    /// Wraps a render callback
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_router::CustomRender;
    ///
    /// let render = CustomRender::new(|path| println!("rendering {path}"));
    /// render.call("/custom");
    /// ```
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// Invokes the callback with the navigation path
    pub fn call(&self, path: &str) {
        (self.0)(path)
    }

    /// Whether both values share the same underlying callback
    pub fn ptr_eq(&self, other: &CustomRender) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRender(..)")
    }
}

// ============================================================================
// Route Target
// ============================================================================

/// How a matched route gets rendered
///
/// `Custom` takes priority over the handler at match time; the handler is kept so the
/// route still identifies the component it was declared on.
#[derive(Debug, Clone)]
pub enum RouteTarget<H> {
    /// Render through the generic render capability using this handler
    Handler(H),
    /// Render through the route's own callback
    Custom { handler: H, render: CustomRender },
}

impl<H> RouteTarget<H> {
    /// The handler this route was declared with
    pub fn handler(&self) -> &H {
        match self {
            RouteTarget::Handler(handler) | RouteTarget::Custom { handler, .. } => handler,
        }
    }

    /// The custom render callback, if any
    pub fn custom_render(&self) -> Option<&CustomRender> {
        match self {
            RouteTarget::Handler(_) => None,
            RouteTarget::Custom { render, .. } => Some(render),
        }
    }
}

// ============================================================================
// Route Declaration
// ============================================================================

/// A single flat route declaration, before tree assembly
#[derive(Debug, Clone)]
pub struct RouteDeclaration<H> {
    /// Absolute path, e.g. "/docs/api"
    pub path: String,
    /// Opaque handler reference
    pub handler: H,
    /// Route to redirect to when no path is supplied
    pub is_default: bool,
    /// Optional render callback that overrides the handler
    pub render: Option<CustomRender>,
}

impl<H> RouteDeclaration<H> {
    /// Creates a declaration rendered through `handler`
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_router::RouteDeclaration;
    ///
    /// let decl = RouteDeclaration::new("/docs", "docs-page").with_default();
    /// assert_eq!(decl.path, "/docs");
    /// assert!(decl.is_default);
    /// ```
    pub fn new(path: impl Into<String>, handler: H) -> Self {
        Self {
            path: path.into(),
            handler,
            is_default: false,
            render: None,
        }
    }

    /// Marks this declaration as the default route
    pub fn with_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Attaches a custom render callback
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.render = Some(CustomRender::new(render));
        self
    }

    /// Attaches an existing custom render callback
    pub fn with_custom_render(mut self, render: CustomRender) -> Self {
        self.render = Some(render);
        self
    }

    /// Converts into a childless node
    pub fn into_node(self) -> RouteNode<H> {
        let target = match self.render {
            Some(render) => RouteTarget::Custom {
                handler: self.handler,
                render,
            },
            None => RouteTarget::Handler(self.handler),
        };

        RouteNode {
            path: self.path,
            target,
            is_default: self.is_default,
            children: Vec::new(),
        }
    }
}

// ============================================================================
// Route Node
// ============================================================================

/// A route positioned in the tree
///
/// `path` is always the absolute path from the declaration, never derived from the
/// node's position.
#[derive(Debug, Clone)]
pub struct RouteNode<H> {
    pub path: String,
    pub target: RouteTarget<H>,
    pub is_default: bool,
    pub children: Vec<RouteNode<H>>,
}

impl<H> RouteNode<H> {
    /// Creates a childless node rendered through `handler`
    pub fn new(path: impl Into<String>, handler: H) -> Self {
        RouteDeclaration::new(path, handler).into_node()
    }

    /// Sets the children (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_router::RouteNode;
    ///
    /// let docs = RouteNode::new("/docs", "docs")
    ///     .with_children([RouteNode::new("/guide", "guide")]);
    /// assert!(docs.has_children());
    /// ```
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteNode<H>>,
    {
        self.children = children.into_iter().collect();
        self
    }

    /// Attaches a custom render callback, keeping the handler
    pub fn with_render<F>(self, render: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.with_custom_render(CustomRender::new(render))
    }

    /// Attaches an existing custom render callback, keeping the handler
    pub fn with_custom_render(self, render: CustomRender) -> Self {
        let handler = match self.target {
            RouteTarget::Handler(handler) | RouteTarget::Custom { handler, .. } => handler,
        };
        Self {
            target: RouteTarget::Custom { handler, render },
            ..self
        }
    }

    /// Marks this node as the default route
    pub fn with_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn handler(&self) -> &H {
        self.target.handler()
    }

    pub fn custom_render(&self) -> Option<&CustomRender> {
        self.target.custom_render()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Finds the first default route, depth-first in declaration order
///
/// # Examples
///
/// ```
/// use wayfinder_router::{find_default, RouteNode};
///
/// let forest = vec![
///     RouteNode::new("/about", "about"),
///     RouteNode::new("/docs", "docs")
///         .with_children([RouteNode::new("/docs/intro", "intro").with_default()]),
/// ];
/// assert_eq!(find_default(&forest).map(|n| n.path.as_str()), Some("/docs/intro"));
/// ```
pub fn find_default<H>(forest: &[RouteNode<H>]) -> Option<&RouteNode<H>> {
    forest.iter().find_map(|node| {
        if node.is_default {
            Some(node)
        } else {
            find_default(&node.children)
        }
    })
}
