/// Navigation strategies
///
/// Both strategies implement [`NavigationStrategy`]; the dispatcher only ever sees the trait.
///
/// - [`NavigationApiStrategy`] navigates through the source and reacts to interceptable
///   `navigate` events.
/// - [`HistoryStrategy`] records entries with `push_state` and reacts to `popstate`
///   traversals. Pushing a state emits no event, so its own navigations are handed to the
///   handlers directly.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};

use super::{NavigateEvent, NavigationKind, NavigationOptions, NavigationSource};

/// Callback receiving the path (and options) a navigation should render
pub type NavigationHandler = Arc<dyn Fn(&str, &NavigationOptions) + Send + Sync>;

/// A way of performing and observing navigations
pub trait NavigationStrategy: Send + Sync {
    /// Requests navigation to `path`
    fn route(&self, path: &str, options: &NavigationOptions);

    /// Registers a handler for navigations this strategy reacts to
    fn listen(&self, handler: NavigationHandler);

    /// The navigation state this strategy drives
    fn source(&self) -> &Arc<dyn NavigationSource>;
}

/// Prefixes a missing leading slash
///
/// # Examples
///
/// ```
/// use wayfinder::navigation::strategy::normalize_destination;
///
/// assert_eq!(normalize_destination("docs"), "/docs");
/// assert_eq!(normalize_destination("/docs"), "/docs");
/// ```
pub fn normalize_destination(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}

// ============================================================================
// Navigation API
// ============================================================================

/// Strategy driven by interceptable `navigate` events
pub struct NavigationApiStrategy {
    source: Arc<dyn NavigationSource>,
}

impl NavigationApiStrategy {
    pub fn new(source: Arc<dyn NavigationSource>) -> Self {
        Self { source }
    }
}

impl NavigationStrategy for NavigationApiStrategy {
    fn route(&self, path: &str, options: &NavigationOptions) {
        let destination = normalize_destination(path);
        tracing::debug!(path = %destination, "navigating");
        self.source.navigate_to(&destination, options);
    }

    fn listen(&self, handler: NavigationHandler) {
        self.source.subscribe(Arc::new(move |event: &NavigateEvent| {
            if event.kind != NavigationKind::Navigate || !event.should_intercept() {
                tracing::trace!(path = %event.path, "navigation not intercepted");
                return;
            }
            handler(&event.path, &event.options);
        }));
    }

    fn source(&self) -> &Arc<dyn NavigationSource> {
        &self.source
    }
}

// ============================================================================
// History API
// ============================================================================

/// Strategy driven by `push_state` and `popstate` traversals
pub struct HistoryStrategy {
    source: Arc<dyn NavigationSource>,
    handlers: Mutex<Vec<NavigationHandler>>,
}

impl HistoryStrategy {
    pub fn new(source: Arc<dyn NavigationSource>) -> Self {
        Self {
            source,
            handlers: Mutex::new(Vec::new()),
        }
    }
}

impl NavigationStrategy for HistoryStrategy {
    fn route(&self, path: &str, options: &NavigationOptions) {
        let destination = normalize_destination(path);
        tracing::debug!(path = %destination, "pushing history state");
        self.source.push_state(&destination);

        let handlers = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for handler in handlers {
            handler(&destination, options);
        }
    }

    fn listen(&self, handler: NavigationHandler) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&handler));

        self.source.subscribe(Arc::new(move |event: &NavigateEvent| {
            if event.kind == NavigationKind::PopState {
                handler(&event.path, &NavigationOptions::default());
            }
        }));
    }

    fn source(&self) -> &Arc<dyn NavigationSource> {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationHistory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    type Seen = Arc<Mutex<Vec<(String, Option<String>)>>>;

    fn recorder() -> (Seen, NavigationHandler) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler: NavigationHandler = Arc::new(move |path: &str, options: &NavigationOptions| {
            sink.lock()
                .unwrap()
                .push((path.to_string(), options.message().map(str::to_string)));
        });
        (seen, handler)
    }

    #[rstest]
    #[case("docs", "/docs")]
    #[case("/docs", "/docs")]
    #[case("docs/api", "/docs/api")]
    #[case("", "/")]
    fn test_normalize_destination(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_destination(input), expected);
    }

    #[test]
    fn test_navigation_api_routes_through_source() {
        let history = Arc::new(NavigationHistory::new());
        let strategy = NavigationApiStrategy::new(history.clone());
        let (seen, handler) = recorder();
        strategy.listen(handler);

        strategy.route("docs", &NavigationOptions::new().with("message", "hi"));

        assert_eq!(history.current_path(), "/docs");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("/docs".to_string(), Some("hi".to_string()))]
        );
    }

    #[test]
    fn test_navigation_api_ignores_uninterceptable_events() {
        let history = Arc::new(NavigationHistory::new());
        let strategy = NavigationApiStrategy::new(history.clone());
        let (seen, handler) = recorder();
        strategy.listen(handler);

        let event = NavigateEvent::navigate("/x", NavigationOptions::new());
        history.dispatch(&event.clone().with_hash_change());
        history.dispatch(&event.clone().with_download("file.zip"));
        history.dispatch(&event.not_interceptable());
        history.dispatch(&NavigateEvent::pop_state("/y"));

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_history_route_pushes_and_notifies() {
        let history = Arc::new(NavigationHistory::starting_at("/"));
        let strategy = HistoryStrategy::new(history.clone());
        let (seen, handler) = recorder();
        strategy.listen(handler);

        strategy.route("about", &NavigationOptions::new());

        assert_eq!(history.entries(), vec!["/", "/about"]);
        assert_eq!(*seen.lock().unwrap(), vec![("/about".to_string(), None)]);
    }

    #[test]
    fn test_history_reacts_to_pop_state_only() {
        let history = Arc::new(NavigationHistory::starting_at("/a"));
        history.push_state("/b");
        let strategy = HistoryStrategy::new(history.clone());
        let (seen, handler) = recorder();
        strategy.listen(handler);

        history.navigate_to("/ignored", &NavigationOptions::new());
        history.back();

        assert_eq!(*seen.lock().unwrap(), vec![("/b".to_string(), None)]);
    }
}
