/// Navigation state, events and the strategies that react to them
///
/// [`NavigationSource`] is the explicit replacement for ambient browser navigation
/// state. [`NavigationHistory`] is an in-memory source backed by an entry list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub mod strategy;

pub use strategy::{HistoryStrategy, NavigationApiStrategy, NavigationHandler, NavigationStrategy};

// ============================================================================
// Options & Events
// ============================================================================

/// String key/value options passed along with a navigation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationOptions(HashMap<String, String>);

impl NavigationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option (functional builder)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The "message" option, used by the error route
    pub fn message(&self) -> Option<&str> {
        self.get("message")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What kind of navigation produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// A navigation request that can be intercepted (Navigation API `navigate`)
    Navigate,
    /// A traversal through the session history (`popstate`)
    PopState,
}

/// A navigation event delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateEvent {
    pub kind: NavigationKind,
    /// Destination path
    pub path: String,
    pub options: NavigationOptions,
    pub can_intercept: bool,
    pub hash_change: bool,
    /// File name when the navigation is a download
    pub download_request: Option<String>,
}

impl NavigateEvent {
    /// An interceptable same-document navigation to `path`
    pub fn navigate(path: impl Into<String>, options: NavigationOptions) -> Self {
        Self {
            kind: NavigationKind::Navigate,
            path: path.into(),
            options,
            can_intercept: true,
            hash_change: false,
            download_request: None,
        }
    }

    /// A history traversal that landed on `path`
    pub fn pop_state(path: impl Into<String>) -> Self {
        Self {
            kind: NavigationKind::PopState,
            ..Self::navigate(path, NavigationOptions::default())
        }
    }

    pub fn with_hash_change(mut self) -> Self {
        self.hash_change = true;
        self
    }

    pub fn with_download(mut self, filename: impl Into<String>) -> Self {
        self.download_request = Some(filename.into());
        self
    }

    pub fn not_interceptable(mut self) -> Self {
        self.can_intercept = false;
        self
    }

    /// Whether the router should handle this navigation itself
    pub fn should_intercept(&self) -> bool {
        self.can_intercept && !self.hash_change && self.download_request.is_none()
    }
}

/// Subscriber callback for navigation events
pub type NavigationListener = Arc<dyn Fn(&NavigateEvent) + Send + Sync>;

// ============================================================================
// Navigation Source
// ============================================================================

/// Capability exposing navigation state and navigation requests
pub trait NavigationSource: Send + Sync {
    /// Path of the current entry, or "" when there is none
    fn current_path(&self) -> String;

    /// Path of the entry before the current one, or "" when there is none
    fn previous_path(&self) -> String;

    fn subscribe(&self, listener: NavigationListener);

    /// Navigates to `path`, notifying subscribers with a [`NavigationKind::Navigate`] event
    fn navigate_to(&self, path: &str, options: &NavigationOptions);

    /// Records a new entry without notifying subscribers
    fn push_state(&self, path: &str);
}

/// In-memory navigation source backed by an entry list
///
/// Listeners are called without holding any lock, so they may navigate again.
///
/// # Examples
///
/// ```
/// use wayfinder::{NavigationHistory, NavigationOptions, NavigationSource};
///
/// let history = NavigationHistory::new();
/// history.navigate_to("/docs", &NavigationOptions::new());
/// history.navigate_to("/docs/api", &NavigationOptions::new());
///
/// assert_eq!(history.current_path(), "/docs/api");
/// assert_eq!(history.previous_path(), "/docs");
/// ```
#[derive(Default)]
pub struct NavigationHistory {
    entries: Mutex<Vec<String>>,
    listeners: Mutex<Vec<NavigationListener>>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a single entry
    pub fn starting_at(path: impl Into<String>) -> Self {
        let path: String = path.into();
        let history = Self::new();
        history.push_state(&path);
        history
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Goes back one entry, notifying subscribers with a pop-state event
    ///
    /// Returns false when there is no entry to go back to.
    pub fn back(&self) -> bool {
        let current = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            if entries.len() < 2 {
                return false;
            }
            entries.pop();
            entries.last().cloned().unwrap_or_default()
        };

        self.dispatch(&NavigateEvent::pop_state(current));
        true
    }

    /// Delivers an event to every subscriber
    pub fn dispatch(&self, event: &NavigateEvent) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for listener in listeners {
            listener(event);
        }
    }

    fn entry_from_end(&self, offset: usize) -> String {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .len()
            .checked_sub(offset + 1)
            .and_then(|index| entries.get(index))
            .cloned()
            .unwrap_or_default()
    }
}

impl NavigationSource for NavigationHistory {
    fn current_path(&self) -> String {
        self.entry_from_end(0)
    }

    fn previous_path(&self) -> String {
        self.entry_from_end(1)
    }

    fn subscribe(&self, listener: NavigationListener) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    fn navigate_to(&self, path: &str, options: &NavigationOptions) {
        self.push_state(path);
        self.dispatch(&NavigateEvent::navigate(path, options.clone()));
    }

    fn push_state(&self, path: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
