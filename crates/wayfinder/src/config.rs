// File: src/config.rs
// Purpose: Configuration parsing from wayfinder.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::navigation::strategy::normalize_destination;

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RouterConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Path that renders the error route (default: "/error")
    #[serde(default = "default_error_path")]
    pub error_path: String,

    /// Redirect target for an empty path when no route is flagged default
    #[serde(default)]
    pub default_path: Option<String>,
}

/// Render configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Selector of the content region that gets replaced (default: "#app-root")
    #[serde(default = "default_container")]
    pub container: String,

    /// Message handed to the error route when nothing matched
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,
}

// Default values
fn default_error_path() -> String {
    "/error".to_string()
}

fn default_container() -> String {
    "#app-root".to_string()
}

fn default_not_found_message() -> String {
    "Path not found".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            error_path: default_error_path(),
            default_path: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            not_found_message: default_not_found_message(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from wayfinder.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RouterConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config.normalized())
    }

    /// Gives the path fields a leading `/`
    ///
    /// Navigations always land on slash-prefixed paths, so an error path without one
    /// would never be recognized when the not-found redirect arrives.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder::RouterConfig;
    ///
    /// let mut config = RouterConfig::default();
    /// config.routing.error_path = "oops".to_string();
    /// config.routing.default_path = Some("home".to_string());
    ///
    /// let config = config.normalized();
    /// assert_eq!(config.routing.error_path, "/oops");
    /// assert_eq!(config.routing.default_path.as_deref(), Some("/home"));
    /// ```
    pub fn normalized(mut self) -> Self {
        self.routing.error_path = normalize_destination(&self.routing.error_path).into_owned();
        self.routing.default_path = self
            .routing
            .default_path
            .map(|path| normalize_destination(&path).into_owned());
        self
    }

    /// Load configuration from default path (./wayfinder.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("wayfinder.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.routing.error_path, "/error");
        assert_eq!(config.routing.default_path, None);
        assert_eq!(config.render.container, "#app-root");
        assert_eq!(config.render.not_found_message, "Path not found");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<RouterConfig>("").unwrap_or_default();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [routing]
            error_path = "/oops"
            default_path = "/home"

            [render]
            container = "main"
        "#;
        let config: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.error_path, "/oops");
        assert_eq!(config.routing.default_path.as_deref(), Some("/home"));
        assert_eq!(config.render.container, "main");
        assert_eq!(config.render.not_found_message, "Path not found");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = RouterConfig::load("does/not/exist/wayfinder.toml").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("wayfinder-config-{}.toml", std::process::id()));
        fs::write(&path, "[render]\nnot_found_message = \"Nothing here\"\n").unwrap();

        let config = RouterConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.render.not_found_message, "Nothing here");
        assert_eq!(config.routing.error_path, "/error");
    }

    #[test]
    fn test_load_normalizes_paths() {
        let path = std::env::temp_dir().join(format!("wayfinder-slashless-{}.toml", std::process::id()));
        fs::write(&path, "[routing]\nerror_path = \"oops\"\ndefault_path = \"\"\n").unwrap();

        let config = RouterConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.routing.error_path, "/oops");
        assert_eq!(config.routing.default_path.as_deref(), Some("/"));
    }

    #[test]
    fn test_normalized_keeps_prefixed_paths() {
        assert_eq!(RouterConfig::default().normalized(), RouterConfig::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = std::env::temp_dir().join(format!("wayfinder-invalid-{}.toml", std::process::id()));
        fs::write(&path, "[routing\nerror_path = 1").unwrap();

        let err = RouterConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
