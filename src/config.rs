//! Widget configuration.
//!
//! Native hosts layer configuration with the `config` crate:
//!
//! 1. Built-in defaults
//! 2. An optional config file (`CHAT_WIDGET_CONFIG` or an explicit path)
//! 3. Environment variables prefixed with `CHAT_WIDGET__`, e.g.
//!    `CHAT_WIDGET__ENDPOINT=/support/chat` or
//!    `CHAT_WIDGET__ELEMENTS__PANEL=help-panel`
//!
//! In the browser the same structure is parsed from inline JSON with
//! [`WidgetConfig::from_json`].

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Text rendered in place of an answer whenever a request fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an error. Please try again later.";

/// Default answer service endpoint, relative to the host page.
pub const DEFAULT_ENDPOINT: &str = "/api/chat";

/// Environment variable naming a config file.
pub const CONFIG_FILE_ENV: &str = "CHAT_WIDGET_CONFIG";

/// Prefix for per-key environment overrides.
pub const ENV_PREFIX: &str = "CHAT_WIDGET";

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Answer service URL, absolute or relative to the page.
    pub endpoint: String,
    /// Bot text shown when a request fails.
    pub fallback_message: String,
    /// Optional bot message rendered once when the widget mounts.
    pub greeting: Option<String>,
    /// Panel header title.
    pub title: String,
    /// Ids of the host page elements the widget binds to.
    pub elements: ElementIds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            greeting: None,
            title: "Chat Assistant".to_string(),
            elements: ElementIds::default(),
        }
    }
}

/// Element ids making up the widget's DOM contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Floating launcher button.
    pub launcher: String,
    /// Popup panel container.
    pub panel: String,
    /// Close control in the panel header.
    pub close: String,
    /// Text input field.
    pub input: String,
    /// Send control.
    pub send: String,
    /// Message list container.
    pub messages: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            launcher: "chat-launcher".to_string(),
            panel: "chat-panel".to_string(),
            close: "chat-close".to_string(),
            input: "chat-input".to_string(),
            send: "chat-send".to_string(),
            messages: "chat-messages".to_string(),
        }
    }
}

impl ElementIds {
    /// All ids in contract order, paired with their role.
    #[must_use]
    pub fn all(&self) -> [(&'static str, &str); 6] {
        [
            ("launcher", &self.launcher),
            ("panel", &self.panel),
            ("close", &self.close),
            ("input", &self.input),
            ("send", &self.send),
            ("messages", &self.messages),
        ]
    }
}

impl WidgetConfig {
    /// Parse a (possibly partial) JSON object; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the endpoint against the page (or host) base URL.
    ///
    /// Absolute endpoints are returned unchanged.
    pub fn endpoint_url(&self, base: &str) -> Result<Url> {
        let base = Url::parse(base)?;
        Ok(base.join(&self.endpoint)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod loader {
    use std::path::Path;

    use config::{Config, Environment, File};

    use super::{CONFIG_FILE_ENV, ENV_PREFIX, WidgetConfig};
    use crate::error::Result;

    impl WidgetConfig {
        /// Load configuration from `.env`, `CHAT_WIDGET_CONFIG` and
        /// `CHAT_WIDGET__*` variables.
        pub fn load() -> Result<Self> {
            let _ = dotenvy::dotenv();
            let path = std::env::var(CONFIG_FILE_ENV)
                .ok()
                .filter(|p| !p.trim().is_empty());
            Self::load_from(path.as_deref().map(Path::new))
        }

        /// Load configuration from defaults, an optional file, and the
        /// environment, in increasing order of precedence.
        pub fn load_from(path: Option<&Path>) -> Result<Self> {
            let defaults = Self::default();

            let mut builder = Config::builder()
                .set_default("endpoint", defaults.endpoint)?
                .set_default("fallback_message", defaults.fallback_message)?
                .set_default("title", defaults.title)?
                .set_default("elements.launcher", defaults.elements.launcher)?
                .set_default("elements.panel", defaults.elements.panel)?
                .set_default("elements.close", defaults.elements.close)?
                .set_default("elements.input", defaults.elements.input)?
                .set_default("elements.send", defaults.elements.send)?
                .set_default("elements.messages", defaults.elements.messages)?;

            if let Some(path) = path {
                builder = builder.add_source(File::from(path).required(true));
            }

            // E.g. CHAT_WIDGET__ELEMENTS__INPUT=question-box
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

            let cfg = builder.build()?;
            Ok(cfg.try_deserialize()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "/api/chat");
        assert_eq!(config.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert!(config.greeting.is_none());
        assert_eq!(config.elements.panel, "chat-panel");
    }

    #[test]
    fn test_partial_json() {
        let config =
            WidgetConfig::from_json(r#"{"greeting":"Hi!","elements":{"panel":"help"}}"#).unwrap();
        assert_eq!(config.greeting.as_deref(), Some("Hi!"));
        assert_eq!(config.elements.panel, "help");
        assert_eq!(config.elements.launcher, "chat-launcher");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_relative() {
        let config = WidgetConfig::default();
        let url = config
            .endpoint_url("https://shop.example.com/help/faq.html")
            .unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/api/chat");
    }

    #[test]
    fn test_endpoint_absolute() {
        let config = WidgetConfig {
            endpoint: "https://bot.example.com/api/chat".into(),
            ..WidgetConfig::default()
        };
        let url = config.endpoint_url("https://shop.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://bot.example.com/api/chat");
    }

    #[test]
    fn test_ids_in_order() {
        let ids = ElementIds::default();
        let roles: Vec<_> = ids.all().iter().map(|(role, _)| *role).collect();
        assert_eq!(
            roles,
            ["launcher", "panel", "close", "input", "send", "messages"]
        );
    }
}
