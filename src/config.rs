//! Page-supplied configuration.
//!
//! The page may embed a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   {
//!     "windowed": true,
//!     "log_level": "debug",
//!     "nav_roles": { "nav-a": "A", "nav-b": "B", "nav-c": "C", "nav-d": "D" },
//!     "window": { "width": 900, "height": 640 }
//!   }
//! </script>
//! ```
//!
//! Every field is optional. A missing block yields [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;
use viewer::nav::NavRoleMap;
use viewer::window::WindowOptions;
use web_sys::Document;

use crate::error::SiteError;

/// Id of the `<script>` element carrying the configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Open pages in floating windows. When false, the simple modal is used.
    pub windowed: bool,
    /// Console log level: `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
    /// Map navigation button identifier → role.
    pub nav_roles: NavRoleMap,
    /// Default geometry for new floating windows.
    pub window: WindowOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            windowed: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            nav_roles: NavRoleMap::new(),
            window: WindowOptions::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the `#site-config` block. Absent or blank blocks give the defaults.
    pub fn read(document: &Document) -> Result<Self, SiteError> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }

    /// Parsed log level, falling back to `info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
