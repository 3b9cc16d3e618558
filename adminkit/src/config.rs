//! Panel configuration: class names, element ids and slide timing.

use std::fs;
use std::path::Path;
use std::time::Duration;

use pagedom::{Easing, TransitionConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::banner::BannerRole;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Names the helpers use to find and mark elements.
///
/// Missing JSON fields fall back to the defaults, so a file only needs the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Marker class on an expanded menu title.
    pub expanded_class: String,
    /// Marker class on a collapsed menu title.
    pub collapsed_class: String,
    /// Container holding the menu titles.
    pub menu_bar_id: String,
    /// Class carried by every menu title.
    pub menu_title_class: String,

    pub info_id: String,
    pub warning_id: String,
    pub error_id: String,

    /// Slide length in milliseconds.
    pub slide_millis: u64,
    pub easing: Easing,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            expanded_class: "app-menu-show".into(),
            collapsed_class: "app-menu-hide".into(),
            menu_bar_id: "menu-bar".into(),
            menu_title_class: "app-menu-title".into(),
            info_id: "info_msg".into(),
            warning_id: "warning_msg".into(),
            error_id: "error_msg".into(),
            slide_millis: 400,
            easing: Easing::Swing,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that marker classes differ, menu lookups are named, and banner
    /// ids are set and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.menu_bar_id.is_empty() {
            return Err(ConfigError::Invalid("menu bar id is empty".into()));
        }
        if self.menu_title_class.is_empty() {
            return Err(ConfigError::Invalid("menu title class is empty".into()));
        }
        if self.expanded_class.is_empty() || self.collapsed_class.is_empty() {
            return Err(ConfigError::Invalid("menu marker classes must not be empty".into()));
        }
        if self.expanded_class == self.collapsed_class {
            return Err(ConfigError::Invalid(format!(
                "expanded and collapsed classes are both `{}`",
                self.expanded_class
            )));
        }

        let ids = BannerRole::ALL.map(|role| self.banner_id(role));
        if let Some(role) = BannerRole::ALL.iter().find(|r| self.banner_id(**r).is_empty()) {
            return Err(ConfigError::Invalid(format!("{role} banner id is empty")));
        }
        if ids[0] == ids[1] || ids[0] == ids[2] || ids[1] == ids[2] {
            return Err(ConfigError::Invalid("banner ids must be distinct".into()));
        }
        Ok(())
    }

    /// Element id of the banner for `role`.
    pub fn banner_id(&self, role: BannerRole) -> &str {
        match role {
            BannerRole::Info => &self.info_id,
            BannerRole::Warning => &self.warning_id,
            BannerRole::Error => &self.error_id,
        }
    }

    /// Transition used for animated toggles.
    pub fn slide(&self) -> TransitionConfig {
        TransitionConfig::new(Duration::from_millis(self.slide_millis), self.easing)
    }

    pub fn menu_classes(mut self, expanded: impl Into<String>, collapsed: impl Into<String>) -> Self {
        self.expanded_class = expanded.into();
        self.collapsed_class = collapsed.into();
        self
    }

    pub fn menu_bar(mut self, id: impl Into<String>, title_class: impl Into<String>) -> Self {
        self.menu_bar_id = id.into();
        self.menu_title_class = title_class.into();
        self
    }

    pub fn banner(mut self, role: BannerRole, id: impl Into<String>) -> Self {
        let id = id.into();
        match role {
            BannerRole::Info => self.info_id = id,
            BannerRole::Warning => self.warning_id = id,
            BannerRole::Error => self.error_id = id,
        }
        self
    }

    pub fn slide_duration(mut self, duration: Duration) -> Self {
        self.slide_millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
