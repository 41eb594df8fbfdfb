//! Window-manager tuning loaded from JSON or taken from defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowId;

/// Minimum width a resize may shrink a window to.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum height a resize may shrink a window to.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
pub const DEFAULT_WINDOW_WIDTH: i32 = 1000;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 800;
/// Offset of the first cascaded window from the top-left corner.
pub const CASCADE_BASE_PX: i32 = 50;
/// Additional offset per already-open window.
pub const CASCADE_STEP_PX: i32 = 30;
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Error)]
/// Configuration parse or validation failures.
pub enum ConfigError {
    /// The JSON payload could not be decoded.
    #[error("invalid window manager config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A size field was zero or negative.
    #[error("`{field}` must be positive, got {value}")]
    NonPositive {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: i32,
    },
    /// The resize floor is larger than the size new windows open at.
    #[error("minimum size {min_w}x{min_h} exceeds default size {default_w}x{default_h}")]
    MinimumExceedsDefault {
        min_w: i32,
        min_h: i32,
        default_w: i32,
        default_h: i32,
    },
    #[error("cascade step must not be negative, got {0}")]
    NegativeCascadeStep(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    pub min_width: i32,
    pub min_height: i32,
    pub default_width: i32,
    pub default_height: i32,
    pub cascade_base: i32,
    pub cascade_step: i32,
    pub taskbar_height: i32,
    /// Ids that open covering the whole desktop instead of cascading.
    pub fullscreen_ids: Vec<String>,
    /// Display titles keyed by window id.
    pub titles: BTreeMap<String, String>,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            cascade_base: CASCADE_BASE_PX,
            cascade_step: CASCADE_STEP_PX,
            taskbar_height: TASKBAR_HEIGHT_PX,
            fullscreen_ids: vec!["portfolio".to_string()],
            titles: BTreeMap::new(),
        }
    }
}

impl WindowManagerConfig {
    /// Parses a JSON config; missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the payload is not valid JSON or fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks size and offset invariants the geometry engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("default_width", self.default_width),
            ("default_height", self.default_height),
            ("taskbar_height", self.taskbar_height),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.min_width > self.default_width || self.min_height > self.default_height {
            return Err(ConfigError::MinimumExceedsDefault {
                min_w: self.min_width,
                min_h: self.min_height,
                default_w: self.default_width,
                default_h: self.default_height,
            });
        }
        if self.cascade_step < 0 {
            return Err(ConfigError::NegativeCascadeStep(self.cascade_step));
        }
        Ok(())
    }

    pub fn opens_fullscreen(&self, window_id: &WindowId) -> bool {
        self.fullscreen_ids
            .iter()
            .any(|id| id.as_str() == window_id.as_str())
    }

    /// Resolves the display title for a window id.
    pub fn title_for(&self, window_id: &WindowId) -> String {
        self.titles
            .get(window_id.as_str())
            .cloned()
            .unwrap_or_else(|| humanize_id(window_id.as_str()))
    }
}

fn humanize_id(raw: &str) -> String {
    raw.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
