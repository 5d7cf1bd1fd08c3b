//! Window configuration.
//!
//! Everything here is accepted at setup time and frozen before the window is
//! constructed. Out-of-range values are clamped, never rejected; the only
//! configuration error is two key bindings claiming the same raw code,
//! because that would make dispatch ambiguous at runtime.

use thiserror::Error;

use crate::core::geometry::GridDimensions;

pub const DEFAULT_TITLE: &str = "Made with love by JAD (jeanaymeric@gmlail.com)";
pub const DEFAULT_FONT_FAMILY: &str = "Cascadia Mono";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_GRID_WIDTH: u16 = 137;
pub const DEFAULT_GRID_HEIGHT: u16 = 32;

const MIN_FONT_SIZE: f32 = 1.0;
const MAX_FONT_SIZE: f32 = 40.0;

/// An RGB color handed through to the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
}

/// Monospace font request. The surface measures one reference glyph of this
/// font to derive the cell pixel metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Binds one raw platform key code to one named action latch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub raw_code: u32,
    pub action: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("raw key code {raw_code} bound to both {existing:?} and {duplicate:?}")]
    DuplicateBinding {
        raw_code: u32,
        existing: String,
        duplicate: String,
    },
}

/// Builder-style configuration for a [`GridWindow`](crate::GridWindow).
///
/// Defaults match the reference settings: the banner title, Cascadia Mono at
/// 14pt, black on white, 137 x 32 cells, both input listeners enabled,
/// cursor visible.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub font: FontSpec,
    pub background: Color,
    pub foreground: Color,
    pub grid_width: u16,
    pub grid_height: u16,
    pub track_mouse: bool,
    pub track_keyboard: bool,
    /// Pass-through for the windowing backend: the core never consumes it.
    /// Backends read it via [`GridWindow::config`](crate::GridWindow::config)
    /// and hide or show the native cursor themselves.
    pub cursor_visible: bool,
    pub bindings: Vec<KeyBinding>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            font: FontSpec::default(),
            background: Color::WHITE,
            foreground: Color::BLACK,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            track_mouse: true,
            track_keyboard: true,
            cursor_visible: true,
            bindings: Vec::new(),
        }
    }
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font = FontSpec {
            family: family.into(),
            size,
        };
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn grid_size(mut self, width: u16, height: u16) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn track_mouse(mut self, enabled: bool) -> Self {
        self.track_mouse = enabled;
        self
    }

    pub fn track_keyboard(mut self, enabled: bool) -> Self {
        self.track_keyboard = enabled;
        self
    }

    /// Whether the backend should show the native cursor over the grid.
    /// Carried in the frozen config for the backend to read; no core
    /// behavior depends on it.
    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    /// Adds a `(raw key code, action key)` binding. Duplicates are caught by
    /// [`WindowConfig::validate`] at construction, not here.
    pub fn bind_key(mut self, raw_code: u32, action: impl Into<String>) -> Self {
        self.bindings.push(KeyBinding {
            raw_code,
            action: action.into(),
        });
        self
    }

    /// Grid dimensions after the setup-time clamp.
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.grid_width, self.grid_height)
    }

    /// Font size after the setup-time clamp.
    pub fn font_size(&self) -> f32 {
        self.font.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    /// Rejects bindings that share a raw code. Runs before window
    /// construction; a failure here prevents the window from being built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, binding) in self.bindings.iter().enumerate() {
            if let Some(existing) = self.bindings[..index]
                .iter()
                .find(|earlier| earlier.raw_code == binding.raw_code)
            {
                return Err(ConfigError::DuplicateBinding {
                    raw_code: binding.raw_code,
                    existing: existing.action.clone(),
                    duplicate: binding.action.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, ConfigError, WindowConfig, DEFAULT_TITLE};

    #[test]
    fn defaults_match_reference_settings() {
        let config = WindowConfig::default();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.font.family, "Cascadia Mono");
        assert_eq!(config.font_size(), 14.0);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.foreground, Color::BLACK);
        assert_eq!(config.dimensions().width(), 137);
        assert_eq!(config.dimensions().height(), 32);
        assert!(config.track_mouse);
        assert!(config.track_keyboard);
        assert!(config.cursor_visible);
    }

    #[test]
    fn font_size_clamps_to_supported_range() {
        assert_eq!(WindowConfig::new().font("Menlo", 0.25).font_size(), 1.0);
        assert_eq!(WindowConfig::new().font("Menlo", 99.0).font_size(), 40.0);
        assert_eq!(WindowConfig::new().font("Menlo", 12.5).font_size(), 12.5);
    }

    #[test]
    fn grid_dimensions_clamp_to_minimums() {
        let config = WindowConfig::new().grid_size(0, 0);
        assert_eq!(config.dimensions().width(), 1);
        assert_eq!(config.dimensions().height(), 1);
    }

    #[test]
    fn duplicate_raw_codes_are_a_configuration_error() {
        let config = WindowConfig::new()
            .bind_key(38, "up")
            .bind_key(40, "down")
            .bind_key(38, "jump");
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateBinding {
                raw_code: 38,
                existing: "up".to_string(),
                duplicate: "jump".to_string(),
            })
        );
    }

    #[test]
    fn distinct_raw_codes_for_the_same_action_are_allowed() {
        let config = WindowConfig::new()
            .bind_key(37, "left")
            .bind_key(65, "left");
        assert_eq!(config.validate(), Ok(()));
    }
}
