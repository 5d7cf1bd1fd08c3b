//! Fixed-size character-grid window core.
//!
//! Invariant: the dispatcher is the single writer of input state — hosts
//! poll read-only between frames, and every shared value is one atomic cell.
//!
//! # Public API Overview
//! - Configure a window with [`WindowConfig`] and construct a [`GridWindow`]
//!   over any [`DisplaySurface`].
//! - Hand [`GridWindow::event_sink`]'s [`EventDispatcher`] to the windowing
//!   backend; it feeds raw events through the [`EventSink`] trait.
//! - Poll held keys, last-click cells, and the pointer cell between frames;
//!   push text out with [`GridWindow::display`].
//! - [`format_block`] and [`CoordinateMapper`] are usable standalone.

pub mod config;

pub mod core;
pub mod platform;
pub mod render;
pub mod runtime;

/// Setup-time configuration and its defaults.
pub use crate::config::{
    Color, ConfigError, FontSpec, KeyBinding, WindowConfig, DEFAULT_FONT_FAMILY,
    DEFAULT_FONT_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TITLE,
};

/// Named latches and their registry.
pub use crate::core::action::{ActionRegistry, ActionState, LatchValue};

/// Coordinate types and the pixel/cell transform.
pub use crate::core::geometry::{
    CellMetrics, CellPosition, CoordinateMapper, GridDimensions, PixelPosition,
};

/// Block formatting helpers.
pub use crate::render::grid::{fit_line, format_block};

/// Event dispatch and the window facade.
pub use crate::runtime::dispatcher::{EventDispatcher, EventSink, MouseButton};
pub use crate::runtime::window::{DisplaySurface, GridWindow, SurfaceMetrics, WindowError};

/// In-memory display surface for tests and toolkit-free hosts.
pub use crate::platform::headless::HeadlessSurface;
