//! Grid window facade.
//!
//! Construction is the only fallible phase: the config is validated, the
//! display surface is asked once for its cell metrics, and any failure
//! aborts before a window exists. Afterwards everything is a total function
//! over the shared input state.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, WindowConfig};
use crate::core::action::ActionRegistry;
use crate::core::geometry::{
    CellMetrics, CellPosition, CoordinateMapper, GridDimensions, PixelPosition,
};
use crate::render::grid::format_block;
use crate::runtime::dispatcher::{EventDispatcher, InputState, MouseButton};

/// Cell metrics and grid origin reported by a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceMetrics {
    /// Pixel size of one cell, measured from a reference glyph.
    pub cell: CellMetrics,
    /// On-screen position of the grid's top-left pixel, in the coordinate
    /// space the event source reports positions in.
    pub origin: PixelPosition,
}

/// External collaborator that paints the formatted block.
///
/// `metrics` is queried exactly once, during window construction; this is
/// where font loading lives, so a missing or corrupt font asset surfaces as
/// a construction failure rather than a runtime one.
pub trait DisplaySurface {
    fn metrics(&self) -> Result<SurfaceMetrics, WindowError>;

    /// Receives exactly `height` lines of exactly `width` characters each,
    /// separated by single line feeds, with no trailing separator.
    fn render(&mut self, block: &str);
}

#[derive(Debug, Error)]
pub enum WindowError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Font asset missing or corrupt; propagated out of
    /// [`DisplaySurface::metrics`].
    #[error("display surface resource unavailable: {0}")]
    Resource(String),
    #[error("cell metrics must be positive, got {width}x{height}")]
    InvalidMetrics { width: i32, height: i32 },
}

/// A fixed-size character grid with latch-style polled input.
///
/// The window owns the action registries through the shared input state and
/// exposes them read-only; mutation happens on the backend event thread via
/// the [`EventDispatcher`] returned by [`GridWindow::event_sink`].
pub struct GridWindow<S: DisplaySurface> {
    surface: S,
    config: WindowConfig,
    dims: GridDimensions,
    mapper: CoordinateMapper,
    input: Arc<InputState>,
}

impl<S: DisplaySurface> GridWindow<S> {
    pub fn new(config: WindowConfig, surface: S) -> Result<Self, WindowError> {
        config.validate()?;

        let metrics = surface.metrics()?;
        if metrics.cell.width <= 0 || metrics.cell.height <= 0 {
            return Err(WindowError::InvalidMetrics {
                width: metrics.cell.width,
                height: metrics.cell.height,
            });
        }

        let mut keys = ActionRegistry::new();
        if config.track_keyboard {
            // Two raw codes may share an action key; one latch serves both.
            let mut seen: Vec<&str> = Vec::new();
            for binding in &config.bindings {
                if !seen.contains(&binding.action.as_str()) {
                    seen.push(binding.action.as_str());
                    keys.register(binding.action.clone());
                }
            }
        }

        let mut clicks = ActionRegistry::new();
        if config.track_mouse {
            for button in MouseButton::ALL {
                clicks.register(button.action_key());
            }
        }

        Ok(Self {
            surface,
            dims: config.dimensions(),
            mapper: CoordinateMapper::new(metrics.cell, metrics.origin),
            input: Arc::new(InputState::new(keys, clicks)),
            config,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Builds the dispatcher the windowing backend drives from its event
    /// thread. Keyboard bindings are dropped when keyboard tracking is off,
    /// so their events fall through as unbound codes; with mouse tracking
    /// off the dispatcher discards every mouse event, leaving the pointer at
    /// its initial position.
    pub fn event_sink(&self) -> EventDispatcher {
        let bindings = if self.config.track_keyboard {
            self.config.bindings.clone()
        } else {
            Vec::new()
        };
        EventDispatcher::new(
            Arc::clone(&self.input),
            bindings,
            self.mapper,
            self.config.track_mouse,
        )
    }

    /// Formats `text` into the fixed block and hands it to the surface.
    pub fn display(&mut self, text: &str) {
        let block = format_block(
            text,
            self.dims.width() as usize,
            self.dims.height() as usize,
        );
        self.surface.render(&block);
    }

    /// Whether the named keyboard action is currently held.
    pub fn is_active(&self, action: &str) -> bool {
        self.input.keys.is_active(action)
    }

    pub fn is_inactive(&self, action: &str) -> bool {
        !self.is_active(action)
    }

    /// Cell of the most recent completed click for `button`, if any. The
    /// latch persists until the next qualifying click.
    pub fn last_click_cell(&self, button: MouseButton) -> Option<CellPosition> {
        self.input.clicks.value(button.action_key())
    }

    /// Grid cell currently under the pointer. Unbounded: the pointer may sit
    /// outside the grid, including at negative cells.
    pub fn pointer_cell(&self) -> CellPosition {
        self.mapper.to_cell(self.input.pointer())
    }

    /// Pixel footprint of the full grid, for sizing the surface.
    pub fn pixel_size(&self) -> PixelPosition {
        self.mapper.to_pixel(CellPosition::new(
            self.dims.width() as i32,
            self.dims.height() as i32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplaySurface, GridWindow, SurfaceMetrics, WindowError};
    use crate::config::WindowConfig;
    use crate::core::geometry::{CellMetrics, CellPosition, PixelPosition};
    use crate::runtime::dispatcher::{EventSink, MouseButton};

    struct FakeSurface {
        metrics: Result<SurfaceMetrics, String>,
        frames: Vec<String>,
    }

    impl FakeSurface {
        fn with_cell(width: i32, height: i32) -> Self {
            Self {
                metrics: Ok(SurfaceMetrics {
                    cell: CellMetrics { width, height },
                    origin: PixelPosition::new(0, 0),
                }),
                frames: Vec::new(),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                metrics: Err(message.to_string()),
                frames: Vec::new(),
            }
        }
    }

    impl DisplaySurface for FakeSurface {
        fn metrics(&self) -> Result<SurfaceMetrics, WindowError> {
            self.metrics
                .clone()
                .map_err(WindowError::Resource)
        }

        fn render(&mut self, block: &str) {
            self.frames.push(block.to_string());
        }
    }

    #[test]
    fn duplicate_binding_prevents_construction() {
        let config = WindowConfig::new().bind_key(1, "a").bind_key(1, "b");
        let result = GridWindow::new(config, FakeSurface::with_cell(8, 16));
        assert!(matches!(result, Err(WindowError::Config(_))));
    }

    #[test]
    fn metrics_failure_prevents_construction() {
        let result = GridWindow::new(WindowConfig::new(), FakeSurface::failing("no such font"));
        assert!(matches!(result, Err(WindowError::Resource(_))));
    }

    #[test]
    fn non_positive_metrics_are_rejected() {
        let result = GridWindow::new(WindowConfig::new(), FakeSurface::with_cell(0, 16));
        assert!(matches!(
            result,
            Err(WindowError::InvalidMetrics {
                width: 0,
                height: 16
            })
        ));
    }

    #[test]
    fn display_renders_the_formatted_block() {
        let config = WindowConfig::new().grid_size(4, 2);
        let mut window =
            GridWindow::new(config, FakeSurface::with_cell(8, 16)).expect("window builds");
        window.display("hi");
        assert_eq!(window.surface().frames, vec!["hi  \n    ".to_string()]);
    }

    #[test]
    fn polling_observes_dispatched_events() {
        let config = WindowConfig::new().grid_size(10, 5).bind_key(38, "up");
        let window = GridWindow::new(config, FakeSurface::with_cell(8, 16)).expect("window builds");
        let mut sink = window.event_sink();

        assert!(window.is_inactive("up"));
        sink.on_key_down(38);
        assert!(window.is_active("up"));
        sink.on_key_up(38);
        assert!(window.is_inactive("up"));

        sink.on_mouse_down(MouseButton::Left, 9, 17);
        sink.on_mouse_up(MouseButton::Left, 9, 17);
        assert_eq!(
            window.last_click_cell(MouseButton::Left),
            Some(CellPosition::new(1, 1))
        );

        sink.on_mouse_move(25, 50);
        assert_eq!(window.pointer_cell(), CellPosition::new(3, 3));
    }

    #[test]
    fn disabled_keyboard_tracking_ignores_bound_codes() {
        let config = WindowConfig::new().track_keyboard(false).bind_key(38, "up");
        let window = GridWindow::new(config, FakeSurface::with_cell(8, 16)).expect("window builds");
        let mut sink = window.event_sink();
        sink.on_key_down(38);
        assert!(window.is_inactive("up"));
    }

    #[test]
    fn disabled_mouse_tracking_never_registers_clicks() {
        let config = WindowConfig::new().track_mouse(false);
        let window = GridWindow::new(config, FakeSurface::with_cell(8, 16)).expect("window builds");
        let mut sink = window.event_sink();
        sink.on_mouse_down(MouseButton::Left, 0, 0);
        sink.on_mouse_up(MouseButton::Left, 0, 0);
        assert_eq!(window.last_click_cell(MouseButton::Left), None);
    }

    #[test]
    fn disabled_mouse_tracking_freezes_the_pointer() {
        let config = WindowConfig::new().track_mouse(false);
        let window = GridWindow::new(config, FakeSurface::with_cell(8, 16)).expect("window builds");
        let mut sink = window.event_sink();
        sink.on_mouse_move(83, 70);
        assert_eq!(window.pointer_cell(), CellPosition::new(0, 0));
    }

    #[test]
    fn pixel_size_covers_the_full_grid() {
        let config = WindowConfig::new().grid_size(137, 32);
        let window = GridWindow::new(config, FakeSurface::with_cell(8, 16)).expect("window builds");
        assert_eq!(window.pixel_size(), PixelPosition::new(137 * 8, 32 * 16));
    }
}
