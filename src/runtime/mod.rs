//! Event dispatch and the window facade.

pub mod dispatcher;
pub mod window;

pub use dispatcher::{EventDispatcher, EventSink, MouseButton};
pub use window::{DisplaySurface, GridWindow, SurfaceMetrics, WindowError};
