//! Display-surface integrations.

pub mod headless;

pub use headless::HeadlessSurface;
