//! Procedural renderer for a camera-lens app icon.
//!
//! [`IconRenderer`] paints a vertical gradient, a lens (disc plus aperture
//! ring) and four viewfinder brackets onto an RGB canvas; [`save_png`] writes
//! the result.

pub mod error;
pub mod geometry;
pub mod icon_gen;
pub mod raster;
pub mod style;

pub use error::IconError;
pub use icon_gen::{encode_png, generate_icon, save_png, Args, IconRenderer, DEFAULT_OUTPUT};
pub use raster::Canvas;
pub use style::IconStyle;
