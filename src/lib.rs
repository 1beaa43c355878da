//! AsciiLIB
//!
//! A character-grid display surface for simple text-based games and UI
//! mockups. This crate provides:
//!
//! - `core`: Surface buffer, inclusive rectangles, region operations, snapshots
//! - `glyphs`: Catalog of box-drawing, shading, arrow and Braille characters
//! - `renderer`: Render targets (in-memory and console)
//! - `input`: Normalized key/click events and handler registration
//! - `app`: Configuration and the single-threaded event loop
//! - `script`: Text command scripts for headless runs

pub mod app;
pub mod core;
pub mod glyphs;
pub mod input;
pub mod renderer;
pub mod script;

pub use crate::core::{Point, Rect, Snapshot, Surface};
