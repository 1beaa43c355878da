//! Surface Core Module
//!
//! Platform-independent surface state. This module contains:
//! - Points and inclusive rectangles
//! - The character grid
//! - The surface and its region operations
//! - Deterministic snapshot generation
//!
//! The core is completely deterministic: given the same sequence of
//! operations, it always produces the same buffer and the same frames.

mod grid;
mod rect;
mod snapshot;
mod surface;

pub use grid::{Grid, Row};
pub use rect::{Point, Rect};
pub use snapshot::Snapshot;
pub use surface::{Surface, SurfaceError, MAX_DIMENSION};
