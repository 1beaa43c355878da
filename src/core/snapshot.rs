//! Deterministic snapshot generation
//!
//! Snapshots capture the complete surface state in a serializable format
//! for testing and debugging. Given the same sequence of operations, the
//! surface must produce identical snapshots.

use serde::{Deserialize, Serialize};

use crate::renderer::RenderSink;

use super::surface::Surface;

/// A complete snapshot of a surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Surface dimensions
    pub width: usize,
    pub height: usize,
    /// Character used to initialize and clear the surface
    pub filler: char,
    /// Surface label
    pub title: String,
    /// Row content, top to bottom
    pub rows: Vec<String>,
}

impl Snapshot {
    /// Create a snapshot from the current surface state
    pub fn from_surface<S: RenderSink>(surface: &Surface<S>) -> Self {
        Snapshot {
            width: surface.width(),
            height: surface.height(),
            filler: surface.filler(),
            title: surface.title().to_string(),
            rows: surface.lines(),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The rows as displayed text, each followed by a line break
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in &self.rows {
            result.push_str(row);
            result.push('\n');
        }
        result
    }

    /// Compare two snapshots for equality (ignoring title and filler)
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.width == other.width && self.height == other.height && self.rows == other.rows
    }
}
