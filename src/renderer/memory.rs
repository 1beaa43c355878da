//! In-memory render target for headless runs and tests

use super::{RenderResult, RenderSink};

/// Keeps the most recently presented frame
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    rows: Vec<String>,
    frames: u64,
    title: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the last presented frame
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// How many times `present` has been called
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The last frame as displayed text: every row followed by a line break
    pub fn text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}

impl RenderSink for MemorySink {
    fn present(&mut self, rows: &[String]) -> RenderResult<()> {
        self.rows.clear();
        self.rows.extend_from_slice(rows);
        self.frames += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> RenderResult<()> {
        self.title = title.to_string();
        Ok(())
    }
}
