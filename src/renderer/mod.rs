//! Render Targets
//!
//! A render sink displays the whole surface. It is handed every row on
//! every mutation and must replace whatever it showed before; there is no
//! partial-update contract.

mod console;
mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

use serde::{Deserialize, Serialize};

/// Error type for presenting a frame
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write to render target: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// An RGB triple
pub type Rgb = (u8, u8, u8);

/// The single foreground/background pair used for the whole surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            foreground: (255, 255, 255),
            background: (0, 0, 0),
        }
    }
}

/// Something that can redraw a fixed set of character rows
pub trait RenderSink {
    /// Replace the visible content with `rows`, top to bottom
    fn present(&mut self, rows: &[String]) -> RenderResult<()>;

    /// Update the label shown for the surface, if the target has one
    fn set_title(&mut self, _title: &str) -> RenderResult<()> {
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn present(&mut self, rows: &[String]) -> RenderResult<()> {
        (**self).present(rows)
    }

    fn set_title(&mut self, title: &str) -> RenderResult<()> {
        (**self).set_title(title)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, rows: &[String]) -> RenderResult<()> {
        (**self).present(rows)
    }

    fn set_title(&mut self, title: &str) -> RenderResult<()> {
        (**self).set_title(title)
    }
}
