//! Console render target
//!
//! Repaints the whole terminal on every frame: clear, then write each row
//! at its own line. All commands are queued and flushed once per frame.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType, SetTitle},
};

use super::{ColorPair, RenderResult, RenderSink, Rgb};

/// Full-repaint sink writing crossterm commands to `W`
pub struct ConsoleSink<W: Write> {
    out: W,
    colors: ColorPair,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to the process's standard output
    pub fn stdout(colors: ColorPair) -> Self {
        Self::new(io::stdout(), colors)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, colors: ColorPair) -> Self {
        Self { out, colors }
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

impl<W: Write> RenderSink for ConsoleSink<W> {
    fn present(&mut self, rows: &[String]) -> RenderResult<()> {
        queue!(
            self.out,
            SetForegroundColor(to_color(self.colors.foreground)),
            SetBackgroundColor(to_color(self.colors.background)),
            Clear(ClearType::All),
        )?;
        for (i, row) in rows.iter().enumerate() {
            let line = u16::try_from(i).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, line), Print(row))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        tracing::trace!(rows = rows.len(), "console frame presented");
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> RenderResult<()> {
        execute!(self.out, SetTitle(title))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_writes_every_row() {
        let mut sink = ConsoleSink::new(Vec::new(), ColorPair::default());
        sink.present(&["#..#".to_string(), "░░░░".to_string()]).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.contains("#..#"));
        assert!(out.contains("░░░░"));
        // Clear screen precedes the rows
        let clear = out.find("\x1b[2J").unwrap();
        assert!(clear < out.find("#..#").unwrap());
    }

    #[test]
    fn test_console_sink_uses_color_pair() {
        let colors = ColorPair {
            foreground: (1, 2, 3),
            background: (4, 5, 6),
        };
        let mut sink = ConsoleSink::new(Vec::new(), colors);
        sink.present(&["x".to_string()]).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.contains("38;2;1;2;3"));
        assert!(out.contains("48;2;4;5;6"));
    }
}
