//! Display Surface
//!
//! A width x height character buffer bound to a render sink. Every public
//! mutating call finishes with exactly one full `present` of the buffer,
//! regardless of how many cells it touched (including none).
//!
//! Coordinates outside the buffer are never an error. Single-cell reads
//! return `None` and writes do nothing; region operations skip just the
//! cells that fall outside.
//!
//! Rectangles are inclusive on both corners. Corners given out of order
//! are not normalized: the affected axis iterates an empty range, so
//! `fill_area((5, 0), (2, 3), c)` writes nothing. Use
//! [`Rect::normalized`] for the forgiving reading.

use crate::app::Config;
use crate::renderer::{RenderResult, RenderSink};

use super::grid::Grid;
use super::rect::{Point, Rect};

/// Largest accepted width or height
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Error type for surface construction
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions {width}x{height} (each must be 1..=65535)")]
    InvalidDimensions { width: usize, height: usize },

    #[error(transparent)]
    Render(#[from] crate::renderer::RenderError),
}

/// The character surface and its render target
pub struct Surface<S: RenderSink> {
    grid: Grid,
    filler: char,
    title: String,
    sink: S,
}

impl<S: RenderSink> Surface<S> {
    /// Create a surface with every cell set to `filler` and show it once
    pub fn new(
        width: usize,
        height: usize,
        filler: char,
        title: impl Into<String>,
        sink: S,
    ) -> Result<Self, SurfaceError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }

        let mut surface = Self {
            grid: Grid::new(width, height, filler),
            filler,
            title: title.into(),
            sink,
        };
        surface.sink.set_title(&surface.title)?;
        surface.refresh()?;
        Ok(surface)
    }

    /// Create a surface from a validated configuration
    pub fn from_config(config: &Config, sink: S) -> Result<Self, SurfaceError> {
        Self::new(config.width, config.height, config.filler, config.title.clone(), sink)
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Each row as a string, top to bottom
    pub fn lines(&self) -> Vec<String> {
        self.grid.lines()
    }

    /// The bottom-right cell, used when a rectangle omits its second corner
    pub fn max_point(&self) -> Point {
        // Dimensions are capped at MAX_DIMENSION, so these fit in i32
        Point::new(self.width() as i32 - 1, self.height() as i32 - 1)
    }

    /// Read a cell; `None` when out of bounds
    pub fn get(&self, pos: impl Into<Point>) -> Option<char> {
        let p = pos.into();
        self.grid.cell(p.x, p.y)
    }

    /// Write a cell. Out-of-bounds writes are ignored but still re-present.
    pub fn set(&mut self, pos: impl Into<Point>, ch: char) -> RenderResult<()> {
        let p = pos.into();
        self.grid.set(p.x, p.y, ch);
        self.refresh()
    }

    /// Reset every cell to the filler
    pub fn clear(&mut self) -> RenderResult<()> {
        self.grid.fill(self.filler);
        self.refresh()
    }

    /// Set every cell of `rect` that lies on the surface to `ch`
    pub fn fill_area(&mut self, rect: Rect, ch: char) -> RenderResult<()> {
        let (tl, br) = rect.resolve(self.max_point());
        if rect.is_reversed(self.max_point()) {
            tracing::debug!(?tl, ?br, "fill_area: reversed corners, nothing to fill");
        }

        for y in self.row_span(tl.y, br.y) {
            for x in self.col_span(tl.x, br.x) {
                self.grid.set(x, y, ch);
            }
        }
        self.refresh()
    }

    /// Exchange the cells of `rect` with the equally sized block at `dest`.
    ///
    /// Pairs are visited row by row, left to right, and a pair is skipped
    /// unless both of its cells are on the surface. When the two blocks
    /// overlap, later pairs see the result of earlier swaps.
    pub fn swap_area(&mut self, rect: Rect, dest: impl Into<Point>) -> RenderResult<()> {
        let (src, _) = rect.resolve(self.max_point());
        let dest = dest.into();
        let (w, h) = rect.extent(self.max_point());
        if w <= 0 || h <= 0 {
            tracing::debug!(?rect, "swap_area: reversed corners, nothing to swap");
            return self.refresh();
        }

        let (dx0, dx1) = offset_window(w, src.x, dest.x, self.width());
        let (dy0, dy1) = offset_window(h, src.y, dest.y, self.height());
        for dy in dy0..dy1 {
            for dx in dx0..dx1 {
                let a = Point::new((i64::from(src.x) + dx) as i32, (i64::from(src.y) + dy) as i32);
                let b = Point::new((i64::from(dest.x) + dx) as i32, (i64::from(dest.y) + dy) as i32);
                self.grid.swap(a, b);
            }
        }
        self.refresh()
    }

    /// Draw the outline of `rect` with `border`, optionally filling the
    /// interior (strictly inside the outline) with `fill`.
    ///
    /// The top and bottom edges are drawn first, then the left and right
    /// edges, so the side pass owns the corner cells.
    pub fn draw_rectangle(&mut self, rect: Rect, border: char, fill: Option<char>) -> RenderResult<()> {
        let (tl, br) = rect.resolve(self.max_point());
        if rect.is_reversed(self.max_point()) {
            tracing::debug!(?tl, ?br, "draw_rectangle: reversed corners");
        }

        for x in self.col_span(tl.x, br.x) {
            self.grid.set(x, tl.y, border);
            self.grid.set(x, br.y, border);
        }
        for y in self.row_span(tl.y, br.y) {
            self.grid.set(tl.x, y, border);
            self.grid.set(br.x, y, border);
        }

        if let Some(fill) = fill {
            for y in self.row_span(tl.y.saturating_add(1), br.y.saturating_sub(1)) {
                for x in self.col_span(tl.x.saturating_add(1), br.x.saturating_sub(1)) {
                    self.grid.set(x, y, fill);
                }
            }
        }
        self.refresh()
    }

    /// Present the current buffer to the sink
    pub fn refresh(&mut self) -> RenderResult<()> {
        let rows = self.grid.lines();
        tracing::trace!(rows = rows.len(), "presenting surface");
        self.sink.present(&rows)
    }

    /// Columns of `start..=end` that lie on the surface, in ascending order
    fn col_span(&self, start: i32, end: i32) -> std::ops::Range<i32> {
        clip(start, end, self.width())
    }

    /// Rows of `start..=end` that lie on the surface, in ascending order
    fn row_span(&self, start: i32, end: i32) -> std::ops::Range<i32> {
        clip(start, end, self.height())
    }
}

/// `start..=end` intersected with `0..len`; empty when `start > end`
fn clip(start: i32, end: i32, len: usize) -> std::ops::Range<i32> {
    let len = len as i32;
    let lo = start.max(0);
    let hi = end.saturating_add(1).min(len);
    lo..hi.max(lo)
}

/// Offsets `d` in `0..extent` for which both `a + d` and `b + d` fall in
/// `0..len`, as a half-open range
fn offset_window(extent: i64, a: i32, b: i32, len: usize) -> (i64, i64) {
    let len = len as i64;
    let (a, b) = (i64::from(a), i64::from(b));
    let lo = 0.max(-a).max(-b);
    let hi = extent.min(len - a).min(len - b);
    (lo, hi.max(lo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MemorySink;

    fn surface(w: usize, h: usize, filler: char) -> Surface<MemorySink> {
        Surface::new(w, h, filler, "test", MemorySink::new()).unwrap()
    }

    fn paint(s: &mut Surface<MemorySink>) {
        // Distinct character per cell: 'a', 'b', ... row-major
        let w = s.width() as i32;
        for y in 0..s.height() as i32 {
            for x in 0..w {
                let ch = char::from_u32('a' as u32 + (y * w + x) as u32).unwrap();
                s.set((x, y), ch).unwrap();
            }
        }
    }

    #[test]
    fn test_new_fills_and_presents_once() {
        let s = surface(3, 2, '.');
        assert_eq!(s.lines(), vec!["...", "..."]);
        assert_eq!(s.sink().frames(), 1);
        assert_eq!(s.sink().title(), "test");
        assert_eq!(s.sink().text(), "...\n...\n");
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(
            Surface::new(0, 5, ' ', "", MemorySink::new()),
            Err(SurfaceError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Surface::new(4, MAX_DIMENSION + 1, ' ', "", MemorySink::new()).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut s = surface(8, 8, ' ');
        s.fill_area(Rect::new((0, 0), (7, 7)), '░').unwrap();
        s.set((0, 0), '●').unwrap();

        assert_eq!(s.get((0, 0)), Some('●'));
        assert_eq!(s.get((1, 0)), Some('░'));
    }

    #[test]
    fn test_set_out_of_bounds_still_presents() {
        let mut s = surface(4, 4, '.');
        let before = s.lines();

        s.set((4, 0), 'X').unwrap();
        s.set((-1, 2), 'X').unwrap();

        assert_eq!(s.lines(), before);
        assert_eq!(s.get((4, 0)), None);
        assert_eq!(s.get((-1, 2)), None);
        assert_eq!(s.sink().frames(), 3);
    }

    #[test]
    fn test_clear_restores_filler() {
        let mut s = surface(5, 3, '.');
        s.fill_area(Rect::full(), '#').unwrap();
        s.clear().unwrap();
        assert!(s.lines().iter().all(|row| row == "....."));
    }

    #[test]
    fn test_fill_area_defaults_to_bottom_right() {
        let mut s = surface(4, 3, '.');
        s.fill_area(Rect::from_corner((2, 1)), '#').unwrap();
        assert_eq!(s.lines(), vec!["....", "..##", "..##"]);
    }

    #[test]
    fn test_fill_area_clips_to_surface() {
        let mut s = surface(4, 3, '.');
        s.fill_area(Rect::new((-2, -2), (1, 0)), '#').unwrap();
        s.fill_area(Rect::new((3, 2), (100, 100)), '@').unwrap();
        assert_eq!(s.lines(), vec!["##..", "....", "...@"]);
    }

    #[test]
    fn test_fill_area_reversed_is_noop() {
        let mut s = surface(4, 4, '.');
        let before = s.lines();
        s.fill_area(Rect::new((3, 0), (1, 3)), '#').unwrap();
        s.fill_area(Rect::new((0, 3), (3, 1)), '#').unwrap();
        assert_eq!(s.lines(), before);
        assert_eq!(s.sink().frames(), 3);
    }

    #[test]
    fn test_fill_area_presents_once() {
        let mut s = surface(10, 10, ' ');
        s.fill_area(Rect::full(), 'x').unwrap();
        assert_eq!(s.sink().frames(), 2);
    }

    #[test]
    fn test_swap_area_blocks() {
        let mut s = surface(4, 4, '.');
        s.fill_area(Rect::new((0, 0), (1, 1)), 'A').unwrap();
        s.fill_area(Rect::new((2, 2), (3, 3)), 'B').unwrap();
        s.set((3, 0), 'C').unwrap();
        let frames = s.sink().frames();

        s.swap_area(Rect::new((0, 0), (1, 1)), (2, 2)).unwrap();

        assert_eq!(s.lines(), vec!["BB.C", "BB..", "..AA", "..AA"]);
        assert_eq!(s.sink().frames(), frames + 1);
    }

    #[test]
    fn test_swap_area_skips_out_of_bounds_pairs() {
        let mut s = surface(4, 2, '.');
        paint(&mut s);
        // Destination hangs off the right edge: only the first column pairs
        s.swap_area(Rect::new((0, 0), (1, 1)), (3, 0)).unwrap();
        assert_eq!(s.lines(), vec!["dbca", "hfge"]);
    }

    #[test]
    fn test_swap_area_overlapping_is_sequential() {
        let mut s = surface(4, 1, '.');
        paint(&mut s);
        // (0,0)<->(1,0) then (1,0)<->(2,0) then (2,0)<->(3,0)
        s.swap_area(Rect::new((0, 0), (2, 0)), (1, 0)).unwrap();
        assert_eq!(s.lines(), vec!["bcda"]);
    }

    #[test]
    fn test_swap_area_twice_restores() {
        let mut s = surface(6, 4, '.');
        paint(&mut s);
        let before = s.lines();

        let rect = Rect::new((0, 0), (2, 1));
        s.swap_area(rect, (3, 2)).unwrap();
        assert_ne!(s.lines(), before);
        s.swap_area(rect, (3, 2)).unwrap();
        assert_eq!(s.lines(), before);
    }

    #[test]
    fn test_swap_area_reversed_is_noop() {
        let mut s = surface(4, 4, '.');
        paint(&mut s);
        let before = s.lines();
        s.swap_area(Rect::new((2, 2), (0, 0)), (1, 1)).unwrap();
        assert_eq!(s.lines(), before);
    }

    #[test]
    fn test_swap_area_default_rect_with_offset() {
        let mut s = surface(3, 1, '.');
        paint(&mut s);
        // Whole surface against itself shifted by one: sequential swaps rotate
        s.swap_area(Rect::full(), (1, 0)).unwrap();
        assert_eq!(s.lines(), vec!["bca"]);
    }

    #[test]
    fn test_draw_rectangle_border_only() {
        let mut s = surface(7, 7, '.');
        s.draw_rectangle(Rect::new((1, 1), (5, 5)), '#', None).unwrap();
        assert_eq!(
            s.lines(),
            vec![
                ".......", ".#####.", ".#...#.", ".#...#.", ".#...#.", ".#####.", ".......",
            ]
        );
    }

    #[test]
    fn test_draw_rectangle_with_fill() {
        let mut s = surface(7, 7, '.');
        s.draw_rectangle(Rect::new((1, 1), (5, 5)), '#', Some(' ')).unwrap();
        for y in 2..=4 {
            for x in 2..=4 {
                assert_eq!(s.get((x, y)), Some(' '));
            }
        }
        assert_eq!(s.get((1, 1)), Some('#'));
        assert_eq!(s.get((0, 0)), Some('.'));
    }

    #[test]
    fn test_draw_rectangle_clipped() {
        let mut s = surface(4, 3, '.');
        // Right and bottom edges fall outside: only top and left remain
        s.draw_rectangle(Rect::new((1, 1), (9, 9)), '#', Some('o')).unwrap();
        assert_eq!(s.lines(), vec!["....", ".###", ".#oo"]);
    }

    #[test]
    fn test_draw_rectangle_default_is_surface_border() {
        let mut s = surface(4, 3, ' ');
        s.draw_rectangle(Rect::full(), '*', None).unwrap();
        assert_eq!(s.lines(), vec!["****", "*  *", "****"]);
    }

    #[test]
    fn test_draw_rectangle_reversed_columns_keeps_sides() {
        let mut s = surface(5, 3, '.');
        // x1 > x2: no top/bottom edges, but both side columns still drawn
        s.draw_rectangle(Rect::new((3, 0), (1, 2)), '#', Some('o')).unwrap();
        assert_eq!(s.lines(), vec![".#.#.", ".#.#.", ".#.#."]);
    }
}
