//! Software canvas: an interleaved RGB pixel buffer plus drawing state.
//!
//! Every drawing operation writes straight into the byte buffer. Regions
//! that fall partly or wholly outside the buffer are clipped to it, so no
//! coordinate input can panic.

use sc_core::{Color, Vector2};
use std::ops::Range;
use std::time::Duration;

/// Bytes per pixel in the buffer (R, G, B).
pub const BYTES_PER_PIXEL: usize = 3;

// ─── Config & State ──────────────────────────────────────────────────────

/// Canvas configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Horizontal placement of the surface on its host, in px.
    pub x: i32,
    /// Vertical placement of the surface on its host, in px.
    pub y: i32,
    /// Target refresh rate of the host surface.
    pub fps: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            x: 0,
            y: 0,
            fps: 60,
        }
    }
}

impl CanvasConfig {
    /// Default config with the given size, placed at (0, 0).
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Persistent drawing state of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasState {
    /// Color used by all fill operations.
    pub fill_color: Color,
    /// Color used by all stroke operations.
    pub stroke_color: Color,
    /// Thickness of strokes in px. Fills are inset by the same amount.
    pub stroke_width: u32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            fill_color: Color::WHITE,
            stroke_color: Color::BLACK,
            stroke_width: 1,
        }
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────

/// An in-memory RGB surface. Rows are stored top to bottom, each pixel as
/// three consecutive bytes.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    position: Vector2,
    fps: u32,
    pixels: Vec<u8>,
    state: CanvasState,
}

impl Canvas {
    /// A `width × height` canvas at (0, 0). The buffer starts black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(CanvasConfig::sized(width, height))
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let len = config.width as usize * config.height as usize * BYTES_PER_PIXEL;
        log::debug!(
            "CANVAS {}x{} at ({}, {}), {} bytes",
            config.width,
            config.height,
            config.x,
            config.y,
            len
        );
        Self {
            width: config.width,
            height: config.height,
            position: Vector2::new(config.x as f32, config.y as f32),
            fps: config.fps,
            pixels: vec![0; len],
            state: CanvasState::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the canvas in px.
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width as f32, self.height as f32)
    }

    /// Placement of the canvas on its host.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Time budget of one frame at the target fps. An fps of 0 counts as 1.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// The raw interleaved RGB bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.pixels[i..i + BYTES_PER_PIXEL];
        Some(Color::rgb(px[0], px[1], px[2]))
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    // ─── Drawing state ───────────────────────────────────────────────────

    /// Set the color used by future fill operations.
    pub fn fill(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    pub fn fill_color(&self) -> Color {
        self.state.fill_color
    }

    /// Set the color used by future stroke operations.
    pub fn stroke(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    pub fn stroke_color(&self) -> Color {
        self.state.stroke_color
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.state.stroke_width = width;
    }

    pub fn stroke_width(&self) -> u32 {
        self.state.stroke_width
    }

    /// Disable strokes (width 0).
    pub fn no_stroke(&mut self) {
        self.state.stroke_width = 0;
    }

    // ─── Drawing ops ─────────────────────────────────────────────────────

    /// Replace every pixel with `color`. Drawing state is left untouched.
    pub fn clear(&mut self, color: Color) {
        log::trace!("CLEAR {color}");
        let rgb = [color.r, color.g, color.b];
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgb);
        }
    }

    pub fn clear_white(&mut self) {
        self.clear(Color::WHITE);
    }

    /// Draw a filled rectangle with its top-left corner at (x, y).
    ///
    /// The fill covers the rectangle inset by the stroke width on every
    /// side. With a positive stroke width the outline is drawn as well,
    /// exactly as [`Canvas::rect`] would.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (x0, y0, x1, y1) = corners(x, y, width, height);
        let sw = i64::from(self.state.stroke_width);
        log::trace!(
            "FILL_RECT ({x}, {y}) {width}x{height} fill {} stroke {} w{}",
            self.state.fill_color,
            self.state.stroke_color,
            sw
        );
        self.warn_if_offscreen("fill_rect", x0, y0, x1, y1);
        self.fill_region(x0 + sw, y0 + sw, x1 - sw, y1 - sw, self.state.fill_color);
        self.stroke_region(x0, y0, x1, y1);
    }

    /// Draw the outline of a rectangle in the stroke color.
    ///
    /// The outline is made of four bands, each `stroke_width` thick, lying
    /// inside the rectangle's bounds. Nothing is drawn with a zero width.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (x0, y0, x1, y1) = corners(x, y, width, height);
        log::trace!(
            "RECT ({x}, {y}) {width}x{height} stroke {} w{}",
            self.state.stroke_color,
            self.state.stroke_width
        );
        self.warn_if_offscreen("rect", x0, y0, x1, y1);
        self.stroke_region(x0, y0, x1, y1);
    }

    fn stroke_region(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let sw = i64::from(self.state.stroke_width);
        if sw == 0 || x1 <= x0 || y1 <= y0 {
            return;
        }
        let color = self.state.stroke_color;

        // Bands never overlap: top and bottom span the full width, left and
        // right only the rows between them.
        let top = (y0 + sw).min(y1);
        let bottom = (y1 - sw).max(top);
        let left = (x0 + sw).min(x1);
        let right = (x1 - sw).max(left);

        self.fill_region(x0, y0, x1, top, color);
        self.fill_region(x0, bottom, x1, y1, color);
        self.fill_region(x0, top, left, bottom, color);
        self.fill_region(right, top, x1, bottom, color);
    }

    /// Write `color` into `[x0, x1) × [y0, y1)`, clipped to the buffer.
    fn fill_region(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let (Some(cols), Some(rows)) = (clip(x0, x1, self.width), clip(y0, y1, self.height))
        else {
            return;
        };
        let rgb = [color.r, color.g, color.b];
        let stride = self.width as usize * BYTES_PER_PIXEL;
        for row in rows {
            let start = row * stride + cols.start * BYTES_PER_PIXEL;
            let end = row * stride + cols.end * BYTES_PER_PIXEL;
            for px in self.pixels[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&rgb);
            }
        }
    }

    fn warn_if_offscreen(&self, op: &str, x0: i64, y0: i64, x1: i64, y1: i64) {
        let visible = clip(x0, x1, self.width).is_some() && clip(y0, y1, self.height).is_some();
        if x1 > x0 && y1 > y0 && !visible {
            log::warn!(
                "{op}: ({x0}, {y0})-({x1}, {y1}) lies outside the {}x{} canvas",
                self.width,
                self.height
            );
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

/// Corners in i64 so `x + width` can't overflow.
fn corners(x: i32, y: i32, width: i32, height: i32) -> (i64, i64, i64, i64) {
    let (x0, y0) = (i64::from(x), i64::from(y));
    (x0, y0, x0 + i64::from(width), y0 + i64::from(height))
}

/// Clamp the half-open span `[start, end)` to `[0, limit)`.
fn clip(start: i64, end: i64, limit: u32) -> Option<Range<usize>> {
    let start = start.max(0);
    let end = end.min(i64::from(limit));
    (start < end).then(|| start as usize..end as usize)
}
