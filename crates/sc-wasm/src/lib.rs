//! WASM bridge for Soft Canvas. Puts the software pixel buffer on a page.
//!
//! Compiled via `wasm-pack build --target web`. The page gets an absolutely
//! positioned `<canvas>` element; drawing happens in the Rust buffer and
//! `present()` copies it onto the element with `putImageData`.

use sc_raster::{Canvas, CanvasConfig, Color};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// A software canvas bound to a DOM `<canvas>` element.
#[wasm_bindgen]
pub struct WebCanvas {
    canvas: Canvas,
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// RGBA scratch buffer reused across `present()` calls.
    rgba: Vec<u8>,
}

#[wasm_bindgen]
impl WebCanvas {
    /// Create a `width × height` canvas element at (x, y) px on the page.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, x: i32, y: i32) -> Result<WebCanvas, JsValue> {
        console_error_panic_hook_setup();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let element: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        element.set_width(width);
        element.set_height(height);

        let style = element.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &format!("{x}px"))?;
        style.set_property("top", &format!("{y}px"))?;

        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&element)?;

        let ctx: CanvasRenderingContext2d = element
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let canvas = Canvas::with_config(CanvasConfig {
            width,
            height,
            x,
            y,
            ..CanvasConfig::default()
        });

        Ok(Self {
            canvas,
            element,
            ctx,
            rgba: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn fps(&self) -> u32 {
        self.canvas.fps()
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.canvas.set_fps(fps);
    }

    /// Frame budget in ms, for throttling a `requestAnimationFrame` loop.
    pub fn frame_interval_ms(&self) -> f64 {
        self.canvas.frame_interval().as_secs_f64() * 1000.0
    }

    /// Set the fill color from a `#RRGGBB` string or a color name.
    pub fn fill_hex(&mut self, color: &str) -> Result<(), JsValue> {
        self.canvas.fill(parse_color(color)?);
        Ok(())
    }

    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.canvas.fill(Color::rgb(r, g, b));
    }

    /// Set the stroke color from a `#RRGGBB` string or a color name.
    pub fn stroke_hex(&mut self, color: &str) -> Result<(), JsValue> {
        self.canvas.stroke(parse_color(color)?);
        Ok(())
    }

    pub fn stroke_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.canvas.stroke(Color::rgb(r, g, b));
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.canvas.set_stroke_width(width);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.canvas.fill_rect(x, y, width, height);
    }

    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.canvas.rect(x, y, width, height);
    }

    /// Clear to the given color; an empty string clears to white.
    pub fn clear_hex(&mut self, color: &str) -> Result<(), JsValue> {
        if color.is_empty() {
            self.canvas.clear_white();
        } else {
            self.canvas.clear(parse_color(color)?);
        }
        Ok(())
    }

    /// Copy the pixel buffer onto the `<canvas>` element.
    pub fn present(&mut self) -> Result<(), JsValue> {
        expand_rgba(self.canvas.pixels(), &mut self.rgba);
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.rgba.as_slice()),
            self.canvas.width(),
            self.canvas.height(),
        )?;
        log::debug!(
            "PRESENT {}x{} ({} bytes)",
            self.canvas.width(),
            self.canvas.height(),
            self.rgba.len()
        );
        self.ctx.put_image_data(&image, 0.0, 0.0)
    }

    /// Detach the element from the page.
    pub fn remove(&self) {
        self.element.remove();
    }
}

fn parse_color(s: &str) -> Result<Color, JsValue> {
    s.parse::<Color>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Expand interleaved RGB into opaque RGBA, as `ImageData` expects.
pub fn expand_rgba(rgb: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        out.extend_from_slice(&[px[0], px[1], px[2], 255]);
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Soft Canvas WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
