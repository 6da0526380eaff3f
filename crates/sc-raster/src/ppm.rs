//! Binary PPM (`P6`) export.
//!
//! The canvas buffer is already interleaved 8-bit RGB, so it is written
//! verbatim after the header.

use crate::canvas::Canvas;
use std::io::{self, Write};

/// Encode the canvas as an in-memory `P6` image.
pub fn encode_ppm(canvas: &Canvas) -> Vec<u8> {
    let mut out = Vec::with_capacity(canvas.pixels().len() + 32);
    // Writes into a Vec are infallible.
    let _ = write_ppm(canvas, &mut out);
    out
}

/// Stream the canvas as a `P6` image into `writer`.
pub fn write_ppm<W: Write>(canvas: &Canvas, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;
    writer.write_all(canvas.pixels())?;
    writer.flush()
}

impl Canvas {
    pub fn write_ppm<W: Write>(&self, writer: W) -> io::Result<()> {
        write_ppm(self, writer)
    }
}
