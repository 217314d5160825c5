//! Offscreen XRGB8888 framebuffer.
//!
//! The core owns exactly one [`Framebuffer`] for its entire lifetime. All
//! drawing is clipped against the buffer bounds, so callers may pass
//! partially off-screen coordinates freely.

use crate::font::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

/// Packs an opaque XRGB8888 pixel.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FramebufferError {
    #[error("framebuffer dimensions must be nonzero (got {width}x{height})")]
    ZeroSized { width: u32, height: u32 },

    #[error("framebuffer {width}x{height} is too large to allocate")]
    TooLarge { width: u32, height: u32 },
}

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Allocates a zeroed buffer, rejecting degenerate geometry up front
    /// instead of carrying an unusable surface into the frame loop.
    pub fn new(width: u32, height: u32) -> Result<Self, FramebufferError> {
        if width == 0 || height == 0 {
            return Err(FramebufferError::ZeroSized { width, height });
        }
        let len = (width as u64)
            .checked_mul(height as u64)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(FramebufferError::TooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes, as expected by the host video callback.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reads one pixel; `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fills a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) {
        let x0 = x.clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let x1 = (x as i64 + w as i64).clamp(0, self.width as i64) as usize;
        let y1 = (y as i64 + h as i64).clamp(0, self.height as i64) as usize;

        let width = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * width + x0..row * width + x1].fill(color);
        }
    }

    /// Draws a one-pixel rectangle outline.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) {
        if w == 0 || h == 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h as i32 - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w as i32 - 1, y, 1, h, color);
    }

    /// Draws ASCII text with the built-in 8x8 font. A `bg` of `None` leaves
    /// the pixels between glyph strokes untouched.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: u32, bg: Option<u32>) {
        let mut cx = x;
        for byte in text.bytes() {
            self.draw_glyph(cx, y, byte, fg, bg);
            cx += GLYPH_WIDTH as i32;
        }
    }

    /// Pixel width of `text` when rendered with the built-in font.
    pub fn text_width(text: &str) -> u32 {
        text.len() as u32 * GLYPH_WIDTH
    }

    pub fn text_height() -> u32 {
        GLYPH_HEIGHT
    }

    fn draw_glyph(&mut self, x: i32, y: i32, c: u8, fg: u32, bg: Option<u32>) {
        let bitmap = glyph(c);
        for (row, bits) in bitmap.iter().enumerate() {
            let py = y + row as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for col in 0..GLYPH_WIDTH as i32 {
                let px = x + col;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                let on = (bits >> (7 - col)) & 1 != 0;
                let color = match (on, bg) {
                    (true, _) => fg,
                    (false, Some(bg)) => bg,
                    (false, None) => continue,
                };
                self.pixels[py as usize * self.width as usize + px as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_geometry() {
        let err = Framebuffer::new(0, 720).map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            FramebufferError::ZeroSized {
                width: 0,
                height: 720
            }
        );
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut fb = Framebuffer::new(16, 16).unwrap();
        fb.fill_rect(-4, -4, 8, 8, rgb(255, 0, 0));
        assert_eq!(fb.pixel(3, 3), Some(rgb(255, 0, 0)));
        assert_eq!(fb.pixel(4, 4), Some(0));

        // Fully off-screen draws are no-ops.
        fb.fill_rect(100, 100, 8, 8, rgb(0, 255, 0));
        assert!(fb.pixels().iter().all(|&p| p == 0 || p == rgb(255, 0, 0)));
    }

    #[test]
    fn draw_rect_outlines_only() {
        let mut fb = Framebuffer::new(16, 16).unwrap();
        fb.draw_rect(2, 2, 5, 5, 0xFF);
        assert_eq!(fb.pixel(2, 2), Some(0xFF));
        assert_eq!(fb.pixel(6, 6), Some(0xFF));
        assert_eq!(fb.pixel(4, 4), Some(0));
    }

    #[test]
    fn text_marks_glyph_pixels() {
        let mut fb = Framebuffer::new(32, 16).unwrap();
        fb.draw_text(0, 0, "!", rgb(255, 255, 255), None);
        // '!' has its stem on the second row, columns 3..5.
        assert_eq!(fb.pixel(3, 1), Some(rgb(255, 255, 255)));
        assert_eq!(fb.pixel(0, 0), Some(0));
    }
}
