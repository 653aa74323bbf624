use std::sync::Arc;

use crate::foundation::error::{TilefadeError, TilefadeResult};

/// Bytes per pixel for every buffer in this crate (RGB8).
pub const CHANNELS: usize = 3;

/// Immutable RGB8 source image, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgb8: Arc<Vec<u8>>,
}

impl Image {
    /// Wrap a raw RGB8 buffer, checking that its length matches `width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, rgb8: Vec<u8>) -> TilefadeResult<Self> {
        check_len(width, height, rgb8.len())?;
        Ok(Self {
            width,
            height,
            rgb8: Arc::new(rgb8),
        })
    }

    /// Build a single-color image; handy for fixtures and placeholders.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            rgb8: Arc::new(rgb.repeat(width as usize * height as usize)),
        }
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgb8: Arc::new(img.into_raw()),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB8 bytes, row-major.
    pub fn rgb8(&self) -> &[u8] {
        &self.rgb8
    }
}

/// Mutable RGB8 pixel buffer. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Zero-filled (black) canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; buffer_len(width, height)],
        }
    }

    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> TilefadeResult<Self> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), buffer_len(width, height));
        Self {
            width,
            height,
            data,
        }
    }

    /// Copy an image into a canvas of exactly its size.
    pub fn from_image(img: &Image) -> Self {
        Self {
            width: img.width,
            height: img.height,
            data: img.rgb8.as_ref().clone(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns `None` when `(x, y)` is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Paste `img` with its top-left corner at `(x, y)`.
    ///
    /// The source is copied as-is (no scaling); anything falling outside the canvas is clipped.
    pub fn paste(&mut self, img: &Image, x: u32, y: u32) {
        blit(
            &mut self.data,
            (self.width, self.height),
            &img.rgb8,
            (img.width, img.height),
            (x, y),
        );
    }

    /// Return a new `width x height` canvas with this one anchored top-left and the remainder
    /// background-filled.
    pub fn padded_to(&self, width: u32, height: u32) -> TilefadeResult<Canvas> {
        if width < self.width || height < self.height {
            return Err(TilefadeError::validation(format!(
                "cannot pad {}x{} canvas down to {width}x{height}",
                self.width, self.height
            )));
        }
        let mut out = Canvas::new(width, height);
        blit(
            &mut out.data,
            (width, height),
            &self.data,
            (self.width, self.height),
            (0, 0),
        );
        Ok(out)
    }

    pub fn to_rgb_image(&self) -> TilefadeResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| TilefadeError::validation("canvas buffer does not match its size"))
    }

    /// Opaque RGBA8 copy, the layout animated encoders expect.
    pub fn to_rgba_image(&self) -> TilefadeResult<image::RgbaImage> {
        let mut rgba = Vec::with_capacity(self.data.len() / CHANNELS * 4);
        for px in self.data.chunks_exact(CHANNELS) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        image::RgbaImage::from_raw(self.width, self.height, rgba)
            .ok_or_else(|| TilefadeError::validation("canvas buffer does not match its size"))
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

fn check_len(width: u32, height: u32, len: usize) -> TilefadeResult<()> {
    let expected = buffer_len(width, height);
    if len != expected {
        return Err(TilefadeError::validation(format!(
            "rgb8 buffer for {width}x{height} must be {expected} bytes, got {len}"
        )));
    }
    Ok(())
}

fn blit(dst: &mut [u8], dst_size: (u32, u32), src: &[u8], src_size: (u32, u32), at: (u32, u32)) {
    let (dw, dh) = dst_size;
    let (sw, sh) = src_size;
    let (x, y) = at;
    if x >= dw || y >= dh {
        return;
    }

    let row_bytes = sw.min(dw - x) as usize * CHANNELS;
    let rows = sh.min(dh - y) as usize;
    let dst_stride = dw as usize * CHANNELS;
    let src_stride = sw as usize * CHANNELS;

    for row in 0..rows {
        let s = row * src_stride;
        let d = (y as usize + row) * dst_stride + x as usize * CHANNELS;
        dst[d..d + row_bytes].copy_from_slice(&src[s..s + row_bytes]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
