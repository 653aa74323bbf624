use crate::{
    foundation::core::{Canvas, Image},
    foundation::error::{TilefadeError, TilefadeResult},
    layout::grid::checked_sum,
};

/// Single-row sizing: width is the sum of image widths, height the tallest image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripDescriptor {
    pub total_width: u32,
    pub height: u32,
    /// Left edge of each image, in input order.
    pub x_offsets: Vec<u32>,
}

impl StripDescriptor {
    pub fn for_images(images: &[Image]) -> TilefadeResult<Self> {
        if images.is_empty() {
            return Err(TilefadeError::EmptyInput);
        }

        let widths: Vec<u32> = images.iter().map(|img| img.width()).collect();
        let total_width = checked_sum(&widths, "strip width")?;
        let height = images.iter().map(|img| img.height()).max().unwrap_or(0);

        let mut x = 0u32;
        let mut x_offsets = Vec::with_capacity(widths.len());
        for w in widths {
            x_offsets.push(x);
            x += w;
        }

        Ok(Self {
            total_width,
            height,
            x_offsets,
        })
    }
}

/// Lay images left to right, top-aligned.
pub fn compose_strip(images: &[Image]) -> TilefadeResult<Canvas> {
    let strip = StripDescriptor::for_images(images)?;
    let mut canvas = Canvas::new(strip.total_width, strip.height);
    for (img, &x) in images.iter().zip(&strip.x_offsets) {
        canvas.paste(img, x, 0);
    }
    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        "composed strip"
    );
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/strip.rs"]
mod tests;
