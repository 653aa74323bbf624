use std::path::Path;

use anyhow::Context;

use crate::{foundation::core::Image, foundation::error::TilefadeResult};

/// Decode encoded image bytes (PNG, JPEG, ...) and convert to RGB8.
///
/// Alpha is dropped and grayscale/palette sources are expanded.
pub fn decode_image(bytes: &[u8]) -> TilefadeResult<Image> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(Image::from_rgb_image(dyn_img.to_rgb8()))
}

/// Read and decode one image file.
pub fn load_image(path: &Path) -> TilefadeResult<Image> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image bytes from '{}'", path.display()))?;
    let img = decode_image(&bytes).with_context(|| format!("decode '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
