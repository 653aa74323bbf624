pub mod grid;
pub mod strip;

use std::str::FromStr;

use crate::{
    foundation::core::{Canvas, Image},
    foundation::error::{TilefadeError, TilefadeResult},
};

/// How a collection of images is tiled into one canvas.
///
/// One strategy is chosen per run and applied to both collections.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Near-square grid, `ceil(sqrt(n))` columns, row-major.
    #[default]
    Grid,
    /// Single row, left to right, top-aligned.
    Strip,
}

impl LayoutStrategy {
    #[tracing::instrument(skip(images), fields(n = images.len()))]
    pub fn compose(self, images: &[Image]) -> TilefadeResult<Canvas> {
        match self {
            Self::Grid => grid::compose_grid(images),
            Self::Strip => strip::compose_strip(images),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Strip => "strip",
        }
    }
}

impl FromStr for LayoutStrategy {
    type Err = TilefadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" | "square" | "near_square" => Ok(Self::Grid),
            "strip" | "row" | "side_by_side" => Ok(Self::Strip),
            "" => Err(TilefadeError::validation("layout must be non-empty")),
            other => Err(TilefadeError::validation(format!("unknown layout '{other}'"))),
        }
    }
}

impl std::fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout/strategy.rs"]
mod tests;
