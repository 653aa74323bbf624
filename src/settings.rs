use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    encode::sink::LoopCount,
    foundation::core::Canvas,
    foundation::error::{TilefadeError, TilefadeResult},
    layout::LayoutStrategy,
};

/// Default number of fade steps per direction.
pub const DEFAULT_STEPS: u32 = 10;
/// Default per-frame display time.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// What to do when the two composite canvases differ in size.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DimensionPolicy {
    /// Fail with [`TilefadeError::DimensionMismatch`] before any frame is produced.
    #[default]
    Reject,
    /// Grow both canvases to the larger width and height, content anchored top-left.
    Pad,
}

impl DimensionPolicy {
    /// Bring `first` and `second` to a common size, or fail.
    pub fn reconcile(self, first: Canvas, second: Canvas) -> TilefadeResult<(Canvas, Canvas)> {
        if first.dimensions() == second.dimensions() {
            return Ok((first, second));
        }
        match self {
            Self::Reject => Err(TilefadeError::dimension_mismatch(
                first.dimensions(),
                second.dimensions(),
            )),
            Self::Pad => {
                let width = first.width().max(second.width());
                let height = first.height().max(second.height());
                tracing::warn!(
                    first = ?first.dimensions(),
                    second = ?second.dimensions(),
                    width,
                    height,
                    "padding composite canvases to a common size"
                );
                Ok((
                    first.padded_to(width, height)?,
                    second.padded_to(width, height)?,
                ))
            }
        }
    }
}

/// Tunables for one transition run. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionSettings {
    pub layout: LayoutStrategy,
    /// Fade steps per direction; the animation has `4 * steps + 2` frames.
    pub steps: u32,
    pub frame_delay_ms: u32,
    pub repeat: LoopCount,
    pub dimensions: DimensionPolicy,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            layout: LayoutStrategy::Grid,
            steps: DEFAULT_STEPS,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            repeat: LoopCount::Infinite,
            dimensions: DimensionPolicy::Reject,
        }
    }
}

impl TransitionSettings {
    pub fn validate(&self) -> TilefadeResult<()> {
        if self.steps == 0 {
            return Err(TilefadeError::InvalidSteps);
        }
        if self.frame_delay_ms == 0 {
            return Err(TilefadeError::validation("frame_delay_ms must be > 0"));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> TilefadeResult<Self> {
        let settings: Self = serde_json::from_str(s).context("parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> TilefadeResult<Self> {
        let f = File::open(path).with_context(|| format!("open settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse settings JSON '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
