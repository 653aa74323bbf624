use crate::{
    foundation::core::Canvas,
    foundation::error::{TilefadeError, TilefadeResult},
};

/// How many times an animation plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopCount {
    /// Loop forever (GIF loop count 0).
    #[default]
    Infinite,
    /// Repeat a fixed number of times.
    Finite(u16),
}

/// Configuration provided to a [`FrameSink`] before any frames are pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Uniform per-frame display time in milliseconds.
    pub frame_delay_ms: u32,
    pub repeat: LoopCount,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
}

impl SinkConfig {
    pub fn validate(&self) -> TilefadeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TilefadeError::validation("sink width/height must be non-zero"));
        }
        if self.frame_delay_ms == 0 {
            return Err(TilefadeError::validation("frame delay must be non-zero"));
        }
        Ok(())
    }

    pub fn check_frame(&self, frame: &Canvas) -> TilefadeResult<()> {
        if frame.dimensions() != (self.width, self.height) {
            return Err(TilefadeError::dimension_mismatch(
                (self.width, self.height),
                frame.dimensions(),
            ));
        }
        Ok(())
    }
}

/// Sink contract for consuming frames in sequence order.
///
/// `push_frame` is called with strictly increasing indices starting at 0, between one `begin` and
/// one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TilefadeResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: usize, frame: &Canvas) -> TilefadeResult<()>;
    /// Called once after the last frame. Output becomes visible only here.
    fn end(&mut self) -> TilefadeResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<Canvas>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[Canvas] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TilefadeResult<()> {
        cfg.validate()?;
        self.frames = Vec::with_capacity(cfg.frame_count);
        self.cfg = Some(cfg);
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &Canvas) -> TilefadeResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| TilefadeError::validation("push_frame called before begin"))?;
        cfg.check_frame(frame)?;
        if idx != self.frames.len() {
            return Err(TilefadeError::validation(format!(
                "frame {idx} pushed out of order (expected {})",
                self.frames.len()
            )));
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> TilefadeResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
