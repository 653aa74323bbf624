use std::iter::FusedIterator;

use crate::{
    effects::blend::{blend_unchecked, ensure_same_dimensions},
    foundation::core::Canvas,
    foundation::error::{TilefadeError, TilefadeResult},
};

/// Which part of the hold → fade → hold → fade-back loop a frame belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// `steps` frames of the first canvas.
    HoldFirst,
    /// `steps + 1` frames blending first → second, alpha `0..=1`.
    FadeForward,
    /// `steps` frames of the second canvas.
    HoldSecond,
    /// `steps + 1` frames blending second → first, alpha `0..=1`.
    FadeBack,
}

/// Phase and blend weight for one frame position.
///
/// `alpha` weights the phase's destination: first → second for `HoldFirst`, `FadeForward` and
/// `HoldSecond`; second → first for `FadeBack`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSpec {
    pub phase: Phase,
    pub alpha: f64,
}

/// Lazy, restartable producer of the looping crossfade between two canvases.
///
/// Layout for `steps = s` (length `4s + 2`):
///
/// ```text
/// [0, s)          hold first
/// [s, 2s + 1)     first -> second, alpha i/s for i in 0..=s
/// [2s + 1, 3s + 1) hold second
/// [3s + 1, 4s + 2) second -> first, alpha i/s for i in 0..=s
/// ```
///
/// The forward fade starts again at alpha 0, so the last hold frame and the first fade frame are
/// identical; the same happens at the second hold. Played on an infinite loop the sequence cycles
/// seamlessly.
#[derive(Clone, Copy, Debug)]
pub struct TransitionSequence<'a> {
    first: &'a Canvas,
    second: &'a Canvas,
    steps: u32,
}

impl<'a> TransitionSequence<'a> {
    pub fn new(first: &'a Canvas, second: &'a Canvas, steps: u32) -> TilefadeResult<Self> {
        if steps == 0 {
            return Err(TilefadeError::InvalidSteps);
        }
        ensure_same_dimensions(first, second)?;
        Ok(Self {
            first,
            second,
            steps,
        })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Always `4 * steps + 2`.
    pub fn len(&self) -> usize {
        4 * self.steps as usize + 2
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Dimensions shared by every frame.
    pub fn dimensions(&self) -> (u32, u32) {
        self.first.dimensions()
    }

    pub fn frame_spec(&self, idx: usize) -> Option<FrameSpec> {
        let s = self.steps as usize;
        let step_alpha = |i: usize| i as f64 / f64::from(self.steps);

        let spec = if idx < s {
            FrameSpec {
                phase: Phase::HoldFirst,
                alpha: 0.0,
            }
        } else if idx < 2 * s + 1 {
            FrameSpec {
                phase: Phase::FadeForward,
                alpha: step_alpha(idx - s),
            }
        } else if idx < 3 * s + 1 {
            FrameSpec {
                phase: Phase::HoldSecond,
                alpha: 1.0,
            }
        } else if idx < self.len() {
            FrameSpec {
                phase: Phase::FadeBack,
                alpha: step_alpha(idx - (3 * s + 1)),
            }
        } else {
            return None;
        };
        Some(spec)
    }

    /// Render the frame at `idx`, or `None` past the end.
    pub fn frame(&self, idx: usize) -> Option<Canvas> {
        let spec = self.frame_spec(idx)?;
        let out = match spec.phase {
            Phase::HoldFirst => self.first.clone(),
            Phase::HoldSecond => self.second.clone(),
            Phase::FadeForward => blend_unchecked(self.first, self.second, spec.alpha),
            Phase::FadeBack => blend_unchecked(self.second, self.first, spec.alpha),
        };
        Some(out)
    }

    /// Iterate frames from the start. Each call begins a fresh pass.
    pub fn iter(&self) -> Frames<'a> {
        Frames {
            seq: *self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &TransitionSequence<'a> {
    type Item = Canvas;
    type IntoIter = Frames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`TransitionSequence`].
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    seq: TransitionSequence<'a>,
    next: usize,
}

impl Iterator for Frames<'_> {
    type Item = Canvas;

    fn next(&mut self) -> Option<Canvas> {
        let frame = self.seq.frame(self.next)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.seq.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}

/// Materialize the whole loop into a `Vec`.
#[tracing::instrument(skip(first, second))]
pub fn sequence(first: &Canvas, second: &Canvas, steps: u32) -> TilefadeResult<Vec<Canvas>> {
    Ok(TransitionSequence::new(first, second, steps)?.iter().collect())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transition.rs"]
mod tests;
