use std::path::PathBuf;

use crate::{
    assets::collection::ImageCollection,
    effects::transition::TransitionSequence,
    encode::gif::GifSink,
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::{Canvas, Image},
    foundation::error::{TilefadeError, TilefadeResult},
    layout::LayoutStrategy,
    settings::TransitionSettings,
};

/// Inputs for one end-to-end run.
#[derive(Clone, Debug)]
pub struct RunRequest {
    pub first_dir: PathBuf,
    pub second_dir: PathBuf,
    pub out_path: PathBuf,
    pub settings: TransitionSettings,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub images_per_collection: usize,
    pub layout: LayoutStrategy,
    /// Shared size of every encoded frame.
    pub canvas: (u32, u32),
    pub frames: usize,
    pub out_path: PathBuf,
}

/// Check that both collections are non-empty and hold the same number of images.
///
/// Runs on directory listings only, so nothing is decoded when the pair is unusable.
pub fn validate_pair(first: &ImageCollection, second: &ImageCollection) -> TilefadeResult<()> {
    first.ensure_non_empty()?;
    second.ensure_non_empty()?;
    if first.len() != second.len() {
        return Err(TilefadeError::CountMismatch {
            first: first.len(),
            second: second.len(),
        });
    }
    Ok(())
}

/// Compose both collections with one strategy and bring the results to a common size.
pub fn compose_pair(
    first: &[Image],
    second: &[Image],
    settings: &TransitionSettings,
) -> TilefadeResult<(Canvas, Canvas)> {
    let a = settings.layout.compose(first)?;
    let b = settings.layout.compose(second)?;
    settings.dimensions.reconcile(a, b)
}

/// Stream the full transition loop between two canvases into `sink`.
///
/// Returns the number of frames pushed. Only one frame is alive at a time.
pub fn render_transition(
    first: &Canvas,
    second: &Canvas,
    settings: &TransitionSettings,
    sink: &mut dyn FrameSink,
) -> TilefadeResult<usize> {
    settings.validate()?;
    let seq = TransitionSequence::new(first, second, settings.steps)?;
    let (width, height) = seq.dimensions();

    sink.begin(SinkConfig {
        width,
        height,
        frame_delay_ms: settings.frame_delay_ms,
        repeat: settings.repeat,
        frame_count: seq.len(),
    })?;
    for (idx, frame) in seq.iter().enumerate() {
        sink.push_frame(idx, &frame)?;
    }
    sink.end()?;
    Ok(seq.len())
}

/// Scan, validate, compose and encode into `sink`.
#[tracing::instrument(
    skip(req, sink),
    fields(first = %req.first_dir.display(), second = %req.second_dir.display())
)]
pub fn run_with_sink(req: &RunRequest, sink: &mut dyn FrameSink) -> TilefadeResult<RunReport> {
    req.settings.validate()?;

    let first = ImageCollection::scan(&req.first_dir)?;
    let second = ImageCollection::scan(&req.second_dir)?;
    validate_pair(&first, &second)?;

    let first_images = first.load_images()?;
    let second_images = second.load_images()?;
    let (a, b) = compose_pair(&first_images, &second_images, &req.settings)?;
    drop((first_images, second_images));

    let frames = render_transition(&a, &b, &req.settings, sink)?;
    let report = RunReport {
        images_per_collection: first.len(),
        layout: req.settings.layout,
        canvas: a.dimensions(),
        frames,
        out_path: req.out_path.clone(),
    };
    tracing::info!(
        images = report.images_per_collection,
        layout = %report.layout,
        width = report.canvas.0,
        height = report.canvas.1,
        frames = report.frames,
        "transition rendered"
    );
    Ok(report)
}

/// Full run writing an animated GIF to `req.out_path`.
///
/// On any failure the output path is left untouched.
pub fn run(req: &RunRequest) -> TilefadeResult<RunReport> {
    let mut sink = GifSink::new(&req.out_path)?;
    run_with_sink(req, &mut sink)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
