//! tilefade tiles two image collections into composite canvases and renders a looping crossfade
//! between them as an animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Scan**: list both directories, keep `.png`/`.jpg`/`.jpeg`, sort by name
//!    ([`ImageCollection`]), and check the pair ([`validate_pair`]).
//! 2. **Compose**: tile each collection into one [`Canvas`] with a [`LayoutStrategy`] (near-square
//!    grid or single strip), then reconcile sizes with a [`DimensionPolicy`].
//! 3. **Sequence**: [`TransitionSequence`] lazily produces the hold → fade → hold → fade-back loop,
//!    `4 * steps + 2` frames.
//! 4. **Encode**: frames stream into a [`FrameSink`]; [`GifSink`] writes an infinitely looping GIF
//!    and only moves it into place once every frame is written.
//!
//! Everything runs synchronously on the calling thread.
#![forbid(unsafe_code)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod layout;
mod pipeline;
mod settings;

pub use assets::collection::{IMAGE_EXTENSIONS, ImageCollection, is_supported_image_name};
pub use assets::decode::{decode_image, load_image};
pub use effects::blend::{blend, ensure_same_dimensions, mix_channel};
pub use effects::transition::{FrameSpec, Frames, Phase, TransitionSequence, sequence};
pub use encode::gif::{GifSink, ensure_parent_dir};
pub use encode::sink::{FrameSink, InMemorySink, LoopCount, SinkConfig};
pub use foundation::core::{CHANNELS, Canvas, Image};
pub use foundation::error::{TilefadeError, TilefadeResult};
pub use layout::LayoutStrategy;
pub use layout::grid::{GridDescriptor, compose_grid, near_square_dims};
pub use layout::strip::{StripDescriptor, compose_strip};
pub use pipeline::{
    RunReport, RunRequest, compose_pair, render_transition, run, run_with_sink, validate_pair,
};
pub use settings::{DEFAULT_FRAME_DELAY_MS, DEFAULT_STEPS, DimensionPolicy, TransitionSettings};
