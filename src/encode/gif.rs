use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use anyhow::Context as _;
use image::{
    Delay, Frame,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    encode::sink::{FrameSink, LoopCount, SinkConfig},
    foundation::core::Canvas,
    foundation::error::{TilefadeError, TilefadeResult},
};

/// Animated GIF output.
///
/// Frames are written to `<out>.partial` next to the target and renamed into place by
/// [`FrameSink::end`]. Dropping the sink before `end` succeeds removes the partial file, so a
/// failed run never leaves output behind.
pub struct GifSink {
    out_path: PathBuf,
    partial_path: PathBuf,
    cfg: Option<SinkConfig>,
    stream: Option<GifStream<File>>,
    file: Option<File>,
    partial_created: bool,
    frames_written: usize,
    finished: bool,
}

impl GifSink {
    pub fn new(out_path: impl Into<PathBuf>) -> TilefadeResult<Self> {
        let out_path = out_path.into();
        let partial_path = partial_path_for(&out_path)?;
        Ok(Self {
            out_path,
            partial_path,
            cfg: None,
            stream: None,
            file: None,
            partial_created: false,
            frames_written: 0,
            finished: false,
        })
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    fn discard_partial(&mut self) {
        drop(self.stream.take());
        drop(self.file.take());
        if std::mem::take(&mut self.partial_created) {
            let _ = std::fs::remove_file(&self.partial_path);
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> TilefadeResult<()> {
        cfg.validate()?;
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(TilefadeError::validation(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        self.discard_partial();
        ensure_parent_dir(&self.out_path)?;

        let file = File::create(&self.partial_path)
            .with_context(|| format!("create gif output '{}'", self.partial_path.display()))?;
        self.partial_created = true;
        self.file = Some(file.try_clone().context("duplicate gif output file handle")?);

        self.stream = Some(GifStream::new(file, cfg.repeat)?);
        self.cfg = Some(cfg);
        self.frames_written = 0;
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &Canvas) -> TilefadeResult<()> {
        let (Some(cfg), Some(stream)) = (self.cfg.as_ref(), self.stream.as_mut()) else {
            return Err(TilefadeError::validation("gif sink is not started or already finished"));
        };
        cfg.check_frame(frame)?;
        stream.push(idx, frame, cfg.frame_delay_ms)?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> TilefadeResult<()> {
        let Some(stream) = self.stream.take() else {
            return Err(TilefadeError::validation("gif sink is not started or already finished"));
        };
        stream.finish()?;

        if let Some(file) = self.file.take() {
            file.sync_all()
                .with_context(|| format!("flush gif output '{}'", self.partial_path.display()))?;
        }
        std::fs::rename(&self.partial_path, &self.out_path).with_context(|| {
            format!(
                "move '{}' to '{}'",
                self.partial_path.display(),
                self.out_path.display()
            )
        })?;

        self.partial_created = false;
        self.finished = true;
        tracing::info!(
            path = %self.out_path.display(),
            frames = self.frames_written,
            "wrote gif"
        );
        Ok(())
    }
}

impl Drop for GifSink {
    fn drop(&mut self) {
        if !self.finished {
            self.discard_partial();
        }
    }
}

/// GIF encoder over a buffered writer that remembers the first I/O failure.
///
/// The encoder writes its trailer and the buffer flushes its tail only on drop, where both
/// discard errors; [`GifStream::finish`] reports them instead.
pub(crate) struct GifStream<W: Write> {
    encoder: GifEncoder<BufWriter<LatchedWriter<W>>>,
    failure: Arc<OnceLock<io::Error>>,
}

impl<W: Write> GifStream<W> {
    pub(crate) fn new(writer: W, repeat: LoopCount) -> TilefadeResult<Self> {
        let failure = Arc::new(OnceLock::new());
        let latched = LatchedWriter {
            inner: writer,
            failure: Arc::clone(&failure),
        };
        let mut encoder = GifEncoder::new(BufWriter::new(latched));
        let repeat = match repeat {
            LoopCount::Infinite => Repeat::Infinite,
            LoopCount::Finite(n) => Repeat::Finite(n),
        };
        encoder.set_repeat(repeat).context("set gif repeat")?;
        Ok(Self { encoder, failure })
    }

    pub(crate) fn push(&mut self, idx: usize, frame: &Canvas, delay_ms: u32) -> TilefadeResult<()> {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let gif_frame = Frame::from_parts(frame.to_rgba_image()?, 0, 0, delay);
        self.encoder
            .encode_frame(gif_frame)
            .with_context(|| format!("encode gif frame {idx}"))?;
        Ok(())
    }

    /// Write the trailer, flush, and fail if any write along the way failed.
    pub(crate) fn finish(self) -> TilefadeResult<()> {
        let Self { encoder, failure } = self;
        drop(encoder);
        match failure.get() {
            Some(err) => Err(anyhow::Error::new(io::Error::new(err.kind(), err.to_string()))
                .context("finish gif stream")
                .into()),
            None => Ok(()),
        }
    }
}

struct LatchedWriter<W> {
    inner: W,
    failure: Arc<OnceLock<io::Error>>,
}

impl<W> LatchedWriter<W> {
    fn latch<T>(&self, res: io::Result<T>) -> io::Result<T> {
        if let Err(err) = &res
            && err.kind() != io::ErrorKind::Interrupted
        {
            let _ = self.failure.set(io::Error::new(err.kind(), err.to_string()));
        }
        res
    }
}

impl<W: Write> Write for LatchedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res = self.inner.write(buf);
        self.latch(res)
    }

    fn flush(&mut self) -> io::Result<()> {
        let res = self.inner.flush();
        self.latch(res)
    }
}

pub fn ensure_parent_dir(path: &Path) -> TilefadeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn partial_path_for(out_path: &Path) -> TilefadeResult<PathBuf> {
    let name = out_path.file_name().ok_or_else(|| {
        TilefadeError::validation(format!("output path '{}' has no file name", out_path.display()))
    })?;
    let mut partial = name.to_os_string();
    partial.push(".partial");
    Ok(out_path.with_file_name(partial))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
