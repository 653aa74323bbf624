/// Convenience result type used across tilefade.
pub type TilefadeResult<T> = Result<T, TilefadeError>;

/// Top-level error taxonomy used by compositor, sequencer and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum TilefadeError {
    /// A layout was asked to compose zero images.
    #[error("layout error: cannot compose an empty image sequence")]
    EmptyInput,

    /// An input collection holds no recognized image files.
    #[error("collection error: '{collection}' contains no .png/.jpg/.jpeg images")]
    EmptyCollection {
        /// Display form of the offending collection path.
        collection: String,
    },

    /// The two input collections hold a different number of images.
    #[error("collection error: image counts differ ({first} vs {second})")]
    CountMismatch {
        /// Image count of the first collection.
        first: usize,
        /// Image count of the second collection.
        second: usize,
    },

    /// Two canvases that must share dimensions do not.
    #[error("dimension error: {a_width}x{a_height} does not match {b_width}x{b_height}")]
    DimensionMismatch {
        /// Width of the first canvas.
        a_width: u32,
        /// Height of the first canvas.
        a_height: u32,
        /// Width of the second canvas.
        b_width: u32,
        /// Height of the second canvas.
        b_height: u32,
    },

    /// A transition was requested with zero steps.
    #[error("sequence error: steps must be > 0")]
    InvalidSteps,

    /// Invalid user-provided settings or buffer data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TilefadeError {
    /// Build a [`TilefadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TilefadeError::EmptyCollection`] value.
    pub fn empty_collection(collection: impl Into<String>) -> Self {
        Self::EmptyCollection {
            collection: collection.into(),
        }
    }

    /// Build a [`TilefadeError::DimensionMismatch`] from two `(width, height)` pairs.
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
