use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::decode::load_image,
    foundation::core::Image,
    foundation::error::{TilefadeError, TilefadeResult},
};

/// Recognized file-name suffixes. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

pub fn is_supported_image_name(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Sorted list of image files in one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageCollection {
    root: PathBuf,
    names: Vec<String>,
}

impl ImageCollection {
    /// List `root`, keeping regular entries whose names end in a recognized suffix, sorted by
    /// name. Non-UTF-8 names are skipped.
    pub fn scan(root: impl Into<PathBuf>) -> TilefadeResult<Self> {
        let root = root.into();
        let entries = std::fs::read_dir(&root)
            .with_context(|| format!("list image directory '{}'", root.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("read entry in '{}'", root.display()))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        Ok(Self::from_names(root, names))
    }

    /// Build a collection from already-listed names; filtering and sorting still apply.
    pub fn from_names<I, S>(root: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|n| is_supported_image_name(n))
            .collect();
        names.sort();
        Self {
            root: root.into(),
            names,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.names.iter().map(|n| self.root.join(n))
    }

    /// Fails with [`TilefadeError::EmptyCollection`] when nothing matched.
    pub fn ensure_non_empty(&self) -> TilefadeResult<()> {
        if self.is_empty() {
            return Err(TilefadeError::empty_collection(self.root.display().to_string()));
        }
        Ok(())
    }

    /// Decode every image in sorted order.
    pub fn load_images(&self) -> TilefadeResult<Vec<Image>> {
        self.paths().map(|p| load_image(&p)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/collection.rs"]
mod tests;
