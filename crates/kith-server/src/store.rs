//! Persistent storage for the people document and uploaded images.
//!
//! Persistence is deliberately primitive: the people list is one flat JSON
//! file replaced whole on every write, and images are plain files in one
//! folder. There is no versioning and no concurrent-write protection; the
//! replacement itself is atomic (temp file in the same directory, then
//! rename) so readers never observe a half-written document.

use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use kith_core::model::Person;

/// Storage-related errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid people document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid image filename: {0:?}")]
    InvalidFilename(String),
}

/// The people document: a JSON array at a fixed path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Creates a store for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current people list, fresh from disk.
    ///
    /// A missing file is an empty graph, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file cannot be read or does not
    /// contain a valid people document.
    pub fn load(&self) -> Result<Vec<Person>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No document yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    /// Replaces the document with a new full people list, atomically.
    ///
    /// The new content is written to a temporary file in the document's
    /// directory and renamed over the old document, so a concurrent reader
    /// sees either the old or the new state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write or rename fails. The caller's
    /// in-memory list is not rolled back; deciding what to do with it on
    /// failure is the caller's responsibility.
    pub fn replace(&self, people: &[Person]) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut temp, people)?;
        temp.flush()?;
        temp.persist(&self.path).map_err(|err| err.error)?;

        debug!(path = %self.path.display(), people = people.len(), "Document replaced");
        Ok(())
    }
}

/// Uploaded images, stored as plain files under one folder.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Creates a store for images under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the images directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores the bytes under the client-supplied filename's basename and
    /// returns the stored name for later reference by a person's `image`
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFilename`] when the name has no usable
    /// basename (empty, dot entries, or only path separators), and
    /// [`StoreError::Io`] when the write fails.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let name = sanitize_filename(filename)
            .ok_or_else(|| StoreError::InvalidFilename(filename.to_string()))?;

        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(&name), bytes)?;

        debug!(filename = %name, size = bytes.len(), "Image stored");
        Ok(name)
    }
}

/// Reduces a client-supplied filename to a safe basename.
///
/// Path components and separators are stripped so an upload can never
/// escape the images folder. Returns `None` when nothing usable remains.
fn sanitize_filename(filename: &str) -> Option<String> {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
