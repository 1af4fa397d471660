//! On-disk storage for the grouped corpus.
//!
//! The grouped corpus is stored as pretty-printed JSON at
//! `~/.cache/sust/corpus.json` (platform equivalents elsewhere).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::models::Corpus;

/// Directory name under the platform cache dir.
const APP_DIR: &str = "sust";

/// File the grouped corpus is kept in.
const CORPUS_FILE: &str = "corpus.json";

/// What the store was doing when a filesystem call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Read,
    Write,
    CreateDir,
    Delete,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreAction::Read => "read",
            StoreAction::Write => "write",
            StoreAction::CreateDir => "create the directory for",
            StoreAction::Delete => "delete",
        })
    }
}

/// Errors from reading or writing the corpus file.
#[derive(Debug, Error)]
pub enum CorpusStoreError {
    /// There is no home directory to derive a cache location from.
    #[error("no cache directory for the corpus; pass --corpus or set `corpus` in the config")]
    NoCacheDir,

    /// A filesystem call on the corpus failed.
    #[error("could not {action} corpus '{path}': {source}")]
    Io {
        action: StoreAction,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a corpus.
    #[error("corpus '{path}' is not valid: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file still carries bar header rows, i.e. it is a raw scrape.
    #[error(
        "corpus '{path}' has an unresolved bar header '{header}' at {location}; \
         load scrapes with `sust ingest`"
    )]
    UngroupedHeader {
        path: PathBuf,
        location: String,
        header: String,
    },
}

impl CorpusStoreError {
    /// Returns true if the corpus file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CorpusStoreError::Io { action: StoreAction::Read, source, .. }
                if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Result type for corpus store operations.
pub type Result<T> = std::result::Result<T, CorpusStoreError>;

/// Persistent storage for a grouped corpus.
///
/// # Example
///
/// ```no_run
/// use sustenance_menu::{Corpus, CorpusStore};
///
/// let store = CorpusStore::new()?;
/// let corpus = store.load_or_default()?;
/// store.save(&corpus)?;
/// # Ok::<(), sustenance_menu::CorpusStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    /// Creates a store at the default cache path.
    ///
    /// # Errors
    ///
    /// Returns `CorpusStoreError::NoCacheDir` without a home directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(Self::default_path()?))
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default corpus location: `corpus.json` in the platform cache
    /// directory for `sust` (`~/.cache/sust` on Linux).
    ///
    /// # Errors
    ///
    /// Returns `CorpusStoreError::NoCacheDir` without a home directory.
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", APP_DIR)
            .map(|dirs| dirs.cache_dir().join(CORPUS_FILE))
            .ok_or(CorpusStoreError::NoCacheDir)
    }

    fn io_error(&self, action: StoreAction, path: &Path, source: io::Error) -> CorpusStoreError {
        CorpusStoreError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the path to the corpus file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the corpus from disk.
    ///
    /// Only grouped corpora are accepted: a file that still has bar header
    /// rows is rejected rather than searched with the headers as dishes.
    ///
    /// # Errors
    ///
    /// - `CorpusStoreError::Io` if the file cannot be read.
    /// - `CorpusStoreError::Invalid` if it is not corpus JSON.
    /// - `CorpusStoreError::UngroupedHeader` if it holds a header row.
    pub fn load(&self) -> Result<Corpus> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| self.io_error(StoreAction::Read, &self.path, e))?;
        let corpus: Corpus =
            serde_json::from_str(&contents).map_err(|e| CorpusStoreError::Invalid {
                path: self.path.clone(),
                source: e,
            })?;

        for menu in corpus.iter() {
            if let Some(header) = menu.items.iter().find(|item| item.is_header()) {
                return Err(CorpusStoreError::UngroupedHeader {
                    path: self.path.clone(),
                    location: menu.location.clone(),
                    header: header.name.clone(),
                });
            }
        }

        debug!(path = %self.path.display(), locations = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Loads the corpus, or an empty one if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Any error of [`load`](Self::load) other than a missing file.
    pub fn load_or_default(&self) -> Result<Corpus> {
        match self.load() {
            Err(e) if e.is_not_found() => Ok(Corpus::default()),
            other => other,
        }
    }

    /// Writes the corpus through a sibling `.tmp` file and a rename, creating
    /// the parent directory first.
    ///
    /// # Errors
    ///
    /// `CorpusStoreError::Io` if a filesystem call fails.
    pub fn save(&self, corpus: &Corpus) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| self.io_error(StoreAction::CreateDir, parent, e))?;
        }

        let json = serde_json::to_string_pretty(corpus).map_err(|e| CorpusStoreError::Invalid {
            path: self.path.clone(),
            source: e,
        })?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json).map_err(|e| self.io_error(StoreAction::Write, &temp_path, e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| self.io_error(StoreAction::Write, &self.path, e))?;

        debug!(path = %self.path.display(), locations = corpus.len(), "saved corpus");
        Ok(())
    }

    /// Returns true if the corpus file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Deletes the corpus file. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// `CorpusStoreError::Io` if the file cannot be removed.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(StoreAction::Delete, &self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_corpus_json() {
        // Skip on machines without a home directory.
        let Ok(path) = CorpusStore::default_path() else {
            return;
        };

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("corpus.json"));
        assert!(path.to_string_lossy().contains("sust"));
        assert!(path.is_absolute(), "path should be absolute: {:?}", path);
    }

    #[test]
    fn test_with_path() {
        let store = CorpusStore::with_path("/tmp/sust-test/corpus.json");
        assert_eq!(store.path(), Path::new("/tmp/sust-test/corpus.json"));
    }

    #[test]
    fn test_io_error_names_action() {
        let err = CorpusStoreError::Io {
            action: StoreAction::CreateDir,
            path: PathBuf::from("/tmp/sust/corpus.json"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err
            .to_string()
            .starts_with("could not create the directory for corpus '/tmp/sust/corpus.json'"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_delete_missing_file_is_ok() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::with_path(temp_dir.path().join("missing.json"));
        assert!(!store.exists());
        assert!(store.delete().is_ok());
    }
}
