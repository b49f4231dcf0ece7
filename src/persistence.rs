// File: src/persistence.rs
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::lexicon::Lexicon;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("override file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("override serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the override dictionary at `path`.
///
/// A missing file, an unreadable file, malformed JSON, and a JSON root that
/// is not an object all degrade to an empty lexicon. The condition is
/// logged, never raised: a broken side-file must not take the pipeline down.
pub fn load_overrides(path: &Path) -> Lexicon {
    if !path.exists() {
        return Lexicon::new();
    }
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not open override file");
            return Lexicon::new();
        }
    };
    match serde_json::from_reader(BufReader::new(file)) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "override file is not a JSON object, ignoring it");
            Lexicon::new()
        }
    }
}

/// Writes `lexicon` to `path` atomically: serialize into a temp file in the
/// target directory, then rename into place. A crash mid-write leaves any
/// existing file intact.
///
/// The file is 2-space-indented UTF-8 JSON with non-ASCII kept literal.
pub fn save_overrides(lexicon: &Lexicon, path: &Path) -> Result<(), StoreError> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(&mut writer, lexicon)?;
    writer.flush()?;
    drop(writer);

    temp_file
        .persist(path)
        .map_err(|e| StoreError::Io(e.error))?;
    debug!(path = %path.display(), entries = lexicon.len(), "override dictionary saved");
    Ok(())
}

/// Single writer for the override dictionary: owns the side-file path and
/// the current override set. Engines are built from merged snapshots and
/// never observe edits made here.
pub struct OverrideStore {
    path: PathBuf,
    overrides: Lexicon,
}

impl OverrideStore {
    /// Opens the store at `path`, loading whatever overrides are readable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let overrides = load_overrides(&path);
        Self { path, overrides }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn overrides(&self) -> &Lexicon {
        &self.overrides
    }

    /// Adds or updates a single entry.
    pub fn insert(&mut self, term: &str, localized: &str) {
        self.overrides.insert(term, localized);
    }

    /// Replaces the whole override set, as a bulk edit or a dictionary
    /// upload does.
    pub fn replace(&mut self, overrides: Lexicon) {
        self.overrides = overrides;
    }

    /// Persists the current set. The in-memory overrides stay authoritative
    /// even when this fails.
    pub fn save(&self) -> Result<(), StoreError> {
        save_overrides(&self.overrides, &self.path)
    }

    /// The builtin table with these overrides layered on top.
    pub fn merged_with_builtin(&self) -> Lexicon {
        Lexicon::merged(&Lexicon::builtin(), &self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        let lexicon = Lexicon::from_pairs(&[("Zeekr", "Зикр"), ("BMW", "Бавария")]);

        save_overrides(&lexicon, &path).unwrap();
        let reloaded = load_overrides(&path);
        assert_eq!(
            reloaded.iter().collect::<Vec<_>>(),
            lexicon.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn saved_file_is_indented_and_keeps_non_ascii_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        save_overrides(&Lexicon::from_pairs(&[("Zeekr", "Зикр")]), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("  \"Zeekr\": \"Зикр\""), "{text}");
        assert!(!text.contains("\\u"), "{text}");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_overrides(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_overrides(&path).is_empty());

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(load_overrides(&path).is_empty());
    }

    #[test]
    fn save_replaces_an_existing_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        save_overrides(&Lexicon::from_pairs(&[("a", "1")]), &path).unwrap();
        save_overrides(&Lexicon::from_pairs(&[("b", "2")]), &path).unwrap();

        let reloaded = load_overrides(&path);
        assert_eq!(reloaded.get("b"), Some("2"));
        assert_eq!(reloaded.get("a"), None);
    }

    #[test]
    fn store_edits_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");

        let mut store = OverrideStore::open(path.clone());
        assert!(store.overrides().is_empty());
        store.insert("Zeekr", "Зикр");
        store.save().unwrap();

        let reopened = OverrideStore::open(path);
        assert_eq!(reopened.overrides().get("zeekr"), Some("Зикр"));

        let merged = reopened.merged_with_builtin();
        assert_eq!(merged.get("zeekr"), Some("Зикр"));
        assert_eq!(merged.get("bmw"), Some("БМВ"));
    }

    #[test]
    fn store_replace_swaps_the_whole_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = OverrideStore::open(dir.path().join("overrides.json"));
        store.insert("old", "старое");
        store.replace(Lexicon::parse_bulk("Zeekr,Зикр"));
        assert_eq!(store.overrides().get("old"), None);
        assert_eq!(store.overrides().get("zeekr"), Some("Зикр"));
    }
}
