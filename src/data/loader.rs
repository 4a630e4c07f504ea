use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::models::Entry;

/// Error raised while reading a bank file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} must contain at least one entry", .path.display())]
    Empty { path: PathBuf },
}

/// Load a bank from a JSON array of `{"term": ..., "definition": ...}` objects.
///
/// Duplicate terms are kept; the engine never shows one twice as an option,
/// but questions for them get fewer distractors.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let bank: Vec<Entry> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if bank.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut seen = HashSet::with_capacity(bank.len());
    for entry in &bank {
        if !seen.insert(entry.term.as_str()) {
            warn!("duplicate term {:?} in {}", entry.term, path.display());
        }
    }

    info!("loaded {} entries from {}", bank.len(), path.display());
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn bank_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_bank() {
        let file = bank_file(
            r#"[
                {"term": "quid", "definition": "one pound sterling"},
                {"term": "skint", "definition": "broke, out of money"}
            ]"#,
        );

        let bank = load_bank_from_json(file.path()).unwrap();
        assert_eq!(
            bank,
            vec![
                Entry::new("quid", "one pound sterling"),
                Entry::new("skint", "broke, out of money"),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let file = bank_file(
            r#"[
                {"term": "nick", "definition": "to steal"},
                {"term": "nick", "definition": "a police station"}
            ]"#,
        );

        assert_eq!(load_bank_from_json(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let file = bank_file("[]");
        assert!(matches!(
            load_bank_from_json(file.path()),
            Err(LoadError::Empty { .. })
        ));
    }

    #[test]
    fn test_malformed_bank_is_rejected() {
        let file = bank_file(r#"[{"term": "quid"}]"#);
        let err = load_bank_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("bank.json");
        assert!(matches!(
            load_bank_from_json(&missing),
            Err(LoadError::Read { .. })
        ));
    }
}
