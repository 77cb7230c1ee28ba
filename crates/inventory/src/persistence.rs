//! Flat JSON file persistence for the inventory mapping.
//!
//! The file holds a single JSON object: item name → number, e.g.
//! `{"apple": 7, "banana": 12}`. It is written pretty-printed with 4-space
//! indentation, in enumeration order, and read back in file order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::Quantity;

/// File used when the caller doesn't name one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Errors from reading or writing the inventory file.
///
/// A missing file on read is not an error; see [`read_snapshot`].
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON format in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed file contents in file order.
///
/// Duplicate keys resolve the way a JSON object does: the last value wins and
/// the key keeps its first position. No domain validation happens here;
/// non-positive values are passed through for the store to deal with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: IndexMap<String, Quantity>,
}

impl Snapshot {
    pub fn new(entries: IndexMap<String, Quantity>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.entries.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Quantity)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Quantity)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Snapshot {
    type Item = (String, Quantity);
    type IntoIter = indexmap::map::IntoIter<String, Quantity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Read and parse the file at `path`.
///
/// Returns `Ok(None)` when the file doesn't exist. The whole file is parsed
/// before anything is returned, so a malformed file never yields partial data.
pub fn read_snapshot(path: &Path) -> Result<Option<Snapshot>, PersistError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| PersistError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize `snapshot` and write it to `path`, replacing any existing file.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), PersistError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    snapshot
        .serialize(&mut serializer)
        .map_err(|source| PersistError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, buf).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_in_file_order() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"pear": 1, "apple": 7, "fig": 2.5}"#).unwrap();
        let names: Vec<&str> = snapshot.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["pear", "apple", "fig"]);
        assert_eq!(snapshot.get("fig"), Some(Quantity::from(2.5)));
    }

    #[test]
    fn duplicate_keys_keep_last_value_and_first_position() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"apple": 1, "pear": 2, "apple": -4}"#).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("apple"), Some(Quantity::from(-4)));
        let names: Vec<&str> = snapshot.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["apple", "pear"]);
    }

    #[test]
    fn rejects_non_object_documents() {
        for doc in [r#"["apple", 7]"#, r#""apple""#, r#"{"apple": "seven"}"#, r#"{"apple": null}"#] {
            assert!(serde_json::from_str::<Snapshot>(doc).is_err(), "accepted {doc}");
        }
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }
}
