//! JSON loader.
//!
//! Reads either a top-level array of item objects or an object wrapping
//! the array under an `items` key; always writes the bare array. Decimal
//! fields are written as strings so they round-trip exactly.

use magazyn_core::Item;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::{LoadError, Loader};

/// Loader for JSON files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

/// The two accepted document shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemsDocument {
    Wrapped { items: Vec<Item> },
    Bare(Vec<Item>),
}

impl Loader for JsonLoader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn identify(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    fn read(&self, path: &Path) -> Result<Vec<Item>, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: ItemsDocument =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(match document {
            ItemsDocument::Wrapped { items } | ItemsDocument::Bare(items) => items,
        })
    }

    fn write(&self, path: &Path, items: &[Item]) -> Result<(), LoadError> {
        let payload = serde_json::to_string_pretty(items).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, payload + "\n").map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Milk", dec!(120), "L", dec!(2.30)),
            Item::new("Coffee", dec!(2500), "kg", dec!(40.0)),
        ]
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magazyn.json");

        JsonLoader.write(&path, &sample()).unwrap();
        let loaded = JsonLoader.read(&path).unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_decimals_are_written_as_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magazyn.json");

        JsonLoader.write(&path, &sample()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("\"quantity\": \"120\""));
        assert!(content.contains("\"unit_price\": \"2.30\""));
    }

    #[test]
    fn test_reads_wrapped_object_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magazyn.json");
        fs::write(
            &path,
            r#"{"items": [{"name": "Flour", "quantity": "12000", "unit": "kg", "unit_price": "1.2"}]}"#,
        )
        .unwrap();

        let loaded = JsonLoader.read(&path).unwrap();
        assert_eq!(loaded, vec![Item::new("Flour", dec!(12000), "kg", dec!(1.2))]);
    }

    #[test]
    fn test_unexpected_structure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magazyn.json");
        fs::write(&path, r#"{"rows": 3}"#).unwrap();

        let err = JsonLoader.read(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn test_missing_file_is_reported_not_fatal() {
        let err = JsonLoader
            .read(Path::new("does-not-exist.json"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
