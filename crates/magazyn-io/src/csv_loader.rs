//! CSV loader: a header row, then one record per item.

use magazyn_core::Item;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::{LoadError, Loader};

/// Loader for comma-separated files. The default format.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvLoader;

/// Raw CSV record. Numeric fields stay text until [`Item::from_text`]
/// parses them, so a value like `2.30` never takes a float detour.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    quantity: String,
    unit: String,
    unit_price: String,
}

impl Loader for CsvLoader {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn identify(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }

    fn read(&self, path: &Path) -> Result<Vec<Item>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let mut items = Vec::new();
        for result in reader.deserialize() {
            let record: RawRecord = result.map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let item = Item::from_text(
                record.name,
                &record.quantity,
                record.unit,
                &record.unit_price,
            )
            .map_err(|source| LoadError::Decimal {
                path: path.to_path_buf(),
                source,
            })?;
            items.push(item);
        }
        Ok(items)
    }

    fn write(&self, path: &Path, items: &[Item]) -> Result<(), LoadError> {
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = csv::Writer::from_writer(file);
        for item in items {
            writer.serialize(item).map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        }
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}
