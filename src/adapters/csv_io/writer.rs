//! Dataset persistence

use crate::domain::{Dataset, Field, Result, VeilError};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Write a dataset to a CSV file, creating parent directories as needed
///
/// The header row is always written, so an empty dataset still produces a
/// loadable file. A null email becomes an empty cell.
pub fn write_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            VeilError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = std::fs::File::create(path).map_err(|e| {
        VeilError::Io(format!("Failed to create {}: {}", path.display(), e))
    })?;

    write_dataset_to(file, dataset)?;

    tracing::debug!(path = %path.display(), records = dataset.len(), "Dataset written");

    Ok(())
}

/// Write a dataset as CSV to any writer
pub fn write_dataset_to<W: Write>(output: W, dataset: &Dataset) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(Field::ALL.iter().map(|f| f.header()))?;
    for record in dataset {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
