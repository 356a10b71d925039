//! Dataset loading

use crate::domain::{Dataset, Field, Record, Result, VeilError};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// Read a dataset from a CSV file
///
/// # Errors
///
/// Fails if the file is missing or unreadable, lacks one of the five
/// required columns, or contains a row that cannot be parsed.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VeilError::Io(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let file = std::fs::File::open(path).map_err(|e| {
        VeilError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let dataset = read_dataset_from(file, &path.display().to_string())?;

    tracing::debug!(path = %path.display(), records = dataset.len(), "Dataset loaded");

    Ok(dataset)
}

/// Read a dataset from any reader; `source` names it in error messages
pub fn read_dataset_from<R: Read>(input: R, source: &str) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| VeilError::Csv(format!("Failed to read header of {source}: {e}")))?
        .clone();
    check_columns(&headers, source)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<Record>().enumerate() {
        let record = row.map_err(|e| {
            // +2: one for the header, one for 1-based numbering
            VeilError::Csv(format!("Invalid row {} in {}: {}", index + 2, source, e))
        })?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

fn check_columns(headers: &StringRecord, source: &str) -> Result<()> {
    for field in Field::ALL {
        if !headers.iter().any(|h| h == field.header()) {
            return Err(VeilError::MissingColumn {
                column: field.header().to_string(),
                path: source.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dataset_with_multiline_address() {
        let data = "Name,Email,Phone,Address,Birthdate\n\
                    John Doe,john@example.com,555-123-4567,\"123 Main St\nSpringfield, IL 62701\",1980-05-12\n";

        let dataset = read_dataset_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.email.as_deref(), Some("john@example.com"));
        assert_eq!(record.address, "123 Main St\nSpringfield, IL 62701");
        assert_eq!(record.birthdate, "1980-05-12");
    }

    #[test]
    fn test_empty_email_cell_reads_as_null() {
        let data = "Name,Email,Phone,Address,Birthdate\nabc,,555-***-****,Springfield,1980\n";
        let dataset = read_dataset_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(dataset.records()[0].email, None);
    }

    #[test]
    fn test_column_order_and_extra_columns_ignored() {
        let data = "Id,Birthdate,Address,Phone,Email,Name\n1,1980,Springfield,555,a@b.c,Jo\n";
        let dataset = read_dataset_from(data.as_bytes(), "inline").unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.name, "Jo");
        assert_eq!(record.birthdate, "1980");
    }

    #[test]
    fn test_missing_column_rejected() {
        let data = "Name,Email,Phone,Birthdate\nJo,a@b.c,555,1980\n";
        let err = read_dataset_from(data.as_bytes(), "inline").unwrap_err();
        match err {
            VeilError::MissingColumn { column, path } => {
                assert_eq!(column, "Address");
                assert_eq!(path, "inline");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let data = "Name,Email,Phone,Address,Birthdate\n";
        let dataset = read_dataset_from(data.as_bytes(), "inline").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_dataset("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, VeilError::Io(_)));
        assert!(err.to_string().contains("Input file not found"));
    }
}
