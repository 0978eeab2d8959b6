// src/sources/export_csv.rs
use crate::errors::PipelineError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Granatum writes its exports in ISO-8859-1: every byte is the code point of
/// the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Reads a semicolon-delimited Granatum export and deserializes every row.
///
/// The header must contain every name in `required`; other columns are ignored.
pub fn read_export<T>(path: &Path, required: &[&str]) -> Result<Vec<T>, PipelineError>
where
    T: DeserializeOwned,
{
    let bytes = fs::read(path)
        .map_err(|e| PipelineError::ReadError(format!("{}: {e}", path.display())))?;

    parse_export(&decode_latin1(&bytes), required, &path.display().to_string())
}

pub fn parse_export<T>(text: &str, required: &[&str], source: &str) -> Result<Vec<T>, PipelineError>
where
    T: DeserializeOwned,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::FormatError(format!("{source}: unreadable header: {e}")))?
        .clone();

    if let Some(missing) = required
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(PipelineError::FormatError(format!(
            "missing column '{missing}' in {source}"
        )));
    }

    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<T>().enumerate() {
        let row = row.map_err(|e| {
            PipelineError::FormatError(format!("{source}: row {}: {e}", index + 1))
        })?;
        rows.push(row);
    }

    Ok(rows)
}
