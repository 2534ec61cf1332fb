use crate::domain::model::{HouseRecord, HOUSE_RECORD_COLUMNS};
use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::validate_required_columns;
use csv::StringRecord;
use std::io::Read;

/// Reads `path` through `storage` and parses it as housing CSV.
pub fn load_houses<S: Storage>(storage: &S, path: &str) -> Result<Vec<HouseRecord>> {
    let data = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path);
    parse_houses(data.as_slice())
}

/// Parses housing CSV with a header row. Rows keep their file order.
pub fn parse_houses<R: Read>(reader: R) -> Result<Vec<HouseRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| parse_error(e, &StringRecord::new()))?
        .clone();

    let header_names: Vec<&str> = headers.iter().collect();
    validate_required_columns(&header_names, &HOUSE_RECORD_COLUMNS)?;

    let extra: Vec<&str> = header_names
        .iter()
        .copied()
        .filter(|name| !HOUSE_RECORD_COLUMNS.contains(name))
        .collect();
    if !extra.is_empty() {
        tracing::warn!("Ignoring unknown columns: {}", extra.join(", "));
    }

    let mut houses = Vec::new();
    for result in csv_reader.deserialize::<HouseRecord>() {
        let house = result.map_err(|e| parse_error(e, &headers))?;
        houses.push(house);
    }

    tracing::debug!("Parsed {} house records", houses.len());
    Ok(houses)
}

fn parse_error(e: csv::Error, headers: &StringRecord) -> EtlError {
    let line = e.position().map(|pos| pos.line()).unwrap_or(1);

    let message = match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => {
            match err.field().and_then(|index| headers.get(index as usize)) {
                Some(name) => Some(format!("field '{}': {}", name, err.kind())),
                None => Some(err.kind().to_string()),
            }
        }
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Some(format!("expected {} fields, found {}", expected_len, len)),
        csv::ErrorKind::Utf8 { err, .. } => Some(format!("invalid UTF-8: {}", err)),
        _ => None,
    };

    match message {
        Some(message) => EtlError::ParseError { line, message },
        None => EtlError::CsvError(e),
    }
}
