use super::raw::RawListing;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// Key under which map-search responses nest their result list.
const LOCAL_RESULTS: &str = "local_results";

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnexpectedShape(&'static str),
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ListingImportError::Json(err) => write!(f, "invalid listing JSON: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            ListingImportError::UnexpectedShape(detail) => {
                write!(f, "unsupported listing payload: {}", detail)
            }
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Json(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::UnexpectedShape(_) => None,
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ListingImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads raw listings from saved provider exports.
pub struct ListingImporter;

impl ListingImporter {
    /// Reads a `.csv` export as CSV and anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawListing>, ListingImportError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let file = std::fs::File::open(path)?;
        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    /// Accepts either a bare array of listing objects or a provider response
    /// object carrying them under `local_results`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<RawListing>, ListingImportError> {
        let payload: Value = serde_json::from_reader(reader)?;

        let items = match payload {
            Value::Array(items) => items,
            Value::Object(mut object) => match object.remove(LOCAL_RESULTS) {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(ListingImportError::UnexpectedShape(
                        "`local_results` must be an array",
                    ))
                }
                None => {
                    return Err(ListingImportError::UnexpectedShape(
                        "expected an array of listings or a `local_results` array",
                    ))
                }
            },
            _ => {
                return Err(ListingImportError::UnexpectedShape(
                    "expected an array of listings or a `local_results` array",
                ))
            }
        };

        items
            .into_iter()
            .map(|item| {
                RawListing::try_from(item).map_err(|_| {
                    ListingImportError::UnexpectedShape("every listing must be a JSON object")
                })
            })
            .collect()
    }

    /// Header names become keys and every non-blank cell is kept as a string;
    /// typing is left to the normalizer.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<RawListing>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut listings = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let mut fields = Map::new();
            for (header, cell) in headers.iter().zip(record.iter()) {
                let header = header.trim_start_matches('\u{feff}');
                if header.is_empty() || cell.is_empty() {
                    continue;
                }
                fields.insert(header.to_string(), Value::String(cell.to_string()));
            }
            listings.push(RawListing::from(fields));
        }

        Ok(listings)
    }
}
