use common::types::DepartureRecord;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the routes handed over by the timetable extractor: a JSON array of routes, each an
/// ordered array of `{"time": ..., "stop": ...}` records. The records are assumed to be already
/// validated (non-empty stop names starting with an uppercase letter); nothing is re-checked
/// here.
pub(super) fn load_routes(path: &Path) -> Result<Vec<Vec<DepartureRecord>>, RecordsError> {
    let file = File::open(path)?;
    let routes = serde_json::from_reader(BufReader::new(file))?;
    Ok(routes)
}

#[derive(thiserror::Error, Debug)]
pub enum RecordsError {
    IO(#[from] std::io::Error),
    Json(#[from] serde_json::Error),
}

impl Display for RecordsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let err: &dyn Display = match self {
            RecordsError::IO(err) => err,
            RecordsError::Json(err) => err,
        };
        write!(f, "{}", err)
    }
}
