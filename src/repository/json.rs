use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::domain::sales_rep::SalesRep;
use crate::models::sales_rep::SalesRepsDocument;
use crate::repository::SalesRepReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Reads the sales data document from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SalesRepReader for JsonFileRepository {
    fn load_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>> {
        let bytes = fs::read(&self.path).map_err(|err| {
            log::error!("Failed to read {}: {err}", self.path.display());
            RepositoryError::from(err)
        })?;

        let document: SalesRepsDocument = serde_json::from_slice(&bytes)?;
        let reps = into_domain(document)?;

        log::debug!("Loaded {} sales reps from {}", reps.len(), self.path.display());
        Ok(reps)
    }
}

/// Converts the raw document into validated domain records, rejecting the
/// whole document on the first invalid or duplicate entry.
pub(crate) fn into_domain(document: SalesRepsDocument) -> RepositoryResult<Vec<SalesRep>> {
    let mut seen = HashSet::with_capacity(document.sales_reps.len());

    document
        .sales_reps
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let rep = SalesRep::try_from(record).map_err(|err| {
                RepositoryError::ValidationError(format!("salesReps[{index}]: {err}"))
            })?;
            if !seen.insert(rep.id) {
                return Err(RepositoryError::ValidationError(format!(
                    "salesReps[{index}]: duplicate id {}",
                    rep.id
                )));
            }
            Ok(rep)
        })
        .collect()
}
