use crate::domain::sales_rep::SalesRep;
use crate::repository::SalesRepReader;
use crate::repository::errors::RepositoryResult;

/// Fixture-backed reader that hands out clones of a fixed collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    reps: Vec<SalesRep>,
}

impl InMemoryRepository {
    pub fn new(reps: Vec<SalesRep>) -> Self {
        Self { reps }
    }
}

impl SalesRepReader for InMemoryRepository {
    fn load_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>> {
        Ok(self.reps.clone())
    }
}
