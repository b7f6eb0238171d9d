use crate::domain::sales_rep::SalesRep;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;

/// Source of the sales representative collection.
///
/// Every call yields a fresh snapshot of the whole collection; implementors
/// must not return partial results.
pub trait SalesRepReader {
    fn load_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>>;
}
