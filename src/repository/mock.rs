//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::sales_rep::SalesRep;
use crate::repository::SalesRepReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl SalesRepReader for Repository {
        fn load_sales_reps(&self) -> RepositoryResult<Vec<SalesRep>>;
    }
}
