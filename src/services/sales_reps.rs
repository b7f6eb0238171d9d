//! Query pipeline behind `GET /api/data`.

use crate::domain::sales_rep::SalesRep;
use crate::dto::api::SalesRepsQuery;
use crate::filtering::{filter, search};
use crate::pagination::{Page, paginate};
use crate::repository::SalesRepReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the collection, narrows it by the search term, applies the field
/// filters, and returns the requested page.
pub fn list_sales_reps<R>(repo: &R, query: SalesRepsQuery) -> ServiceResult<Page<SalesRep>>
where
    R: SalesRepReader + ?Sized,
{
    let reps = repo.load_sales_reps().map_err(|err| {
        log::error!("Failed to load sales reps: {err}");
        ServiceError::from(err)
    })?;

    let reps = search(reps, query.search.as_deref());
    let reps = filter(reps, &query.criteria);

    Ok(paginate(reps, query.page, query.page_size))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::{SalesRepId, SalesRepName};
    use crate::filtering::FilterCriteria;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn reps() -> Vec<SalesRep> {
        vec![
            SalesRep::new(
                SalesRepId::new(1).unwrap(),
                SalesRepName::new("John Doe").unwrap(),
                "Senior Sales Rep",
                "North America",
            )
            .with_skills(["Negotiation", "CRM Software", "Product Knowledge"]),
            SalesRep::new(
                SalesRepId::new(2).unwrap(),
                SalesRepName::new("Jane Smith").unwrap(),
                "Sales Manager",
                "Europe",
            )
            .with_skills(["Team Leadership", "Strategic Planning", "CRM Software"]),
        ]
    }

    fn query() -> SalesRepsQuery {
        SalesRepsQuery {
            search: None,
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: 10,
        }
    }

    #[test]
    fn loads_once_and_returns_everything_without_filters() {
        let mut repo = MockRepository::new();
        repo.expect_load_sales_reps()
            .times(1)
            .returning(|| Ok(reps()));

        let page = list_sales_reps(&repo, query()).expect("should list reps");

        assert_eq!(page.data, reps());
        assert_eq!(page.meta.total_items, 2);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn search_runs_before_filters() {
        let mut repo = MockRepository::new();
        repo.expect_load_sales_reps().returning(|| Ok(reps()));

        let page = list_sales_reps(
            &repo,
            SalesRepsQuery {
                search: Some("crm".into()),
                criteria: FilterCriteria::default().region("north"),
                ..query()
            },
        )
        .expect("should list reps");

        assert_eq!(page.meta.total_items, 1);
        assert_eq!(page.data[0].name.as_str(), "John Doe");
    }

    #[test]
    fn pagination_applies_to_filtered_set() {
        let mut repo = MockRepository::new();
        repo.expect_load_sales_reps().returning(|| Ok(reps()));

        let page = list_sales_reps(
            &repo,
            SalesRepsQuery {
                page: 2,
                page_size: 1,
                ..query()
            },
        )
        .expect("should list reps");

        assert_eq!(page.data[0].name.as_str(), "Jane Smith");
        assert!(page.meta.has_prev);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn load_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_load_sales_reps()
            .returning(|| Err(RepositoryError::NotFound("dummyData.json".into())));

        let result = list_sales_reps(&repo, query());

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::NotFound(_)))
        ));
    }
}
