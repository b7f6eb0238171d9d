//! HTTP routes of the sales data service.

use crate::repository::SalesRepReader;

pub mod api;

/// Repository handle shared with the handlers through `web::Data`.
pub type SharedRepository = dyn SalesRepReader + Send + Sync;
