//! Domain aggregates exposed by the sales data service layer.

pub mod sales_rep;
pub mod types;
