//! DTOs exchanged between the HTTP routes and the services.

pub mod api;
