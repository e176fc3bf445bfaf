//! Client for the Korean tourism information REST API (TourAPI)
//!
//! Builds query parameters for the location based list and common detail
//! operations, signs them with a service key, issues the GET and returns the
//! raw response body without interpreting it.

pub mod app;
pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod transport;

pub use client::TourApiClient;
pub use error::{Error, Result};
