//! # shopfront-api - Product API Client
//!
//! HTTP plumbing to the remote product service: list, navigate, fetch one,
//! and partially update products.
//!
//! Depends on [`shopfront_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`ApiClient`] - `reqwest`-backed client bound to one base location
//! - [`ApiConfig`] - Base location and optional request timeout
//! - [`ProductApi`] - Async trait implemented by every product backend
//!
//! ### Queries
//! - [`ListQuery`] - Query parameters for `GET /products`
//! - [`SearchCriteria`], [`AdvancedCriteria`] - Filters captured by the search panel

pub mod api;
pub mod client;
pub mod query;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{LocalProductApi, ProductApi};
pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use query::{params, AdvancedCriteria, ListQuery, SearchCriteria};
