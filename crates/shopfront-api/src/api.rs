//! The seam between the app and a product backend

use shopfront_core::prelude::*;
use shopfront_core::{Product, ProductPage, ProductUpdate};

use crate::query::ListQuery;

/// Product backend operations
///
/// The TUI talks to [`crate::ApiClient`]; tests substitute an in-memory
/// catalog. Implement the `Send` variant, [`ProductApi`].
#[trait_variant::make(ProductApi: Send)]
pub trait LocalProductApi {
    /// `GET /products` with the given filters
    async fn list_products(&self, query: &ListQuery) -> Result<ProductPage>;

    /// `GET {uri}` for a server-supplied navigation URI, used verbatim
    async fn fetch_uri(&self, uri: &str) -> Result<ProductPage>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: &str) -> Result<Product>;

    /// `PATCH /products/{id}`; succeeds only on `204 No Content`
    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<()>;
}
