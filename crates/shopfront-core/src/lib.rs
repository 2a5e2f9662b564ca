//! # shopfront-core - Core Domain Types
//!
//! Foundation crate for Shopfront. Provides the catalog domain types, price
//! formatting, navigation math, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Product`] - A catalog record as returned by the product API
//! - [`ProductWithImage`] - A product paired with a display-only placeholder image
//! - [`ProductUpdate`] - The partial update body sent when saving a product
//! - [`ProductPage`] - One page of products plus its [`Navigation`] descriptor
//! - [`Category`] - The fixed set of product categories
//!
//! ### Navigation (`navigation`)
//! - [`Navigation`] - Server-provided pagination descriptor (self/next/prev URIs)
//! - [`page_count()`] - Number of pages for a total and a page size
//!
//! ### Formatting (`format`)
//! - [`format_price()`] - Currency symbol plus grouped amount (`₹1,999`)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use shopfront_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod navigation;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use format::{format_price, group_thousands, DEFAULT_CURRENCY_SYMBOL};
pub use navigation::{page_count, Navigation};
pub use types::{
    placeholder_image, Category, Product, ProductPage, ProductUpdate, ProductWithImage,
    DEFAULT_PLACEHOLDER_IMAGE_BASE,
};
