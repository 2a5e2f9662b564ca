//! In-memory product backend for tests
//!
//! [`FakeCatalog`] applies the same filter and window semantics as the real
//! service (exact match on text filters, inclusive numeric bounds, 1-based
//! `start`) and records every call so tests can assert on what was sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use url::{form_urlencoded, Url};

use shopfront_core::prelude::*;
use shopfront_core::{Navigation, Product, ProductPage, ProductUpdate};

use crate::api::ProductApi;
use crate::query::{params, ListQuery};

/// Page size the fake uses when a request carries no `limit`
pub const FAKE_DEFAULT_LIMIT: usize = 10;

/// A call received by the fake backend
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    List(ListQuery),
    Uri(String),
    Get(String),
    Patch { id: String, update: ProductUpdate },
}

/// Scripted outcome for the next call of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// Respond with this HTTP status
    Status(u16),
    /// Fail before any response arrives
    NoResponse,
}

impl Scripted {
    fn into_error(self) -> Error {
        match self {
            Scripted::Status(status) => Error::status(status),
            Scripted::NoResponse => Error::transport("connection refused"),
        }
    }
}

/// In-memory catalog implementing [`ProductApi`]
#[derive(Debug, Default)]
pub struct FakeCatalog {
    products: Mutex<Vec<Product>>,
    requests: Mutex<Vec<RecordedRequest>>,
    list_script: Mutex<VecDeque<Scripted>>,
    get_script: Mutex<VecDeque<Scripted>>,
    patch_script: Mutex<VecDeque<Scripted>>,
}

impl FakeCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Default::default()
        }
    }

    /// Catalog of `count` generated products with ids `"1"..="count"`
    pub fn with_generated(count: usize) -> Self {
        Self::new((1..=count).map(test_product_numbered).collect())
    }

    /// Make the next list or URI fetch fail
    pub fn fail_next_list(&self, outcome: Scripted) {
        lock(&self.list_script).push_back(outcome);
    }

    /// Make the next single-product fetch fail
    pub fn fail_next_get(&self, outcome: Scripted) {
        lock(&self.get_script).push_back(outcome);
    }

    /// Script the next PATCH; `Status(204)` succeeds and applies the update
    pub fn script_next_patch(&self, outcome: Scripted) {
        lock(&self.patch_script).push_back(outcome);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        lock(&self.products).iter().find(|p| p.id == id).cloned()
    }

    fn record(&self, request: RecordedRequest) {
        lock(&self.requests).push(request);
    }

    fn page_for(&self, query: &ListQuery) -> Result<ProductPage> {
        if let Some(outcome) = lock(&self.list_script).pop_front() {
            return Err(outcome.into_error());
        }

        let parse_num = |key: &str| -> Result<Option<f64>> {
            query
                .get(key)
                .map(|v| {
                    v.parse::<f64>()
                        .map_err(|_| Error::status(400))
                })
                .transpose()
        };

        let start = parse_num(params::START)?.map(|v| v as usize).unwrap_or(1);
        let limit = parse_num(params::LIMIT)?
            .map(|v| v as usize)
            .unwrap_or(FAKE_DEFAULT_LIMIT);
        let price_min = parse_num(params::PRICE_MIN)?;
        let price_max = parse_num(params::PRICE_MAX)?;
        let qty_min = parse_num(params::QUANTITY_MIN)?;
        let qty_max = parse_num(params::QUANTITY_MAX)?;

        let text_matches = |key: &str, value: &str| query.get(key).map_or(true, |v| v == value);

        let matching: Vec<Product> = lock(&self.products)
            .iter()
            .filter(|p| text_matches(params::NAME, &p.name))
            .filter(|p| text_matches(params::BRAND, &p.brand))
            .filter(|p| text_matches(params::CATEGORY, &p.category))
            .filter(|p| price_min.map_or(true, |m| p.price >= m))
            .filter(|p| price_max.map_or(true, |m| p.price <= m))
            .filter(|p| qty_min.map_or(true, |m| f64::from(p.quantity) >= m))
            .filter(|p| qty_max.map_or(true, |m| f64::from(p.quantity) <= m))
            .cloned()
            .collect();

        let mut navigation = Navigation::for_window(matching.len(), start, limit, "/products");
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(
                query
                    .params()
                    .iter()
                    .filter(|(k, _)| *k != params::START && *k != params::LIMIT),
            )
            .finish();
        if !encoded.is_empty() {
            let filters = format!("&{encoded}");
            navigation.self_uri.push_str(&filters);
            if let Some(next) = navigation.next.as_mut() {
                next.push_str(&filters);
            }
            if let Some(prev) = navigation.prev.as_mut() {
                prev.push_str(&filters);
            }
        }

        let data = matching
            .into_iter()
            .skip(start.max(1) - 1)
            .take(limit.max(1))
            .collect();

        Ok(ProductPage { data, navigation })
    }
}

impl ProductApi for FakeCatalog {
    async fn list_products(&self, query: &ListQuery) -> Result<ProductPage> {
        self.record(RecordedRequest::List(query.clone()));
        self.page_for(query)
    }

    async fn fetch_uri(&self, uri: &str) -> Result<ProductPage> {
        self.record(RecordedRequest::Uri(uri.to_string()));
        let url = Url::parse("http://fake.invalid")
            .and_then(|base| base.join(uri))
            .map_err(|e| Error::invalid_url(uri, e.to_string()))?;
        let query = ListQuery::from_pairs(url.query_pairs().map(|(k, v)| (k, v.into_owned())));
        self.page_for(&query)
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        self.record(RecordedRequest::Get(id.to_string()));
        if let Some(outcome) = lock(&self.get_script).pop_front() {
            return Err(outcome.into_error());
        }
        self.product(id).ok_or_else(|| Error::status(404))
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<()> {
        self.record(RecordedRequest::Patch {
            id: id.to_string(),
            update: update.clone(),
        });
        let outcome = lock(&self.patch_script)
            .pop_front()
            .unwrap_or(Scripted::Status(204));
        if outcome != Scripted::Status(204) {
            return Err(outcome.into_error());
        }

        let mut products = lock(&self.products);
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::status(404))?;
        product.name = update.name.clone();
        product.price = update.price;
        product.quantity = update.quantity;
        product.category = update.category.clone();
        product.description = update.description.clone();
        product.brand = update.brand.clone();
        Ok(())
    }
}

/// Lock a test mutex, recovering from poisoning left by a failed assertion
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Build a test product with the given id, price and quantity
pub fn test_product(id: &str, price: f64, quantity: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price,
        quantity,
        description: format!("Description of product {id}"),
        category: "Electronics".to_string(),
        brand: "Acme".to_string(),
    }
}

/// Deterministic product number `n` for generated catalogs
pub fn test_product_numbered(n: usize) -> Product {
    test_product(&n.to_string(), (n * 100) as f64, (n % 7) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{AdvancedCriteria, SearchCriteria};

    #[tokio::test]
    async fn test_first_page_and_navigation() {
        let catalog = FakeCatalog::with_generated(25);
        let page = catalog.list_products(&ListQuery::page(None, 10)).await.unwrap();
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.data[0].id, "1");
        assert_eq!(page.navigation.pages, 3);
        assert_eq!(page.navigation.current, 1);
        assert!(page.navigation.prev.is_none());
        assert_eq!(
            page.navigation.next.as_deref(),
            Some("/products?start=11&limit=10")
        );
    }

    #[tokio::test]
    async fn test_follow_next_uri() {
        let catalog = FakeCatalog::with_generated(25);
        let page = catalog
            .fetch_uri("/products?start=21&limit=10")
            .await
            .unwrap();
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0].id, "21");
        assert!(page.navigation.next.is_none());
        assert_eq!(page.navigation.current, 3);
    }

    #[tokio::test]
    async fn test_filters_are_inclusive() {
        let catalog = FakeCatalog::with_generated(20);
        let criteria = SearchCriteria::Advanced(AdvancedCriteria {
            price: Some((500, 700)),
            ..Default::default()
        });
        let page = catalog
            .list_products(&ListQuery::from_criteria(&criteria, 10))
            .await
            .unwrap();
        let ids: Vec<_> = page.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6", "7"]);
    }

    #[tokio::test]
    async fn test_navigation_keeps_filters_with_reserved_characters() {
        let mut products: Vec<Product> = (1..=15)
            .map(|n| {
                let mut p = test_product_numbered(n);
                p.category = "Home & Kitchen".to_string();
                p
            })
            .collect();
        products.extend((16..=20).map(test_product_numbered));
        let catalog = FakeCatalog::new(products);

        let criteria = SearchCriteria::Advanced(AdvancedCriteria {
            category: "Home & Kitchen".into(),
            ..Default::default()
        });
        let first = catalog
            .list_products(&ListQuery::from_criteria(&criteria, 10))
            .await
            .unwrap();
        assert_eq!(first.navigation.pages, 2);
        let next = first.navigation.next.expect("second page");
        assert!(next.contains("category=Home+%26+Kitchen"), "{next}");

        let second = catalog.fetch_uri(&next).await.unwrap();
        let ids: Vec<_> = second.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["11", "12", "13", "14", "15"]);
        assert!(second.navigation.next.is_none());
    }

    #[tokio::test]
    async fn test_patch_applies_only_on_204() {
        let catalog = FakeCatalog::new(vec![test_product("1", 10.0, 2)]);
        let mut update = ProductUpdate::from(&test_product("1", 10.0, 2));
        update.name = "Renamed".into();

        catalog.script_next_patch(Scripted::Status(500));
        assert!(catalog.update_product("1", &update).await.is_err());
        assert_eq!(catalog.product("1").unwrap().name, "Product 1");

        catalog.update_product("1", &update).await.unwrap();
        assert_eq!(catalog.product("1").unwrap().name, "Renamed");
        assert_eq!(catalog.request_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_list_failure_is_consumed_once() {
        let catalog = FakeCatalog::with_generated(3);
        catalog.fail_next_list(Scripted::NoResponse);
        let err = catalog
            .list_products(&ListQuery::page(None, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert!(catalog.list_products(&ListQuery::page(None, 10)).await.is_ok());
    }
}
