//! Catalog domain types shared by the API client, the app state, and the TUI

use serde::{Deserialize, Serialize};

use crate::navigation::Navigation;

/// Default prefix for synthesized placeholder images; the page index is appended.
pub const DEFAULT_PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/500?random=";

/// A catalog record as served by the product API.
///
/// The front-end only ever holds transient copies; the API owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in currency units
    pub price: f64,
    /// Units in stock
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
    /// Category label, normally one of [`Category::ALL`]
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
}

impl Product {
    /// Parsed category, `None` when the server sent a label outside the fixed set
    pub fn category_kind(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// Attach a display-only image URL
    pub fn with_image(self, image: impl Into<String>) -> ProductWithImage {
        ProductWithImage {
            product: self,
            image: image.into(),
        }
    }
}

/// A product paired with a placeholder image URL that is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithImage {
    pub product: Product,
    pub image: String,
}

/// Build the placeholder image URL for the product at `index` in the current page.
///
/// The index is positional, so the same product may get a different image
/// after another fetch.
pub fn placeholder_image(base: &str, index: usize) -> String {
    format!("{base}{index}")
}

/// Response body of a product list request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub navigation: Navigation,
}

impl ProductPage {
    /// Pair every product with its positional placeholder image
    pub fn with_placeholder_images(self, base: &str) -> (Vec<ProductWithImage>, Navigation) {
        let products = self
            .data
            .into_iter()
            .enumerate()
            .map(|(index, product)| product.with_image(placeholder_image(base, index)))
            .collect();
        (products, self.navigation)
    }
}

/// Body of a partial product update.
///
/// There is deliberately no identifier field: the id travels in the URL only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub description: String,
    pub brand: String,
}

impl From<&Product> for ProductUpdate {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
            category: product.category.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
        }
    }
}

/// The fixed set of product categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    HomeKitchen,
    HealthPersonalCare,
    FashionApparel,
    BooksStationery,
    SportsOutdoors,
    BeautyCosmetics,
    ToysGames,
    Automotive,
    OfficeSupplies,
    PetSupplies,
    BabyProducts,
    Groceries,
    ToolsHardware,
    ArtCrafts,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Electronics,
        Category::HomeKitchen,
        Category::HealthPersonalCare,
        Category::FashionApparel,
        Category::BooksStationery,
        Category::SportsOutdoors,
        Category::BeautyCosmetics,
        Category::ToysGames,
        Category::Automotive,
        Category::OfficeSupplies,
        Category::PetSupplies,
        Category::BabyProducts,
        Category::Groceries,
        Category::ToolsHardware,
        Category::ArtCrafts,
    ];

    /// Label as stored by the API
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::HomeKitchen => "Home & Kitchen",
            Category::HealthPersonalCare => "Health & Personal Care",
            Category::FashionApparel => "Fashion & Apparel",
            Category::BooksStationery => "Books & Stationery",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::BeautyCosmetics => "Beauty & Cosmetics",
            Category::ToysGames => "Toys & Games",
            Category::Automotive => "Automotive",
            Category::OfficeSupplies => "Office Supplies",
            Category::PetSupplies => "Pet Supplies",
            Category::BabyProducts => "Baby Products",
            Category::Groceries => "Groceries",
            Category::ToolsHardware => "Tools & Hardware",
            Category::ArtCrafts => "Art & Crafts",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
