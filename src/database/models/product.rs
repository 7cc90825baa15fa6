use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// The fixed category set. Category is stored as TEXT and enforced at the
/// validation layer, not as a database enum type.
pub const CATEGORIES: [&str; 6] = ["electronics", "clothing", "books", "home", "sports", "toys"];

pub fn is_valid_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rating {
    pub average: Decimal,
    pub count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
}

/// Catalog product row. Soft-deleted rows keep their data and flip
/// `is_active` to false.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    pub sku: String,
    pub stock: i32,
    pub images: Json<Vec<ProductImage>>,
    pub specifications: Json<BTreeMap<String, String>>,
    pub rating: Json<Rating>,
    pub is_active: bool,
    pub weight: Option<Decimal>,
    pub dimensions: Option<Json<Dimensions>>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for an insert. The storage layer uppercases the SKU
/// and fills defaults for the fields the create API does not accept.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub brand: Option<String>,
    pub sku: String,
    pub stock: i32,
    pub weight: Option<Decimal>,
    pub dimensions: Option<Dimensions>,
    pub tags: Vec<String>,
}

/// Partial update; only the supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub stock: Option<i32>,
    pub weight: Option<Decimal>,
    pub dimensions: Option<Dimensions>,
    pub tags: Option<Vec<String>>,
}
