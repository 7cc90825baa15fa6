use rust_decimal::Decimal;
use serde::Deserialize;

use crate::database::models::{is_valid_category, Dimensions, NewProduct, ProductPatch, CATEGORIES};
use crate::error::ApiError;

/// Create payload. Every field is optional at the deserialization layer so
/// missing required fields surface as validation details, not a parse
/// failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
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

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
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

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct, ApiError> {
        let mut details = vec![];

        let name = require_string(self.name, "name", &mut details);
        if let Some(name) = &name {
            check_min_len(name, 2, "name", &mut details);
        }

        let description = require_string(self.description, "description", &mut details);
        if let Some(description) = &description {
            check_min_len(description, 10, "description", &mut details);
        }

        let price = match self.price {
            Some(price) => {
                check_non_negative(price, "price", &mut details);
                Some(price)
            }
            None => {
                details.push("\"price\" is required".to_string());
                None
            }
        };

        let category = require_string(self.category, "category", &mut details);
        if let Some(category) = &category {
            check_category(category, &mut details);
        }

        let sku = require_string(self.sku, "sku", &mut details);

        let stock = match self.stock {
            Some(stock) => {
                if stock < 0 {
                    details.push("\"stock\" must be greater than or equal to 0".to_string());
                }
                Some(stock)
            }
            None => {
                details.push("\"stock\" is required".to_string());
                None
            }
        };

        check_optional_fields(self.weight, &self.dimensions, &mut details);

        if !details.is_empty() {
            return Err(ApiError::validation_error("Validation failed", details));
        }

        // All required fields are present once details is empty
        Ok(NewProduct {
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            price: price.unwrap_or_default(),
            category: category.unwrap_or_default(),
            brand: self.brand,
            sku: sku.unwrap_or_default(),
            stock: stock.unwrap_or_default(),
            weight: self.weight,
            dimensions: self.dimensions,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

impl UpdateProductRequest {
    /// Partial update: only supplied fields are validated and applied.
    pub fn validate(self) -> Result<ProductPatch, ApiError> {
        let mut details = vec![];

        if let Some(name) = &self.name {
            check_min_len(name, 2, "name", &mut details);
        }
        if let Some(description) = &self.description {
            check_min_len(description, 10, "description", &mut details);
        }
        if let Some(price) = self.price {
            check_non_negative(price, "price", &mut details);
        }
        if let Some(category) = &self.category {
            check_category(category, &mut details);
        }
        if let Some(sku) = &self.sku {
            if sku.trim().is_empty() {
                details.push("\"sku\" is not allowed to be empty".to_string());
            }
        }
        if let Some(stock) = self.stock {
            if stock < 0 {
                details.push("\"stock\" must be greater than or equal to 0".to_string());
            }
        }

        check_optional_fields(self.weight, &self.dimensions, &mut details);

        if !details.is_empty() {
            return Err(ApiError::validation_error("Validation failed", details));
        }

        Ok(ProductPatch {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            brand: self.brand,
            sku: self.sku,
            stock: self.stock,
            weight: self.weight,
            dimensions: self.dimensions,
            tags: self.tags,
        })
    }
}

fn require_string(value: Option<String>, field: &str, details: &mut Vec<String>) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        Some(_) => {
            details.push(format!("\"{}\" is not allowed to be empty", field));
            None
        }
        None => {
            details.push(format!("\"{}\" is required", field));
            None
        }
    }
}

fn check_min_len(value: &str, min: usize, field: &str, details: &mut Vec<String>) {
    if value.trim().chars().count() < min {
        details.push(format!(
            "\"{}\" length must be at least {} characters long",
            field, min
        ));
    }
}

fn check_non_negative(value: Decimal, field: &str, details: &mut Vec<String>) {
    if value.is_sign_negative() {
        details.push(format!(
            "\"{}\" must be greater than or equal to 0",
            field
        ));
    }
}

fn check_category(category: &str, details: &mut Vec<String>) {
    if !is_valid_category(category) {
        details.push(format!(
            "\"category\" must be one of [{}]",
            CATEGORIES.join(", ")
        ));
    }
}

fn check_optional_fields(
    weight: Option<Decimal>,
    dimensions: &Option<Dimensions>,
    details: &mut Vec<String>,
) {
    if let Some(weight) = weight {
        check_non_negative(weight, "weight", details);
    }
    if let Some(dims) = dimensions {
        for (value, field) in [
            (dims.length, "dimensions.length"),
            (dims.width, "dimensions.width"),
            (dims.height, "dimensions.height"),
        ] {
            if let Some(value) = value {
                check_non_negative(value, field, details);
            }
        }
    }
}
