use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::payload::CreateProductRequest;
use crate::database::manager::DatabaseManager;
use crate::database::repository::ProductRepository;
use crate::error::{ApiError, ApiResult};

/// POST /api/products - create a product (admin only - simplified for demo)
pub async fn create(
    Json(payload): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let new_product = payload.validate()?;

    let pool = DatabaseManager::pool().await?;
    let repository = ProductRepository::new(pool);

    if repository.sku_exists(&new_product.sku).await? {
        return Err(ApiError::bad_request("Product with this SKU already exists"));
    }

    let product = repository.insert(new_product).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Product created successfully",
            "product": product,
        })),
    ))
}
