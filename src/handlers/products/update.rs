use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use super::payload::UpdateProductRequest;
use crate::database::manager::DatabaseManager;
use crate::database::repository::ProductRepository;
use crate::error::{ApiError, ApiResult};

/// PUT /api/products/:id - partial update (admin only - simplified for demo)
pub async fn update(
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> ApiResult<Json<Value>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid product ID"))?;
    let patch = payload.validate()?;

    let pool = DatabaseManager::pool().await?;
    let repository = ProductRepository::new(pool);

    let product = repository
        .update(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(json!({
        "message": "Product updated successfully",
        "product": product,
    })))
}
