use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::repository::ProductRepository;
use crate::error::{ApiError, ApiResult};

/// GET /api/products/:id - show a single active product
pub async fn show(Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid product ID"))?;

    let pool = DatabaseManager::pool().await?;
    let repository = ProductRepository::new(pool);

    let product = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    // Soft-deleted products are retained in storage but not served
    if !product.is_active {
        return Err(ApiError::not_found("Product not available"));
    }

    Ok(Json(json!({ "product": product })))
}
