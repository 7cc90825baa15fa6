use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::repository::ProductRepository;
use crate::error::{ApiError, ApiResult};

/// DELETE /api/products/:id - soft delete by flipping is_active
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid product ID"))?;

    let pool = DatabaseManager::pool().await?;
    let repository = ProductRepository::new(pool);

    repository
        .soft_delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
