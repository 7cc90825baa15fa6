use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};

// Placeholder cart endpoints. Real cart logic is out of scope; these keep
// the route surface stable for clients.

/// GET /api/cart
pub async fn show() -> Json<Value> {
    Json(json!({
        "message": "Cart functionality - to be implemented",
        "items": [],
        "total": 0,
    }))
}

/// POST /api/cart/add
pub async fn add() -> Json<Value> {
    Json(json!({ "message": "Add to cart - to be implemented" }))
}

/// PUT /api/cart/update
pub async fn update() -> Json<Value> {
    Json(json!({ "message": "Update cart - to be implemented" }))
}

/// DELETE /api/cart/remove/:product_id
pub async fn remove(Path(_product_id): Path<String>) -> Json<Value> {
    Json(json!({ "message": "Remove from cart - to be implemented" }))
}
