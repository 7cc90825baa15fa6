use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};

// Placeholder order endpoints. Real order processing is out of scope.

/// GET /api/orders
pub async fn list() -> Json<Value> {
    Json(json!({
        "message": "Order history - to be implemented",
        "orders": [],
    }))
}

/// POST /api/orders
pub async fn create() -> Json<Value> {
    let order_id = format!("ORD-{}", chrono::Utc::now().timestamp_millis());
    Json(json!({
        "message": "Create order - to be implemented",
        "orderId": order_id,
    }))
}

/// GET /api/orders/:id
pub async fn show(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "message": "Order details - to be implemented",
        "orderId": id,
    }))
}
