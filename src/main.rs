use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod catalog;
mod config;
mod database;
mod error;
mod handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting Storefront API in {:?} mode", config.environment);

    tracing_subscriber::fmt::init();

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("STOREFRONT_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Storefront API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // API routes
        .merge(product_routes())
        .merge(cart_routes())
        .merge(order_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn product_routes() -> Router {
    use handlers::products;

    Router::new()
        // Collection-level operations
        .route(
            "/api/products",
            get(products::list).post(products::create),
        )
        // Record-level operations
        .route(
            "/api/products/:id",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

fn cart_routes() -> Router {
    use axum::routing::{delete, post, put};
    use handlers::cart;

    Router::new()
        .route("/api/cart", get(cart::show))
        .route("/api/cart/add", post(cart::add))
        .route("/api/cart/update", put(cart::update))
        .route("/api/cart/remove/:product_id", delete(cart::remove))
}

fn order_routes() -> Router {
    use axum::routing::post;
    use handlers::orders;

    Router::new()
        .route("/api/orders", get(orders::list).post(orders::create))
        .route("/api/orders/:id", get(orders::show))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Storefront API",
        "version": version,
        "description": "Minimal e-commerce backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "products": "/api/products[/:id] (catalog CRUD, list supports filtering/sorting/pagination)",
            "cart": "/api/cart/* (placeholder)",
            "orders": "/api/orders[/:id] (placeholder)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();
    let environment = format!("{:?}", crate::config::CONFIG.environment);

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "OK",
                "timestamp": now,
                "environment": environment,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "environment": environment,
                "database_error": e.to_string()
            })),
        ),
    }
}
