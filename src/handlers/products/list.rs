use axum::extract::Query;
use axum::Json;
use serde_json::{json, Value};

use crate::catalog::{ListParams, PageWindow, Pagination, ProductFilter, RawListQuery, SortSpec};
use crate::database::manager::DatabaseManager;
use crate::database::repository::ProductRepository;
use crate::error::ApiResult;

/// GET /api/products - list products with filtering, sorting and pagination
pub async fn list(Query(raw): Query<RawListQuery>) -> ApiResult<Json<Value>> {
    let params = ListParams::parse(raw);
    let filter = ProductFilter::from_params(&params);
    let sort = SortSpec::from_params(&params);
    let window = PageWindow::new(params.page, params.limit);

    let pool = DatabaseManager::pool().await?;
    let repository = ProductRepository::new(pool);
    let (products, total) = repository.list(&filter, &sort, &window).await?;

    let pagination = Pagination::new(params.page, params.limit, total);
    Ok(Json(json!({
        "products": products,
        "pagination": pagination,
    })))
}
