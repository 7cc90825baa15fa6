mod common;

use anyhow::Result;
use reqwest::StatusCode;

// These tests verify the list surface: response shape, filtering and the
// pagination block. They tolerate an empty products table.

#[tokio::test]
async fn list_returns_products_and_pagination() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/products", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK, "unexpected status: {}", res.status());

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["products"].is_array(), "missing products array: {}", payload);
    let pagination = &payload["pagination"];
    assert_eq!(pagination["currentPage"], 1);
    assert_eq!(pagination["itemsPerPage"], 10);
    assert!(pagination["totalItems"].is_i64(), "missing totalItems: {}", pagination);
    assert!(pagination["totalPages"].is_i64(), "missing totalPages: {}", pagination);

    Ok(())
}

#[tokio::test]
async fn list_filters_by_category() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/products?category=electronics", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    for product in payload["products"].as_array().cloned().unwrap_or_default() {
        assert_eq!(product["category"], "electronics", "wrong category: {}", product);
    }

    Ok(())
}

#[tokio::test]
async fn list_filters_by_price_range() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/products?minPrice=50&maxPrice=200",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    for product in payload["products"].as_array().cloned().unwrap_or_default() {
        let price = product["price"].as_f64().expect("numeric price");
        assert!(price >= 50.0 && price <= 200.0, "price out of range: {}", price);
    }

    Ok(())
}

#[tokio::test]
async fn malformed_pagination_falls_back_to_defaults() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/products?page=banana&limit=soup",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["pagination"]["currentPage"], 1);
    assert_eq!(payload["pagination"]["itemsPerPage"], 10);

    Ok(())
}

#[tokio::test]
async fn page_beyond_end_returns_empty_list() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/products?page=100000&limit=10", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    let products = payload["products"].as_array().cloned().unwrap_or_default();
    assert!(products.is_empty(), "expected empty page, got {} products", products.len());
    assert_eq!(payload["pagination"]["currentPage"], 100000);

    Ok(())
}

#[tokio::test]
async fn unknown_sort_column_is_a_server_error() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/products?sortBy=no_such_column",
            server.base_url
        ))
        .send()
        .await?;

    // The sort column is passed through to the datastore, which rejects it
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
