mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_reports_status_and_timestamp() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;
    let status = res.status();
    assert!(
        status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        status
    );

    let payload = res.json::<serde_json::Value>().await?;
    if status == StatusCode::OK {
        assert_eq!(payload["status"], "OK");
    } else {
        assert_eq!(payload["status"], "degraded");
    }
    assert!(payload["timestamp"].is_string());
    assert!(payload["environment"].is_string());

    Ok(())
}

#[tokio::test]
async fn root_returns_api_index() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["name"], "Storefront API");
    assert!(payload["endpoints"].is_object());

    Ok(())
}

#[tokio::test]
async fn cart_endpoints_are_placeholders() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/cart", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["items"], serde_json::json!([]));
    assert_eq!(payload["total"], 0);

    let res = client
        .post(format!("{}/api/cart/add", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/api/cart/remove/abc123", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn order_endpoints_are_placeholders() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/orders", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["orders"], serde_json::json!([]));

    let res = client
        .post(format!("{}/api/orders", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<serde_json::Value>().await?;
    let order_id = payload["orderId"].as_str().unwrap_or_default();
    assert!(order_id.starts_with("ORD-"), "unexpected orderId: {}", order_id);

    let res = client
        .get(format!("{}/api/orders/{}", server.base_url, order_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["orderId"], order_id);

    Ok(())
}
