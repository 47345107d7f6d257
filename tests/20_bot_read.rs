mod common;

use anyhow::Result;
use axum::http::StatusCode;

#[tokio::test]
async fn list_returns_a_json_envelope() -> Result<()> {
    let app = common::test_app();
    common::seed_bot(&app, "GPT 8", 300.0).await;

    let (status, body) = common::request(&app, "GET", "/api/bots", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1, "unexpected data: {}", body);

    Ok(())
}

#[tokio::test]
async fn list_orders_newest_first() -> Result<()> {
    let app = common::test_app();
    let first = common::seed_bot(&app, "first", 10.0).await;
    let second = common::seed_bot(&app, "second", 20.0).await;

    let (status, body) = common::request(&app, "GET", "/api/bots", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data[0]["id"].as_i64(), Some(second));
    assert_eq!(data[1]["id"].as_i64(), Some(first));

    Ok(())
}

#[tokio::test]
async fn returns_404_for_a_non_existent_bot() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::request(&app, "GET", "/api/bots/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Bot No Encontrado");

    Ok(())
}

#[tokio::test]
async fn rejects_an_invalid_id_in_the_url() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::request(&app, "GET", "/api/bots/not-valid-url", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1, "unexpected errors: {}", body);
    assert_eq!(errors[0]["msg"], "ID no válido");

    Ok(())
}

#[tokio::test]
async fn fetches_a_single_bot() -> Result<()> {
    let app = common::test_app();
    let id = common::seed_bot(&app, "GPT 8", 300.0).await;

    let (status, body) = common::request(&app, "GET", &format!("/api/bots/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"].as_i64(), Some(id));
    assert_eq!(body["data"]["name"], "GPT 8");

    Ok(())
}
