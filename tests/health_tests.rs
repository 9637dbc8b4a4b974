mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_check_returns_ok() {
    let (status, body) = common::get(common::create_test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "ok", "message": "A API está funcionando." })
    );
}

#[tokio::test]
async fn health_check_is_unaffected_by_failed_fetches() {
    let app = common::create_test_app();
    let (status, _) = common::fetch_link(app.clone(), "http://127.0.0.1:1/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = common::fetch_link(app.clone(), "not a url").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = common::get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "A API está funcionando.");
}

#[tokio::test]
async fn unknown_route_returns_404_detail() {
    let (status, body) = common::get(common::create_test_app(), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (status, body) = common::get(common::create_test_app(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "API de Busca de URL");
    assert!(body["paths"]["/buscar-link/"]["post"].is_object());
    assert!(body["paths"]["/"]["get"].is_object());
}
