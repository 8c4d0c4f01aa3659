use storefront_api::routes::health::health_check;
use storefront_api::routes::root;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn root_reports_service_info() {
    let response = root().await;
    assert_eq!(response.0.message, "E-Commerce API");
}
