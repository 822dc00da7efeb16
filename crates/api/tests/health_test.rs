mod test_utils;

use lawbook_api::routes::health::ServiceInfo;
use lawbook_core::models::response::ApiResponse;

use test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let response = TestContext::new().server().get("/health").await;

    response.assert_status_ok();
    let body: ApiResponse<ServiceInfo> = response.json();
    assert!(body.success);
    assert_eq!(body.data.unwrap().service, "lawbook-api");
}

#[tokio::test]
async fn test_version() {
    let response = TestContext::new().server().get("/version").await;

    let body: ApiResponse<ServiceInfo> = response.json();
    assert_eq!(body.data.unwrap().version, env!("CARGO_PKG_VERSION"));
}
