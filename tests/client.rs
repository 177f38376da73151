use sage_api::client::{ApiClient, DEFAULT_BASE_URL};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    ApiClient::with_base_url(format!("{}/api/", server.url()))
}

#[test]
fn default_base_url_points_at_local_backend() {
    assert_eq!(ApiClient::new().base_url(), DEFAULT_BASE_URL);
    assert_eq!(DEFAULT_BASE_URL, "http://localhost:8000/api/");
}

#[tokio::test]
async fn get_banks_returns_payload_unchanged() {
    let mut server = mockito::Server::new_async().await;

    let payload = json!([
        { "id": "01HYQ0V5RS0WZ2B0M93W8H1T4C", "name": "Savings", "bank_name": "First Bank" },
        { "id": "01HYQ0V5RSJ7T29JN9GX1FZ9A8", "name": "Payroll", "bank_name": "GTBank" }
    ]);

    let mock = server
        .mock("GET", "/api/banks/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;

    let banks = client_for(&server)
        .get_banks()
        .await
        .expect("get_banks should succeed");

    assert_eq!(banks, payload);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_banks_hits_exact_path_and_method() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/banks/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    client_for(&server)
        .get_banks()
        .await
        .expect("get_banks should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn get_banks_fails_on_error_status() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/banks/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let err = client_for(&server)
        .get_banks()
        .await
        .expect_err("get_banks should fail on a non-success status");

    assert_eq!(
        err.status(),
        Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn get_banks_fails_on_not_found() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/banks/")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let err = client_for(&server)
        .get_banks()
        .await
        .expect_err("get_banks should fail on a non-success status");

    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_banks_fails_when_server_is_unreachable() {
    // Nothing listens on port 1.
    let client = ApiClient::with_base_url("http://127.0.0.1:1/api/");

    let err = client
        .get_banks()
        .await
        .expect_err("get_banks should fail when the server is unreachable");

    assert!(err.is_connect());
}

#[tokio::test]
async fn concurrent_calls_produce_independent_requests() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/banks/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": "01HYQ0V5RS0WZ2B0M93W8H1T4C"}]"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let (first, second) = tokio::join!(client.get_banks(), client.get_banks());

    assert_eq!(first.expect("first call should succeed"), second.expect("second call should succeed"));
    mock.assert_async().await;
}
