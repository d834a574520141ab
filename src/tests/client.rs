use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{cloudflare, ip_resolver};
use crate::api::models::RecordEdit;
use crate::api::DnsApiClient;
use crate::error::Error;
use crate::ip::IpResolver;

#[tokio::test]
async fn test_resolve_trims_trailing_newline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("203.0.113.9\n"))
        .expect(1)
        .mount(&server)
        .await;

    let addr = ip_resolver(&server).resolve().await.unwrap();
    assert_eq!(addr, "203.0.113.9");
}

#[tokio::test]
async fn test_resolve_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-an-ip \r\n"))
        .mount(&server)
        .await;

    let addr = ip_resolver(&server).resolve().await.unwrap();
    assert_eq!(addr, "not-an-ip");
}

#[tokio::test]
async fn test_resolve_non_2xx_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = ip_resolver(&server).resolve().await.unwrap_err();
    match err {
        Error::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_resolve_connection_refused() {
    let server = MockServer::start().await;
    let resolver = ip_resolver(&server);
    drop(server);

    assert!(matches!(resolver.resolve().await, Err(Error::Network(_))));
}

#[tokio::test]
async fn test_load_all_records_sends_credentials() {
    let server = MockServer::start().await;
    let body = json!({
        "result": "success",
        "response": {"recs": {"count": 1, "objs": [
            {"name": "home.example.com", "rec_id": "42", "content": "203.0.113.1"}
        ]}}
    });
    Mock::given(method("GET"))
        .and(path("/api_json.html"))
        .and(query_param("a", "rec_load_all"))
        .and(query_param("tkn", "test_token"))
        .and(query_param("email", "admin@example.com"))
        .and(query_param("z", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let raw = cloudflare(&server).load_all_records().await.unwrap();
    assert_eq!(raw, body);
}

#[tokio::test]
async fn test_load_all_records_rejects_non_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = cloudflare(&server).load_all_records().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_edit_record_posts_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api_json.html"))
        .and(body_string_contains("a=rec_edit"))
        .and(body_string_contains("tkn=test_token"))
        .and(body_string_contains("z=example.com"))
        .and(body_string_contains("type=A"))
        .and(body_string_contains("name=home.example.com"))
        .and(body_string_contains("id=42"))
        .and(body_string_contains("content=203.0.113.9"))
        .and(body_string_contains("service_mode=0"))
        .and(body_string_contains("ttl=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let edit = RecordEdit {
        name: "home.example.com".to_string(),
        id: "42".to_string(),
        content: "203.0.113.9".to_string(),
    };
    let response = cloudflare(&server).edit_record(&edit).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_edit_record_provider_rejection_is_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "error",
            "msg": "Invalid record id",
            "err_code": "E_INVLDINPUT"
        })))
        .mount(&server)
        .await;

    let edit = RecordEdit {
        name: "home.example.com".to_string(),
        id: "0".to_string(),
        content: "203.0.113.9".to_string(),
    };
    let response = cloudflare(&server).edit_record(&edit).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.err_code.as_deref(), Some("E_INVLDINPUT"));
}

#[tokio::test]
async fn test_load_all_records_status_error_hides_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = cloudflare(&server).load_all_records().await.unwrap_err();
    assert!(matches!(err, Error::Status { .. }));
    assert!(!err.to_string().contains("test_token"), "{err}");
    assert!(!format!("{err:?}").contains("test_token"));
}

#[tokio::test]
async fn test_load_all_records_network_error_hides_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = cloudflare(&server).load_all_records().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(!err.to_string().contains("test_token"), "{err}");
    assert!(!format!("{err:?}").contains("test_token"));
}
