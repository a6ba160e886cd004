// tests/api_client_tests.rs
// Backend HTTP client against a mocked addiction API

use std::time::Duration;

use recovery_site::web_app::api::{ApiClient, client::REQUESTED_AT_HEADER};
use recovery_site::web_app::config::SiteConfig;
use recovery_site::web_app::error::ApiError;
use recovery_site::web_app::model::Category;
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&SiteConfig {
        api_base_url: format!("{}/api", server.uri()),
        request_timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn types_body() -> serde_json::Value {
    json!({
        "substance": [{"id": "alcohol", "name": "Alcohol", "emoji": "🍺"}],
        "behavioral": [{"id": "gambling", "name": "Gambling", "emoji": "🎰"}],
        "emotional": [{"id": "overthinking", "name": "Overthinking", "emoji": "🌀"}]
    })
}

#[tokio::test]
async fn test_types_request_headers_and_wrapped_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/types"))
        .and(header("Content-Type", "application/json"))
        .and(header_exists(REQUESTED_AT_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": types_body()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let types = client_for(&server).addiction_types().await.unwrap();
    assert_eq!(types.total(), 3);
    assert_eq!(types.get(Category::Emotional)[0].name, "Overthinking");

    let requests = server.received_requests().await.unwrap();
    let stamp = requests[0].headers.get(REQUESTED_AT_HEADER).unwrap().to_str().unwrap();
    assert!(stamp.parse::<i64>().unwrap() > 0);
}

#[tokio::test]
async fn test_types_bare_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_body()))
        .mount(&server)
        .await;

    let types = client_for(&server).addiction_types().await.unwrap();
    assert_eq!(types.get(Category::Substance)[0].id, "alcohol");
}

#[tokio::test]
async fn test_addiction_detail() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/gambling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "gambling",
                "name": "Gambling",
                "category": "behavioral",
                "content": {"reasons": ["Debt."], "methods": ["Self-exclusion."], "benefits": ["Savings."]}
            }
        })))
        .mount(&server)
        .await;

    let addiction = client_for(&server).addiction("gambling").await?;
    assert_eq!(addiction.category, Category::Behavioral);
    assert_eq!(addiction.content.reasons, vec!["Debt."]);
    Ok(())
}

#[tokio::test]
async fn test_null_detail_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let err = client_for(&server).addiction("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Addiction not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).addiction("ghost").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("Addiction not found".to_string()));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_server_error_message_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/types"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "Maintenance until 10:00"})))
        .mount(&server)
        .await;

    let err = client_for(&server).addiction_types().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(), "Maintenance until 10:00");
}

#[tokio::test]
async fn test_server_error_without_message_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/types"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).addiction_types().await.unwrap_err();
    assert_eq!(err.user_message(), "Server Error: 500");
}

#[tokio::test]
async fn test_search_query_is_percent_encoded() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "social-media", "name": "Social Media", "category": "behavioral"}]
        })))
        .mount(&server)
        .await;

    let found = client_for(&server).search("social media/phones?").await?;
    assert_eq!(found.len(), 1);

    let requests = server
        .received_requests()
        .await
        .ok_or_else(|| anyhow::anyhow!("request recording disabled"))?;
    assert_eq!(
        requests[0].url.path(),
        "/api/addictions/search/social%20media%2Fphones%3F"
    );
    assert!(requests[0].url.query().is_none());
    Ok(())
}

#[tokio::test]
async fn test_search_null_payload_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/search/zzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    assert!(client_for(&server).search("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = ApiClient::new(&SiteConfig {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        request_timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = client.addiction_types().await.unwrap_err();
    assert_eq!(err, ApiError::network());
    assert_eq!(err.user_message(), "Network error. Please check your connection.");
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(types_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(&SiteConfig {
        api_base_url: format!("{}/api", server.uri()),
        request_timeout: Duration::from_millis(300),
    })
    .unwrap();

    assert!(matches!(client.addiction_types().await, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_successful_response_without_data_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/no-content"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/empty-body"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/bare-wrapper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    for id in ["no-content", "empty-body", "bare-wrapper"] {
        let err = client.addiction(id).await.unwrap_err();
        assert!(err.is_not_found(), "{}: got {:?}", id, err);
    }
}

#[tokio::test]
async fn test_empty_search_response_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addictions/search/zzz"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert!(client_for(&server).search("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_dot_segments_never_reach_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(client.search("..").await, Err(ApiError::Validation(_))));
    assert!(matches!(client.addiction("..").await, Err(ApiError::Validation(_))));
    assert!(matches!(client.addiction(".").await, Err(ApiError::Validation(_))));
}
