//! HTTP contract tests for the subscribed-pulses request against a local mock server.

use otx_client::{OtxClient, OtxError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> OtxClient {
    OtxClient::with_base_url(&server.uri(), "test-key".to_string()).expect("build client")
}

#[tokio::test]
async fn sends_api_key_and_decodes_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pulses/subscribed"))
        .and(header("X-OTX-API-KEY", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [{
                "name": "Botnet X",
                "indicators": [
                    {"indicator": "evil.com", "type": "domain"},
                    {"indicator": "", "type": "ip"}
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pulses = client(&server).subscribed_pulses().await.unwrap();

    assert_eq!(pulses.len(), 1);
    assert_eq!(pulses[0].name.as_deref(), Some("Botnet X"));
    assert_eq!(pulses[0].indicators().len(), 2);
}

#[tokio::test]
async fn missing_results_field_yields_no_pulses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pulses/subscribed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 0})))
        .mount(&server)
        .await;

    let pulses = client(&server).subscribed_pulses().await.unwrap();
    assert!(pulses.is_empty());
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pulses/subscribed"))
        .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = client(&server).subscribed_pulses().await.unwrap_err();
    match err {
        OtxError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "bad key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pulses/subscribed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).subscribed_pulses().await.unwrap_err();
    assert!(matches!(err, OtxError::Parse(_)));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let client = OtxClient::with_base_url("http://127.0.0.1:9", "k".to_string()).unwrap();
    let err = client.subscribed_pulses().await.unwrap_err();
    assert!(matches!(err, OtxError::Network(_)));
}

#[tokio::test]
async fn wrong_typed_indicator_does_not_fail_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pulses/subscribed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"name": "Good", "indicators": [{"indicator": "evil.com", "type": "domain"}]},
                {"name": "Bad", "indicators": [{"indicator": 12345, "type": "IPv4"}]}
            ]
        })))
        .mount(&server)
        .await;

    let pulses = client(&server).subscribed_pulses().await.unwrap();

    assert_eq!(pulses.len(), 2);
    assert_eq!(pulses[0].indicators()[0].indicator.as_deref(), Some("evil.com"));
    assert!(pulses[1].indicators()[0].indicator.is_none());
}
