use agentauth_async::types::invocations::{
    ExchangeRequest, InvocationStatus, InvocationStep, SubmitRequest,
};
use agentauth_async::{AgentAuthConfig, AgentAuthError, Client, RequestOptions};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client<AgentAuthConfig> {
    Client::with_config(
        AgentAuthConfig::new()
            .with_base_url(server.uri())
            .with_api_key("test"),
    )
}

#[tokio::test]
async fn exchange_carries_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agents/auth/invocations/inv_1/exchange"))
        .and(body_json(json!({"code": "hc_1"})))
        .respond_with(|req: &wiremock::Request| {
            if req.headers.get("authorization").is_some() {
                ResponseTemplate::new(500).set_body_string("unexpected credential")
            } else {
                ResponseTemplate::new(200)
                    .set_body_json(json!({"invocation_id": "inv_1", "jwt": "jwt-abc"}))
            }
        })
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .auth_agents()
        .invocations()
        .exchange("inv_1", ExchangeRequest::new("hc_1"))
        .await
        .unwrap();

    assert_eq!(resp.invocation_id, "inv_1");
    assert_eq!(resp.jwt, "jwt-abc");
}

#[tokio::test]
async fn exchange_works_without_configured_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agents/auth/invocations/inv_1/exchange"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "invocation_id": "inv_1",
            "jwt": "jwt-abc"
        })))
        .mount(&server)
        .await;

    // No usable API key configured: only the handoff code authenticates.
    let client = Client::with_config(
        AgentAuthConfig::new()
            .with_base_url(server.uri())
            .with_api_key(""),
    );
    let resp = client
        .auth_agents()
        .invocations()
        .exchange("inv_1", ExchangeRequest::new("hc_1"))
        .await
        .unwrap();
    assert_eq!(resp.jwt, "jwt-abc");
}

#[tokio::test]
async fn exchange_unrecognized_code_fails_without_retry() {
    let server = MockServer::start().await;
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = count.clone();
    Mock::given(method("POST"))
        .and(path("/agents/auth/invocations/inv_1/exchange"))
        .respond_with(move |_req: &wiremock::Request| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "invalid handoff code"}))
        })
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .auth_agents()
        .invocations()
        .exchange("inv_1", ExchangeRequest::new("bogus"))
        .await
        .unwrap_err();

    match err {
        AgentAuthError::Api(obj) => {
            assert_eq!(obj.status_code, Some(401));
            assert_eq!(obj.message, "invalid handoff code");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn get_accepts_exchanged_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/agents/auth/invocations/inv_1"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "app_name": "acme",
            "domain": "example.com",
            "expires_at": "2026-01-01T00:00:00Z",
            "status": "IN_PROGRESS",
            "step": "awaiting_input",
            "type": "login",
            "pending_fields": [{
                "label": "Email",
                "name": "email",
                "selector": "#email",
                "type": "email",
                "required": true
            }]
        })))
        .mount(&server)
        .await;

    // The configured key is replaced by the exchanged token for this call.
    let client = client_for(&server);
    let invocation = client
        .auth_agents()
        .invocations()
        .with_options(RequestOptions::new().with_bearer("jwt-abc"))
        .get("inv_1")
        .await
        .unwrap();

    assert_eq!(invocation.status, InvocationStatus::InProgress);
    assert_eq!(invocation.step, InvocationStep::AwaitingInput);
    assert_eq!(invocation.pending_fields.unwrap()[0].name, "email");
}

#[tokio::test]
async fn submit_field_values_sends_bare_union_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agents/auth/invocations/inv_1/submit"))
        .and(body_json(json!({"field_values": {"email": "alice@example.com"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .auth_agents()
        .invocations()
        .submit(
            "inv_1",
            SubmitRequest::FieldValues {
                field_values: HashMap::from([(
                    "email".to_string(),
                    "alice@example.com".to_string(),
                )]),
            },
        )
        .await
        .unwrap();
    assert!(resp.accepted);
}

#[tokio::test]
async fn submit_sso_button_sends_bare_union_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agents/auth/invocations/inv_1/submit"))
        .and(body_json(json!({"sso_button": "//button[@id='sso-google']"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .auth_agents()
        .invocations()
        .submit(
            "inv_1",
            SubmitRequest::SsoButton {
                sso_button: "//button[@id='sso-google']".into(),
            },
        )
        .await
        .unwrap();
    assert!(resp.accepted);
}

#[tokio::test]
async fn get_decodes_failed_invocation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/agents/auth/invocations/inv_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "app_name": "acme",
            "domain": "example.com",
            "expires_at": "2026-01-01T00:00:00Z",
            "status": "FAILED",
            "step": "submitting",
            "type": "reauth",
            "error_message": "credentials rejected",
            "submitted_fields": ["email", "password"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let invocation = client
        .auth_agents()
        .invocations()
        .get("inv_2")
        .await
        .unwrap();

    assert_eq!(invocation.status, InvocationStatus::Failed);
    assert_eq!(
        invocation.error_message.as_deref(),
        Some("credentials rejected")
    );
    assert_eq!(
        invocation.submitted_fields.unwrap(),
        vec!["email".to_string(), "password".to_string()]
    );
}
