//! Local validation must reject bad input before any network I/O. The
//! client here points at an unroutable address: if validation ever slipped
//! past, these tests would surface connection errors instead.

use agentauth_async::types::credentials::UpdateCredentialRequest;
use agentauth_async::types::invocations::{ExchangeRequest, SubmitRequest};
use agentauth_async::{AgentAuthConfig, AgentAuthError, Client};
use std::collections::HashMap;

fn offline_client() -> Client<AgentAuthConfig> {
    Client::with_config(
        AgentAuthConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_api_key("test"),
    )
}

fn assert_validation(err: &AgentAuthError, param: &str) {
    match err {
        AgentAuthError::Validation(msg) => {
            assert_eq!(msg, &format!("missing required {param} parameter"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_identifiers_fail_locally_across_resources() {
    let client = offline_client();

    assert_validation(&client.auth_agents().get("").await.unwrap_err(), "id");
    assert_validation(&client.auth_agents().delete("").await.unwrap_err(), "id");

    let invocations = client.auth_agents().invocations();
    assert_validation(&invocations.get("").await.unwrap_err(), "invocation_id");
    assert_validation(
        &invocations
            .exchange("", ExchangeRequest::new("hc_1"))
            .await
            .unwrap_err(),
        "invocation_id",
    );
    assert_validation(
        &invocations
            .submit(
                "",
                SubmitRequest::FieldValues {
                    field_values: HashMap::new(),
                },
            )
            .await
            .unwrap_err(),
        "invocation_id",
    );

    assert_validation(&client.credentials().get("").await.unwrap_err(), "id_or_name");
    assert_validation(
        &client
            .credentials()
            .update("", UpdateCredentialRequest::default())
            .await
            .unwrap_err(),
        "id_or_name",
    );
    assert_validation(
        &client.credentials().delete("").await.unwrap_err(),
        "id_or_name",
    );
    assert_validation(
        &client.credentials().totp_code("").await.unwrap_err(),
        "id_or_name",
    );

    assert_validation(&client.credential_providers().get("").await.unwrap_err(), "id");
    assert_validation(
        &client.credential_providers().delete("").await.unwrap_err(),
        "id",
    );
    assert_validation(
        &client.credential_providers().test("").await.unwrap_err(),
        "id",
    );
}

#[tokio::test]
async fn missing_credentials_fail_before_any_io() {
    let client = Client::with_config(
        AgentAuthConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_api_key(""),
    );

    let err = client.auth_agents().get("aa_1").await.unwrap_err();
    match err {
        AgentAuthError::Config(msg) => assert!(msg.contains("AGENTAUTH_API_KEY")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}
