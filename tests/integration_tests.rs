//! Integration tests using mock HTTP server
//!
//! Tests the full flow: login URL → code exchange → profile → paginated listings

use github_oauth2::{
    AccessToken, AuthenticationResult, ClientConfig, Endpoints, FailureReason, GitHubClient,
    OAuth2Provider, OAuthFlow,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    let config = ClientConfig::builder("integration-id", "integration-secret")
        .user_agent("integration-tests/1.0")
        .scopes("read:org")
        .endpoints(Endpoints::with_root(server.uri()))
        .build()
        .unwrap();
    GitHubClient::new(config).unwrap()
}

// ============================================================================
// End-to-end Flow
// ============================================================================

#[tokio::test]
async fn test_full_authorization_code_flow() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/login/oauth/access_token"))
        .and(query_param("code", "cb-code"))
        .and(header("User-Agent", "integration-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "access_token=gho_abc123&scope=read%3Aorg&token_type=bearer",
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(query_param("access_token", "gho_abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 1,
            "name": "The Octocat"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "beta"}])))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .and(query_param("access_token", "gho_abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"login": "alpha"}]))
                .insert_header(
                    "Link",
                    format!(
                        r#"<{base}/user/orgs?access_token=gho_abc123&page=2>; rel="next", <{base}/user/orgs?access_token=gho_abc123&page=2>; rel="last""#
                    )
                    .as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/orgs/alpha/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"slug": "core"},
            {"slug": "infra"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let return_url = Url::parse("https://app.example.com/auth/github/callback").unwrap();

    let login = client.build_login_url(&return_url).unwrap();
    assert!(login
        .as_str()
        .starts_with(&format!("{base}/login/oauth/authorize?")));
    let params: Vec<(String, String)> = login.query_pairs().into_owned().collect();
    assert_eq!(
        params,
        vec![
            ("client_id".to_string(), "integration-id".to_string()),
            ("redirect_uri".to_string(), return_url.to_string()),
            ("scope".to_string(), "read:org".to_string()),
        ]
    );

    let token = client
        .exchange_code(&return_url, "cb-code")
        .await
        .unwrap()
        .expect("token");
    assert_eq!(token.as_str(), "gho_abc123");

    let profile = client.fetch_profile(&token).await.unwrap();
    assert_eq!(profile.get("login").map(String::as_str), Some("octocat"));
    assert_eq!(profile.get("id").map(String::as_str), Some("1"));

    let orgs = client.list_organizations(&token).await.unwrap();
    assert_eq!(orgs, vec![json!({"login": "alpha"}), json!({"login": "beta"})]);

    let org = orgs[0]["login"].as_str().unwrap();
    let teams = client.list_teams(org, &token).await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[1]["slug"], "infra");
}

#[tokio::test]
async fn test_flow_reports_failed_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let flow = OAuthFlow::new(client_for(&server));
    let return_url = Url::parse("https://app.example.com/cb").unwrap();
    let callback = Url::parse("https://app.example.com/cb?code=expired&state=xyz").unwrap();

    let result = flow
        .verify_authentication(&callback, &return_url)
        .await
        .unwrap();

    assert!(matches!(
        result,
        AuthenticationResult::Failed {
            reason: FailureReason::ExchangeFailed,
            ..
        }
    ));
    assert_eq!(result.provider(), "github");
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_user_teams_three_pages() {
    let server = MockServer::start().await;

    for (page, body, next) in [
        ("2", json!([3, 4]), Some("3")),
        ("3", json!([5]), None),
    ] {
        let mut response = ResponseTemplate::new(200).set_body_json(body);
        if let Some(next) = next {
            response = response.insert_header(
                "Link",
                format!(r#"</user/teams?access_token=t&page={next}>; rel="next""#).as_str(),
            );
        }
        Mock::given(method("GET"))
            .and(path("/user/teams"))
            .and(query_param("page", page))
            .respond_with(response)
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/user/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([1, 2]))
                .insert_header("Link", r#"</user/teams?access_token=t&page=2>; rel="next""#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let teams = client_for(&server)
        .list_user_teams(&AccessToken::new("t"))
        .await
        .unwrap();

    assert_eq!(teams, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
}

#[tokio::test]
async fn test_listing_failure_returns_no_partial_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([1, 2]))
                .insert_header("Link", r#"</user/orgs?page=2>; rel="next""#),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .list_organizations(&AccessToken::new("t"))
        .await;

    let err = result.unwrap_err();
    assert!(err.is_fetch_error());
    assert_eq!(err.status(), Some(500));
    assert!(err.failed_url().unwrap().ends_with("/user/orgs?page=2"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_client_shared_across_tasks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "acme"}])))
        .expect(4)
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .list_organizations(&AccessToken::new(format!("token-{i}")))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let orgs = handle.await.unwrap().unwrap();
        assert_eq!(orgs, vec![json!({"login": "acme"})]);
    }
}
