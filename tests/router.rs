//! End-to-end router tests: locale routing, the login page view model and the
//! auth envelopes returned by each endpoint.

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{ACCEPT_LANGUAGE, CONTENT_TYPE, LOCATION},
        Request, StatusCode,
    },
    Router,
};
use lingo::auth::{AuthConfig, AuthService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn configured() -> AuthConfig {
    AuthConfig {
        integration_enabled: Some("true".to_string()),
        api_base_url: Some("https://api.example.com".to_string()),
        login_path: Some("/auth/login".to_string()),
        signup_path: Some("/auth/signup".to_string()),
        logout_path: Some("/auth/logout".to_string()),
        social_path: Some("/auth/social".to_string()),
    }
}

fn app(config: AuthConfig) -> Router {
    lingo::lingo::router(AuthService::new(config))
}

async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, axum::http::HeaderMap, Vec<u8>)> {
    let response = app.oneshot(request).await.context("router call failed")?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .context("failed to read body")?;
    Ok((status, headers, body.to_vec()))
}

fn get(uri: &str) -> Result<Request<Body>> {
    Request::get(uri)
        .body(Body::empty())
        .context("failed to build request")
}

fn post_json(uri: &str, body: &Value) -> Result<Request<Body>> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .context("failed to build request")
}

fn json_body(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).context("body is not JSON")
}

#[tokio::test]
async fn health_reports_name_and_version() -> Result<()> {
    let (status, headers, body) = send(app(AuthConfig::default()), get("/health")?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body)?,
        json!({"name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION")})
    );
    assert!(headers.contains_key("x-app"));
    Ok(())
}

#[tokio::test]
async fn root_redirects_to_negotiated_locale() -> Result<()> {
    let (status, headers, _) = send(app(AuthConfig::default()), get("/")?).await?;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers.get(LOCATION).map(|v| v.as_bytes()), Some(&b"/en"[..]));

    let request = Request::get("/")
        .header(ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9,en;q=0.8")
        .body(Body::empty())?;
    let (status, headers, _) = send(app(AuthConfig::default()), request).await?;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers.get(LOCATION).map(|v| v.as_bytes()), Some(&b"/fr"[..]));
    Ok(())
}

#[tokio::test]
async fn home_is_localized() -> Result<()> {
    let (status, _, body) = send(app(AuthConfig::default()), get("/fr")?).await?;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body)?;
    assert!(html.contains("<h1>Bonjour !</h1>"));
    assert!(html.contains("lang=\"fr\""));
    Ok(())
}

#[tokio::test]
async fn unknown_locale_is_not_found() -> Result<()> {
    for uri in ["/de", "/EN/login", "/es/auth/social/google"] {
        let (status, _, _) = send(app(configured()), get(uri)?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn login_page_returns_localized_view() -> Result<()> {
    let (status, _, body) = send(app(AuthConfig::default()), get("/en/login")?).await?;
    assert_eq!(status, StatusCode::OK);

    let view = json_body(&body)?;
    assert_eq!(view["title"], "Sign in");
    assert_eq!(view["submitLabel"], "Sign in");
    assert_eq!(view["submitDisabled"], false);
    assert_eq!(view["signup"]["href"], "/en/signup");
    assert_eq!(view["social"][0]["provider"], "google");
    assert_eq!(view["social"][1]["href"], "/en/auth/social/facebook");
    assert!(view.get("error").is_none());
    Ok(())
}

#[tokio::test]
async fn login_disabled_integration_has_no_message() -> Result<()> {
    let request = post_json(
        "/en/login",
        &json!({"email": "user@example.com", "password": "secret"}),
    )?;
    let (status, _, body) = send(app(AuthConfig::default()), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body)?,
        json!({
            "ok": false,
            "error": {"code": "NOT_CONFIGURED"},
            "display": "Sign-in is not available yet. Please try again later."
        })
    );
    Ok(())
}

#[tokio::test]
async fn login_resolved_reports_endpoint_as_message() -> Result<()> {
    let request = post_json(
        "/fr/login",
        &json!({"email": "user@example.com", "password": "secret"}),
    )?;
    let (_, _, body) = send(app(configured()), request).await?;

    let reply = json_body(&body)?;
    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"]["code"], "NOT_CONFIGURED");
    assert_eq!(reply["error"]["message"], "https://api.example.com/auth/login");
    assert_eq!(
        reply["display"],
        "La connexion n'est pas encore disponible. Veuillez réessayer plus tard."
    );
    Ok(())
}

#[tokio::test]
async fn signup_and_logout_follow_the_same_pattern() -> Result<()> {
    let request = post_json(
        "/en/signup",
        &json!({"fullName": "Jane Doe", "email": "jane@example.com", "password": "secret"}),
    )?;
    let (_, _, body) = send(app(configured()), request).await?;
    let reply = json_body(&body)?;
    assert_eq!(reply["error"]["message"], "https://api.example.com/auth/signup");

    let request = Request::post("/en/logout").body(Body::empty())?;
    let (_, _, body) = send(app(configured()), request).await?;
    let reply = json_body(&body)?;
    assert_eq!(reply["error"]["message"], "https://api.example.com/auth/logout");
    Ok(())
}

#[tokio::test]
async fn malformed_base_is_unknown_with_generic_display() -> Result<()> {
    let config = AuthConfig {
        api_base_url: Some("not a url".to_string()),
        ..configured()
    };
    let request = Request::post("/en/logout").body(Body::empty())?;
    let (_, _, body) = send(app(config), request).await?;

    assert_eq!(
        json_body(&body)?,
        json!({
            "ok": false,
            "error": {"code": "UNKNOWN"},
            "display": "Something went wrong. Please try again."
        })
    );
    Ok(())
}

#[tokio::test]
async fn social_redirects_to_provider_url() -> Result<()> {
    let (status, headers, _) = send(app(configured()), get("/en/auth/social/google")?).await?;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(LOCATION).map(|v| v.as_bytes()),
        Some(&b"https://api.example.com/auth/social?provider=google"[..])
    );

    let (_, headers, _) = send(app(configured()), get("/fr/auth/social/facebook")?).await?;
    assert_eq!(
        headers.get(LOCATION).map(|v| v.as_bytes()),
        Some(&b"https://api.example.com/auth/social?provider=facebook"[..])
    );
    Ok(())
}

#[tokio::test]
async fn social_failure_returns_envelope() -> Result<()> {
    let (status, _, body) = send(app(AuthConfig::default()), get("/en/auth/social/google")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body)?,
        json!({
            "ok": false,
            "error": {"code": "NOT_CONFIGURED"},
            "display": "Sign-in is not available yet. Please try again later."
        })
    );
    Ok(())
}

#[tokio::test]
async fn unknown_provider_is_not_found() -> Result<()> {
    let (status, _, _) = send(app(configured()), get("/en/auth/social/github")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
