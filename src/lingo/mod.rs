//! HTTP surface: locale-prefixed pages and the auth endpoints behind the login
//! form. Auth failures are returned as `200` envelopes; only an unknown locale
//! or provider is a `404`.

use crate::auth::AuthService;
use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Extension, Router,
};
use std::{
    net::{Ipv6Addr, SocketAddr},
    sync::Arc,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug_span, info, Span};

pub mod handlers;

/// Build the application router.
pub fn router(auth: AuthService) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/:locale", get(handlers::home))
        .route(
            "/:locale/login",
            get(handlers::login_page).post(handlers::login),
        )
        .route("/:locale/signup", post(handlers::signup))
        .route("/:locale/logout", post(handlers::logout))
        .route("/:locale/auth/social/:provider", get(handlers::social))
        .layer(Extension(Arc::new(auth)))
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
}

/// Serve the front-end on `port` until Ctrl-C.
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn new(port: u16, auth: AuthService) -> Result<()> {
    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on {}", addr);

    axum::serve(listener, router(auth).into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let method = request.method();
    let path = request.uri().path();

    debug_span!("http-request", %method, path)
}
