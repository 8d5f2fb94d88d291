//! Auth endpoints behind the login form. Each response carries the
//! `{ok, data | error}` envelope plus a localized `display` string for the
//! page to show; request bodies hold passwords and are never logged.

use super::locale_or_not_found;
use crate::{
    auth::{
        error_message, AuthResponse, AuthResult, AuthService, LoginForm, LoginInput, SignupInput,
        SocialAuthProvider,
    },
    i18n::Locale,
};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    full_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthReply<T> {
    #[serde(flatten)]
    response: AuthResponse<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<&'static str>,
}

impl<T> AuthReply<T> {
    fn new(locale: Locale, result: AuthResult<T>) -> Self {
        let display = result.as_ref().err().map(|err| error_message(locale, err));
        Self {
            response: AuthResponse(result),
            display,
        }
    }
}

pub async fn login_page(Path(locale): Path<String>) -> Result<impl IntoResponse, StatusCode> {
    let locale = locale_or_not_found(&locale)?;

    Ok(Json(LoginForm::new(locale).view()))
}

#[instrument(skip_all)]
pub async fn login(
    Extension(auth): Extension<Arc<AuthService>>,
    Path(locale): Path<String>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthReply<()>>, StatusCode> {
    let locale = locale_or_not_found(&locale)?;
    let input = LoginInput::new(request.email, request.password);

    let result = auth.login(&input).await;
    debug!(%locale, ok = result.is_ok(), "login settled");

    Ok(Json(AuthReply::new(locale, result)))
}

#[instrument(skip_all)]
pub async fn signup(
    Extension(auth): Extension<Arc<AuthService>>,
    Path(locale): Path<String>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthReply<()>>, StatusCode> {
    let locale = locale_or_not_found(&locale)?;
    let input = SignupInput::new(request.full_name, request.email, request.password);

    let result = auth.signup(&input).await;
    debug!(%locale, ok = result.is_ok(), "signup settled");

    Ok(Json(AuthReply::new(locale, result)))
}

#[instrument(skip_all)]
pub async fn logout(
    Extension(auth): Extension<Arc<AuthService>>,
    Path(locale): Path<String>,
) -> Result<Json<AuthReply<()>>, StatusCode> {
    let locale = locale_or_not_found(&locale)?;

    let result = auth.logout().await;
    debug!(%locale, ok = result.is_ok(), "logout settled");

    Ok(Json(AuthReply::new(locale, result)))
}

/// Redirect the browser to the social sign-in endpoint, or explain why not.
#[instrument(skip_all)]
pub async fn social(
    Extension(auth): Extension<Arc<AuthService>>,
    Path((locale, provider)): Path<(String, String)>,
) -> Result<Response, StatusCode> {
    let locale = locale_or_not_found(&locale)?;
    let provider = provider.parse::<SocialAuthProvider>().map_err(|err| {
        debug!("{err}");
        StatusCode::NOT_FOUND
    })?;
    debug!(%locale, %provider, "starting social auth");

    match auth.start_social_auth(provider).await {
        Ok(redirect) => Ok(Redirect::to(&redirect.redirect_url).into_response()),
        Err(err) => Ok(Json(AuthReply::<()>::new(locale, Err(err))).into_response()),
    }
}
