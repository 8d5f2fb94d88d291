use super::locale_or_not_found;
use crate::i18n::{translate, Locale};
use axum::{
    extract::Path,
    http::{header::ACCEPT_LANGUAGE, HeaderMap, StatusCode},
    response::{Html, Redirect},
};
use tracing::debug;

/// `/` has no content of its own; send the browser to its best locale.
pub async fn root(headers: HeaderMap) -> Redirect {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = Locale::negotiate(accept_language);

    debug!(%locale, "redirecting to negotiated locale");

    Redirect::temporary(&format!("/{locale}"))
}

pub async fn home(Path(locale): Path<String>) -> Result<Html<String>, StatusCode> {
    let locale = locale_or_not_found(&locale)?;

    Ok(Html(format!(
        "<!doctype html><html lang=\"{locale}\"><body><h1>{}</h1></body></html>",
        translate(locale, "common.hello")
    )))
}
