pub mod health;
pub use self::health::health;

pub mod locale;
pub use self::locale::{home, root};

pub mod auth;
pub use self::auth::{login, login_page, logout, signup, social};

// common functions for the handlers
use crate::i18n::Locale;
use axum::http::StatusCode;
use tracing::debug;

/// Parse the `{locale}` path segment; unsupported locales are not routes.
pub fn locale_or_not_found(segment: &str) -> Result<Locale, StatusCode> {
    segment.parse::<Locale>().map_err(|err| {
        debug!("{err}");
        StatusCode::NOT_FOUND
    })
}
