//! Locale routing and message lookup.
//!
//! Every user-facing page lives under a locale prefix (`/en/...`, `/fr/...`).
//! The set of locales is closed; anything else is a 404. Messages are looked
//! up by `namespace.key` and fall back to English, then to the key itself.

mod catalog;

pub use self::catalog::translate;

use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Fr,
}

/// Supported locales in routing order.
pub const LOCALES: [Locale; 2] = [Locale::En, Locale::Fr];

pub const DEFAULT_LOCALE: Locale = Locale::En;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Pick the first supported language from an `Accept-Language` header.
    ///
    /// Entries are taken in listed order; region subtags are ignored and
    /// `q=0` entries are skipped. Falls back to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn negotiate(accept_language: Option<&str>) -> Self {
        accept_language
            .into_iter()
            .flat_map(|header| header.split(','))
            .filter_map(|entry| {
                let mut parts = entry.split(';').map(str::trim);
                let tag = parts.next()?;
                let rejected = parts.any(|param| {
                    param
                        .strip_prefix("q=")
                        .and_then(|q| q.parse::<f32>().ok())
                        .is_some_and(|q| q <= 0.0)
                });
                if rejected {
                    return None;
                }
                let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
                primary.parse::<Self>().ok()
            })
            .next()
            .unwrap_or(DEFAULT_LOCALE)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match on the path segment; `EN` or `en-US` are not routes.
impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LOCALES
            .into_iter()
            .find(|locale| locale.as_str() == value)
            .ok_or_else(|| UnknownLocale(value.to_string()))
    }
}
