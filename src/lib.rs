//! # Lingo (localized web front-end)
//!
//! Every page is served under a locale prefix (`/en`, `/fr`) and its text comes
//! from the message catalog in [`i18n`]. The login form talks to an
//! authentication client ([`auth`]) whose endpoints are derived from
//! configuration; until a backend is wired, login, signup and logout report
//! `NOT_CONFIGURED` while social sign-in produces a redirect URL.
//!
//! ## Configuration
//!
//! | Variable | Meaning |
//! |---|---|
//! | `LINGO_AUTH_INTEGRATION_ENABLED` | must be exactly `true` to resolve any endpoint |
//! | `LINGO_API_BASE_URL` | base URL shared by all auth endpoints |
//! | `LINGO_AUTH_LOGIN_PATH` | login path |
//! | `LINGO_AUTH_SIGNUP_PATH` | signup path |
//! | `LINGO_AUTH_LOGOUT_PATH` | logout path |
//! | `LINGO_AUTH_SOCIAL_PATH` | social sign-in path |

pub mod auth;
pub mod cli;
pub mod i18n;
pub mod lingo;
