//! Authentication client for the front-end.
//!
//! Endpoints are derived from configuration by [`resolve_endpoint`]; every
//! operation returns an [`AuthResult`] instead of panicking, so callers only
//! branch on success vs. [`AuthErrorCode`].
//!
//! | Code | Meaning |
//! |---|---|
//! | `NOT_CONFIGURED` | integration disabled, base URL or path missing, or no backend wired yet |
//! | `UNKNOWN` | configured values do not compose into a URL |
//! | `NETWORK` | reserved for transport failures |
//!
//! Passwords are carried as [`secrecy::SecretString`] and are never logged.

pub mod config;
pub mod form;
pub mod service;
pub mod types;

pub use self::config::AuthConfig;
pub use self::form::{error_message, FormOutcome, LoginForm};
pub use self::service::{resolve_endpoint, AuthService};
pub use self::types::{
    AuthError, AuthErrorCode, AuthResponse, AuthResult, LoginInput, Operation, SignupInput,
    SocialAuthProvider, SocialRedirect,
};
