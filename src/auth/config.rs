//! Auth backend configuration. Values come from the process environment (or the
//! equivalent CLI flags) once at startup and are read-only afterwards. These are
//! public endpoint locations; do not store secrets here.

use super::types::Operation;
use std::env::var;

pub const ENV_INTEGRATION_ENABLED: &str = "LINGO_AUTH_INTEGRATION_ENABLED";
pub const ENV_API_BASE_URL: &str = "LINGO_API_BASE_URL";
pub const ENV_LOGIN_PATH: &str = "LINGO_AUTH_LOGIN_PATH";
pub const ENV_SIGNUP_PATH: &str = "LINGO_AUTH_SIGNUP_PATH";
pub const ENV_LOGOUT_PATH: &str = "LINGO_AUTH_LOGOUT_PATH";
pub const ENV_SOCIAL_PATH: &str = "LINGO_AUTH_SOCIAL_PATH";

/// The only value of the integration flag that enables endpoint resolution.
pub const INTEGRATION_ENABLED_VALUE: &str = "true";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub integration_enabled: Option<String>,
    pub api_base_url: Option<String>,
    pub login_path: Option<String>,
    pub signup_path: Option<String>,
    pub logout_path: Option<String>,
    pub social_path: Option<String>,
}

impl AuthConfig {
    /// Snapshot the auth settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            integration_enabled: var(ENV_INTEGRATION_ENABLED).ok(),
            api_base_url: var(ENV_API_BASE_URL).ok(),
            login_path: var(ENV_LOGIN_PATH).ok(),
            signup_path: var(ENV_SIGNUP_PATH).ok(),
            logout_path: var(ENV_LOGOUT_PATH).ok(),
            social_path: var(ENV_SOCIAL_PATH).ok(),
        }
    }

    /// Exact literal comparison; `"TRUE"`, `"1"` and friends stay disabled.
    #[must_use]
    pub fn is_integration_enabled(&self) -> bool {
        self.integration_enabled.as_deref() == Some(INTEGRATION_ENABLED_VALUE)
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        non_empty(self.api_base_url.as_deref())
    }

    #[must_use]
    pub fn path_for(&self, operation: Operation) -> Option<&str> {
        let path = match operation {
            Operation::Login => &self.login_path,
            Operation::Signup => &self.signup_path,
            Operation::Logout => &self.logout_path,
            Operation::Social => &self.social_path,
        };
        non_empty(path.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
