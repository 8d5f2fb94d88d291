use crate::auth::{
    config::{
        ENV_API_BASE_URL, ENV_INTEGRATION_ENABLED, ENV_LOGIN_PATH, ENV_LOGOUT_PATH,
        ENV_SIGNUP_PATH, ENV_SOCIAL_PATH,
    },
    AuthConfig,
};
use clap::{Arg, ArgMatches, Command};

pub const ARG_AUTH_INTEGRATION_ENABLED: &str = "auth-integration-enabled";
pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_AUTH_LOGIN_PATH: &str = "auth-login-path";
pub const ARG_AUTH_SIGNUP_PATH: &str = "auth-signup-path";
pub const ARG_AUTH_LOGOUT_PATH: &str = "auth-logout-path";
pub const ARG_AUTH_SOCIAL_PATH: &str = "auth-social-path";

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_AUTH_INTEGRATION_ENABLED)
                .long(ARG_AUTH_INTEGRATION_ENABLED)
                .help("Enable the auth backend integration (only the literal \"true\" enables it)")
                .env(ENV_INTEGRATION_ENABLED),
        )
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Base URL shared by all auth endpoints, example: https://api.example.com")
                .env(ENV_API_BASE_URL),
        )
        .arg(
            Arg::new(ARG_AUTH_LOGIN_PATH)
                .long(ARG_AUTH_LOGIN_PATH)
                .help("Login path resolved against the API base URL")
                .env(ENV_LOGIN_PATH),
        )
        .arg(
            Arg::new(ARG_AUTH_SIGNUP_PATH)
                .long(ARG_AUTH_SIGNUP_PATH)
                .help("Signup path resolved against the API base URL")
                .env(ENV_SIGNUP_PATH),
        )
        .arg(
            Arg::new(ARG_AUTH_LOGOUT_PATH)
                .long(ARG_AUTH_LOGOUT_PATH)
                .help("Logout path resolved against the API base URL")
                .env(ENV_LOGOUT_PATH),
        )
        .arg(
            Arg::new(ARG_AUTH_SOCIAL_PATH)
                .long(ARG_AUTH_SOCIAL_PATH)
                .help("Social sign-in path resolved against the API base URL")
                .env(ENV_SOCIAL_PATH),
        )
}

/// Collect the auth configuration from matches. Values are kept verbatim so
/// the integration flag keeps its exact-literal semantics.
#[must_use]
pub fn parse(matches: &ArgMatches) -> AuthConfig {
    let get = |id: &str| matches.get_one::<String>(id).cloned();

    AuthConfig {
        integration_enabled: get(ARG_AUTH_INTEGRATION_ENABLED),
        api_base_url: get(ARG_API_BASE_URL),
        login_path: get(ARG_AUTH_LOGIN_PATH),
        signup_path: get(ARG_AUTH_SIGNUP_PATH),
        logout_path: get(ARG_AUTH_LOGOUT_PATH),
        social_path: get(ARG_AUTH_SOCIAL_PATH),
    }
}
