use crate::{
    auth::{AuthConfig, AuthService},
    lingo,
};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub auth: AuthConfig,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    lingo::new(args.port, AuthService::new(args.auth)).await
}

fn log_startup_args(args: &Args) {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "n/a".to_string());
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        (
            "auth_integration_enabled",
            args.auth.is_integration_enabled().to_string(),
        ),
        ("api_base_url", show(&args.auth.api_base_url)),
        ("auth_login_path", show(&args.auth.login_path)),
        ("auth_signup_path", show(&args.auth.signup_path)),
        ("auth_logout_path", show(&args.auth.logout_path)),
        ("auth_social_path", show(&args.auth.social_path)),
    ];

    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let lines: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{key:<width$} = {value}"))
        .collect();

    info!("Startup configuration:\n{}", lines.join("\n"));
}
