pub mod auth;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("lingo")
        .about("Localized web front-end")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("LINGO_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = auth::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_ENV: [&str; 6] = [
        "LINGO_AUTH_INTEGRATION_ENABLED",
        "LINGO_API_BASE_URL",
        "LINGO_AUTH_LOGIN_PATH",
        "LINGO_AUTH_SIGNUP_PATH",
        "LINGO_AUTH_LOGOUT_PATH",
        "LINGO_AUTH_SOCIAL_PATH",
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "lingo");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Localized web front-end".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset(AUTH_ENV, || {
            temp_env::with_var_unset("LINGO_PORT", || {
                let matches = new().get_matches_from(vec!["lingo"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));

                let config = auth::parse(&matches);
                assert_eq!(config, crate::auth::AuthConfig::default());
            });
        });
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars_unset(AUTH_ENV, || {
            let matches = new().get_matches_from(vec![
                "lingo",
                "--port",
                "3000",
                "--auth-integration-enabled",
                "true",
                "--api-base-url",
                "https://api.example.com",
                "--auth-login-path",
                "/auth/login",
                "--auth-social-path",
                "/auth/social",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(3000));

            let config = auth::parse(&matches);
            assert!(config.is_integration_enabled());
            assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
            assert_eq!(config.login_path.as_deref(), Some("/auth/login"));
            assert_eq!(config.social_path.as_deref(), Some("/auth/social"));
            assert_eq!(config.signup_path, None);
            assert_eq!(config.logout_path, None);
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("LINGO_PORT", Some("443")),
                ("LINGO_AUTH_INTEGRATION_ENABLED", Some("TRUE")),
                ("LINGO_API_BASE_URL", Some("https://api.example.com")),
                ("LINGO_AUTH_SIGNUP_PATH", Some("/auth/signup")),
                ("LINGO_AUTH_LOGOUT_PATH", Some("/auth/logout")),
                ("LINGO_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["lingo"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let config = auth::parse(&matches);
                assert_eq!(config.integration_enabled.as_deref(), Some("TRUE"));
                assert!(!config.is_integration_enabled());
                assert_eq!(config.signup_path.as_deref(), Some("/auth/signup"));
                assert_eq!(config.logout_path.as_deref(), Some("/auth/logout"));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("LINGO_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["lingo"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("LINGO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["lingo".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
