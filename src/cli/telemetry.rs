use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Build the filter: the verbosity level is the default directive and
/// `RUST_LOG` can still override it per target.
fn env_filter(verbosity_level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?))
}

/// Initialize logging.
///
/// # Errors
///
/// Returns an error if a filter directive is invalid or a global subscriber
/// is already installed.
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let fmt_layer = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .pretty();

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(env_filter(verbosity_level)?);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_verbosity_as_default() {
        temp_env::with_var_unset("RUST_LOG", || {
            let filter = env_filter(Level::DEBUG).map(|f| f.to_string());
            assert!(filter.is_ok_and(|f| f.contains("debug") && f.contains("hyper=error")));
        });
    }

    #[test]
    fn test_env_filter_honors_rust_log() {
        temp_env::with_var("RUST_LOG", Some("lingo=trace"), || {
            let filter = env_filter(Level::ERROR).map(|f| f.to_string());
            assert!(filter.is_ok_and(|f| f.contains("lingo=trace")));
        });
    }
}
