//! Endpoint resolution and the auth operations built on it.
//!
//! No backend is wired yet: login, signup and logout resolve their endpoint
//! and then report `NOT_CONFIGURED`, surfacing the resolved URL as the error
//! message for diagnostics. Social sign-in is the only operation that can
//! succeed, returning the redirect the browser should follow.

use super::{
    config::AuthConfig,
    types::{
        AuthError, AuthResult, LoginInput, Operation, SignupInput, SocialAuthProvider,
        SocialRedirect,
    },
};
use tracing::{debug, instrument};
use url::Url;

const PROVIDER_PARAM: &str = "provider";

/// Resolve the absolute endpoint for `operation` from `config`.
///
/// # Errors
/// `NOT_CONFIGURED` when the integration is disabled or the base URL or path is
/// missing; `UNKNOWN` when the configured values do not compose into a URL.
pub fn resolve_endpoint(config: &AuthConfig, operation: Operation) -> AuthResult<Url> {
    if !config.is_integration_enabled() {
        debug!(%operation, "auth integration disabled");
        return Err(AuthError::not_configured());
    }

    let (Some(base_url), Some(path)) = (config.base_url(), config.path_for(operation)) else {
        debug!(%operation, "auth endpoint not configured");
        return Err(AuthError::not_configured());
    };

    Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map_err(|err| {
            debug!(%operation, "failed to compose auth endpoint: {err}");
            AuthError::unknown()
        })
}

/// Set `provider` on the query string the way `URLSearchParams::set` does:
/// the first occurrence is replaced in place, later ones are dropped, and it
/// is appended when absent.
fn set_provider(url: &mut Url, provider: SocialAuthProvider) {
    let mut replaced = false;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(key, value)| {
            if key != PROVIDER_PARAM {
                return Some((key.into_owned(), value.into_owned()));
            }
            if replaced {
                return None;
            }
            replaced = true;
            Some((key.into_owned(), provider.as_str().to_string()))
        })
        .collect();

    let mut query = url.query_pairs_mut();
    query.clear().extend_pairs(pairs);
    if !replaced {
        query.append_pair(PROVIDER_PARAM, provider.as_str());
    }
}

/// Auth operations over a fixed configuration snapshot.
#[derive(Clone, Debug, Default)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    #[must_use]
    pub const fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AuthConfig::from_env())
    }

    #[must_use]
    pub const fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve the endpoint and report it as not yet wired.
    fn pending_backend(&self, operation: Operation) -> AuthResult<()> {
        let endpoint = resolve_endpoint(&self.config, operation)?;
        Err(AuthError::not_configured().with_message(endpoint.as_str()))
    }

    /// # Errors
    /// Always; see the module docs.
    #[instrument(skip_all)]
    pub async fn login(&self, _input: &LoginInput) -> AuthResult<()> {
        self.pending_backend(Operation::Login)
    }

    /// # Errors
    /// Always; see the module docs.
    #[instrument(skip_all)]
    pub async fn signup(&self, _input: &SignupInput) -> AuthResult<()> {
        self.pending_backend(Operation::Signup)
    }

    /// # Errors
    /// Always; see the module docs.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> AuthResult<()> {
        self.pending_backend(Operation::Logout)
    }

    /// Build the social sign-in redirect for `provider`.
    ///
    /// # Errors
    /// Propagates the resolver failure unchanged.
    #[instrument(skip(self))]
    pub async fn start_social_auth(
        &self,
        provider: SocialAuthProvider,
    ) -> AuthResult<SocialRedirect> {
        let mut url = resolve_endpoint(&self.config, Operation::Social)?;
        set_provider(&mut url, provider);

        Ok(SocialRedirect {
            redirect_url: url.into(),
        })
    }
}
