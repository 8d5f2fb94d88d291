//! Headless login form: tracks pending state, maps auth failures to localized
//! text and decides when the browser has to navigate away. Raw error codes and
//! messages never reach the user; only the two catalog messages do.

use super::{
    service::AuthService,
    types::{AuthError, AuthErrorCode, AuthResult, LoginInput, SocialAuthProvider, SocialRedirect},
};
use crate::i18n::{translate, Locale};
use secrecy::SecretString;
use serde::Serialize;
use tracing::debug;

const KEY_NOT_CONFIGURED: &str = "auth.errors.notConfigured";
const KEY_GENERIC: &str = "auth.errors.generic";

/// Localized text for an auth failure. Only `NOT_CONFIGURED` gets its own message.
#[must_use]
pub fn error_message(locale: Locale, error: &AuthError) -> &'static str {
    match error.code {
        AuthErrorCode::NotConfigured => translate(locale, KEY_NOT_CONFIGURED),
        AuthErrorCode::Network | AuthErrorCode::Unknown => translate(locale, KEY_GENERIC),
    }
}

#[must_use]
pub fn signup_href(locale: Locale) -> String {
    format!("/{locale}/signup")
}

/// What the page should do once an action settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Stay,
    /// Full browser navigation, not a client-side route change.
    Navigate(String),
}

#[derive(Debug)]
pub struct LoginForm {
    locale: Locale,
    pub email: String,
    password: SecretString,
    is_submitting: bool,
    social_submitting: Option<SocialAuthProvider>,
    error: Option<String>,
}

impl LoginForm {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            email: String::new(),
            password: SecretString::default(),
            is_submitting: false,
            social_submitting: None,
            error: None,
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = SecretString::from(password.into());
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    #[must_use]
    pub const fn social_submitting(&self) -> Option<SocialAuthProvider> {
        self.social_submitting
    }

    #[must_use]
    pub const fn submit_disabled(&self) -> bool {
        self.is_submitting
    }

    #[must_use]
    pub const fn social_disabled(&self) -> bool {
        self.is_submitting || self.social_submitting.is_some()
    }

    /// Enter the submitting state and hand back the credentials to send.
    /// Returns `None` while the submit control is disabled.
    pub fn begin_submit(&mut self) -> Option<LoginInput> {
        if self.submit_disabled() {
            return None;
        }
        self.error = None;
        self.is_submitting = true;

        Some(LoginInput {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: &AuthResult<()>) -> FormOutcome {
        if let Err(err) = result {
            debug!(code = %err.code, "login failed");
            self.error = Some(error_message(self.locale, err).to_string());
        }
        self.is_submitting = false;
        FormOutcome::Stay
    }

    /// Enter the pending state for `provider`.
    /// Returns `false` while the social controls are disabled.
    pub fn begin_social(&mut self, provider: SocialAuthProvider) -> bool {
        if self.social_disabled() {
            return false;
        }
        self.error = None;
        self.social_submitting = Some(provider);
        true
    }

    pub fn finish_social(&mut self, result: AuthResult<SocialRedirect>) -> FormOutcome {
        self.social_submitting = None;
        match result {
            Ok(redirect) => FormOutcome::Navigate(redirect.redirect_url),
            Err(err) => {
                debug!(code = %err.code, "social auth failed");
                self.error = Some(error_message(self.locale, &err).to_string());
                FormOutcome::Stay
            }
        }
    }

    /// Submit the credentials through `service`.
    pub async fn submit(&mut self, service: &AuthService) -> FormOutcome {
        let Some(input) = self.begin_submit() else {
            return FormOutcome::Stay;
        };
        let result = service.login(&input).await;
        self.finish_submit(&result)
    }

    /// Start social sign-in through `service`.
    pub async fn start_social(
        &mut self,
        service: &AuthService,
        provider: SocialAuthProvider,
    ) -> FormOutcome {
        if !self.begin_social(provider) {
            return FormOutcome::Stay;
        }
        let result = service.start_social_auth(provider).await;
        self.finish_social(result)
    }

    #[must_use]
    pub fn view(&self) -> LoginView {
        let t = |key: &'static str| translate(self.locale, key);
        let submit_key = if self.is_submitting {
            "auth.actions.submitting"
        } else {
            "auth.actions.submit"
        };

        LoginView {
            locale: self.locale.as_str(),
            title: t("auth.login.title"),
            email_label: t("auth.form.email"),
            password_label: t("auth.form.password"),
            submit_label: t(submit_key),
            submit_disabled: self.submit_disabled(),
            social_or: t("auth.social.or"),
            social: SocialAuthProvider::ALL
                .into_iter()
                .map(|provider| SocialButton {
                    provider,
                    label: t(match provider {
                        SocialAuthProvider::Google => "auth.social.google",
                        SocialAuthProvider::Facebook => "auth.social.facebook",
                    }),
                    href: format!("/{}/auth/social/{provider}", self.locale),
                    disabled: self.social_disabled(),
                })
                .collect(),
            signup: Link {
                href: signup_href(self.locale),
                label: t("auth.links.toSignup"),
            },
            error: self.error.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub locale: &'static str,
    pub title: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub social_or: &'static str,
    pub social: Vec<SocialButton>,
    pub signup: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialButton {
    pub provider: SocialAuthProvider,
    pub label: &'static str,
    pub href: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: String,
    pub label: &'static str,
}
