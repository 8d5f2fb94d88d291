//! Request, result and error types shared by the auth operations. Login and
//! signup inputs carry passwords, so they must never be logged.

use secrecy::SecretString;
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Logical auth operation, one per configured endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Signup,
    Logout,
    Social,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Logout => "logout",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity providers supported by the social sign-in redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialAuthProvider {
    Google,
    Facebook,
}

impl SocialAuthProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Facebook];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported social auth provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for SocialAuthProvider {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorCode {
    /// Integration disabled or required configuration missing.
    NotConfigured,
    /// Reserved for transport failures once a backend exists.
    Network,
    /// Configured values could not be composed into a URL.
    Unknown,
}

impl AuthErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::Network => "NETWORK",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthError {
    pub code: AuthErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthError {
    #[must_use]
    pub const fn new(code: AuthErrorCode) -> Self {
        Self {
            code,
            message: None,
        }
    }

    #[must_use]
    pub const fn not_configured() -> Self {
        Self::new(AuthErrorCode::NotConfigured)
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self::new(AuthErrorCode::Unknown)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

impl std::error::Error for AuthError {}

/// Outcome of every auth operation. Failures are values, never panics.
pub type AuthResult<T> = Result<T, AuthError>;

/// Wire envelope for an [`AuthResult`]:
/// `{"ok":true,"data":..}` or `{"ok":false,"error":{"code":..,"message"?:..}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse<T>(pub AuthResult<T>);

impl<T> AuthResponse<T> {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.0.is_ok()
    }
}

impl<T> From<AuthResult<T>> for AuthResponse<T> {
    fn from(result: AuthResult<T>) -> Self {
        Self(result)
    }
}

impl<T: Serialize> Serialize for AuthResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AuthResponse", 2)?;
        match &self.0 {
            Ok(data) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("data", data)?;
            }
            Err(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialRedirect {
    pub redirect_url: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: SecretString,
}

impl LoginInput {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignupInput {
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}
