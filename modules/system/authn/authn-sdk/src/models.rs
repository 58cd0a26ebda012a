//! Domain models for authentication.

use std::collections::BTreeSet;
use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity/secret pair supplied by the caller.
///
/// Both fields may be absent, which is how null-like input from a decoded
/// payload is represented. Providers treat an absent field as non-matching.
/// The secret is wrapped in `SecretString` so `Debug` redacts it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthenticationRequest {
    identity: Option<String>,
    #[serde(deserialize_with = "deserialize_secret")]
    secret: Option<SecretString>,
}

impl AuthenticationRequest {
    #[must_use]
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            secret: Some(SecretString::from(secret.into())),
        }
    }

    /// Build a request where either field may be missing.
    #[must_use]
    pub fn from_parts(identity: Option<String>, secret: Option<String>) -> Self {
        Self {
            identity,
            secret: secret.map(SecretString::from),
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    #[must_use]
    pub fn secret(&self) -> Option<&SecretString> {
        self.secret.as_ref()
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|s| s.map(SecretString::from))
}

/// An authenticated principal and the authorities granted to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    username: String,
    authorities: BTreeSet<String>,
}

impl UserDetails {
    /// Principal with no authorities.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            authorities: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_authorities<I, S>(mut self, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorities = authorities.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn authorities(&self) -> &BTreeSet<String> {
        &self.authorities
    }
}

/// Why an authentication attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationFailureReason {
    #[default]
    CredentialsDoNotMatch,
    UserNotFound,
    UserDisabled,
    AccountExpired,
    AccountLocked,
    PasswordExpired,
    Unknown,
}

impl AuthenticationFailureReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CredentialsDoNotMatch => "credentials do not match",
            Self::UserNotFound => "user not found",
            Self::UserDisabled => "user disabled",
            Self::AccountExpired => "account expired",
            Self::AccountLocked => "account locked",
            Self::PasswordExpired => "password expired",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AuthenticationFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected authentication attempt.
///
/// This is a normal result value, not a fault: providers return it inside
/// `Ok(AuthenticationResponse::Failure(..))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[error("authentication failed: {reason}")]
pub struct AuthenticationFailed {
    reason: AuthenticationFailureReason,
}

impl AuthenticationFailed {
    #[must_use]
    pub fn new(reason: AuthenticationFailureReason) -> Self {
        Self { reason }
    }

    #[must_use]
    pub fn reason(&self) -> AuthenticationFailureReason {
        self.reason
    }
}

/// Outcome of a single authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthenticationResponse {
    Success(UserDetails),
    Failure(AuthenticationFailed),
}

impl AuthenticationResponse {
    /// Failure with the default (credentials do not match) reason.
    #[must_use]
    pub fn failed() -> Self {
        Self::Failure(AuthenticationFailed::default())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn user_details(&self) -> Option<&UserDetails> {
        match self {
            Self::Success(user) => Some(user),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&AuthenticationFailed> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failed) => Some(failed),
        }
    }

    /// Convert into a `Result`, for callers that want `?` on rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthenticationFailed`] value when the attempt was rejected.
    pub fn into_result(self) -> Result<UserDetails, AuthenticationFailed> {
        match self {
            Self::Success(user) => Ok(user),
            Self::Failure(failed) => Err(failed),
        }
    }
}

impl From<UserDetails> for AuthenticationResponse {
    fn from(user: UserDetails) -> Self {
        Self::Success(user)
    }
}

impl From<AuthenticationFailed> for AuthenticationResponse {
    fn from(failed: AuthenticationFailed) -> Self {
        Self::Failure(failed)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_debug_redacts_secret() {
        let request = AuthenticationRequest::new("user", "hunter2");
        let rendered = format!("{request:?}");

        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn request_deserializes_missing_and_null_fields_as_absent() {
        let request: AuthenticationRequest =
            serde_json::from_value(json!({ "identity": null })).unwrap();

        assert!(request.identity().is_none());
        assert!(request.secret().is_none());
    }

    #[test]
    fn request_deserializes_secret() {
        let request: AuthenticationRequest =
            serde_json::from_value(json!({ "identity": "user", "secret": "password" })).unwrap();

        assert_eq!(request.identity(), Some("user"));
        assert_eq!(
            request.secret().map(ExposeSecret::expose_secret),
            Some("password")
        );
    }

    #[test]
    fn request_rejects_unknown_fields() {
        let result: Result<AuthenticationRequest, _> =
            serde_json::from_value(json!({ "identity": "user", "password": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn success_serializes_with_status_tag() {
        let response = AuthenticationResponse::from(
            UserDetails::new("user").with_authorities(["ROLE_B", "ROLE_A"]),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "success",
                "username": "user",
                "authorities": ["ROLE_A", "ROLE_B"],
            })
        );
    }

    #[test]
    fn failure_serializes_reason() {
        assert_eq!(
            serde_json::to_value(AuthenticationResponse::failed()).unwrap(),
            json!({ "status": "failure", "reason": "credentials_do_not_match" })
        );
    }

    #[test]
    fn failure_display_is_generic() {
        let failed = AuthenticationFailed::default();
        assert_eq!(
            failed.to_string(),
            "authentication failed: credentials do not match"
        );
    }

    #[test]
    fn into_result_splits_variants() {
        let ok = AuthenticationResponse::from(UserDetails::new("user")).into_result();
        assert_eq!(ok.unwrap().username(), "user");

        let err = AuthenticationResponse::failed().into_result();
        assert_eq!(
            err.unwrap_err().reason(),
            AuthenticationFailureReason::CredentialsDoNotMatch
        );
    }
}
