// Provider configuration.
//
// Every recognized option is an explicit field; unknown keys are rejected at
// deserialization time instead of being forwarded to the host framework.
// The struct is constructed once at application start and read-only after.

use serde::{Deserialize, Serialize};

use crate::endpoints::GtawServer;
use crate::error::{GtawError, Result};

/// Configuration for the GTA World provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GtawOptions {
    /// OAuth client ID issued by the UCP.
    pub client_id: String,

    /// OAuth client secret. Sent in the token request POST body
    /// (`client_secret_post`).
    pub client_secret: String,

    /// Callback URL registered with the UCP; sent as `redirect_uri`.
    pub redirect_uri: String,

    /// Regional deployment. Defaults to `en`.
    #[serde(default)]
    pub server: GtawServer,

    /// Custom authorization endpoint, overriding the region default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,

    /// Custom token endpoint, overriding the region default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,

    /// Custom user-info endpoint, overriding the region default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,

    /// How to populate the normalized user's email field. See [`EmailPolicy`].
    #[serde(default)]
    pub email_policy: EmailPolicy,
}

/// Email handling for the normalized user record.
///
/// The UCP never exposes an email address, verified or otherwise.
/// `email_verified` is `false` under both policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmailPolicy {
    /// Canonical behavior: `email` is `None`.
    #[default]
    Omit,

    /// Synthesize `fakeemail+<id>@gta.world`. Strictly a workaround for host
    /// frameworks with a non-null email constraint; the placeholder is
    /// detectable via [`crate::user_info::is_synthetic_email`].
    SyntheticPlaceholder,
}

impl GtawOptions {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            server: GtawServer::default(),
            authorization_endpoint: None,
            token_endpoint: None,
            userinfo_endpoint: None,
            email_policy: EmailPolicy::default(),
        }
    }

    pub fn with_server(mut self, server: GtawServer) -> Self {
        self.server = server;
        self
    }

    pub fn with_authorization_endpoint(mut self, url: impl Into<String>) -> Self {
        self.authorization_endpoint = Some(url.into());
        self
    }

    pub fn with_token_endpoint(mut self, url: impl Into<String>) -> Self {
        self.token_endpoint = Some(url.into());
        self
    }

    pub fn with_userinfo_endpoint(mut self, url: impl Into<String>) -> Self {
        self.userinfo_endpoint = Some(url.into());
        self
    }

    pub fn with_email_policy(mut self, policy: EmailPolicy) -> Self {
        self.email_policy = policy;
        self
    }

    /// Reject configurations that cannot possibly complete a login.
    /// Endpoint overrides are deliberately not validated here.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(GtawError::Config("clientId must not be empty".into()));
        }
        if self.client_secret.is_empty() {
            return Err(GtawError::Config("clientSecret must not be empty".into()));
        }
        if self.redirect_uri.is_empty() {
            return Err(GtawError::Config("redirectUri must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let opts = GtawOptions::new("id", "secret", "https://app.example/cb");
        assert_eq!(opts.server, GtawServer::En);
        assert_eq!(opts.email_policy, EmailPolicy::Omit);
        assert!(opts.token_endpoint.is_none());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        let opts = GtawOptions::new("", "secret", "https://app.example/cb");
        assert!(matches!(opts.validate(), Err(GtawError::Config(_))));

        let opts = GtawOptions::new("id", "", "https://app.example/cb");
        assert!(matches!(opts.validate(), Err(GtawError::Config(_))));

        let opts = GtawOptions::new("id", "secret", "");
        assert!(matches!(opts.validate(), Err(GtawError::Config(_))));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let opts: GtawOptions = serde_json::from_value(serde_json::json!({
            "clientId": "id",
            "clientSecret": "secret",
            "redirectUri": "https://app.example/cb",
            "server": "fr",
            "emailPolicy": "syntheticPlaceholder"
        }))
        .unwrap();
        assert_eq!(opts.server, GtawServer::Fr);
        assert_eq!(opts.email_policy, EmailPolicy::SyntheticPlaceholder);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<GtawOptions, _> =
            serde_json::from_value(serde_json::json!({
                "clientId": "id",
                "clientSecret": "secret",
                "redirectUri": "https://app.example/cb",
                "responseMode": "query"
            }));
        assert!(result.is_err());
    }
}
