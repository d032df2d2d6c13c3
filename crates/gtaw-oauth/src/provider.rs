// GtawProvider — the surface host frameworks integrate against.
//
// Composes the flow steps (redirect, classification, exchange, profile
// fetch) over a validated configuration and resolved endpoints. The
// OAuthProvider trait is the small stable interface adapter shells consume;
// it deliberately excludes session/token persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use url::Url;

use crate::authorization_url::create_authorization_url;
use crate::callback::classify_callback;
use crate::code_exchange::exchange_code;
use crate::config::GtawOptions;
use crate::endpoints::{GtawEndpoints, GtawServer};
use crate::error::{GtawError, Result};
use crate::refresh::refresh_access_token;
use crate::tokens::GtawTokens;
use crate::user_info::{fetch_user_info, normalize_profile, GtawUserInfo};

/// Provider identifier used in host framework registries.
pub const PROVIDER_ID: &str = "gtaw";

/// Branding metadata for hosts that render a provider button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderStyle {
    pub logo: &'static str,
    pub brand_color: &'static str,
}

const EN_STYLE: ProviderStyle = ProviderStyle {
    logo: "https://gta.world/newsite/assets/images/gtaw/logo.png",
    brand_color: "#FFF",
};

const FR_STYLE: ProviderStyle = ProviderStyle {
    logo: "https://forum-fr.gta.world/uploads/monthly_2024_12/gtawfr.png.b027ade06b559d79733f2e9a31a4328b.png",
    brand_color: "#FFF",
};

/// The interface adapter shells call into. One login attempt walks it in
/// order: authorization URL, callback classification (via
/// [`classify_callback`]), code exchange, user info.
#[async_trait]
pub trait OAuthProvider: Send + Sync + std::fmt::Debug {
    /// Unique provider identifier.
    fn id(&self) -> &str;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Build the authorization redirect for a login attempt.
    fn create_authorization_url(&self, state: &str) -> Result<Url>;

    /// Exchange an authorization code for tokens.
    async fn exchange_code(&self, code: &str) -> Result<GtawTokens>;

    /// Fetch and normalize the user behind a token result.
    async fn get_user_info(&self, tokens: &GtawTokens) -> Result<GtawUserInfo>;

    /// Fetch and normalize the user behind an existing bearer token,
    /// skipping the exchange step.
    async fn user_from_token(&self, access_token: &str) -> Result<GtawUserInfo>;

    /// Exchange a refresh token for a new access token.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<GtawTokens>;
}

/// OAuth2 client for the GTA World UCP.
#[derive(Debug, Clone)]
pub struct GtawProvider {
    options: GtawOptions,
    endpoints: GtawEndpoints,
}

impl GtawProvider {
    /// Validate the options and resolve endpoints.
    pub fn new(options: GtawOptions) -> Result<Self> {
        options.validate()?;
        let endpoints = GtawEndpoints::resolve(&options);
        Ok(Self { options, endpoints })
    }

    pub fn options(&self) -> &GtawOptions {
        &self.options
    }

    pub fn endpoints(&self) -> &GtawEndpoints {
        &self.endpoints
    }

    /// Classify the `error` parameter of a callback, if any. Must be
    /// consulted before reading the authorization code; see
    /// [`crate::callback::authorization_code`] for the combined helper.
    pub fn classify_callback(&self, query: &HashMap<String, String>) -> Option<GtawError> {
        classify_callback(query)
    }

    /// Branding metadata for the configured region.
    pub fn style(&self) -> ProviderStyle {
        match self.options.server {
            GtawServer::En => EN_STYLE,
            GtawServer::Fr => FR_STYLE,
        }
    }
}

#[async_trait]
impl OAuthProvider for GtawProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn name(&self) -> &str {
        match self.options.server {
            GtawServer::En => "GTA World",
            GtawServer::Fr => "GTA World (FR)",
        }
    }

    fn create_authorization_url(&self, state: &str) -> Result<Url> {
        create_authorization_url(
            &self.endpoints.authorization,
            &self.options.client_id,
            &self.options.redirect_uri,
            state,
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<GtawTokens> {
        exchange_code(&self.options, &self.endpoints.token, code).await
    }

    async fn get_user_info(&self, tokens: &GtawTokens) -> Result<GtawUserInfo> {
        self.user_from_token(&tokens.access_token).await
    }

    async fn user_from_token(&self, access_token: &str) -> Result<GtawUserInfo> {
        let user = fetch_user_info(&self.endpoints.userinfo, access_token).await?;
        Ok(normalize_profile(user, self.options.email_policy))
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<GtawTokens> {
        refresh_access_token(&self.options, &self.endpoints.token, refresh_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(server: GtawServer) -> GtawProvider {
        GtawProvider::new(
            GtawOptions::new("client-1", "secret-1", "https://app.example/cb")
                .with_server(server),
        )
        .unwrap()
    }

    #[test]
    fn test_identity_and_region_name() {
        let en = provider(GtawServer::En);
        let fr = provider(GtawServer::Fr);
        assert_eq!(en.id(), "gtaw");
        assert_eq!(en.name(), "GTA World");
        assert_eq!(fr.name(), "GTA World (FR)");
    }

    #[test]
    fn test_construction_rejects_invalid_options() {
        let result = GtawProvider::new(GtawOptions::new("", "secret", "https://app.example/cb"));
        assert!(matches!(result, Err(GtawError::Config(_))));
    }

    #[test]
    fn test_authorization_url_uses_resolved_endpoint() {
        let url = provider(GtawServer::Fr)
            .create_authorization_url("state-1")
            .unwrap();
        assert!(url.as_str().starts_with("https://ucp-fr.gta.world/oauth/authorize?"));
        assert!(url.as_str().contains("state=state-1"));
    }

    #[test]
    fn test_style_differs_per_region() {
        let en = provider(GtawServer::En).style();
        let fr = provider(GtawServer::Fr).style();
        assert_ne!(en.logo, fr.logo);
        assert_eq!(en.brand_color, "#FFF");
        assert_eq!(fr.brand_color, "#FFF");
    }
}
