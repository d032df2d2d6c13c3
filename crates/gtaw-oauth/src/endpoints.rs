// Endpoint resolution — region selector to absolute endpoint URLs.
//
// Both regional UCP deployments expose an identical API surface; only the
// base URL differs. Explicit per-endpoint overrides in the options win
// verbatim over the region-derived defaults.

use serde::{Deserialize, Serialize};

use crate::config::GtawOptions;

/// Base URL of the English (international) deployment.
pub const EN_BASE_URL: &str = "https://ucp.gta.world";

/// Base URL of the French deployment.
pub const FR_BASE_URL: &str = "https://ucp-fr.gta.world";

const AUTHORIZE_PATH: &str = "/oauth/authorize";
const TOKEN_PATH: &str = "/oauth/token";
const USERINFO_PATH: &str = "/api/user";

/// Regional UCP deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GtawServer {
    #[default]
    En,
    Fr,
}

impl GtawServer {
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::En => EN_BASE_URL,
            Self::Fr => FR_BASE_URL,
        }
    }
}

/// The three absolute endpoint URLs for one login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtawEndpoints {
    pub authorization: String,
    pub token: String,
    pub userinfo: String,
}

impl GtawEndpoints {
    /// Resolve endpoints for the given options. Pure function of the config:
    /// region default unless an override is present. Overrides are taken
    /// verbatim — a malformed override surfaces later as a failure when the
    /// endpoint is actually used.
    pub fn resolve(options: &GtawOptions) -> Self {
        let base = options.server.base_url();
        Self {
            authorization: options
                .authorization_endpoint
                .clone()
                .unwrap_or_else(|| format!("{base}{AUTHORIZE_PATH}")),
            token: options
                .token_endpoint
                .clone()
                .unwrap_or_else(|| format!("{base}{TOKEN_PATH}")),
            userinfo: options
                .userinfo_endpoint
                .clone()
                .unwrap_or_else(|| format!("{base}{USERINFO_PATH}")),
        }
    }
}
