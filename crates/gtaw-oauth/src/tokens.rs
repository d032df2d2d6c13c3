// Token response parsing.
//
// GtawTokens: the result of a code exchange or refresh. The UCP token
// endpoint always sends `access_token` and `token_type`; everything else is
// optional. The raw body is preserved for downstream consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GtawError, Result};

/// Tokens issued by the UCP token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtawTokens {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Raw token response — preserves provider-specific fields.
    pub raw: serde_json::Value,
}

/// Raw token response from the provider (snake_case wire format).
#[derive(Debug, Deserialize)]
struct RawTokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
}

impl GtawTokens {
    /// Parse a raw token endpoint body.
    ///
    /// A body missing `access_token` or `token_type` is malformed: the
    /// exchange cannot proceed without them.
    pub fn from_raw(data: &serde_json::Value) -> Result<Self> {
        let raw: RawTokenResponse = serde_json::from_value(data.clone())
            .map_err(|e| GtawError::MalformedResponse(format!("token response: {e}")))?;

        let access_token = raw.access_token.filter(|t| !t.is_empty()).ok_or_else(|| {
            GtawError::MalformedResponse("token response missing access_token".into())
        })?;
        let token_type = raw.token_type.filter(|t| !t.is_empty()).ok_or_else(|| {
            GtawError::MalformedResponse("token response missing token_type".into())
        })?;

        let access_token_expires_at = raw
            .expires_in
            .map(|secs| Utc::now() + chrono::Duration::seconds(secs));

        Ok(Self {
            access_token,
            token_type,
            access_token_expires_at,
            refresh_token: raw.refresh_token,
            raw: data.clone(),
        })
    }
}
