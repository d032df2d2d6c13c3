// Authorization code exchange.
//
// Single POST to the token endpoint with the client credentials in the
// body (`client_secret_post` — the only method the UCP accepts). Never
// retried: authorization codes are single-use and expire quickly, so the
// caller must restart from the redirect for another attempt.

use crate::config::GtawOptions;
use crate::error::{GtawError, Result};
use crate::tokens::GtawTokens;

/// Exchange an authorization code for tokens.
pub async fn exchange_code(
    options: &GtawOptions,
    token_endpoint: &str,
    code: &str,
) -> Result<GtawTokens> {
    let form = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("client_id", options.client_id.as_str()),
        ("client_secret", options.client_secret.as_str()),
        ("redirect_uri", options.redirect_uri.as_str()),
    ];

    request_tokens(token_endpoint, &form).await
}

/// POST a form to the token endpoint and parse the token body. Shared by
/// the code exchange and the refresh grant.
pub(crate) async fn request_tokens(
    token_endpoint: &str,
    form: &[(&str, &str)],
) -> Result<GtawTokens> {
    let client = reqwest::Client::new();

    let response = client
        .post(token_endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(form)
        .send()
        .await
        .map_err(GtawError::Network)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            %body,
            "token endpoint returned non-success status"
        );
        return Err(GtawError::provider_status(status));
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| GtawError::MalformedResponse(format!("token response body: {e}")))?;

    GtawTokens::from_raw(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_http_failure_maps_to_provider_error() {
        let err = GtawError::provider_status(reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(err.provider_code(), Some("401"));
        assert_eq!(err.kind(), ErrorKind::Provider);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        let options = GtawOptions::new("id", "secret", "https://app.example/cb");
        // Reserved TLD: resolution fails without touching a real host.
        let result = exchange_code(&options, "https://token.invalid/oauth/token", "code").await;
        assert!(matches!(result, Err(GtawError::Network(_))));
    }
}
