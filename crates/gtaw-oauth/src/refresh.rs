// Refresh token grant.
//
// Used for token-based API access outside the login flow. Refresh
// scheduling is the caller's concern; this is a single, unretried request.

use crate::code_exchange::request_tokens;
use crate::config::GtawOptions;
use crate::error::Result;
use crate::tokens::GtawTokens;

/// Exchange a refresh token for a new access token.
pub async fn refresh_access_token(
    options: &GtawOptions,
    token_endpoint: &str,
    refresh_token: &str,
) -> Result<GtawTokens> {
    let form = [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", options.client_id.as_str()),
        ("client_secret", options.client_secret.as_str()),
    ];

    request_tokens(token_endpoint, &form).await
}
