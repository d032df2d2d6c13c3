// Authorization URL builder.
//
// Builds the redirect that sends the user agent to the UCP. The parameter
// set is fixed: the UCP supports no scoped grants, so `scope` is always
// sent empty, and `response_type` is always `code`.

use url::Url;

use crate::error::{GtawError, Result};

/// Build the authorization redirect URL.
///
/// `state` is attached verbatim; generating and persisting it is the
/// caller's job (see [`crate::state::PendingState`]).
pub fn create_authorization_url(
    authorization_endpoint: &str,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
) -> Result<Url> {
    let mut url = Url::parse(authorization_endpoint).map_err(|e| {
        GtawError::Config(format!(
            "invalid authorization endpoint {authorization_endpoint:?}: {e}"
        ))
    })?;

    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", client_id)
        .append_pair("state", state)
        .append_pair("scope", "")
        .append_pair("redirect_uri", redirect_uri);

    Ok(url)
}
