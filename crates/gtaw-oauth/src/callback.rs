// Callback classification.
//
// Inspects the query parameters of the provider's redirect back to the
// host. The `error` parameter must be consulted before reading `code`: a
// denied or errored redirect carries no usable code.

use std::collections::HashMap;

use crate::error::{GtawError, Result};

/// Literal the UCP sends when the end user declines the request.
const USER_DENIED: &str = "user_denied";

/// Classify the `error` parameter of a callback, if any.
///
/// Returns `None` when the redirect carries no error and the flow should
/// continue to the code exchange.
pub fn classify_callback(query: &HashMap<String, String>) -> Option<GtawError> {
    let error = query.get("error")?;
    if error.is_empty() {
        return None;
    }
    if error == USER_DENIED {
        return Some(GtawError::Denied);
    }
    Some(GtawError::Provider(error.clone()))
}

/// Extract the authorization code from a callback, classifying errors first.
///
/// A redirect with neither an error nor a code is malformed.
pub fn authorization_code(query: &HashMap<String, String>) -> Result<String> {
    if let Some(err) = classify_callback(query) {
        return Err(err);
    }
    match query.get("code") {
        Some(code) if !code.is_empty() => Ok(code.clone()),
        _ => Err(GtawError::MalformedResponse(
            "callback carried no authorization code".into(),
        )),
    }
}
