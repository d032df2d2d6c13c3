// Profile fetching and normalization.
//
// The UCP's `/api/user` endpoint returns `{ "user": { ... } }` with the
// account, its role, and its in-game characters. Normalization flattens
// that into the canonical user record handed to the host framework; role
// and character data pass through unmodified inside `raw` — this crate
// does not interpret confirmation or character semantics.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::EmailPolicy;
use crate::error::{GtawError, Result};

const USER_AGENT: &str = concat!("gtaw-oauth/", env!("CARGO_PKG_VERSION"));

const SYNTHETIC_EMAIL_PREFIX: &str = "fakeemail+";
const SYNTHETIC_EMAIL_DOMAIN: &str = "@gta.world";

/// UCP staff/role record attached to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GtawRole {
    pub id: i64,
    pub user_id: i64,
    pub role_id: Option<String>,
    pub server: i64,
}

/// In-game character owned by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GtawCharacter {
    pub id: i64,
    pub memberid: i64,
    pub firstname: String,
    pub lastname: String,
}

/// Raw account payload as the UCP sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GtawUser {
    pub id: i64,
    pub username: String,
    /// The wire value is `0`, `1`, or a boolean depending on UCP version.
    #[serde(deserialize_with = "confirmed_flag")]
    pub confirmed: bool,
    pub role: GtawRole,
    /// Ordered as the UCP returns them.
    #[serde(default)]
    pub character: Vec<GtawCharacter>,
}

/// Wire envelope of `/api/user`.
#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    user: GtawUser,
}

/// Normalized user record handed to the host framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtawUserInfo {
    /// Stringified numeric UCP account id. Stable and provider-assigned.
    pub id: String,
    /// UCP username.
    pub name: String,
    /// `None` unless [`EmailPolicy::SyntheticPlaceholder`] is configured.
    pub email: Option<String>,
    /// Always `false`: the UCP exposes no verified email address.
    pub email_verified: bool,
    /// Always `None`: the UCP has no avatar concept.
    pub image: Option<String>,
    /// Full raw payload for consumers that need role/character data.
    pub raw: GtawUser,
}

/// Accepts `0`/`1` integers as well as booleans.
fn confirmed_flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// The placeholder address synthesized for a given account id.
pub fn synthetic_email(id: &str) -> String {
    format!("{SYNTHETIC_EMAIL_PREFIX}{id}{SYNTHETIC_EMAIL_DOMAIN}")
}

/// Whether an address is one of this crate's synthetic placeholders, as
/// opposed to a real (never UCP-provided) address.
pub fn is_synthetic_email(email: &str) -> bool {
    email.starts_with(SYNTHETIC_EMAIL_PREFIX) && email.ends_with(SYNTHETIC_EMAIL_DOMAIN)
}

/// Normalize a raw UCP account into the canonical record.
pub fn normalize_profile(user: GtawUser, email_policy: EmailPolicy) -> GtawUserInfo {
    let id = user.id.to_string();
    let email = match email_policy {
        EmailPolicy::Omit => None,
        EmailPolicy::SyntheticPlaceholder => Some(synthetic_email(&id)),
    };

    GtawUserInfo {
        id,
        name: user.username.clone(),
        email,
        email_verified: false,
        image: None,
        raw: user,
    }
}

/// Fetch the raw account payload with a bearer token.
pub async fn fetch_user_info(userinfo_endpoint: &str, access_token: &str) -> Result<GtawUser> {
    let client = reqwest::Client::new();

    let response = client
        .get(userinfo_endpoint)
        .header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {access_token}"),
        )
        .header(reqwest::header::ACCEPT, "application/json")
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(GtawError::Network)?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            "user info endpoint returned non-success status"
        );
        return Err(GtawError::provider_status(status));
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| GtawError::MalformedResponse(format!("user info body: {e}")))?;

    parse_user_info(&data)
}

/// Parse the `{user: ...}` envelope out of a user-info body.
pub fn parse_user_info(data: &serde_json::Value) -> Result<GtawUser> {
    let envelope: UserInfoResponse = serde_json::from_value(data.clone())
        .map_err(|e| GtawError::MalformedResponse(format!("user info: {e}")))?;
    Ok(envelope.user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> serde_json::Value {
        serde_json::json!({
            "user": {
                "id": 42,
                "username": "Bob",
                "confirmed": 1,
                "role": { "id": 7, "user_id": 42, "role_id": "admin", "server": 1 },
                "character": [
                    { "id": 100, "memberid": 42, "firstname": "John", "lastname": "Doe" },
                    { "id": 101, "memberid": 42, "firstname": "Jane", "lastname": "Doe" }
                ]
            }
        })
    }

    #[test]
    fn test_parse_and_normalize() {
        let user = parse_user_info(&sample_payload()).unwrap();
        let info = normalize_profile(user, EmailPolicy::Omit);

        assert_eq!(info.id, "42");
        assert_eq!(info.name, "Bob");
        assert_eq!(info.email, None);
        assert!(!info.email_verified);
        assert_eq!(info.image, None);
        assert_eq!(info.raw.id, 42);
        assert!(info.raw.confirmed);
        assert_eq!(info.raw.character.len(), 2);
        // Character order preserved.
        assert_eq!(info.raw.character[0].firstname, "John");
        assert_eq!(info.raw.character[1].firstname, "Jane");
    }

    #[test]
    fn test_synthetic_placeholder_policy() {
        let user = parse_user_info(&sample_payload()).unwrap();
        let info = normalize_profile(user, EmailPolicy::SyntheticPlaceholder);

        assert_eq!(info.email.as_deref(), Some("fakeemail+42@gta.world"));
        // Synthetic, never verified.
        assert!(!info.email_verified);
        assert!(is_synthetic_email(info.email.as_deref().unwrap()));
        assert!(!is_synthetic_email("bob@gta.world"));
        assert!(!is_synthetic_email("fakeemail+42@example.com"));
    }

    #[test]
    fn test_confirmed_accepts_bool_and_int() {
        for (value, expected) in [
            (serde_json::json!(true), true),
            (serde_json::json!(false), false),
            (serde_json::json!(1), true),
            (serde_json::json!(0), false),
        ] {
            let mut payload = sample_payload();
            payload["user"]["confirmed"] = value;
            let user = parse_user_info(&payload).unwrap();
            assert_eq!(user.confirmed, expected);
        }
    }

    #[test]
    fn test_missing_user_key_is_malformed() {
        let body = serde_json::json!({ "id": 42, "username": "Bob" });
        assert!(matches!(
            parse_user_info(&body),
            Err(GtawError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_null_role_id() {
        let mut payload = sample_payload();
        payload["user"]["role"]["role_id"] = serde_json::Value::Null;
        let user = parse_user_info(&payload).unwrap();
        assert!(user.role.role_id.is_none());
    }

    #[test]
    fn test_missing_character_list_defaults_empty() {
        let mut payload = sample_payload();
        payload["user"]
            .as_object_mut()
            .unwrap()
            .remove("character");
        let user = parse_user_info(&payload).unwrap();
        assert!(user.character.is_empty());
    }
}
