#![doc = include_str!("../README.md")]

pub mod authorization_url;
pub mod callback;
pub mod code_exchange;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod provider;
pub mod refresh;
pub mod state;
pub mod tokens;
pub mod user_info;

// Re-exports
pub use authorization_url::create_authorization_url;
pub use callback::{authorization_code, classify_callback};
pub use code_exchange::exchange_code;
pub use config::{EmailPolicy, GtawOptions};
pub use endpoints::{GtawEndpoints, GtawServer, EN_BASE_URL, FR_BASE_URL};
pub use error::{ErrorKind, GtawError, Result};
pub use provider::{GtawProvider, OAuthProvider, ProviderStyle, PROVIDER_ID};
pub use refresh::refresh_access_token;
pub use state::{generate_state, PendingState};
pub use tokens::GtawTokens;
pub use user_info::{
    fetch_user_info, is_synthetic_email, normalize_profile, synthetic_email, GtawCharacter,
    GtawRole, GtawUser, GtawUserInfo,
};
