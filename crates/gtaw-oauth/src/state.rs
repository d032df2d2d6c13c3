// CSRF state tokens.
//
// One state token per login attempt, generated here and persisted by the
// host (typically a short-lived cookie). Verification consumes the stored
// value exactly once; a replayed or cross-attempt callback fails.

use rand::Rng;

/// Character set: a-z, A-Z, 0-9, -, _
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

const STATE_LENGTH: usize = 32;

/// Generate a random state string of the specified length.
pub fn generate_random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate an opaque CSRF state token for one login attempt.
pub fn generate_state() -> String {
    generate_random_string(STATE_LENGTH)
}

/// A CSRF state token awaiting its callback.
///
/// Issued before the redirect; the host round-trips [`secret`](Self::secret)
/// through the provider and calls [`verify`](Self::verify) on callback.
/// The first verification consumes the token, so a second callback against
/// the same attempt always fails, matching read-once-and-invalidate
/// semantics.
#[derive(Debug)]
pub struct PendingState {
    secret: String,
    consumed: bool,
}

impl PendingState {
    /// Issue a fresh state token.
    pub fn issue() -> Self {
        Self {
            secret: generate_state(),
            consumed: false,
        }
    }

    /// Rehydrate a state token the host persisted (e.g. read back from a
    /// cookie) so it can be verified.
    pub fn from_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            consumed: false,
        }
    }

    /// The opaque token to attach to the authorization redirect.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Check the state returned on the callback against this attempt's
    /// token. Consumes the token: any later call returns `false`.
    pub fn verify(&mut self, received: &str) -> bool {
        if self.consumed {
            return false;
        }
        self.consumed = true;
        self.secret == received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_length() {
        assert_eq!(generate_state().len(), STATE_LENGTH);
        assert_eq!(generate_random_string(64).len(), 64);
    }

    #[test]
    fn test_valid_characters() {
        let s = generate_random_string(1000);
        for c in s.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '-' || c == '_',
                "Invalid character: {c}"
            );
        }
    }

    #[test]
    fn test_uniqueness() {
        assert_ne!(generate_state(), generate_state());
    }

    #[test]
    fn test_verify_consumes() {
        let mut state = PendingState::issue();
        let secret = state.secret().to_string();
        assert!(state.verify(&secret));
        // Consumed: even the correct value no longer verifies.
        assert!(!state.verify(&secret));
    }

    #[test]
    fn test_mismatch_still_consumes() {
        let mut state = PendingState::issue();
        let secret = state.secret().to_string();
        assert!(!state.verify("not-the-token"));
        assert!(!state.verify(&secret));
    }

    #[test]
    fn test_concurrent_attempts_are_isolated() {
        let mut alice = PendingState::issue();
        let mut bob = PendingState::issue();
        let alice_secret = alice.secret().to_string();
        let bob_secret = bob.secret().to_string();

        // One attempt's callback never validates against the other's state.
        assert!(!alice.verify(&bob_secret));
        assert!(bob.verify(&bob_secret));
        // Alice's token was consumed by the failed check above.
        assert!(!alice.verify(&alice_secret));
    }

    #[test]
    fn test_from_secret_round_trip() {
        let mut state = PendingState::from_secret("cookie-value");
        assert_eq!(state.secret(), "cookie-value");
        assert!(state.verify("cookie-value"));
    }
}
