use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_LENGTH: usize = 48;
pub const CSRF_TOKEN_LENGTH: usize = 32;

pub fn generate(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Tokens handed to clients are only persisted as their SHA-256 digest.
pub fn digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    base16ct::lower::encode_string(&hasher.finalize())
}

/// Returns false immediately if lengths differ; content comparison does not
/// short-circuit.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_alphanumeric_tokens_of_requested_length() {
        let token = generate(CSRF_TOKEN_LENGTH);
        assert_eq!(token.len(), CSRF_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate(CSRF_TOKEN_LENGTH));
    }

    #[test]
    fn digest_is_stable_hex() {
        let a = digest("session-token");
        assert_eq!(a, digest("session-token"));
        assert_eq!(a.len(), 64);
        assert_ne!(a, digest("session-token2"));
    }

    #[test]
    fn constant_time_eq_matches_plain_equality() {
        assert!(constant_time_eq(b"abc123", b"abc123"));
        assert!(!constant_time_eq(b"abc123", b"abc124"));
        assert!(!constant_time_eq(b"abc123", b"abc12"));
        assert!(!constant_time_eq(b"", b"a"));
        assert!(constant_time_eq(b"", b""));
    }
}
