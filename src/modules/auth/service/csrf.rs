use axum::http::Method;

use crate::utils::token;

pub const CSRF_HEADER: &str = "x-csrf-token";

pub fn is_state_changing(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Compares the submitted token against the session's token in constant time.
pub fn verify(expected: &str, provided: Option<&str>) -> bool {
    match provided {
        Some(provided) => token::constant_time_eq(expected.as_bytes(), provided.as_bytes()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mutating_methods_need_a_token() {
        assert!(is_state_changing(&Method::POST));
        assert!(is_state_changing(&Method::PUT));
        assert!(is_state_changing(&Method::PATCH));
        assert!(is_state_changing(&Method::DELETE));
        assert!(!is_state_changing(&Method::GET));
        assert!(!is_state_changing(&Method::HEAD));
    }

    #[test]
    fn rejects_missing_or_different_tokens() {
        let expected = "Qm9wWn1c8Xv2Lk3Jh4Gf5Ds6Ap7Oi8Uy";
        assert!(verify(expected, Some(expected)));
        assert!(!verify(expected, None));
        assert!(!verify(expected, Some("")));
        assert!(!verify(expected, Some("Qm9wWn1c8Xv2Lk3Jh4Gf5Ds6Ap7Oi8Uz")));
        assert!(!verify(expected, Some(&expected[..31])));
    }
}
