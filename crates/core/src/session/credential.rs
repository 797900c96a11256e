//! Structural validation of the bearer credential.
//!
//! The credential is an opaque three-segment token whose middle
//! segment is a base64url JSON object. The client never verifies the
//! signature (that is the remote API's job); it only checks the shape
//! and the expiry so it does not send or keep dead tokens.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};

/// Why a credential was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// Not exactly three dot-separated segments.
    #[error("credential must have three segments, found {found}")]
    Malformed {
        /// Number of segments found.
        found: usize,
    },

    /// Middle segment is not valid base64 text.
    #[error("credential payload is not valid base64")]
    PayloadEncoding,

    /// Middle segment decoded but is not a JSON object.
    #[error("credential payload is not a JSON object")]
    PayloadJson,

    /// No numeric expiration claim.
    #[error("credential has no numeric expiration claim")]
    MissingExpiry,

    /// Expiration instant is in the past.
    #[error("credential is expired")]
    Expired,

    /// Neither a subject nor an email claim is present.
    #[error("credential has no subject or email claim")]
    MissingSubject,
}

// Tokens arrive with either base64 alphabet and with or without
// padding depending on the issuer; accept all four combinations.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(segment)
        .or_else(|_| STANDARD_LENIENT.decode(segment))
        .ok()
}

/// A claim counts as present only when it is non-null and, for
/// strings, non-empty.
fn claim_present(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn expiry_seconds(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        // Some issuers serialize exp as a numeric string.
        serde_json::Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

/// Validate the structure and freshness of a credential at `now_ms`
/// (milliseconds since the Unix epoch).
///
/// # Errors
///
/// Returns the first [`CredentialError`] encountered. Decoding and
/// parsing failures are errors, never panics.
pub fn validate_at(token: &str, now_ms: i64) -> Result<(), CredentialError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(CredentialError::Malformed {
            found: segments.len(),
        });
    }

    let payload = segments
        .get(1)
        .and_then(|s| decode_segment(s))
        .ok_or(CredentialError::PayloadEncoding)?;

    let claims: serde_json::Value =
        serde_json::from_slice(&payload).map_err(|_| CredentialError::PayloadJson)?;
    let claims = claims.as_object().ok_or(CredentialError::PayloadJson)?;

    let exp = claims
        .get("exp")
        .and_then(expiry_seconds)
        .ok_or(CredentialError::MissingExpiry)?;

    // exp is seconds; strict inequality, so exp == now is still valid.
    #[allow(clippy::cast_precision_loss)]
    if exp * 1000.0 < now_ms as f64 {
        return Err(CredentialError::Expired);
    }

    if !claim_present(claims.get("sub")) && !claim_present(claims.get("email")) {
        return Err(CredentialError::MissingSubject);
    }

    Ok(())
}

/// Validate against the current wall clock.
///
/// # Errors
///
/// See [`validate_at`].
pub fn validate(token: &str) -> Result<(), CredentialError> {
    validate_at(token, chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

    use super::*;

    /// Forge an unsigned token with the given JSON claims.
    pub(crate) fn forge(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.sig")
    }

    pub(crate) fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_valid_token() {
        let token = forge(&serde_json::json!({
            "sub": "user-1",
            "exp": future_exp(),
        }));
        assert!(validate(&token).is_ok());
    }

    #[test]
    fn test_email_claim_is_enough() {
        let token = forge(&serde_json::json!({
            "email": "ana@example.com",
            "exp": future_exp(),
        }));
        assert!(validate(&token).is_ok());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert_eq!(
            validate("only.two"),
            Err(CredentialError::Malformed { found: 2 })
        );
        assert_eq!(
            validate("a.b.c.d"),
            Err(CredentialError::Malformed { found: 4 })
        );
        assert_eq!(validate(""), Err(CredentialError::Malformed { found: 1 }));
    }

    #[test]
    fn test_payload_not_base64() {
        assert_eq!(
            validate("head.¡nope!.sig"),
            Err(CredentialError::PayloadEncoding)
        );
    }

    #[test]
    fn test_payload_not_json() {
        let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
        assert_eq!(
            validate(&format!("head.{payload}.sig")),
            Err(CredentialError::PayloadJson)
        );
    }

    #[test]
    fn test_expired_token() {
        let token = forge(&serde_json::json!({
            "sub": "user-1",
            "exp": chrono::Utc::now().timestamp() - 60,
        }));
        assert_eq!(validate(&token), Err(CredentialError::Expired));
    }

    #[test]
    fn test_exp_boundary_is_strict() {
        let token = forge(&serde_json::json!({"sub": "u", "exp": 100}));
        // exp * 1000 == now -> not yet expired.
        assert!(validate_at(&token, 100_000).is_ok());
        assert_eq!(validate_at(&token, 100_001), Err(CredentialError::Expired));
    }

    #[test]
    fn test_missing_expiry() {
        let token = forge(&serde_json::json!({"sub": "user-1"}));
        assert_eq!(validate(&token), Err(CredentialError::MissingExpiry));

        let token = forge(&serde_json::json!({"sub": "user-1", "exp": "soon"}));
        assert_eq!(validate(&token), Err(CredentialError::MissingExpiry));
    }

    #[test]
    fn test_numeric_string_expiry() {
        let token = forge(&serde_json::json!({
            "sub": "user-1",
            "exp": future_exp().to_string(),
        }));
        assert!(validate(&token).is_ok());
    }

    #[test]
    fn test_missing_subject_and_email() {
        let token = forge(&serde_json::json!({"exp": future_exp()}));
        assert_eq!(validate(&token), Err(CredentialError::MissingSubject));

        let token = forge(&serde_json::json!({
            "exp": future_exp(),
            "sub": "",
            "email": serde_json::Value::Null,
        }));
        assert_eq!(validate(&token), Err(CredentialError::MissingSubject));
    }

    #[test]
    fn test_standard_alphabet_payload() {
        // Payload encoded with +/ and padding instead of base64url.
        let payload = STANDARD.encode(
            serde_json::json!({"sub": "u>u?", "exp": future_exp()})
                .to_string()
                .as_bytes(),
        );
        let token = format!("head.{payload}.sig");
        assert!(validate(&token).is_ok());
    }
}
