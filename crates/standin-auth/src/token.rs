//! Compact signed tokens: issue and validate.
//!
//! Wire format is the usual three-part `header.payload.signature` string,
//! base64url-encoded, signed with HMAC-SHA256 over the shared secret.
//! Expiry travels inside the payload as a unix-seconds `exp` claim and is
//! checked against the current time at validation.

use crate::base64url;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;

/// Process-wide default signing secret.
pub const DEFAULT_SECRET: &str = "carriage";

/// Default token lifetime when the caller does not pick an expiry.
pub const DEFAULT_TTL_SECONDS: i64 = 3600;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

type HmacSha256 = Hmac<Sha256>;

/// Errors from the signing path.
///
/// Validation never surfaces these: a token that fails to decode or
/// verify is simply invalid.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("payload must serialize to a JSON object or null")]
    NonObjectPayload,

    #[error("signing key was rejected")]
    Key,
}

/// Sign `payload` with `secret`, expiring [`DEFAULT_TTL_SECONDS`] from now.
///
/// Any serializable payload is accepted; no claim shape is enforced. The
/// `exp` claim is injected (and overrides a caller-supplied one).
pub fn issue<P: Serialize>(payload: &P, secret: &str) -> Result<String, TokenError> {
    issue_with_expiry(payload, Utc::now() + Duration::seconds(DEFAULT_TTL_SECONDS), secret)
}

/// Sign `payload` with an explicit expiry instant.
pub fn issue_with_expiry<P: Serialize>(
    payload: &P,
    expires_at: DateTime<Utc>,
    secret: &str,
) -> Result<String, TokenError> {
    let mut claims = match serde_json::to_value(payload)? {
        Value::Object(map) => map,
        Value::Null => serde_json::Map::new(),
        _ => return Err(TokenError::NonObjectPayload),
    };
    claims.insert("exp".to_string(), Value::from(expires_at.timestamp()));

    let header = base64url::encode(HEADER);
    let body = base64url::encode(&Value::Object(claims).to_string());
    let signature = sign(&format!("{header}.{body}"), secret).ok_or(TokenError::Key)?;
    Ok(format!("{header}.{body}.{signature}"))
}

/// Validate signature and expiry of `token` against `secret`.
///
/// This is a pure boolean gate: decode failure, signature mismatch,
/// missing `exp`, and expiry all answer `false`. Nothing propagates.
pub fn validate(token: &str, secret: &str) -> bool {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return false;
    }

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("{}.{}", parts[0], parts[1]).as_bytes());
    let Ok(signature) = base64url::decode(parts[2]) else {
        return false;
    };
    if mac.verify_slice(&signature).is_err() {
        return false;
    }

    let Ok(payload) = base64url::decode(parts[1]) else {
        return false;
    };
    let Ok(claims) = serde_json::from_slice::<Value>(&payload) else {
        return false;
    };
    let Some(exp) = claims.get("exp").and_then(Value::as_i64) else {
        return false;
    };
    Utc::now().timestamp() < exp
}

fn sign(material: &str, secret: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(material.as_bytes());
    Some(base64url::encode_bytes(&mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn issued_token_validates_against_its_secret() {
        let token = issue(&json!({"user": "dev"}), "s3cret").expect("should issue");
        assert!(validate(&token, "s3cret"));
    }

    #[test]
    fn issued_token_fails_against_another_secret() {
        let token = issue(&json!({"user": "dev"}), "s3cret").expect("should issue");
        assert!(!validate(&token, "other"));
        assert!(!validate(&token, DEFAULT_SECRET));
    }

    #[test]
    fn expired_token_fails_validation() {
        let token = issue_with_expiry(
            &json!({"user": "dev"}),
            Utc::now() - Duration::seconds(30),
            "s3cret",
        )
        .expect("should issue");
        assert!(!validate(&token, "s3cret"));
    }

    #[test]
    fn tampered_payload_fails_validation() {
        let token = issue(&json!({"user": "dev"}), "s3cret").expect("should issue");
        let parts: Vec<&str> = token.split('.').collect();
        let forged_body = base64url::encode(
            &json!({"user": "admin", "exp": Utc::now().timestamp() + 600}).to_string(),
        );
        let forged = format!("{}.{}.{}", parts[0], forged_body, parts[2]);
        assert!(!validate(&forged, "s3cret"));
    }

    #[test]
    fn malformed_tokens_fail_without_panicking() {
        assert!(!validate("", "s3cret"));
        assert!(!validate("only.two", "s3cret"));
        assert!(!validate("a.b.c.d", "s3cret"));
        assert!(!validate("??.!!.**", "s3cret"));
    }

    #[test]
    fn token_without_exp_claim_is_invalid() {
        // Hand-rolled token signed correctly but carrying no expiry.
        let header = base64url::encode(HEADER);
        let body = base64url::encode(&json!({"user": "dev"}).to_string());
        let signature = sign(&format!("{header}.{body}"), "s3cret").expect("should sign");
        let token = format!("{header}.{body}.{signature}");
        assert!(!validate(&token, "s3cret"));
    }

    #[test]
    fn null_payload_is_accepted() {
        let token = issue(&Value::Null, "s3cret").expect("should issue");
        assert!(validate(&token, "s3cret"));
    }

    #[test]
    fn scalar_payload_is_rejected_at_issue_time() {
        let result = issue(&42, "s3cret");
        assert!(matches!(result, Err(TokenError::NonObjectPayload)));
    }
}
