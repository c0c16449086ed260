//! Access token inspection
//!
//! Reads the expiration claim out of a JWT-shaped access token without
//! verifying its signature. The service is the authority on validity; the
//! client only needs to know when to ask for a new token.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Decoded access token claims
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claims {
    /// Instant the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// A token expiring exactly at `now` is already expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Reasons an access token could not be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),

    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not a claims object: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("expiration {0} is out of range")]
    ExpirationOutOfRange(f64),
}

/// `exp` is a NumericDate and may carry a fractional part
#[derive(Deserialize)]
struct RawClaims {
    exp: f64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn instant_from_numeric_date(exp: f64) -> Result<DateTime<Utc>, DecodeError> {
    let secs = exp.floor();
    if !exp.is_finite() || secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
        return Err(DecodeError::ExpirationOutOfRange(exp));
    }

    let nanos = ((exp - secs) * 1e9) as u32;
    DateTime::from_timestamp(secs as i64, nanos).ok_or(DecodeError::ExpirationOutOfRange(exp))
}

/// Decode the claims of an access token.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;
    let expires_at = instant_from_numeric_date(raw.exp)?;

    Ok(Claims { expires_at })
}
