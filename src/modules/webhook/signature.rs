//! Verification of the `Stripe-Signature` header.
//!
//! The header carries a unix timestamp and one or more `v1` signatures:
//! `t=1492774577,v1=5257a869…,v1=…`. A signature is the hex encoded
//! HMAC-SHA256 of `"{t}.{body}"` keyed with the endpoint's signing secret.

use axum::http::header::{HeaderName, HeaderValue};
use headers::{Error, Header};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::{iter, time::Duration};

pub static STRIPE_SIGNATURE: HeaderName = HeaderName::from_static("stripe-signature");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripeSignature {
    pub timestamp: i64,
    pub signatures: Vec<String>,
}

impl StripeSignature {
    pub fn parse(raw: &str) -> Option<Self> {
        let mut timestamp = None;
        let mut signatures = vec![];

        for part in raw.split(',') {
            let Some((key, value)) = part.trim().split_once('=') else {
                continue;
            };

            match key {
                "t" => timestamp = value.parse::<i64>().ok(),
                "v1" => signatures.push(value.to_string()),
                _ => (),
            }
        }

        match (timestamp, signatures.is_empty()) {
            (Some(timestamp), false) => Some(Self {
                timestamp,
                signatures,
            }),
            _ => None,
        }
    }
}

impl Header for StripeSignature {
    fn name() -> &'static HeaderName {
        &STRIPE_SIGNATURE
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        values
            .next()
            .and_then(|value| value.to_str().ok())
            .and_then(Self::parse)
            .ok_or_else(Error::invalid)
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        let mut raw = format!("t={}", self.timestamp);
        for signature in &self.signatures {
            raw.push_str(",v1=");
            raw.push_str(signature);
        }

        if let Ok(value) = HeaderValue::from_str(&raw) {
            values.extend(iter::once(value));
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid signing secret")]
    InvalidSecret,
    #[error("timestamp outside the tolerance zone")]
    TimestampOutsideTolerance,
    #[error("no signatures found matching the expected signature for payload")]
    NoMatchingSignature,
}

fn signed_payload_mac(
    secret: &str,
    timestamp: i64,
    body: &[u8],
) -> Result<Hmac<Sha256>, SignatureError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|_| SignatureError::InvalidSecret)?;

    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body);

    Ok(mac)
}

/// Hex signature for `body` at `timestamp`, as the provider would send it.
pub fn compute_signature(
    secret: &str,
    timestamp: i64,
    body: &[u8],
) -> Result<String, SignatureError> {
    signed_payload_mac(secret, timestamp, body).map(|mac| hex::encode(mac.finalize().into_bytes()))
}

/// Checks that at least one `v1` signature matches and that the timestamp
/// is no older than `tolerance`. A zero tolerance disables the age check.
pub fn verify(
    secret: &str,
    signature: &StripeSignature,
    body: &[u8],
    tolerance: Duration,
    now: i64,
) -> Result<(), SignatureError> {
    let mac = signed_payload_mac(secret, signature.timestamp, body)?;

    let matched = signature.signatures.iter().any(|candidate| {
        hex::decode(candidate)
            .map(|expected| mac.clone().verify_slice(&expected).is_ok())
            .unwrap_or(false)
    });

    if !matched {
        return Err(SignatureError::NoMatchingSignature);
    }

    let tolerance = i64::try_from(tolerance.as_secs()).unwrap_or(i64::MAX);
    if tolerance > 0 && now.saturating_sub(signature.timestamp) > tolerance {
        return Err(SignatureError::TimestampOutsideTolerance);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const BODY: &[u8] = br#"{"id":"evt_1","type":"payout.paid"}"#;
    const TOLERANCE: Duration = Duration::from_secs(300);

    fn signed(timestamp: i64) -> StripeSignature {
        StripeSignature {
            timestamp,
            signatures: vec![compute_signature(SECRET, timestamp, BODY).unwrap()],
        }
    }

    #[test]
    fn parses_header_with_multiple_signatures() {
        let header = StripeSignature::parse("t=1700000000,v1=abc,v0=legacy,v1=def").unwrap();

        assert_eq!(header.timestamp, 1700000000);
        assert_eq!(header.signatures, vec!["abc", "def"]);
    }

    #[test]
    fn rejects_header_without_timestamp_or_signature() {
        assert_eq!(StripeSignature::parse("v1=abc"), None);
        assert_eq!(StripeSignature::parse("t=1700000000"), None);
        assert_eq!(StripeSignature::parse("t=soon,v1=abc"), None);
        assert_eq!(StripeSignature::parse("garbage"), None);
    }

    #[test]
    fn accepts_valid_signature() {
        let now = 1_700_000_000;
        assert_eq!(verify(SECRET, &signed(now), BODY, TOLERANCE, now), Ok(()));
    }

    #[test]
    fn accepts_when_any_signature_matches() {
        let now = 1_700_000_000;
        let mut header = signed(now);
        header.signatures.insert(0, "deadbeef".to_string());
        header.signatures.insert(0, "not-hex".to_string());

        assert_eq!(verify(SECRET, &header, BODY, TOLERANCE, now), Ok(()));
    }

    #[test]
    fn rejects_tampered_body() {
        let now = 1_700_000_000;
        let tampered = br#"{"id":"evt_1","type":"payout.failed"}"#;

        assert_eq!(
            verify(SECRET, &signed(now), tampered, TOLERANCE, now),
            Err(SignatureError::NoMatchingSignature)
        );
    }

    #[test]
    fn rejects_wrong_secret() {
        let now = 1_700_000_000;

        assert_eq!(
            verify("whsec_other", &signed(now), BODY, TOLERANCE, now),
            Err(SignatureError::NoMatchingSignature)
        );
    }

    #[test]
    fn rejects_stale_timestamp() {
        let now = 1_700_000_000;

        assert_eq!(
            verify(SECRET, &signed(now - 301), BODY, TOLERANCE, now),
            Err(SignatureError::TimestampOutsideTolerance)
        );
        assert_eq!(
            verify(SECRET, &signed(now - 301), BODY, Duration::ZERO, now),
            Ok(())
        );
    }

    #[test]
    fn oversized_tolerance_saturates() {
        let now = 1_700_000_000;

        assert_eq!(
            verify(SECRET, &signed(0), BODY, Duration::from_secs(u64::MAX), now),
            Ok(())
        );
        assert_eq!(
            verify(SECRET, &signed(i64::MIN), BODY, Duration::from_secs(u64::MAX), now),
            Ok(())
        );
    }

    #[test]
    fn header_encodes_back_to_wire_format() {
        let header = StripeSignature {
            timestamp: 12,
            signatures: vec!["aa".to_string(), "bb".to_string()],
        };
        let mut values = vec![];
        header.encode(&mut values);

        assert_eq!(values, vec![HeaderValue::from_static("t=12,v1=aa,v1=bb")]);
    }
}
