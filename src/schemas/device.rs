//! Device authentication payload types
//!
//! The bridge and extension authenticate to the session manager with a
//! signed proof over a server-issued nonce. Verification itself is owned by
//! the session manager; these are the shared wire shapes, including the
//! typed rejection the server returns when a proof does not verify.

use serde::{Deserialize, Serialize};

/// Signed proof of device identity
///
/// The signature covers `{device_id}.{nonce}.{timestamp}` with the device's
/// private key; `public_key` lets the server verify without a lookup on
/// first contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceAuthProof {
    /// Stable device identifier
    pub device_id: String,

    /// Device public key, base64-encoded
    pub public_key: String,

    /// Server-issued nonce being answered
    pub nonce: String,

    /// Unix epoch time in milliseconds when the proof was produced
    pub timestamp: i64,

    /// Signature over the proof payload, base64-encoded
    pub signature: String,
}

/// Why a device authentication proof was rejected
///
/// Closed set so the bridge and extension can branch on the reason
/// (re-request a nonce, resync the clock, prompt for re-pairing) instead of
/// string-matching messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceAuthFailure {
    /// Nonce was never issued, already answered, or past its lifetime
    NonceExpired,
    /// Signature does not verify against the supplied public key
    SignatureInvalid,
    /// Proof timestamp too far from server time
    TimestampSkew,
    /// Device was unpaired or revoked by the user
    DeviceRevoked,
}

impl DeviceAuthFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceAuthFailure::NonceExpired => "nonce_expired",
            DeviceAuthFailure::SignatureInvalid => "signature_invalid",
            DeviceAuthFailure::TimestampSkew => "timestamp_skew",
            DeviceAuthFailure::DeviceRevoked => "device_revoked",
        }
    }

    /// Operator-facing description; the reason itself stays machine-readable
    pub fn message(&self) -> &'static str {
        match self {
            DeviceAuthFailure::NonceExpired => "Nonce is no longer valid; request a new one",
            DeviceAuthFailure::SignatureInvalid => "Signature did not verify for this device",
            DeviceAuthFailure::TimestampSkew => "Proof timestamp is outside the accepted window",
            DeviceAuthFailure::DeviceRevoked => "Device is no longer paired to this account",
        }
    }
}

impl std::fmt::Display for DeviceAuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejection returned when a [`DeviceAuthProof`] does not verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceAuthRejection {
    /// Machine-readable rejection reason
    pub reason: DeviceAuthFailure,

    /// Operator-facing description of the failure
    pub message: String,

    /// Server time (epoch milliseconds) at rejection, so a skewed device
    /// can resynchronize; only sent for `timestamp_skew`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_time: Option<i64>,
}

impl DeviceAuthRejection {
    pub fn new(reason: DeviceAuthFailure) -> Self {
        DeviceAuthRejection {
            reason,
            message: reason.message().to_string(),
            server_time: None,
        }
    }

    /// Rejection for a skewed proof, carrying the server clock
    pub fn timestamp_skew(server_time: i64) -> Self {
        DeviceAuthRejection {
            reason: DeviceAuthFailure::TimestampSkew,
            message: DeviceAuthFailure::TimestampSkew.message().to_string(),
            server_time: Some(server_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proof_round_trip() {
        let json = r#"{
            "device_id": "dev-42",
            "public_key": "cGs=",
            "nonce": "n-1",
            "timestamp": 1730000000000,
            "signature": "c2ln"
        }"#;
        let proof: DeviceAuthProof = serde_json::from_str(json).unwrap();
        assert_eq!(proof.device_id, "dev-42");
        assert_eq!(proof.timestamp, 1730000000000);
    }

    #[test]
    fn test_failure_reasons_are_snake_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&DeviceAuthFailure::NonceExpired).unwrap(),
            r#""nonce_expired""#
        );
        assert_eq!(
            serde_json::to_string(&DeviceAuthFailure::SignatureInvalid).unwrap(),
            r#""signature_invalid""#
        );
        // wire value parses back to the same reason
        let reason: DeviceAuthFailure = serde_json::from_value(json!("device_revoked")).unwrap();
        assert_eq!(reason, DeviceAuthFailure::DeviceRevoked);
    }

    #[test]
    fn test_rejection_fills_message_from_reason() {
        let rejection = DeviceAuthRejection::new(DeviceAuthFailure::SignatureInvalid);
        assert_eq!(rejection.reason, DeviceAuthFailure::SignatureInvalid);
        assert_eq!(rejection.message, "Signature did not verify for this device");
        // server_time only accompanies timestamp_skew
        let out = serde_json::to_value(&rejection).unwrap();
        assert!(out.get("server_time").is_none());
    }

    #[test]
    fn test_skew_rejection_carries_server_clock() {
        let rejection = DeviceAuthRejection::timestamp_skew(1730000001500);
        assert_eq!(rejection.reason, DeviceAuthFailure::TimestampSkew);

        let out = serde_json::to_value(&rejection).unwrap();
        assert_eq!(out["reason"], "timestamp_skew");
        assert_eq!(out["server_time"], 1730000001500i64);
    }
}
