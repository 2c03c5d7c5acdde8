//! Device pairing and presence types
//!
//! Pairing links a new device to a user account via a short-lived code shown
//! in the admin panel; presence heartbeats let the session manager show
//! which bridges are currently reachable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short-lived pairing code issued to a signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingCode {
    /// The code the user types into the device
    pub code: String,

    /// User this code pairs against
    pub user_id: String,

    /// When the code stops being claimable
    pub expires_at: DateTime<Utc>,

    /// Whether a device has already claimed this code
    #[serde(default)]
    pub claimed: bool,

    /// Device that claimed the code, once claimed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl PairingCode {
    /// Whether the code can still be claimed at `now`
    pub fn is_claimable(&self, now: DateTime<Utc>) -> bool {
        !self.claimed && now < self.expires_at
    }
}

/// A device's attempt to claim a pairing code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingClaim {
    /// Code being claimed
    pub code: String,

    /// Claiming device identifier
    pub device_id: String,

    /// Human-readable device name for the admin panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
}

/// Periodic liveness report from a paired device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceHeartbeat {
    /// Reporting device
    pub device_id: String,

    /// Session the device is currently capturing, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,

    /// When the device sent this heartbeat
    pub seen_at: DateTime<Utc>,

    /// Bridge software version, for the admin panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_version: Option<String>,
}
