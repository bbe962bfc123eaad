//! Messages pushed by the backend's notification channel.

use serde::{Deserialize, Serialize};

use super::review::Review;
use super::trust::TrustScore;
use crate::error::{Result, TrustGuardError};

/// A push notification: `{"type": ..., "payload": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum PushMessage {
    /// Replacement trust score for the product on display
    TrustScoreUpdate(TrustScore),
    /// A review that was just posted
    NewReview(Review),
}

impl PushMessage {
    /// Decode a raw text frame
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| TrustGuardError::MalformedMessage(e.to_string()))
    }

    /// Wire name of the message type
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TrustScoreUpdate(_) => "trust_score_update",
            Self::NewReview(_) => "new_review",
        }
    }
}
