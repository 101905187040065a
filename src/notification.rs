//! Transient user-facing messages.
//!
//! An [`InfoMessage`] is either a bare string or a structured
//! [`Notification`] with display options. The rendering layer consumes the
//! message and clears the channel after showing it.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Screen position for a toast notification.
///
/// The kebab-case spellings are an external contract: UI positioning code
/// matches on these exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
    TopCenter,
    BottomCenter,
    CenterCenter,
}

impl Placement {
    /// All placements, in declaration order.
    pub const ALL: [Placement; 7] = [
        Placement::BottomRight,
        Placement::BottomLeft,
        Placement::TopRight,
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::BottomCenter,
        Placement::CenterCenter,
    ];

    /// The contract token for this placement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::BottomRight => "bottom-right",
            Placement::BottomLeft => "bottom-left",
            Placement::TopRight => "top-right",
            Placement::TopLeft => "top-left",
            Placement::TopCenter => "top-center",
            Placement::BottomCenter => "bottom-center",
            Placement::CenterCenter => "center-center",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a placement token outside the fixed set of seven.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown placement '{0}'")]
pub struct PlacementParseError(pub String);

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PlacementParseError(s.to_string()))
    }
}

/// A structured toast notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// How long the toast stays on screen. Serialized as whole
    /// milliseconds.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
    /// Link opened by the action button.
    pub url: String,
    /// Label of the action button.
    pub button_label: String,
    /// Where on screen the toast appears.
    pub placement: Placement,
}

/// Millisecond representation for [`Notification::duration`]; toast
/// durations are integral milliseconds, not serde's `{secs, nanos}` pair.
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

/// A message on the info channel: plain text or a full notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoMessage {
    Text(String),
    Notification(Notification),
}

impl From<&str> for InfoMessage {
    fn from(text: &str) -> Self {
        InfoMessage::Text(text.to_string())
    }
}

impl From<String> for InfoMessage {
    fn from(text: String) -> Self {
        InfoMessage::Text(text)
    }
}

impl From<Notification> for InfoMessage {
    fn from(notification: Notification) -> Self {
        InfoMessage::Notification(notification)
    }
}
