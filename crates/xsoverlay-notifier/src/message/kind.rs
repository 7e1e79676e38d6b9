//! Notification kinds understood by the overlay.

use serde::{Deserialize, Serialize};

/// How the overlay renders a message.
///
/// On the wire this is the bare integer `messageType`. Raw values are mapped
/// through [`MessageType::from_raw`], so an unrecognized kind never survives
/// decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MessageType {
    /// A regular popup notification.
    #[default]
    NotificationPopup = 1,
    /// Media player status. Uses the message's [`index`](super::Message#structfield.index) to
    /// pick the wrist icon.
    MediaPlayerInformation = 2,
}

impl MessageType {
    /// Map a raw `messageType` value to a kind.
    ///
    /// Zero and negative values mean "unset" and become
    /// [`NotificationPopup`](Self::NotificationPopup), as does any value the
    /// overlay does not know about.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            2 => Self::MediaPlayerInformation,
            _ => Self::NotificationPopup,
        }
    }

    /// The integer sent on the wire.
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

impl From<i32> for MessageType {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MessageType> for i32 {
    fn from(kind: MessageType) -> Self {
        kind.as_raw()
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::NotificationPopup => write!(f, "NotificationPopup"),
            MessageType::MediaPlayerInformation => write!(f, "MediaPlayerInformation"),
        }
    }
}
