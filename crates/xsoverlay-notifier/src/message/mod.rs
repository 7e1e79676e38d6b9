//! Notification messages and their defaulting rules.
//!
//! A [`Message`] is a plain record: build one per event, hand it to
//! [`Notifier::send`](crate::Notifier::send) and forget about it. Unset fields
//! are zero values and get replaced by the defaults below right before the
//! message is encoded.
//!
//! | field     | valid range          | default |
//! |-----------|----------------------|---------|
//! | `timeout` | `(0, 60]`            | `3.0`   |
//! | `height`  | `> 1`                | `120.0` |
//! | `opacity` | `(0, 1]`             | `1.0`   |
//! | `volume`  | `(0, 1]` with audio  | `0.7`   |
//! | `icon`    | non-empty            | `"default"` |
//!
//! # Example
//!
//! ```
//! use xsoverlay_notifier::{Message, MessageType, icon};
//!
//! let now_playing = Message::media_player(1)
//!     .title("Now playing")
//!     .content("Some Artist - Some Song")
//!     .icon(icon::DEFAULT);
//!
//! assert_eq!(now_playing.message_type, MessageType::MediaPlayerInformation);
//! ```

mod kind;
mod record;

pub use kind::MessageType;
pub use record::Message;

/// Seconds a popup stays on screen when no valid timeout is given.
pub const DEFAULT_TIMEOUT: f32 = 3.0;
/// Longest timeout the overlay accepts, in seconds.
pub const MAX_TIMEOUT: f32 = 60.0;
/// Expanded height used when no valid height is given.
pub const DEFAULT_HEIGHT: f32 = 120.0;
/// Opacity used when no valid opacity is given.
pub const DEFAULT_OPACITY: f32 = 1.0;
/// Volume used for audible messages without a valid volume.
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Reserved icon names built into the overlay.
pub mod icon {
    /// The overlay's default icon.
    pub const DEFAULT: &str = "default";
    /// Error icon.
    pub const ERROR: &str = "error";
    /// Warning icon.
    pub const WARNING: &str = "warning";
}

/// Reserved sound names built into the overlay.
pub mod audio {
    /// The overlay's default notification sound.
    pub const DEFAULT: &str = "default";
    /// Error sound.
    pub const ERROR: &str = "error";
    /// Warning sound.
    pub const WARNING: &str = "warning";
}
