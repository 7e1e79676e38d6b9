//! The notification record and its defaulting rules.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use super::kind::MessageType;
use super::{
    DEFAULT_HEIGHT, DEFAULT_OPACITY, DEFAULT_TIMEOUT, DEFAULT_VOLUME, MAX_TIMEOUT, icon,
};
use crate::Result;
use crate::logging::targets;

/// A single notification or media-player event for the overlay.
///
/// Fields left at their zero value are treated as unset and replaced by
/// [`normalize`](Self::normalize), which [`Notifier::send`](crate::Notifier::send)
/// applies before encoding.
///
/// # Example
///
/// ```
/// use xsoverlay_notifier::{Message, audio};
///
/// let message = Message::new("Build finished")
///     .content("<b>release</b> in 42s")
///     .audio_path(audio::DEFAULT)
///     .source_app("ci-watcher")
///     .normalized();
///
/// assert_eq!(message.timeout, 3.0);
/// assert_eq!(message.volume, 0.7);
/// assert_eq!(message.icon, "default");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    /// How the overlay renders the message.
    pub message_type: MessageType,
    /// Wrist icon slot, only used for media player messages.
    pub index: i32,
    /// Seconds on screen, valid in `(0, 60]`.
    pub timeout: f32,
    /// Height the popup expands to when it has content, must be above 1.
    pub height: f32,
    /// Popup opacity, valid in `(0, 1]`.
    pub opacity: f32,
    /// Sound volume, valid in `(0, 1]` when a sound is played.
    pub volume: f32,
    /// Path to an `.ogg` file, one of the [`audio`](super::audio) tokens, or
    /// empty for a silent notification.
    pub audio_path: String,
    /// Title, supports rich text.
    pub title: String,
    /// Body, supports rich text. Empty renders a compact popup.
    pub content: String,
    /// Whether [`icon`](Message#structfield.icon) holds base64 image data instead of a path.
    pub use_base64_icon: bool,
    /// Image path, base64 data, or one of the [`icon`](super::icon) tokens.
    pub icon: String,
    /// Name of the sending application, for debugging on the overlay side.
    pub source_app: String,
}

impl Message {
    /// Create a popup notification with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Create a media player message showing the given wrist icon slot.
    pub fn media_player(index: i32) -> Self {
        Self {
            message_type: MessageType::MediaPlayerInformation,
            index,
            ..Default::default()
        }
    }

    /// Set the message kind.
    pub fn message_type(mut self, kind: MessageType) -> Self {
        self.message_type = kind;
        self
    }

    /// Set the media player icon slot.
    pub fn index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Set how long the popup stays on screen, in seconds.
    pub fn timeout(mut self, seconds: f32) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the expanded height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the popup opacity.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the sound volume.
    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Set the sound to play.
    pub fn audio_path(mut self, path: impl Into<String>) -> Self {
        self.audio_path = path.into();
        self
    }

    /// Play no sound.
    pub fn silent(mut self) -> Self {
        self.audio_path.clear();
        self.volume = 0.0;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Use a reserved icon token or a raw icon string.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.use_base64_icon = false;
        self
    }

    /// Use an image file on disk as the icon.
    ///
    /// The wire format only carries UTF-8, so a path that is not valid UTF-8
    /// is converted lossily (invalid bytes become `U+FFFD`) and a warning is
    /// logged. The overlay will not find such a file.
    pub fn icon_path(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.to_str().is_none() {
            tracing::warn!(target: targets::MESSAGE, path = ?path, "Icon path is not valid UTF-8");
        }
        self.icon = path.to_string_lossy().into_owned();
        self.use_base64_icon = false;
        self
    }

    /// Embed raw image bytes as the icon.
    pub fn icon_base64(mut self, image: impl AsRef<[u8]>) -> Self {
        self.icon = BASE64.encode(image);
        self.use_base64_icon = true;
        self
    }

    /// Set the sending application's name.
    pub fn source_app(mut self, source_app: impl Into<String>) -> Self {
        self.source_app = source_app.into();
        self
    }

    /// Whether the overlay will render the compact, title-only popup.
    pub fn is_compact(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace unset or out-of-range fields with their defaults.
    ///
    /// Never fails and is idempotent. The kind is already valid by
    /// construction and `index` has no bounds, so neither is touched.
    pub fn normalize(&mut self) {
        if self.icon.is_empty() {
            self.icon = icon::DEFAULT.to_owned();
        }

        if self.audio_path.is_empty() {
            // Silent messages keep the caller's volume unless it is unusable.
            if self.volume > 1.0 {
                self.volume = DEFAULT_VOLUME;
            } else if !self.volume.is_finite() {
                self.volume = 0.0;
            }
        } else if !(self.volume > 0.0 && self.volume <= 1.0) {
            self.volume = DEFAULT_VOLUME;
        }

        if !(self.opacity > 0.0 && self.opacity <= 1.0) {
            self.opacity = DEFAULT_OPACITY;
        }

        if !(self.timeout > 0.0 && self.timeout <= MAX_TIMEOUT) {
            self.timeout = DEFAULT_TIMEOUT;
        }

        if !(self.height > 1.0 && self.height.is_finite()) {
            self.height = DEFAULT_HEIGHT;
        }
    }

    /// Consume the message and return its normalized form.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Serialize the message as a compact JSON object.
    ///
    /// The message is encoded as is; call [`normalize`](Self::normalize) first
    /// if it may contain unset fields.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(self)?;
        tracing::trace!(target: targets::MESSAGE, len = bytes.len(), kind = %self.message_type, "Encoded message");
        Ok(bytes)
    }
}
