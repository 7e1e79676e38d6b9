//! Fire-and-forget UDP notifier.

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::Arc;

use parking_lot::Mutex;

use super::config::{MAX_DATAGRAM_SIZE, NotifierConfig};
use super::state::NotifierState;
use crate::Result;
use crate::error::NotifierError;
use crate::logging::targets;
use crate::message::Message;

/// Callback receiving send-time failures that are otherwise dropped.
pub type DiagnosticHook = Arc<dyn Fn(&NotifierError) + Send + Sync>;

/// Socket handle and lifecycle state, always read and written together.
struct NotifierInner {
    socket: Option<UdpSocket>,
    state: NotifierState,
}

/// An open channel to the local overlay.
///
/// Sending never fails from the caller's point of view: a missing overlay,
/// an encoding problem or a closed notifier all result in the message being
/// silently dropped. Install a hook with
/// [`with_diagnostics`](Self::with_diagnostics) to observe those drops.
///
/// The notifier is `Send + Sync`; share it between threads with an [`Arc`].
/// Every send and close is serialized by an internal lock, so a send never
/// writes through a socket that is being closed.
///
/// # Example
///
/// ```no_run
/// use xsoverlay_notifier::{Message, Notifier, audio};
///
/// let notifier = Notifier::new()?;
/// notifier.send(
///     Message::new("Example Notification!")
///         .content("Hello from Rust")
///         .audio_path(audio::DEFAULT)
///         .source_app("XSOverlay_Example_UDP"),
/// );
/// notifier.close();
/// # Ok::<(), xsoverlay_notifier::NotifierError>(())
/// ```
pub struct Notifier {
    config: NotifierConfig,
    target: SocketAddr,
    inner: Mutex<NotifierInner>,
    diagnostics: Option<DiagnosticHook>,
}

impl Notifier {
    /// Open a notifier on the default overlay port.
    pub fn new() -> Result<Self> {
        Self::with_config(NotifierConfig::default())
    }

    /// Open a notifier on the given overlay port.
    pub fn with_port(port: u16) -> Result<Self> {
        Self::with_config(NotifierConfig::new(port))
    }

    /// Open a notifier with the given configuration.
    ///
    /// Resolves the loopback target and opens a UDP socket connected to it.
    /// This does not check that the overlay is actually listening.
    pub fn with_config(config: NotifierConfig) -> Result<Self> {
        let address = config.target_addr();
        let target = address
            .to_socket_addrs()
            .map_err(|e| NotifierError::resolve(&address, e))?
            .next()
            .ok_or_else(|| NotifierError::NoAddress {
                address: address.clone(),
            })?;

        let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).map_err(NotifierError::Socket)?;
        socket.connect(target).map_err(NotifierError::Socket)?;

        tracing::debug!(
            target: targets::NOTIFIER,
            addr = %target,
            local = ?socket.local_addr().ok(),
            "Opened notifier"
        );

        Ok(Self {
            config,
            target,
            inner: Mutex::new(NotifierInner {
                socket: Some(socket),
                state: NotifierState::Open,
            }),
            diagnostics: None,
        })
    }

    /// Install a callback that receives every dropped send failure.
    ///
    /// The hook runs on the sending thread after the internal lock has been
    /// released, so it may call back into the notifier.
    pub fn with_diagnostics(
        mut self,
        hook: impl Fn(&NotifierError) + Send + Sync + 'static,
    ) -> Self {
        self.diagnostics = Some(Arc::new(hook));
        self
    }

    /// Get the configuration the notifier was opened with.
    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Get the overlay address datagrams are sent to.
    pub fn target_addr(&self) -> SocketAddr {
        self.target
    }

    /// Get the local socket address.
    /// Returns `None` once the notifier is closed.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.inner
            .lock()
            .socket
            .as_ref()
            .and_then(|socket| socket.local_addr().ok())
    }

    /// Get the current state.
    pub fn state(&self) -> NotifierState {
        self.inner.lock().state
    }

    /// Check if the notifier has been closed.
    pub fn is_closed(&self) -> bool {
        self.state() == NotifierState::Closed
    }

    /// Send a notification, best effort.
    ///
    /// The message is normalized, encoded as JSON and written as one datagram.
    /// Nothing is reported back: failures are dropped, and sending on a
    /// closed notifier does nothing.
    pub fn send(&self, message: Message) {
        if let Err(error) = self.dispatch(message.normalized()) {
            self.report(&error);
        }
    }

    fn dispatch(&self, message: Message) -> Result<()> {
        let inner = self.inner.lock();
        let socket = match (inner.state, inner.socket.as_ref()) {
            (NotifierState::Open, Some(socket)) => socket,
            _ => {
                tracing::trace!(target: targets::NOTIFIER, title = %message.title, "Notifier closed, skipping message");
                return Ok(());
            }
        };

        let payload = message.encode()?;
        if payload.len() > MAX_DATAGRAM_SIZE {
            return Err(NotifierError::Oversized {
                len: payload.len(),
                max: MAX_DATAGRAM_SIZE,
            });
        }

        let sent = socket.send(&payload).map_err(NotifierError::Send)?;
        tracing::trace!(target: targets::NOTIFIER, addr = %self.target, bytes = sent, "Sent notification");
        Ok(())
    }

    fn report(&self, error: &NotifierError) {
        tracing::debug!(target: targets::NOTIFIER, addr = %self.target, %error, "Dropped notification");
        if let Some(hook) = &self.diagnostics {
            hook(error);
        }
    }

    /// Close the notifier and release the socket.
    ///
    /// Safe to call more than once; later calls do nothing.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if inner.state == NotifierState::Closed {
            return;
        }

        inner.socket = None;
        inner.state = NotifierState::Closed;
        tracing::debug!(target: targets::NOTIFIER, addr = %self.target, "Closed notifier");
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("target_addr", &self.target)
            .field("state", &self.state())
            .field("local_addr", &self.local_addr())
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

// Ensure Notifier is Send + Sync
static_assertions::assert_impl_all!(Notifier: Send, Sync);
