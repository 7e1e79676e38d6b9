//! Notifier lifecycle states.

/// State of a notifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotifierState {
    /// The socket is open and messages are sent.
    #[default]
    Open,
    /// The socket has been released. Sends are ignored.
    Closed,
}

impl std::fmt::Display for NotifierState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifierState::Open => write!(f, "Open"),
            NotifierState::Closed => write!(f, "Closed"),
        }
    }
}
