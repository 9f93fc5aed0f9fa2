//! Explicit state machine for asynchronous page actions.
//!
//! Every network-backed action a page runs is tracked as one of four states
//! so the view can always render pending, success, or error deliberately.
//! Updates land on Leptos signals, which are no-ops once their owner is
//! disposed, so a response arriving after navigation cannot touch a dead
//! view.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

/// Lifecycle of one asynchronous request from the view's perspective.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RemoteData<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Response arrived.
    Ready(T),
    /// Request failed; the message is ready for display.
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteData::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Combine two results with all-or-nothing semantics: both values, or the
/// first failure. The admin dashboard uses this to join its paired summary
/// and recent-queries requests.
pub fn zip<A, B, E>(a: Result<A, E>, b: Result<B, E>) -> Result<(A, B), E> {
    Ok((a?, b?))
}
