//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted authentication state and is the only state
//! with a client-side lifecycle; `remote` models the pending/success/error
//! shape every asynchronous page action moves through.

pub mod remote;
pub mod session;
