//! Persisted session state: the bearer token and the signed-in user profile.
//!
//! The store is the single source of truth for "is someone signed in, and as
//! whom". It is provided through Leptos context from [`crate::app::App`] and
//! injected into the API client and route guards, never reached through a
//! module-level global.
//!
//! ERROR HANDLING
//! ==============
//! A corrupted or schema-mismatched stored profile is treated as "no
//! session". Surfacing it would crash navigation for no benefit; logging out
//! is the correct recovery.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::User;

const TOKEN_KEY: &str = "verdictvault_token";
const USER_KEY: &str = "verdictvault_user";

/// Role identifier granting access to the admin dashboard.
pub const ROLE_ADMIN: &str = "admin";

/// Where an expired or missing session sends the browser.
pub const LOGIN_PATH: &str = "/login";

/// Key/value storage behind the session store.
///
/// The browser backend maps onto `localStorage`; the in-memory backend keeps
/// tests and native builds independent of a DOM.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Looks the window up on every call so the
/// struct itself stays `Send + Sync`.
#[cfg(feature = "csr")]
struct LocalStorageBackend;

#[cfg(feature = "csr")]
impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for native builds and unit tests.
#[derive(Default)]
struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

/// Injectable session service over a storage backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Store backed by the browser's `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self { backend: Arc::new(LocalStorageBackend) }
    }

    /// Store backed by process memory.
    pub fn in_memory() -> Self {
        Self { backend: Arc::new(MemoryBackend::default()) }
    }

    /// Persist both halves of the session. Callers observe either the full
    /// session or none: both writes happen before control returns.
    pub fn set_session(&self, token: &str, user: &User) {
        self.backend.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &json);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// The stored profile, or `None` when absent or unparseable.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Remove both token and profile.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// True iff a profile is stored and carries exactly `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.user().is_some_and(|u| u.role == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Forced sign-out: drop the session and report where the browser should
    /// go. The API client performs the actual navigation.
    pub fn expire(&self) -> &'static str {
        self.clear();
        LOGIN_PATH
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
