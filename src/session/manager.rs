//! Session manager
//!
//! Owns the login state, mirrors it to durable storage on every transition,
//! and notifies subscribers after the write has succeeded.

use log::{error, info};
use tokio::sync::watch;

use super::state::{SessionSnapshot, SessionState};
use super::store::KeyValueStore;
use crate::auth::ValidationResult;
use crate::error::StoreError;

/// Storage key of the persisted login flag.
pub const SESSION_KEY: &str = "isLoggedIn";

pub struct SessionManager {
    store: Box<dyn KeyValueStore>,
    snapshot: watch::Sender<SessionSnapshot>,
}

impl SessionManager {
    /// Restores the session from `store`, defaulting to logged out when the
    /// key has never been written or cannot be read.
    pub fn restore<K: KeyValueStore + 'static>(store: K) -> Self {
        let authenticated = match store.get_bool(SESSION_KEY) {
            Ok(value) => value.unwrap_or(false),
            Err(e) => {
                error!("Unreadable session flag, starting logged out: {}", e);
                false
            }
        };
        let state = SessionState::from(authenticated);
        info!("Restored session: {}", state);

        let (snapshot, _) = watch::channel(SessionSnapshot {
            state,
            message: None,
        });

        Self {
            store: Box::new(store),
            snapshot,
        }
    }

    pub fn state(&self) -> SessionState {
        self.snapshot.borrow().state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    /// Performs the LoggedOut -> LoggedIn transition for a successful result.
    /// Failed results leave the session untouched.
    pub fn apply_result(&mut self, result: &ValidationResult) -> Result<(), StoreError> {
        if result.success {
            self.login(Some(result.message.clone()))
        } else {
            Ok(())
        }
    }

    /// Marks the session as logged in, holding `message` for the next screen.
    pub fn login(&mut self, message: Option<String>) -> Result<(), StoreError> {
        self.persist(true)?;
        self.snapshot.send_modify(|snapshot| {
            snapshot.state = SessionState::LoggedIn;
            snapshot.message = message;
        });
        info!("Session transition -> {}", SessionState::LoggedIn);
        Ok(())
    }

    /// Marks the session as logged out and drops any pending message.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.persist(false)?;
        self.snapshot.send_modify(|snapshot| {
            snapshot.state = SessionState::LoggedOut;
            snapshot.message = None;
        });
        info!("Session transition -> {}", SessionState::LoggedOut);
        Ok(())
    }

    /// Returns the pending session message, clearing it.
    pub fn take_message(&mut self) -> Option<String> {
        let mut taken = None;
        self.snapshot.send_if_modified(|snapshot| {
            taken = snapshot.message.take();
            taken.is_some()
        });
        taken
    }

    pub fn dismiss_message(&mut self) {
        let _ = self.take_message();
    }

    fn persist(&mut self, authenticated: bool) -> Result<(), StoreError> {
        self.store
            .set_bool(SESSION_KEY, authenticated)
            .inspect_err(|e| error!("Failed to persist session flag: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::{JsonFileStore, MemoryStore};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_absent_key_restores_logged_out() {
        let manager = SessionManager::restore(MemoryStore::new());
        assert_eq!(manager.state(), SessionState::LoggedOut);
        assert_eq!(manager.snapshot().message, None);
    }

    #[test]
    fn test_round_trip_through_restart() {
        let store = MemoryStore::new();

        let mut manager = SessionManager::restore(store.clone());
        manager.login(None).unwrap();
        drop(manager);

        let mut manager = SessionManager::restore(store.clone());
        assert_eq!(manager.state(), SessionState::LoggedIn);
        manager.logout().unwrap();
        drop(manager);

        let manager = SessionManager::restore(store);
        assert_eq!(manager.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_corrupt_file_restores_logged_out_and_login_repairs_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let mut manager = SessionManager::restore(JsonFileStore::new(&path));
        assert_eq!(manager.state(), SessionState::LoggedOut);

        manager.login(None).unwrap();
        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get_bool(SESSION_KEY).unwrap(), Some(true));
    }

    #[test]
    fn test_non_bool_flag_restores_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"isLoggedIn": 1}"#).unwrap();

        let mut manager = SessionManager::restore(JsonFileStore::new(&path));
        assert_eq!(manager.state(), SessionState::LoggedOut);

        manager.logout().unwrap();
        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get_bool(SESSION_KEY).unwrap(), Some(false));
    }

    #[test]
    fn test_failed_result_leaves_session_alone() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(store.clone());
        manager.apply_result(&ValidationResult::failed()).unwrap();

        assert_eq!(manager.state(), SessionState::LoggedOut);
        assert_eq!(store.get_bool(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_successful_result_logs_in_with_message() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(store.clone());
        manager.apply_result(&ValidationResult::succeeded()).unwrap();

        assert!(manager.is_authenticated());
        assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(true));
        assert_eq!(manager.take_message().as_deref(), Some("login succeeded"));
        assert_eq!(manager.take_message(), None);
    }

    #[test]
    fn test_dismiss_message_keeps_session_logged_in() {
        let mut manager = SessionManager::restore(MemoryStore::new());
        manager.login(Some("welcome".into())).unwrap();

        manager.dismiss_message();

        assert_eq!(manager.snapshot().message, None);
        assert_eq!(manager.state(), SessionState::LoggedIn);
    }

    #[test]
    fn test_logout_clears_message_from_any_state() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(store.clone());

        manager.logout().unwrap();
        assert_eq!(manager.state(), SessionState::LoggedOut);
        assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(false));

        manager.login(Some("welcome".into())).unwrap();
        manager.logout().unwrap();
        assert_eq!(manager.snapshot(), SessionSnapshot::default());
        assert_eq!(store.get_bool(SESSION_KEY).unwrap(), Some(false));
    }

    #[tokio::test]
    async fn test_subscribers_notified_on_transition() {
        let mut manager = SessionManager::restore(MemoryStore::new());
        let mut rx = manager.subscribe();

        manager.login(None).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().state, SessionState::LoggedIn);
    }
}
