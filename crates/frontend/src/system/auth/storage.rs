use contracts::system::auth::{AdminProfile, AuthSession};

use crate::shared::storage::{load_json, save_json, KeyValueStore, LocalStorage, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const ADMIN_PROFILE_KEY: &str = "adminProfile";

/// Access token and cached admin profile
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// An unreadable cached profile counts as missing
    pub fn profile(&self) -> Option<AdminProfile> {
        match load_json(&self.store, ADMIN_PROFILE_KEY) {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    pub fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
        self.store.set(ACCESS_TOKEN_KEY, &session.access_token)?;
        self.save_profile(&session.admin)
    }

    pub fn save_profile(&self, profile: &AdminProfile) -> Result<(), StorageError> {
        save_json(&self.store, ADMIN_PROFILE_KEY, profile)
    }

    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(ADMIN_PROFILE_KEY);
    }
}

pub fn browser_session() -> SessionStore<LocalStorage> {
    SessionStore::new(LocalStorage)
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    browser_session().access_token()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn session() -> AuthSession {
        AuthSession {
            access_token: "t0k".into(),
            admin: AdminProfile {
                id: "a1".into(),
                name: "Mai".into(),
                email: "mai@shop.example".into(),
                phone: None,
                role: "admin".into(),
            },
        }
    }

    #[test]
    fn test_session_persists_and_clears() {
        let memory = MemoryStore::new();
        let store = SessionStore::new(memory.clone());
        assert_eq!(store.access_token(), None);

        store.save(&session()).unwrap();
        let reopened = SessionStore::new(memory.clone());
        assert_eq!(reopened.access_token().as_deref(), Some("t0k"));
        assert_eq!(reopened.profile(), Some(session().admin));

        reopened.clear();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_corrupt_profile_is_ignored() {
        let memory = MemoryStore::new();
        memory.set(ADMIN_PROFILE_KEY, "{oops").unwrap();
        memory.set(ACCESS_TOKEN_KEY, "").unwrap();
        let store = SessionStore::new(memory);
        assert_eq!(store.profile(), None);
        assert_eq!(store.access_token(), None);
    }
}
