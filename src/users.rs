use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use secrecy::Secret;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    /// PHC string, as produced by `authentication::compute_password_hash`.
    pub password_hash: Secret<String>,
    pub is_superuser: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("a user named `{0}` already exists")]
pub struct DuplicateUsername(pub String);

/// In-memory credential registry, keyed by username.
///
/// Cheap to clone - clones share the same underlying map, so a handle kept
/// by a test harness observes the same users as the running application.
#[derive(Clone)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Usernames are unique; users are immutable once stored.
    pub fn insert(&self, user: User) -> Result<(), DuplicateUsername> {
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.contains_key(&user.username) {
            return Err(DuplicateUsername(user.username));
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(username)
            .cloned()
    }

    pub fn find_by_id(&self, user_id: Uuid) -> Option<User> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .values()
            .find(|user| user.user_id == user_id)
            .cloned()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
