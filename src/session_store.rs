use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use uuid::Uuid;

/// Rule governing when an authenticated session stops being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// `set_expiry(Some(0))`. The session does not survive the context that
    /// set it: any later server-side check treats it as lapsed.
    AtBrowserClose,
    /// `set_expiry(Some(n))`, n > 0. Hard deadline, measured from the moment
    /// the policy was set.
    Until(DateTime<Utc>),
    /// `set_expiry(None)`. The store never ages the session out; only an
    /// explicit logout invalidates it.
    Never,
}

impl ExpiryPolicy {
    pub fn from_seconds(seconds: Option<u64>, now: DateTime<Utc>) -> Self {
        match seconds {
            Some(0) => Self::AtBrowserClose,
            Some(n) => Self::Until(now + Duration::seconds(n as i64)),
            None => Self::Never,
        }
    }

    pub fn has_lapsed(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::AtBrowserClose => true,
            Self::Until(deadline) => now >= *deadline,
            Self::Never => false,
        }
    }
}

struct SessionRecord {
    /// `None` once the owner has logged out. An ownerless record is
    /// anonymous no matter what its expiry policy says.
    user_id: Option<Uuid>,
    expiry: ExpiryPolicy,
}

#[derive(Debug, thiserror::Error)]
#[error("there is no session for the given token")]
pub struct UnknownSessionToken;

/// In-memory token -> session map.
///
/// Clones share the same underlying map, like a database pool handle; the
/// test harness keeps one to mutate expiry policies out of band.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
    default_ttl_seconds: Option<u64>,
}

impl SessionStore {
    pub fn new(default_ttl_seconds: Option<u64>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_ttl_seconds,
        }
    }

    /// Issue a fresh session for `user_id` under the default expiry policy.
    ///
    /// Callers performing a login should discard the caller's previous
    /// token via [`SessionStore::remove`] - sessions rotate on login.
    pub fn create(&self, user_id: Uuid) -> String {
        let token = generate_session_token();
        let record = SessionRecord {
            user_id: Some(user_id),
            expiry: ExpiryPolicy::from_seconds(self.default_ttl_seconds, Utc::now()),
        };
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), record);
        token
    }

    /// The user owning `token`, provided the session is still valid at `now`.
    ///
    /// Missing records, logged-out records and lapsed expiry policies all
    /// collapse to `None`: the caller is anonymous.
    pub fn authenticated_user(&self, token: &str, now: DateTime<Utc>) -> Option<Uuid> {
        let sessions = self.sessions.read().expect("session store lock poisoned");
        let record = sessions.get(token)?;
        if record.expiry.has_lapsed(now) {
            return None;
        }
        record.user_id
    }

    /// Re-arm the expiry policy for an existing session.
    ///
    /// `Some(0)` expires at end of the current context, a positive value sets
    /// a fixed duration from now, `None` disables expiration entirely.
    pub fn set_expiry(
        &self,
        token: &str,
        seconds: Option<u64>,
    ) -> Result<(), UnknownSessionToken> {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let record = sessions.get_mut(token).ok_or(UnknownSessionToken)?;
        record.expiry = ExpiryPolicy::from_seconds(seconds, Utc::now());
        Ok(())
    }

    /// Drop the authenticated-user association, keeping the record around.
    ///
    /// This is the logout primitive. It takes precedence over any expiry
    /// policy, including a disabled one.
    pub fn clear_user(&self, token: &str) {
        if let Some(record) = self
            .sessions
            .write()
            .expect("session store lock poisoned")
            .get_mut(token)
        {
            record.user_id = None;
        }
    }

    pub fn remove(&self, token: &str) {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(token);
    }
}

/// 25-character case-sensitive alphanumeric token, ~149 bits of entropy.
fn generate_session_token() -> String {
    let mut rng = thread_rng();
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(25)
        .collect()
}
