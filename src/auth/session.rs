use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::auth::storage::{FileStorage, MemoryStorage, SessionStorage};
use crate::error::StorageError;
use crate::model::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Bearer token together with the profile it was issued for.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

// Keep the token out of logs and panics.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Who is logged in. Either both token and user are present or neither is.
///
/// The store is an ordinary value: hand the same `Arc<SessionStore>` to every
/// client that should share a login, or build separate stores for separate
/// sessions.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Loads whatever session the storage already holds.
    pub fn open(storage: Arc<dyn SessionStorage>) -> Result<Self, StorageError> {
        let current = load(storage.as_ref())?;
        Ok(Self {
            storage,
            current: RwLock::new(current),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            current: RwLock::new(None),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Self::open(Arc::new(FileStorage::new(path)))
    }

    /// Stores token and user together; on failure the previous session is
    /// left in place, both in storage and in memory.
    pub fn set(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user)?;
        self.storage
            .set_all(&[(USER_KEY, encoded.as_str()), (TOKEN_KEY, token)])?;

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Session {
            token: token.to_string(),
            user: user.clone(),
        });
        debug!(user_id = user.id, "session stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_all(&[TOKEN_KEY, USER_KEY])?;

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
        debug!("session cleared");
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.current().map(|session| session.user)
    }
}

/// Reads the pair back; anything but a complete, parsable pair is purged.
fn load(storage: &dyn SessionStorage) -> Result<Option<Session>, StorageError> {
    let session = match read_pair(storage) {
        Ok((None, None)) => return Ok(None),
        Ok((Some(token), Some(user))) if !token.is_empty() => match serde_json::from_str(&user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                warn!(error = %e, "stored user profile is unreadable, discarding session");
                None
            }
        },
        Ok(_) => {
            warn!("stored session is incomplete, discarding it");
            None
        }
        Err(StorageError::Format(e)) => {
            warn!(error = %e, "session storage is unreadable, discarding it");
            None
        }
        Err(e) => return Err(e),
    };

    if session.is_none() {
        storage.remove_all(&[TOKEN_KEY, USER_KEY])?;
    }
    Ok(session)
}

fn read_pair(
    storage: &dyn SessionStorage,
) -> Result<(Option<String>, Option<String>), StorageError> {
    Ok((storage.get(TOKEN_KEY)?, storage.get(USER_KEY)?))
}
