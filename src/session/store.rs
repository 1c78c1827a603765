//! Process-wide session store keyed by user.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::core::{ArcadeConfig, ArcadeError, GameRng, Result};

use super::game_session::GameSession;

/// Shared handle to one user's session.
///
/// Locking the handle serializes turns for that user; different users never
/// wait on each other's session lock.
pub type SessionHandle = Arc<Mutex<GameSession>>;

fn poisoned<T>(_: PoisonError<T>) -> ArcadeError {
    tracing::warn!("session store lock poisoned");
    ArcadeError::LockPoisoned
}

/// Sessions created lazily on first access.
pub struct SessionStore {
    config: Arc<ArcadeConfig>,
    /// Master stream; each new session gets a fork.
    rng: Mutex<GameRng>,
    sessions: RwLock<FxHashMap<String, SessionHandle>>,
}

impl SessionStore {
    /// Create an empty store. Fails if the configuration cannot set up every game.
    pub fn new(config: ArcadeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: Mutex::new(GameRng::new(config.seed)),
            config: Arc::new(config),
            sessions: RwLock::new(FxHashMap::default()),
        })
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Get the user's session, creating an empty one on first access.
    pub fn get(&self, user: &str) -> Result<SessionHandle> {
        if let Some(handle) = self.sessions.read().map_err(poisoned)?.get(user) {
            return Ok(Arc::clone(handle));
        }

        let mut sessions = self.sessions.write().map_err(poisoned)?;
        // Another caller may have created it between the two locks
        if let Some(handle) = sessions.get(user) {
            return Ok(Arc::clone(handle));
        }
        let handle = self.new_session(user)?;
        sessions.insert(user.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Replace the user's session with an empty one (fresh login).
    pub fn reset(&self, user: &str) -> Result<SessionHandle> {
        let handle = self.new_session(user)?;
        self.sessions
            .write()
            .map_err(poisoned)?
            .insert(user.to_string(), Arc::clone(&handle));
        tracing::info!(user, "session reset");
        Ok(handle)
    }

    /// Lock the user's session and run `f` against it.
    pub fn with_session<T>(&self, user: &str, f: impl FnOnce(&mut GameSession) -> Result<T>) -> Result<T> {
        let handle = self.get(user)?;
        let mut session = handle.lock().map_err(poisoned)?;
        f(&mut *session)
    }

    /// Drop every session.
    pub fn clear(&self) -> Result<()> {
        self.sessions.write().map_err(poisoned)?.clear();
        Ok(())
    }

    /// Number of sessions.
    pub fn len(&self) -> Result<usize> {
        Ok(self.sessions.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn new_session(&self, user: &str) -> Result<SessionHandle> {
        let rng = self.rng.lock().map_err(poisoned)?.fork();
        tracing::debug!(user, seed = rng.seed(), "session created");
        Ok(Arc::new(Mutex::new(GameSession::new(
            user,
            Arc::clone(&self.config),
            rng,
        ))))
    }
}
