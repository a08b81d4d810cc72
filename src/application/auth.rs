/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Token holder shared by every request
//!
//! The backend authenticates calls with a `token` query parameter obtained
//! from the `login` action. This module keeps that token:
//! - in memory, for the checks made before each call
//! - in a [`SessionStore`], so a restarted process stays logged in
//!
//! When the backend answers 401 the token is dropped from both places and the
//! registered [`UnauthorizedHandler`] runs, typically sending the user back
//! to a login screen.

use crate::error::AppError;
use crate::model::auth::StoredSession;
use crate::presentation::user::User;
use crate::session::store::SessionStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Callback fired after the backend rejected the token
pub trait UnauthorizedHandler: Send + Sync {
    /// Called once per 401 response, after the session has been cleared
    fn on_unauthorized(&self);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_unauthorized(&self) {
        self()
    }
}

/// Holder of the cached login
pub struct Auth {
    session: RwLock<Option<StoredSession>>,
    store: Arc<dyn SessionStore>,
    on_unauthorized: RwLock<Option<Arc<dyn UnauthorizedHandler>>>,
}

impl Auth {
    /// Creates the holder and restores any session persisted in `store`
    ///
    /// A store that cannot be read is treated as empty.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let restored = match store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Could not restore persisted session: {}", e);
                None
            }
        };
        if restored.is_some() {
            info!("Restored persisted session");
        }

        Self {
            session: RwLock::new(restored),
            store,
            on_unauthorized: RwLock::new(None),
        }
    }

    /// Cached token, if any
    pub async fn token(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.token.clone())
    }

    /// Cached token, or `AppError::NotAuthenticated`
    pub async fn require_token(&self) -> Result<String, AppError> {
        self.token().await.ok_or_else(|| {
            debug!("Rejecting call: no token cached");
            AppError::NotAuthenticated
        })
    }

    /// Whether a token is cached
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Full cached session
    pub async fn session(&self) -> Option<StoredSession> {
        self.session.read().await.clone()
    }

    /// User of the cached session, when the backend sent one
    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.as_ref().and_then(|s| s.user.clone())
    }

    /// Replaces the cached session and persists it
    ///
    /// The in-memory session is updated even if persisting fails.
    pub async fn set_session(&self, session: StoredSession) -> Result<(), AppError> {
        let mut guard = self.session.write().await;
        let persisted = self.persist(session.clone()).await;
        *guard = Some(session);
        persisted
    }

    /// Caches a token obtained elsewhere
    pub async fn set_token(&self, token: impl Into<String>) -> Result<(), AppError> {
        self.set_session(StoredSession::new(token, None)).await
    }

    /// Updates the user stored alongside the token, if a session exists
    pub async fn set_user(&self, user: User) -> Result<(), AppError> {
        let mut guard = self.session.write().await;
        match guard.as_mut() {
            Some(session) => {
                session.user = Some(user);
                let snapshot = session.clone();
                self.persist(snapshot).await
            }
            None => Ok(()),
        }
    }

    /// Drops the cached session from memory and from the store
    pub async fn clear(&self) -> Result<(), AppError> {
        let mut guard = self.session.write().await;
        *guard = None;
        let store = Arc::clone(&self.store);
        run_blocking(move || store.clear()).await
    }

    // Store access runs on the blocking pool; callers hold the write lock so
    // memory and store change together.
    async fn persist(&self, session: StoredSession) -> Result<(), AppError> {
        let store = Arc::clone(&self.store);
        run_blocking(move || store.save(&session)).await
    }

    /// Registers the callback fired on 401 responses
    pub async fn set_unauthorized_handler(&self, handler: Arc<dyn UnauthorizedHandler>) {
        *self.on_unauthorized.write().await = Some(handler);
    }

    /// Clears the session and fires the unauthorized callback
    pub async fn handle_unauthorized(&self) {
        if let Err(e) = self.clear().await {
            warn!("Failed to clear persisted session: {}", e);
        }
        let handler = self.on_unauthorized.read().await.clone();
        match handler {
            Some(handler) => handler.on_unauthorized(),
            None => info!("Session expired; log in again"),
        }
    }
}

async fn run_blocking<F>(op: F) -> Result<(), AppError>
where
    F: FnOnce() -> Result<(), AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| AppError::Io(std::io::Error::other(e)))?
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth").finish_non_exhaustive()
    }
}
