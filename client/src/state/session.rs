//! Client-side authentication session.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is the in-memory holder of the signed-in principal and the
//! only authoritative answer to "who is signed in". `SessionService` layers
//! the account operations on top: each one makes its remote calls through
//! [`Backend`], then updates the store, the cookie hint and navigation.
//!
//! Both are constructed once in `App` and shared through Leptos context.
//!
//! CONCURRENCY
//! ===========
//! Operations run on the single UI thread and may interleave at every remote
//! call; nothing serializes them, so the last write to the store wins. Locks
//! are never held across an await or while observers run.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::config::BackendConfig;
use crate::net::api::BackendlessClient;
use crate::net::backend::Backend;
use crate::net::error::RemoteError;
use crate::net::types::{Registration, User};
use crate::util::cookie::{CookieHint, SessionHint};
use crate::util::navigate::{BrowserNavigator, Navigator};

/// Route shown after the session ends.
pub const LOGOUT_REDIRECT: &str = "/timeline";

/// Handle returned by [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Observer = Arc<dyn Fn(Option<&User>) + Send + Sync>;

// =============================================================================
// SESSION STORE
// =============================================================================

/// Holder of the optional signed-in [`User`].
///
/// Cloning shares the same underlying state.
#[derive(Clone, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
    observers: Arc<Mutex<Vec<(SubscriptionId, Observer)>>>,
    next_id: Arc<AtomicU64>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current principal.
    #[must_use]
    pub fn get(&self) -> Option<User> {
        self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Replace the principal wholesale, then notify every subscriber.
    pub fn set(&self, user: Option<User>) {
        log::debug!("session user set to {:?}", user.as_ref().map(|u| u.username.as_str()));
        {
            let mut held = self.user.write().unwrap_or_else(PoisonError::into_inner);
            held.clone_from(&user);
        }
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(user.as_ref());
        }
    }

    /// Register a callback invoked with the new principal on every `set`.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(observer)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner).len();
        f.debug_struct("SessionStore")
            .field("user", &self.get())
            .field("observers", &observers)
            .finish()
    }
}

// =============================================================================
// SESSION SERVICE
// =============================================================================

/// Account operations bound to a store, a backend, a hint and a navigator.
#[derive(Clone)]
pub struct SessionService<B, H, N> {
    store: SessionStore,
    backend: B,
    hint: H,
    navigator: N,
    restore_attempted: Arc<AtomicBool>,
}

/// The service as wired in the browser app.
pub type AppSession = SessionService<BackendlessClient, CookieHint, BrowserNavigator>;

impl AppSession {
    /// Service over the Backendless client configured at build time.
    ///
    /// `navigator` stays detached until the router attaches to it.
    #[must_use]
    pub fn from_build_env(store: SessionStore, navigator: BrowserNavigator) -> Self {
        Self::new(store, BackendlessClient::new(BackendConfig::from_build_env()), CookieHint, navigator)
    }
}

impl<B, H, N> SessionService<B, H, N>
where
    B: Backend,
    H: SessionHint,
    N: Navigator,
{
    pub fn new(store: SessionStore, backend: B, hint: H, navigator: N) -> Self {
        Self { store, backend, hint, navigator, restore_attempted: Arc::new(AtomicBool::new(false)) }
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Sign in. Any failure is logged and reported as `false`.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        log::debug!("attempting login for {username}");
        match self.backend.login(username, password, true).await {
            Ok(remote) => {
                self.begin_session(remote.into());
                log::debug!("login succeeded for {username}");
                true
            }
            Err(err) => {
                log::warn!("login failed for {username}: {err}");
                false
            }
        }
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`RemoteError`] unchanged; the session is untouched.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, RemoteError> {
        let registration = Registration {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let remote = self
            .backend
            .register(&registration)
            .await
            .inspect_err(|err| log::warn!("registration failed for {username}: {err}"))?;
        let user = User::from(remote);
        self.begin_session(user.clone());
        log::debug!("registration succeeded for {username}");
        Ok(user)
    }

    /// Clear the hint and the store, tell the backend, then redirect.
    ///
    /// The redirect waits for the remote call so it cannot cut the request
    /// short. Local effects always happen, whatever the backend answers.
    ///
    /// # Errors
    ///
    /// Returns the backend's logout failure, which callers are free to ignore.
    pub async fn logout(&self) -> Result<(), RemoteError> {
        self.hint.clear();
        self.store.set(None);
        let remote = self
            .backend
            .logout()
            .await
            .inspect_err(|err| log::warn!("remote logout failed: {err}"));
        self.navigator.navigate(LOGOUT_REDIRECT);
        remote
    }

    /// Delete the backend account of the current user, then log out.
    ///
    /// Returns `Ok(false)` when the backend reports nobody signed in.
    ///
    /// # Errors
    ///
    /// Returns the failing remote call's error; the session is left as it was.
    pub async fn delete_account(&self) -> Result<bool, RemoteError> {
        let Some(remote) = self
            .backend
            .current_user()
            .await
            .inspect_err(|err| log::warn!("delete account failed: {err}"))?
        else {
            log::debug!("delete account skipped: no remote user");
            return Ok(false);
        };
        self.backend
            .remove_user(&remote)
            .await
            .inspect_err(|err| log::warn!("delete account failed: {err}"))?;
        // The account is gone; a failed remote logout changes nothing for the caller.
        let _ = self.logout().await;
        log::debug!("account deleted for {}", remote.username);
        Ok(true)
    }

    /// Re-populate the store after a reload when the hint says we were signed in.
    ///
    /// Runs at most once per service; later calls return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the remote lookup failure; the store stays empty.
    pub async fn restore_on_load(&self) -> Result<bool, RemoteError> {
        if self.restore_attempted.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        let hinted = self.hint.is_set();
        log::debug!("restore check: hint={hinted}");
        if !hinted || self.store.is_authenticated() {
            return Ok(false);
        }
        match self.backend.current_user().await {
            Ok(Some(remote)) => {
                self.store.set(Some(remote.into()));
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => {
                log::warn!("failed to fetch current user: {err}");
                Err(err)
            }
        }
    }

    fn begin_session(&self, user: User) {
        self.store.set(Some(user));
        self.hint.set();
    }
}
