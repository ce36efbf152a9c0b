//! Session operations: register, login, update profile, clear.
//!
//! ARCHITECTURE
//! ============
//! Each operation marks the store pending, awaits the transport, and feeds
//! exactly one terminal outcome back into the store. Operations never touch
//! state, storage or toasts directly.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors are absorbed here and reduced to a toast reason. A 401 on
//! an authenticated call (update) additionally logs the user out so a
//! server-invalidated session does not linger in the browser. A 401 from login
//! or register only means rejected credentials. Nothing is retried
//! automatically.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::net::api::Transport;
use crate::net::types::{ApiError, LoginPayload, RegisterPayload, UpdateUserPayload, User, user_from_body};
use crate::state::session::{OperationKind, OperationOutcome};
use crate::state::store::SessionStore;

/// Failure reported by a clear hook.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ClearError(pub String);

type ClearHook = Box<dyn Fn() -> Result<(), ClearError>>;

/// Runs session operations against a transport on behalf of a store.
#[derive(Clone)]
pub struct SessionService {
    store: SessionStore,
    transport: Rc<dyn Transport>,
    clear_hooks: Rc<RefCell<Vec<ClearHook>>>,
}

impl SessionService {
    #[must_use]
    pub fn new(store: SessionStore, transport: Rc<dyn Transport>) -> Self {
        Self { store, transport, clear_hooks: Rc::new(RefCell::new(Vec::new())) }
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Register client state (job lists, form drafts) that `clear` resets
    /// before the user is logged out.
    pub fn on_clear(&self, hook: impl Fn() -> Result<(), ClearError> + 'static) {
        self.clear_hooks.borrow_mut().push(Box::new(hook));
    }

    /// Create an account and sign in as it.
    pub async fn register(&self, payload: &RegisterPayload) -> OperationOutcome {
        self.run(OperationKind::Register, payload).await
    }

    pub async fn login(&self, payload: &LoginPayload) -> OperationOutcome {
        self.run(OperationKind::Login, payload).await
    }

    /// Update the signed-in user's profile, authenticated with their token.
    pub async fn update(&self, payload: &UpdateUserPayload) -> OperationOutcome {
        self.run(OperationKind::Update, payload).await
    }

    /// Reset registered client state, then log out locally with `message`.
    ///
    /// Purely local: no backend call is involved. If a hook fails the session
    /// is left as it was and only a generic error toast is shown.
    #[allow(clippy::unused_async)]
    pub async fn clear(&self, message: Option<String>) {
        log::debug!("session: clear dispatched");
        let reset = self.clear_hooks.borrow().iter().try_for_each(|hook| hook());
        match reset {
            Ok(()) => self.store.logout(message),
            Err(e) => {
                log::warn!("session: clear failed: {e}");
                self.store.on_clear_failure();
            }
        }
    }

    async fn run<P: Serialize>(&self, kind: OperationKind, payload: &P) -> OperationOutcome {
        self.store.begin_pending(kind);
        log::debug!("session: {} dispatched", kind.label());

        let outcome = match self.request(kind, payload).await {
            Ok(user) => {
                log::debug!("session: {} fulfilled", kind.label());
                OperationOutcome::Success(user)
            }
            Err(e) => {
                log::warn!("session: {} rejected: {e}", kind.label());
                if kind == OperationKind::Update && e.is_unauthorized() {
                    self.store.logout(None);
                }
                OperationOutcome::Failure(e.reason())
            }
        };
        self.store.dispatch(outcome.clone().into_action(kind));
        outcome
    }

    async fn request<P: Serialize>(&self, kind: OperationKind, payload: &P) -> Result<User, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let bearer = match kind {
            OperationKind::Update => self.store.user().and_then(|u| u.token),
            OperationKind::Register | OperationKind::Login => None,
        };
        let resp = self.transport.call(kind.endpoint(), &body, bearer.as_deref()).await?;
        user_from_body(resp)
    }
}
