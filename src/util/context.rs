//! Leptos context wiring for the session layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component calls [`provide_session`] once; pages and components
//! call [`use_session`] to run operations through the shared
//! [`SessionService`], or [`use_session_state`] when they only read the
//! mirrored [`SessionState`] signal.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::net::api::HttpTransport;
use crate::services::session::SessionService;
use crate::state::session::SessionState;
use crate::state::store::SessionStore;
use crate::state::toast::ToastState;
use crate::util::notify::ToastNotifier;
use crate::util::storage::BrowserStorage;

/// Reactive handles for the current session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    service: StoredValue<SessionService, LocalStorage>,
    /// Mirror of the store's state, updated after every commit.
    pub state: RwSignal<SessionState>,
    pub toasts: RwSignal<ToastState>,
}

impl SessionContext {
    /// Wrap `service` and mirror its store into a signal.
    #[must_use]
    pub fn new(service: SessionService, toasts: RwSignal<ToastState>) -> Self {
        let state = RwSignal::new(service.store().snapshot());
        service.store().subscribe(move |next| state.set(next.clone()));
        Self { service: StoredValue::new_local(service), state, toasts }
    }

    #[must_use]
    pub fn service(&self) -> SessionService {
        self.service.get_value()
    }

    #[must_use]
    pub fn store(&self) -> SessionStore {
        self.service.with_value(|service| service.store().clone())
    }
}

/// Build the browser session: localStorage persistence, toast notifications,
/// HTTP transport.
#[must_use]
pub fn build_session(config: &SessionConfig) -> SessionContext {
    let toasts = RwSignal::new(ToastState::default());
    let store = SessionStore::new(
        Rc::new(BrowserStorage::new(&config.storage_key)),
        Rc::new(ToastNotifier::new(toasts)),
    );
    let service = SessionService::new(store, Rc::new(HttpTransport::new(&config.api_base_url)));
    SessionContext::new(service, toasts)
}

/// Build the session and provide it to the current reactive owner.
pub fn provide_session(config: &SessionConfig) -> SessionContext {
    let ctx = build_session(config);
    provide_context(ctx);
    ctx
}

/// Fetch the session provided by an ancestor.
///
/// # Panics
///
/// Panics if no ancestor called [`provide_session`].
#[must_use]
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Reactive session state provided by an ancestor.
///
/// # Panics
///
/// Panics if no ancestor called [`provide_session`].
#[must_use]
pub fn use_session_state() -> RwSignal<SessionState> {
    use_session().state
}
