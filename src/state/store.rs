//! Session store: owns the live [`SessionState`] and runs transition effects.
//!
//! DESIGN
//! ======
//! `SessionStore` is a cheap cloneable handle. Every clone shares one state
//! cell, one persistence slot and one notifier, so operations and UI code can
//! hold their own copy. The browser is single-threaded, hence `Rc`/`RefCell`;
//! borrows are released before effects or listeners run and never span an
//! `.await`.
//!
//! Overlapping operations are not serialized: whichever resolves last decides
//! the final `is_loading` and `user`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::session::{Effect, OperationKind, SessionAction, SessionState, Transition};
use crate::net::types::User;
use crate::util::notify::Notifier;
use crate::util::storage::UserStorage;

type Listener = Box<dyn Fn(&SessionState)>;

#[derive(Clone)]
pub struct SessionStore {
    state: Rc<RefCell<SessionState>>,
    storage: Rc<dyn UserStorage>,
    notifier: Rc<dyn Notifier>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl SessionStore {
    /// Build a store seeded with whatever user `storage` currently holds.
    #[must_use]
    pub fn new(storage: Rc<dyn UserStorage>, notifier: Rc<dyn Notifier>) -> Self {
        let user = storage.load();
        log::debug!("session: initialized (persisted user: {})", user.is_some());
        Self {
            state: Rc::new(RefCell::new(SessionState::with_user(user))),
            storage,
            notifier,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    #[must_use]
    pub fn is_sidebar_open(&self) -> bool {
        self.state.borrow().is_sidebar_open
    }

    /// Register `listener` to observe every committed state.
    ///
    /// Must not be called from inside a listener.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Apply `action`, commit the next state, then run its effects and notify listeners.
    pub fn dispatch(&self, action: SessionAction) {
        let Transition { state, effects } = self.state.borrow().transition(action);
        *self.state.borrow_mut() = state.clone();
        for effect in effects {
            self.run(effect);
        }
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::PersistUser(user) => self.storage.save(&user),
            Effect::RemoveUser => self.storage.remove(),
            Effect::NotifySuccess(text) => self.notifier.success(&text),
            Effect::NotifyError(text) => self.notifier.error(&text),
        }
    }

    pub fn begin_pending(&self, kind: OperationKind) {
        self.dispatch(SessionAction::Pending(kind));
    }

    pub fn commit_success(&self, kind: OperationKind, user: User) {
        self.dispatch(SessionAction::Fulfilled(kind, user));
    }

    pub fn commit_failure(&self, kind: OperationKind, reason: impl Into<String>) {
        self.dispatch(SessionAction::Rejected(kind, reason.into()));
    }

    pub fn logout(&self, message: Option<String>) {
        self.dispatch(SessionAction::Logout(message));
    }

    pub fn toggle_sidebar(&self) {
        self.dispatch(SessionAction::ToggleSidebar);
    }

    pub fn on_clear_failure(&self) {
        self.dispatch(SessionAction::ClearRejected);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}
