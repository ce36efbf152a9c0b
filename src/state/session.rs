//! Session state machine for the current browser user.
//!
//! DESIGN
//! ======
//! Transitions are pure: applying a [`SessionAction`] to a [`SessionState`]
//! yields the next state plus the [`Effect`]s the store must run (persist,
//! notify). The store owns I/O; this module never touches storage or toasts.
//!
//! Every `(operation, outcome)` pair is a distinct action variant so the match
//! in [`SessionState::transition`] stays exhaustive.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::Endpoint;
use crate::net::types::User;

/// Error toast shown when clearing the session fails.
pub const CLEAR_FAILURE_MESSAGE: &str = "There was an error ...!";

/// Session operations that go through the pending/fulfilled/rejected cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Register,
    Login,
    Update,
}

impl OperationKind {
    /// Backend endpoint this operation calls.
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Register => Endpoint::Register,
            Self::Login => Endpoint::Login,
            Self::Update => Endpoint::UpdateUser,
        }
    }

    /// Success toast text for a committed `user`.
    #[must_use]
    pub fn success_message(self, user: &User) -> String {
        match self {
            Self::Register => format!("Hello there, {} !", user.name),
            Self::Login => format!("Welcome back, {} !", user.name),
            Self::Update => "User Updated !".to_owned(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::Update => "update",
        }
    }
}

/// Result of a single session operation.
#[derive(Clone, Debug, PartialEq)]
pub enum OperationOutcome {
    Success(User),
    Failure(String),
}

impl OperationOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Terminal action this outcome commits for `kind`.
    #[must_use]
    pub fn into_action(self, kind: OperationKind) -> SessionAction {
        match self {
            Self::Success(user) => SessionAction::Fulfilled(kind, user),
            Self::Failure(reason) => SessionAction::Rejected(kind, reason),
        }
    }
}

/// Authentication and chrome state for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// True while a register/login/update request is outstanding.
    pub is_loading: bool,
    pub is_sidebar_open: bool,
    pub user: Option<User>,
}

/// Inputs to the session state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Pending(OperationKind),
    Fulfilled(OperationKind, User),
    Rejected(OperationKind, String),
    /// Drop the user; the optional message becomes a success toast.
    Logout(Option<String>),
    ToggleSidebar,
    ClearRejected,
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PersistUser(User),
    RemoveUser,
    NotifySuccess(String),
    NotifyError(String),
}

/// Next state plus the effects to run after committing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl SessionState {
    /// Initial state seeded from a persisted user.
    #[must_use]
    pub fn with_user(user: Option<User>) -> Self {
        Self { user, ..Self::default() }
    }

    /// Apply `action`, returning the next state and the effects it requires.
    #[must_use]
    pub fn transition(&self, action: SessionAction) -> Transition {
        let mut next = self.clone();
        let effects = match action {
            SessionAction::Pending(_) => {
                next.is_loading = true;
                Vec::new()
            }
            SessionAction::Fulfilled(kind, user) => {
                next.is_loading = false;
                let message = kind.success_message(&user);
                next.user = Some(user.clone());
                vec![Effect::PersistUser(user), Effect::NotifySuccess(message)]
            }
            SessionAction::Rejected(_, reason) => {
                next.is_loading = false;
                vec![Effect::NotifyError(reason)]
            }
            SessionAction::Logout(message) => {
                next.user = None;
                next.is_sidebar_open = false;
                let mut effects = vec![Effect::RemoveUser];
                if let Some(message) = message.filter(|m| !m.is_empty()) {
                    effects.push(Effect::NotifySuccess(message));
                }
                effects
            }
            SessionAction::ToggleSidebar => {
                next.is_sidebar_open = !next.is_sidebar_open;
                Vec::new()
            }
            SessionAction::ClearRejected => vec![Effect::NotifyError(CLEAR_FAILURE_MESSAGE.to_owned())],
        };
        Transition { state: next, effects }
    }
}
