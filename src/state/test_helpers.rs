//! Shared fixtures for session tests: recording notifier, scripted transport,
//! and store builders over in-memory storage.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::store::SessionStore;
use crate::net::api::{Endpoint, Transport};
use crate::net::types::{ApiError, User};
use crate::util::notify::Notifier;
use crate::util::storage::MemoryStorage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Notifier that records every message in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<Notification> {
        self.events.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, text: &str) {
        self.events.borrow_mut().push(Notification::Success(text.to_owned()));
    }

    fn error(&self, text: &str) {
        self.events.borrow_mut().push(Notification::Error(text.to_owned()));
    }
}

/// One recorded transport invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub endpoint: Endpoint,
    pub payload: serde_json::Value,
    pub bearer: Option<String>,
    /// `is_loading` observed on the watched store when the call started.
    pub loading: Option<bool>,
}

struct Scripted {
    yields: usize,
    result: Result<serde_json::Value, ApiError>,
}

/// Transport that replays queued responses, optionally after yielding to the
/// executor a number of times so overlapping calls resolve out of order.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<Call>>,
    watch: RefCell<Option<SessionStore>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, result: Result<serde_json::Value, ApiError>) -> Self {
        self.respond_after(0, result)
    }

    pub fn respond_after(self, yields: usize, result: Result<serde_json::Value, ApiError>) -> Self {
        self.responses.borrow_mut().push_back(Scripted { yields, result });
        self
    }

    /// Record `store.is_loading()` at the start of every call.
    pub fn watch(&self, store: &SessionStore) {
        *self.watch.borrow_mut() = Some(store.clone());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn call(
        &self,
        endpoint: Endpoint,
        payload: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value, ApiError> {
        let loading = self.watch.borrow().as_ref().map(SessionStore::is_loading);
        self.calls.borrow_mut().push(Call {
            endpoint,
            payload: payload.clone(),
            bearer: bearer.map(str::to_owned),
            loading,
        });
        let scripted = self.responses.borrow_mut().pop_front();
        let Some(Scripted { yields, result }) = scripted else {
            return Err(ApiError::Network("no scripted response".to_owned()));
        };
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }
        result
    }
}

/// Body the backend returns on a successful auth call.
pub fn user_body(name: &str) -> serde_json::Value {
    serde_json::json!({ "user": { "name": name, "email": format!("{}@example.com", name.to_lowercase()), "token": format!("tok-{name}") } })
}

pub fn user_with_token(name: &str, token: &str) -> User {
    let mut user = User::named(name);
    user.token = Some(token.to_owned());
    user
}

/// Store wired to fresh in-memory storage and a recording notifier.
pub fn test_store(persisted: Option<User>) -> (SessionStore, Rc<MemoryStorage>, Rc<RecordingNotifier>) {
    let storage = Rc::new(MemoryStorage::new(persisted));
    let notifier = Rc::new(RecordingNotifier::default());
    let store = SessionStore::new(storage.clone(), notifier.clone());
    (store, storage, notifier)
}
