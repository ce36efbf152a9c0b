//! Async operations against the authentication backend.

pub mod session;
