//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` is the pure state machine, `store` owns the live state and runs
//! its effects, `toast` models the notification queue the UI renders.

pub mod session;
pub mod store;
pub mod toast;

#[cfg(test)]
pub(crate) mod test_helpers;
