//! Browser/environment adapters for the session layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate localStorage, toast and Leptos context glue from
//! the state machine so it stays testable without a browser.

pub mod context;
pub mod notify;
pub mod storage;
