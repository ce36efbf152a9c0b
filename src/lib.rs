//! # jobster-session
//!
//! Client-side session layer for the Jobster job-tracking app: the signed-in
//! user, a loading flag and the sidebar toggle, kept in sync with
//! `localStorage` and surfaced through toasts.
//!
//! `state` holds the session state machine and store, `services` the async
//! register/login/update/clear operations, `net` the backend transport, and
//! `util` the browser adapters and Leptos context wiring.

pub mod config;
pub mod net;
pub mod services;
pub mod state;
pub mod util;

/// Install browser logging and the panic hook. No-op outside the browser.
pub fn init_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
