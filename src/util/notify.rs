//! Notification sinks for session transitions.
//!
//! TRADE-OFFS
//! ==========
//! Sinks are fire-and-forget: the store never learns whether a toast was
//! shown. Auto-dismiss timers only run in the browser; SSR toasts stay queued
//! until the page hydrates and replaces the signal.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Default on-screen lifetime of a toast.
pub const TOAST_DISMISS_MS: u32 = 5000;

/// Receives user-visible success/error messages.
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

/// Notifier that only logs. Used when no UI is mounted.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, text: &str) {
        log::info!("notify: {text}");
    }

    fn error(&self, text: &str) {
        log::warn!("notify: {text}");
    }
}

/// Notifier that queues toasts into a reactive [`ToastState`].
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    dismiss_ms: u32,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts, dismiss_ms: TOAST_DISMISS_MS }
    }

    #[must_use]
    pub fn with_dismiss_ms(mut self, dismiss_ms: u32) -> Self {
        self.dismiss_ms = dismiss_ms;
        self
    }

    #[must_use]
    pub fn toasts(&self) -> RwSignal<ToastState> {
        self.toasts
    }

    fn push(&self, kind: ToastKind, text: &str) {
        let id = self.toasts.try_update(|state| state.push(kind, text));
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            let toasts = self.toasts;
            let dismiss_ms = self.dismiss_ms;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(dismiss_ms).await;
                toasts.update(|state| {
                    state.dismiss(id);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, text: &str) {
        self.push(ToastKind::Success, text);
    }

    fn error(&self, text: &str) {
        self.push(ToastKind::Error, text);
    }
}
