use super::*;

#[test]
fn toast_notifier_queues_success_and_error() {
    let toasts = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier::new(toasts);
    notifier.success("Welcome back, Ana !");
    notifier.error("Invalid token");

    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].text, "Welcome back, Ana !");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
    assert_eq!(state.toasts[1].text, "Invalid token");
}

#[test]
fn toast_notifier_exposes_its_signal() {
    let toasts = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier::new(toasts).with_dismiss_ms(10);
    notifier.toasts().update(|state| {
        state.push(ToastKind::Success, "direct");
    });
    assert_eq!(toasts.get_untracked().toasts.len(), 1);
}

#[test]
fn log_notifier_is_callable() {
    LogNotifier.success("ok");
    LogNotifier.error("bad");
}
