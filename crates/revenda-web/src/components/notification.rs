//! Transient notification snackbar

use leptos::prelude::*;
use revenda_core::{Notifier, Severity};

/// A notification waiting to be shown (or currently visible)
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Text shown to the user
    pub message: String,
    /// Rendering severity
    pub severity: Severity,
}

/// Signal-backed notifier given to the controller
#[derive(Debug, Clone, Copy)]
pub struct SnackbarNotifier {
    notice: RwSignal<Option<Notice>>,
    seq: RwSignal<u64>,
}

impl SnackbarNotifier {
    /// Wrap the notice slot signal.
    pub fn new(notice: RwSignal<Option<Notice>>) -> Self {
        Self {
            notice,
            seq: RwSignal::new(0),
        }
    }
}

impl Notifier for SnackbarNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let seq = self.seq.get_untracked() + 1;
        self.seq.set(seq);
        self.notice.set(Some(Notice {
            message: message.to_string(),
            severity,
        }));

        // Auto-dismiss, unless a newer notification took the slot meanwhile.
        #[cfg(target_arch = "wasm32")]
        {
            let notice = self.notice;
            let seq_signal = self.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(4_000).await;
                if seq_signal.get_untracked() == seq {
                    notice.set(None);
                }
            });
        }
    }
}

/// Snackbar component rendering the current notice, if any
#[component]
pub fn NotificationSnackbar(
    /// Slot holding the visible notice
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let class = move || {
        notice.with(|n| match n.as_ref().map(|n| n.severity) {
            Some(Severity::Error) => "snackbar snackbar-error",
            _ => "snackbar snackbar-success",
        })
    };
    let message =
        move || notice.with(|n| n.as_ref().map(|n| n.message.clone()).unwrap_or_default());

    view! {
        <Show when=move || notice.with(|n| n.is_some())>
            <div class=class>
                <span>{message}</span>
                <button class="snackbar-close" on:click=move |_| notice.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
