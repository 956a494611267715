//! Modal confirmation dialog
//!
//! The controller's `ask` call parks on a oneshot channel; the dialog
//! resolves it with the user's choice. Dropping the request (navigating
//! away) counts as a decline.

use futures::channel::oneshot;
use leptos::prelude::*;
use revenda_core::ConfirmationGate;

/// A pending confirmation, rendered as a modal while unresolved
#[derive(Debug)]
pub struct ConfirmRequest {
    prompt: String,
    title: String,
    responder: oneshot::Sender<bool>,
}

/// Signal-backed gate given to the controller
#[derive(Debug, Clone, Copy)]
pub struct DialogGate {
    request: RwSignal<Option<ConfirmRequest>>,
}

impl DialogGate {
    /// Wrap the pending-request slot signal.
    pub const fn new(request: RwSignal<Option<ConfirmRequest>>) -> Self {
        Self { request }
    }
}

impl ConfirmationGate for DialogGate {
    async fn ask(&self, prompt: &str, title: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        self.request.set(Some(ConfirmRequest {
            prompt: prompt.to_string(),
            title: title.to_string(),
            responder: tx,
        }));
        rx.await.unwrap_or(false)
    }
}

/// Modal dialog component for the pending confirmation, if any
#[component]
pub fn ConfirmDialog(
    /// Slot holding the pending confirmation
    request: RwSignal<Option<ConfirmRequest>>,
) -> impl IntoView {
    let respond = move |choice: bool| {
        request.update(|slot| {
            if let Some(req) = slot.take() {
                let _ = req.responder.send(choice);
            }
        });
    };

    let title = move || request.with(|r| r.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let prompt = move || request.with(|r| r.as_ref().map(|r| r.prompt.clone()).unwrap_or_default());

    view! {
        <Show when=move || request.with(|r| r.is_some())>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2 class="dialog-title">{title}</h2>
                    <p class="dialog-prompt">{prompt}</p>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| respond(false)>
                            "Cancelar"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| respond(true)>
                            "Confirmar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
