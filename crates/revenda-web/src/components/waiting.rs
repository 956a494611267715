//! Full-view waiting overlay shown while a request is in flight

use leptos::prelude::*;
use revenda_core::WaitingIndicator;

/// Signal-backed handle given to the controller
#[derive(Debug, Clone, Copy)]
pub struct WaitingHandle(RwSignal<bool>);

impl WaitingHandle {
    /// Wrap the visibility signal.
    pub const fn new(visible: RwSignal<bool>) -> Self {
        Self(visible)
    }
}

impl WaitingIndicator for WaitingHandle {
    fn show(&self) {
        self.0.set(true);
    }

    fn hide(&self) {
        self.0.set(false);
    }
}

/// Waiting overlay component
#[component]
pub fn WaitingOverlay(
    /// Visibility flag, toggled by the controller
    visible: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="waiting-overlay">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
