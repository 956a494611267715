//! List view controller
//!
//! Owns the choreography of the car-list screen: bracket every network
//! operation with the waiting overlay, gate deletion behind an explicit
//! confirmation, and surface every outcome through the notification area.
//! Errors never escape the controller; a backend failure becomes a
//! notification, not a crash.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::capabilities::{
    CarsGateway, ConfirmationGate, ListState, Notifier, Severity, WaitingIndicator,
};

/// Prompt shown before deleting a record
pub const DELETE_PROMPT: &str = "Deseja realmente excluir este item?";

/// Title of the deletion confirmation dialog
pub const DELETE_TITLE: &str = "Confirmar operação";

/// Notification shown after a successful deletion
pub const DELETE_SUCCESS_MESSAGE: &str = "Item excluído com sucesso.";

/// Drives the car-list screen against the injected capabilities.
///
/// Operations run as single linear async sequences. Overlapping invocations
/// (a second click while a request is suspended) are ignored via an
/// in-flight flag.
pub struct CarListController<G, C, N, W, S> {
    gateway: G,
    confirm: C,
    notifier: N,
    waiting: W,
    list: S,
    busy: AtomicBool,
}

impl<G, C, N, W, S> CarListController<G, C, N, W, S>
where
    G: CarsGateway,
    C: ConfirmationGate,
    N: Notifier,
    W: WaitingIndicator,
    S: ListState,
{
    /// Create a controller over the given capabilities.
    pub const fn new(gateway: G, confirm: C, notifier: N, waiting: W, list: S) -> Self {
        Self {
            gateway,
            confirm,
            notifier,
            waiting,
            list,
            busy: AtomicBool::new(false),
        }
    }

    /// Refresh the list from the backend.
    ///
    /// On success the list is replaced wholesale with the fetched sequence;
    /// on failure an error notification is emitted and the list is left
    /// untouched. The waiting overlay is hidden on every exit path.
    pub async fn load(&self) {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!("load ignored, another operation is in flight");
            return;
        }
        self.load_inner().await;
        self.busy.store(false, Ordering::SeqCst);
    }

    /// Delete the record with `id` after user confirmation.
    ///
    /// A declined confirmation is a silent no-op. A confirmed deletion is
    /// followed by a full refetch, never by a local splice, so the grid
    /// keeps reflecting the last confirmed server read.
    pub async fn request_delete(&self, id: i64) {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!(id, "delete ignored, another operation is in flight");
            return;
        }
        self.delete_flow(id).await;
        self.busy.store(false, Ordering::SeqCst);
    }

    async fn load_inner(&self) {
        self.waiting.show();
        match self.gateway.fetch_all().await {
            Ok(cars) => {
                debug!(count = cars.len(), "car list refreshed");
                self.list.replace(cars);
            }
            Err(e) => {
                warn!(error = %e, "failed to load car list");
                self.notifier.notify(&format!("ERRO: {e}"), Severity::Error);
            }
        }
        self.waiting.hide();
    }

    async fn delete_flow(&self, id: i64) {
        if !self.confirm.ask(DELETE_PROMPT, DELETE_TITLE).await {
            debug!(id, "deletion declined by user");
            return;
        }

        // The delete request gets its own waiting bracket; the reload below
        // opens a second one, so the overlay toggles hide-show-hide across
        // a successful deletion.
        self.waiting.show();
        let outcome = self.gateway.delete(id).await;
        self.waiting.hide();

        match outcome {
            Ok(()) => {
                self.load_inner().await;
                self.notifier
                    .notify(DELETE_SUCCESS_MESSAGE, Severity::Success);
            }
            Err(e) => {
                warn!(id, error = %e, "failed to delete car");
                self.notifier.notify(&format!("ERRO: {e}"), Severity::Error);
            }
        }
    }
}
