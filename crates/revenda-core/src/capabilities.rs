//! Capability traits consumed by the list controller
//!
//! The screen's UI concerns (dialog, notification, waiting overlay) and its
//! remote data access are injected capabilities, so the controller can be
//! driven by the Leptos adapters in production and by scripted fakes in
//! tests.
//!
//! Everything runs on one logical thread (the browser event loop in
//! production, a current-thread runtime in tests), so the async traits do
//! not require `Send` futures.

use crate::error::Result;
use crate::types::Car;

/// Remote data access for car records.
///
/// `fetch_all` must return records ordered by id ascending; ordering is the
/// backend's job and the controller stores whatever sequence it receives.
#[allow(async_fn_in_trait)]
pub trait CarsGateway {
    /// Fetch the full record list.
    async fn fetch_all(&self) -> Result<Vec<Car>>;

    /// Delete one record by id.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Modal confirmation before destructive actions.
#[allow(async_fn_in_trait)]
pub trait ConfirmationGate {
    /// Present `prompt` under `title` and resolve to the user's choice.
    async fn ask(&self, prompt: &str, title: &str) -> bool;
}

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
}

/// Transient user notifications
pub trait Notifier {
    /// Show `message` with the given severity.
    fn notify(&self, message: &str, severity: Severity);
}

/// Full-view waiting overlay shown while a request is in flight
pub trait WaitingIndicator {
    /// Make the overlay visible.
    fn show(&self);

    /// Hide the overlay.
    fn hide(&self);
}

/// The in-memory record list.
///
/// The only mutation is a wholesale replace after a successful fetch; the
/// displayed list always reflects the last confirmed server read.
pub trait ListState {
    /// Replace the whole list with `cars`.
    fn replace(&self, cars: Vec<Car>);
}
