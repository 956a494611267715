//! Car listing page
//!
//! Wires the list controller to the signal-backed capability adapters and
//! triggers the initial load once on mount.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use revenda_client::CarsClient;
use revenda_core::{Car, CarListController, Config, ListState};

use crate::components::car_grid::CarGrid;
use crate::components::confirm_dialog::{ConfirmDialog, ConfirmRequest, DialogGate};
use crate::components::notification::{Notice, NotificationSnackbar, SnackbarNotifier};
use crate::components::waiting::{WaitingHandle, WaitingOverlay};

/// Signal-backed list state; the only mutation is a wholesale replace
/// after a successful fetch.
#[derive(Debug, Clone, Copy)]
struct GridState(RwSignal<Vec<Car>>);

impl ListState for GridState {
    fn replace(&self, cars: Vec<Car>) {
        self.0.set(cars);
    }
}

type Controller =
    CarListController<CarsClient, DialogGate, SnackbarNotifier, WaitingHandle, GridState>;

/// Car listing page component
#[component]
pub fn CarListPage() -> impl IntoView {
    let cars = RwSignal::new(Vec::<Car>::new());
    let waiting = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let confirm = RwSignal::new(None::<ConfirmRequest>);

    let controller: Arc<Controller> = Arc::new(CarListController::new(
        CarsClient::from_config(&Config::default()),
        DialogGate::new(confirm),
        SnackbarNotifier::new(notice),
        WaitingHandle::new(waiting),
        GridState(cars),
    ));

    let load_controller = Arc::clone(&controller);
    Effect::new(move |_| {
        let controller = Arc::clone(&load_controller);
        spawn_local(async move {
            controller.load().await;
        });
    });

    let delete_controller = Arc::clone(&controller);
    let on_delete = Callback::new(move |id: i64| {
        let controller = Arc::clone(&delete_controller);
        spawn_local(async move {
            controller.request_delete(id).await;
        });
    });

    view! {
        <WaitingOverlay visible=waiting />
        <NotificationSnackbar notice=notice />
        <ConfirmDialog request=confirm />

        <section class="car-list-page">
            <h1>"Listagem de carros"</h1>

            <div class="toolbar">
                <A href="/cars/new">
                    <button class="btn btn-primary">"Novo carro"</button>
                </A>
            </div>

            <CarGrid cars=cars on_delete=on_delete />
        </section>
    }
}
