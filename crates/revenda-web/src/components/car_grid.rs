//! Schema-driven grid over the car list
//!
//! Data cells come from the column schema in `revenda_core::grid`; the two
//! action cells (edit link, delete trigger) are rendered here and never
//! mutate record data.

use leptos::prelude::*;
use leptos_router::components::A;
use revenda_core::Car;
use revenda_core::grid::{self, Column};

use crate::components::pagination::Pagination;

/// Paginated car grid
#[component]
pub fn CarGrid(
    /// The in-memory record list
    cars: RwSignal<Vec<Car>>,
    /// Fired with the record id when a delete button is clicked
    on_delete: Callback<i64>,
) -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let total_pages = Memo::new(move |_| grid::page_count(cars.with(|c| c.len())));

    // Deleting the last row of the last page shrinks the page count; keep
    // the current page in range.
    Effect::new(move |_| {
        let total = total_pages.get();
        if page.get_untracked() > total {
            page.set(total);
        }
    });

    let visible = move || cars.with(|c| grid::page_slice(c, page.get()).to_vec());

    view! {
        <div class="car-grid">
            <div class="car-grid-header">
                {Column::ALL
                    .iter()
                    .map(|col| {
                        view! {
                            <div class="header-col" style=format!("width: {}px", col.width())>
                                {col.header()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="header-col action-col">"Editar"</div>
                <div class="header-col action-col">"Excluir"</div>
            </div>
            <div class="car-grid-body">
                {move || {
                    visible()
                        .into_iter()
                        .map(|car| view! { <CarRow car on_delete /> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
        <Pagination page=page total_pages=total_pages />
    }
}

/// One grid row
#[component]
fn CarRow(car: Car, on_delete: Callback<i64>) -> impl IntoView {
    let id = car.id;

    view! {
        <div class="car-row">
            {Column::ALL
                .iter()
                .map(|&col| {
                    view! {
                        <div class="car-col" style=format!("width: {}px", col.width())>
                            {grid::cell_text(&car, col)}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="car-col action-col">
                <A href=format!("/cars/{id}")>"Editar"</A>
            </div>
            <div class="car-col action-col">
                <button class="btn btn-delete" on:click=move |_| on_delete.run(id)>
                    "Excluir"
                </button>
            </div>
        </div>
    }
}
