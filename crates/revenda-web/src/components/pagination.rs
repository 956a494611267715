//! Pagination control for the car grid

use leptos::prelude::*;

/// Pagination component
#[component]
pub fn Pagination(
    /// Current page (1-based)
    page: RwSignal<u32>,
    /// Total number of pages
    total_pages: Memo<u32>,
) -> impl IntoView {
    let has_prev = move || page.get() > 1;
    let has_next = move || page.get() < total_pages.get();

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled=move || !has_prev()
                on:click=move |_| {
                    if has_prev() {
                        page.update(|p| *p -= 1);
                    }
                }
            >
                "Anterior"
            </button>

            <span class="pagination-info">
                "Página " {move || page.get()} " de " {move || total_pages.get()}
            </span>

            <button
                class="pagination-btn"
                disabled=move || !has_next()
                on:click=move |_| {
                    if has_next() {
                        page.update(|p| *p += 1);
                    }
                }
            >
                "Próxima"
            </button>
        </div>
    }
}
