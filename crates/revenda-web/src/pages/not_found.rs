//! Fallback page for unknown routes

use leptos::prelude::*;
use leptos_router::components::A;

/// Not-found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Página não encontrada"</h1>
            <A href="/cars">"Ir para a listagem"</A>
        </section>
    }
}
