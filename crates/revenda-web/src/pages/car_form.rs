//! Car create/edit form page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Form page component; with an `id` param it edits, without it creates
#[component]
pub fn CarFormPage() -> impl IntoView {
    let params = use_params_map();
    let heading = move || {
        params.with(|p| {
            p.get("id").map_or_else(
                || "Cadastro de carro".to_string(),
                |id| format!("Edição do carro #{id}"),
            )
        })
    };

    view! {
        <section class="car-form-page">
            <h1>{heading}</h1>
            // TODO: wire the create/edit form fields to the backend
            <p>"Formulário em construção."</p>
            <A href="/cars">"Voltar à listagem"</A>
        </section>
    }
}
