//! Main Leptos application component with routing

use leptos::prelude::*;
use leptos_router::components::{A, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{car_form::CarFormPage, car_list::CarListPage, not_found::NotFound};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Header />
                <div class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/cars" /> } />
                        <Route path=path!("/cars") view=CarListPage />
                        <Route path=path!("/cars/new") view=CarFormPage />
                        <Route path=path!("/cars/:id") view=CarFormPage />
                    </Routes>
                </div>
            </main>
        </Router>
    }
}

/// Application header with navigation
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">
                    <A href="/cars">"Revenda"</A>
                </h1>
                <nav class="nav">
                    <A href="/cars">"Carros"</A>
                </nav>
            </div>
        </header>
    }
}
