//! Loading Component

use leptos::*;

/// Centered spinner shown while a page fetches its data.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="d-flex justify-content-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Cargando..."</span>
            </div>
        </div>
    }
}
