//! Landing Page
//!
//! Root route. Logout and failed dashboard loads land here; the login
//! form itself is served by the backend flow, so this page only frames
//! the entry point.

use leptos::*;

/// Landing page at `/`.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container pt-5 text-center">
            <h1 class="mb-3">"Mi Sitio"</h1>
            <p class="text-secondary mb-4">
                "Gestión de turnos de kinesiología."
            </p>
            <p class="text-secondary">
                "Iniciá sesión para acceder a tu panel."
            </p>
        </div>
    }
}
