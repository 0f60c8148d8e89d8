//! Profile Page
//!
//! "Mis Datos" for the three roles. One parameterized page instead of a
//! copy per role; the profile endpoints are backend-rendered today, so
//! this page only frames the section.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::Nav;
use crate::state::role::Role;

/// Profile page, mounted at the role's `profile_route()`.
#[component]
pub fn Profile(role: Role) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <Nav role=role />

        <div class="dashboard">
            <div class="container pt-4 pb-4">
                <h1 class="dashboard-title mb-4">
                    {format!("Mis Datos - {}", role.title())}
                </h1>

                <div class="dashboard-card mb-4">
                    <p class="text-secondary">
                        "Tu información personal se administra desde la recepción. "
                        "Para modificar tus datos, comunicate con la clínica."
                    </p>
                    <button
                        class="btn btn-outline-primary"
                        on:click=move |_| navigate(role.home_route(), Default::default())
                    >
                        "Volver al Inicio"
                    </button>
                </div>
            </div>
        </div>
    }
}
