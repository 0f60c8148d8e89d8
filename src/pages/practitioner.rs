//! Practitioner Dashboard
//!
//! Shell for the kinesiólogo's panel: role chrome plus quick links. The
//! practitioner's agenda endpoint is not part of this frontend yet.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::Nav;
use crate::state::role::Role;

/// Practitioner dashboard page, mounted at `/kinesiologoDashboard`.
#[component]
pub fn PractitionerDashboard() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <Nav role=Role::Practitioner />

        <div class="dashboard">
            <div class="container pt-4 pb-4">
                <h1 class="dashboard-title mb-4">"Panel del Kinesiólogo"</h1>

                <div class="dashboard-card mb-4">
                    <div class="d-flex align-items-center gap-2 mb-3">
                        <i class="bi bi-person"></i>
                        <h2 class="section-title">"Mis Datos"</h2>
                    </div>
                    <p class="text-secondary">
                        "Consultá y actualizá tu información personal."
                    </p>
                    <button
                        class="btn btn-dark"
                        on:click=move |_| navigate(
                            Role::Practitioner.profile_route(),
                            Default::default(),
                        )
                    >
                        "Ver Mis Datos"
                    </button>
                </div>
            </div>
        </div>
    }
}
