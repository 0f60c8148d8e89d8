//! New Appointment Page
//!
//! Target of the dashboard's "Solicitar Nuevo Turno" button.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::Nav;
use crate::state::role::Role;

/// New-appointment page, mounted at `/turnoNuevoPaciente`.
// TODO: render the booking form here once the turnos POST contract is
// settled with the backend.
#[component]
pub fn NewAppointment() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <Nav role=Role::Patient />

        <div class="dashboard">
            <div class="container pt-4 pb-4">
                <h1 class="dashboard-title mb-4">"Solicitar Nuevo Turno"</h1>

                <div class="dashboard-card mb-4">
                    <p class="text-secondary">
                        "Los turnos nuevos se coordinan telefónicamente con la recepción."
                    </p>
                    <button
                        class="btn btn-outline-primary"
                        on:click=move |_| navigate(
                            Role::Patient.home_route(),
                            Default::default(),
                        )
                    >
                        "Volver al Inicio"
                    </button>
                </div>
            </div>
        </div>
    }
}
