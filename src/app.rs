//! App Root Component
//!
//! Route table and global providers.

use leptos::*;
use leptos_router::*;

use crate::pages::{
    Home, NewAppointment, PatientDashboard, PractitionerDashboard, Profile, SecretaryDashboard,
};
use crate::state::role::Role;
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Expose the session-cookie service to every component
    provide_session();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/pacienteDashboard" view=PatientDashboard />
                    <Route path="/turnoNuevoPaciente" view=NewAppointment />
                    <Route path="/kinesiologoDashboard" view=PractitionerDashboard />
                    <Route path="/secretariaDashboard" view=SecretaryDashboard />
                    <Route path="/datosPaciente" view=|| view! { <Profile role=Role::Patient /> } />
                    <Route path="/datosKine" view=|| view! { <Profile role=Role::Practitioner /> } />
                    <Route path="/datosSecretaria" view=|| view! { <Profile role=Role::Secretary /> } />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container pt-5 text-center">
            <h1 class="mb-3">"Página no encontrada"</h1>
            <p class="text-secondary mb-4">"La página que buscás no existe."</p>
            <A href="/" class="btn btn-dark">
                "Volver al Inicio"
            </A>
        </div>
    }
}
