//! Patient Dashboard
//!
//! Lists the patient's pending and completed appointments and lets them
//! cancel a pending one. The appointment list is fetched once on mount;
//! the pending/completed split is a derived projection over it, never
//! stored on its own.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::{Loading, Nav};
use crate::state::patient::{partition, Appointment, Patient};
use crate::state::role::Role;

/// Patient dashboard page, mounted at `/pacienteDashboard`.
#[component]
pub fn PatientDashboard() -> impl IntoView {
    let navigate = use_navigate();

    let (patient, set_patient) = create_signal(None::<Patient>);
    let (loading, set_loading) = create_signal(true);
    let (cancel_error, set_cancel_error) = create_signal(None::<String>);

    // Single-shot load on mount. Any failure is treated as an expired or
    // invalid session and sends the user back to the login page with no
    // appointment state set.
    let load_navigate = navigate.clone();
    create_effect(move |_| {
        let navigate = load_navigate.clone();
        spawn_local(async move {
            match api::fetch_patient().await {
                Ok(data) => {
                    set_patient.set(Some(data));
                    set_loading.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("failed to load appointments: {}", e).into(),
                    );
                    navigate("/", Default::default());
                }
            }
        });
    });

    // Derived views over the source list; recomputed after every mutation.
    let pending = create_memo(move |_| {
        patient.with(|p| {
            p.as_ref()
                .map(|p| partition(&p.appointments).0)
                .unwrap_or_default()
        })
    });
    let completed = create_memo(move |_| {
        patient.with(|p| {
            p.as_ref()
                .map(|p| partition(&p.appointments).1)
                .unwrap_or_default()
        })
    });

    // Cancellation: confirm, delete on the backend, then drop the entry
    // from the local list without re-fetching. A declined confirmation
    // issues no request at all.
    let cancel = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("¿Estás seguro de que deseas cancelar este turno?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::cancel_appointment(id).await {
                Ok(()) => {
                    set_patient.update(|p| {
                        if let Some(p) = p {
                            p.remove_appointment(id);
                        }
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("failed to cancel appointment {}: {}", id, e).into(),
                    );
                    set_cancel_error.set(Some(e.user_message()));
                    gloo_timers::callback::Timeout::new(5000, move || {
                        set_cancel_error.set(None);
                    })
                    .forget();
                }
            }
        });
    };

    let request_navigate = navigate.clone();

    view! {
        <Nav role=Role::Patient />

        <div class="dashboard">
            <div class="container pt-4 pb-4">
                // Greeting
                <div class="d-flex justify-content-between align-items-center mb-4">
                    <h1 class="dashboard-title">
                        {move || {
                            patient
                                .get()
                                .map(|p| format!("Bienvenido, {}", p.full_name()))
                                .unwrap_or_default()
                        }}
                    </h1>
                </div>

                // Cancellation failures stay visible until they auto-clear
                {move || {
                    cancel_error.get().map(|msg| view! {
                        <div class="alert alert-danger" role="alert">{msg}</div>
                    })
                }}

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let request_navigate = request_navigate.clone();
                        view! {
                            // Pending appointments
                            <div class="dashboard-card mb-4">
                                <div class="d-flex align-items-center gap-2 mb-3">
                                    <i class="bi bi-clock-history"></i>
                                    <h2 class="section-title">"Turnos Pendientes"</h2>
                                </div>

                                {move || {
                                    let rows = pending.get();
                                    if rows.is_empty() {
                                        view! {
                                            <p class="text-secondary mb-0">
                                                "No hay turnos pendientes."
                                            </p>
                                        }
                                        .into_view()
                                    } else {
                                        rows.into_iter()
                                            .map(|turno| {
                                                let id = turno.id;
                                                view! {
                                                    <div class="appointment-row d-flex justify-content-between align-items-center">
                                                        <AppointmentLine appointment=turno />
                                                        <div class="appointment-actions">
                                                            <button
                                                                class="btn btn-link text-danger p-1"
                                                                on:click=move |_| cancel(id)
                                                            >
                                                                <i class="bi bi-trash"></i>
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }
                                }}

                                <button
                                    class="btn btn-dark w-100 mt-3"
                                    on:click=move |_| request_navigate(
                                        "/turnoNuevoPaciente",
                                        Default::default(),
                                    )
                                >
                                    "Solicitar Nuevo Turno"
                                </button>
                            </div>

                            // Completed appointments
                            <div class="dashboard-card mb-4">
                                <div class="d-flex align-items-center gap-2 mb-3">
                                    <span class="check-icon">
                                        <i class="bi bi-check-lg"></i>
                                    </span>
                                    <h2 class="section-title">"Turnos Asistidos"</h2>
                                </div>

                                {move || {
                                    let rows = completed.get();
                                    if rows.is_empty() {
                                        view! {
                                            <p class="text-secondary mb-0">
                                                "Todavía no asististe a ningún turno."
                                            </p>
                                        }
                                        .into_view()
                                    } else {
                                        rows.into_iter()
                                            .map(|turno| {
                                                view! {
                                                    <div class="appointment-row d-flex align-items-center">
                                                        <AppointmentLine appointment=turno />
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }
                                }}
                            </div>
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Date, time and practitioner line shared by both sections.
#[component]
fn AppointmentLine(appointment: Appointment) -> impl IntoView {
    view! {
        <div class="d-flex align-items-center">
            <span class="appointment-icon me-2">
                <i class="bi bi-calendar"></i>
            </span>
            <span class="me-2">{appointment.display_date()}</span>
            <span class="appointment-icon me-2">
                <i class="bi bi-clock"></i>
            </span>
            <span class="me-2">{appointment.time.clone()}</span>
            <span class="text-secondary">
                {format!("- Lic. {}", appointment.practitioner.full_name())}
            </span>
        </div>
    }
}
