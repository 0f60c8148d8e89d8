//! Navigation Header
//!
//! Shared chrome for every dashboard: brand link, collapse toggler, home
//! button and a profile dropdown with "Mis Datos" and "Cerrar Sesión".
//! The per-role differences (home route, profile route, logout endpoint)
//! come from the [`Role`] descriptor, so the three dashboards render the
//! same component with different parameters.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::role::Role;
use crate::state::session::use_session;

/// Navigation header, parameterized by the logged-in role.
#[component]
pub fn Nav(role: Role) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (error, set_error) = create_signal(None::<String>);
    let (menu_open, set_menu_open) = create_signal(false);
    let (dropdown_open, set_dropdown_open) = create_signal(false);

    let home_navigate = navigate.clone();
    let on_home = move |_| home_navigate(role.home_route(), Default::default());

    let profile_navigate = navigate.clone();
    let on_profile = move |_| profile_navigate(role.profile_route(), Default::default());

    // Single attempt per click; a new attempt clears the previous error.
    // On success the backend has already invalidated the session, so the
    // local cookie is dropped and the user lands back on the login page.
    let on_logout = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_dropdown_open.set(false);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::logout(role.logout_endpoint()).await {
                Ok(()) => {
                    session.clear();
                    navigate("/", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("logout failed: {}", e).into());
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <a class="navbar-brand" href="#">"Mi Sitio"</a>

            <button
                class="navbar-toggler"
                type="button"
                aria-label="Toggle navigation"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span class="navbar-toggler-icon"></span>
            </button>

            <div class=move || {
                if menu_open.get() {
                    "collapse navbar-collapse show"
                } else {
                    "collapse navbar-collapse"
                }
            }>
                <ul class="navbar-nav ms-auto">
                    <li class="nav-item">
                        <button class="btn btn-outline-primary me-2" on:click=on_home>
                            "Inicio"
                        </button>
                    </li>
                    <li class="nav-item dropdown">
                        <button
                            class="btn btn-secondary dropdown-toggle"
                            type="button"
                            on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                        >
                            <i class="bi bi-person"></i>
                        </button>
                        <ul class=move || {
                            if dropdown_open.get() {
                                "dropdown-menu dropdown-menu-end show"
                            } else {
                                "dropdown-menu dropdown-menu-end"
                            }
                        }>
                            <li>
                                <a class="dropdown-item" on:click=on_profile>
                                    "Mis Datos"
                                </a>
                            </li>
                            <li><hr class="dropdown-divider"/></li>
                            <li>
                                <a class="dropdown-item cerrar-sesion" href="#" on:click=on_logout>
                                    "Cerrar Sesión"
                                </a>
                            </li>
                        </ul>
                    </li>
                </ul>
            </div>

            {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}
        </nav>
    }
}
