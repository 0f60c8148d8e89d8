//! Clinic Appointment Dashboards
//!
//! Browser frontend for a physiotherapy practice, built with Leptos (WASM).
//!
//! # Features
//!
//! - Role-specific dashboards (patient, kinesiólogo, secretaría)
//! - Appointment listing split into pending and completed
//! - Appointment cancellation with confirmation
//! - Cookie-session logout per role
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the clinic REST backend over HTTP; the session
//! token travels in a cookie attached by the browser to every request.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
