//! UI Components
//!
//! Reusable Leptos components shared by the dashboards.

pub mod loading;
pub mod nav;

pub use loading::Loading;
pub use nav::Nav;
