//! Clinic REST API Client
//!
//! Thin HTTP layer over the clinic backend.

pub mod client;
pub mod error;

pub use client::{cancel_appointment, fetch_patient, get_api_base, logout, set_api_base};
pub use error::{ApiError, ApiResult};
