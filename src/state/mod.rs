//! Client State
//!
//! Session service, role descriptors and the patient dashboard model.

pub mod patient;
pub mod role;
pub mod session;

pub use patient::{partition, Appointment, Patient, Practitioner, Status};
pub use role::Role;
pub use session::{provide_session, use_session, Session};
