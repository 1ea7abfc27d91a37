pub mod doctor;
pub mod json;
pub mod patient;

pub use doctor::{Appointment, Doctor};
pub use patient::Patient;
