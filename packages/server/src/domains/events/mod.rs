//! Community events - sensory-friendly outings, support meetings, trainings.

pub mod data;
pub mod models;

pub use models::Event;
