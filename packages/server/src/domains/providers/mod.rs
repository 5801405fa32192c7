//! Therapy and service providers - the largest directory collection.

pub mod data;
pub mod models;

pub use models::Provider;
