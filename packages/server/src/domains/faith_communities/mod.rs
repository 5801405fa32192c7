//! Faith communities - churches, synagogues, and worship spaces with
//! autism-friendly accommodations.
//!
//! Unlike the database-backed directories, this collection ships as a
//! bundled JSON dataset maintained by hand.

pub mod data;
pub mod models;

pub use models::FaithCommunity;
