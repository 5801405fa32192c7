//! Informational articles - static, slug-addressed content pages.

pub mod data;
pub mod models;

pub use models::{Article, ArticleSummary};
