//! Article model.
//!
//! Articles are editorial content (service explainers, scholarship guides,
//! insurance walkthroughs) bundled as one JSON document per slug.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Canonical key; the document's filename stem must match.
    pub slug: String,
    pub title: String,
    /// "service" | "scholarship" | "insurance" | "guide" | ...
    pub category: Option<String>,
    pub summary: Option<String>,
    /// Markdown body.
    pub body: String,
    #[serde(default)]
    pub related_slugs: Vec<String>,
}

/// Listing projection without the body.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub category: Option<String>,
    pub summary: Option<String>,
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            category: article.category.clone(),
            summary: article.summary.clone(),
        }
    }
}
