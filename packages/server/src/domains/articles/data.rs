//! Article content store.
//!
//! One embedded JSON document per slug. Lookup is an explicit keyed map
//! probe with an explicit miss, not a dynamic import that throws - an
//! unknown slug is a 404, never a crash. Documents whose filename stem and
//! internal slug disagree are dropped at load with an error log, keeping
//! the slug invariant (unique, canonical) intact.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use rust_embed::RustEmbed;

use super::models::{Article, ArticleSummary};

#[derive(RustEmbed)]
#[folder = "content/articles/"]
struct ArticleContent;

lazy_static! {
    static ref ARTICLES: BTreeMap<String, Article> = load_embedded();
}

fn load_embedded() -> BTreeMap<String, Article> {
    let mut articles = BTreeMap::new();
    for path in ArticleContent::iter() {
        let Some(stem) = path.strip_suffix(".json") else {
            continue;
        };
        let Some(file) = ArticleContent::get(&path) else {
            continue;
        };
        match serde_json::from_slice::<Article>(&file.data) {
            Ok(article) if article.slug == stem => {
                articles.insert(article.slug.clone(), article);
            }
            Ok(article) => {
                tracing::error!(
                    path = %path,
                    slug = %article.slug,
                    "article slug does not match filename, skipping"
                );
            }
            Err(error) => {
                tracing::error!(path = %path, error = %error, "article failed to parse, skipping");
            }
        }
    }
    articles
}

impl Article {
    /// All article summaries, slug-ordered.
    pub fn summaries() -> Vec<ArticleSummary> {
        ARTICLES.values().map(ArticleSummary::from).collect()
    }

    /// Keyed lookup by slug; `None` on an unknown slug.
    pub fn find_by_slug(slug: &str) -> Option<&'static Article> {
        ARTICLES.get(slug)
    }
}
