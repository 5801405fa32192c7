//! Loader for the bundled faith-community dataset.
//!
//! The dataset is embedded at compile time and parsed once on first use. A
//! malformed dataset logs an error and yields an empty collection rather
//! than failing startup; the rest of the directory keeps working.

use lazy_static::lazy_static;
use rust_embed::RustEmbed;

use super::models::{FaithCommunity, RawFaithCommunity};

const DATASET: &str = "faith_communities.json";

#[derive(RustEmbed)]
#[folder = "content/faith/"]
struct FaithContent;

lazy_static! {
    static ref COMMUNITIES: Vec<FaithCommunity> = load_embedded();
}

fn load_embedded() -> Vec<FaithCommunity> {
    let Some(file) = FaithContent::get(DATASET) else {
        tracing::error!(dataset = DATASET, "faith community dataset missing from bundle");
        return Vec::new();
    };
    match serde_json::from_slice::<Vec<RawFaithCommunity>>(&file.data) {
        Ok(raw) => {
            let mut communities: Vec<FaithCommunity> =
                raw.into_iter().map(FaithCommunity::from_raw).collect();
            // Source order for this collection is name-ordered, matching
            // the database-backed directories.
            communities.sort_by(|a, b| a.name.cmp(&b.name));
            communities
        }
        Err(error) => {
            tracing::error!(dataset = DATASET, error = %error, "faith community dataset failed to parse");
            Vec::new()
        }
    }
}

impl FaithCommunity {
    /// The full bundled collection, name-ordered.
    pub fn all() -> &'static [FaithCommunity] {
        &COMMUNITIES
    }

    /// Detail-page lookup: slug first, then id.
    pub fn find_by_key(key: &str) -> Option<&'static FaithCommunity> {
        Self::all()
            .iter()
            .find(|c| c.slug.as_deref() == Some(key))
            .or_else(|| Self::all().iter().find(|c| c.id == key))
    }
}
