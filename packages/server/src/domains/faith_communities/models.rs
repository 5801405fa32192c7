//! Faith community model.
//!
//! The bundled dataset uses PascalCase keys and a pipe-delimited
//! accommodation string, plus two standalone capability flags that predate
//! the tag column. [`FaithCommunity::from_raw`] folds all of that into one
//! accommodation list so the filter engine sees a uniform record.

use serde::{Deserialize, Serialize};

use crate::kernel::{tag, Coordinates, DirectoryRecord};

/// A dataset row as it appears in `content/faith_communities.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFaithCommunity {
    #[serde(rename = "Id")]
    pub id: Option<u32>,
    #[serde(rename = "Slug")]
    pub slug: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Zip")]
    pub zip: Option<String>,
    #[serde(rename = "Denomination")]
    pub denomination: Option<String>,
    /// Pipe-delimited, e.g. "Sensory Room|Quiet Space|Trained Staff".
    #[serde(rename = "AccommodationTags")]
    pub accommodation_tags: Option<String>,
    #[serde(rename = "SensoryRoom", default)]
    pub sensory_room: bool,
    #[serde(rename = "AlternativeService", default)]
    pub alternative_service: bool,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Verified", default)]
    pub verified: bool,
}

/// A faith community as served by the API.
#[derive(Debug, Clone, Serialize)]
pub struct FaithCommunity {
    /// Dataset row number as a string, or the slug when the row has no
    /// numeric id. Opaque; unique within the collection.
    pub id: String,
    pub slug: Option<String>,
    pub name: String,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub denomination: Option<String>,
    pub accommodations: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub verified: bool,
}

impl FaithCommunity {
    pub fn from_raw(raw: RawFaithCommunity) -> Self {
        let mut accommodations = raw
            .accommodation_tags
            .as_deref()
            .map(tag::split_delimited)
            .unwrap_or_default();
        if raw.sensory_room && !tag::any_match("sensory-room", &accommodations) {
            accommodations.push("Sensory Room".to_string());
        }
        if raw.alternative_service && !tag::any_match("alternative-service", &accommodations) {
            accommodations.push("Alternative Service".to_string());
        }

        let slug = raw.slug.filter(|s| !s.trim().is_empty());
        let id = match raw.id {
            Some(id) => id.to_string(),
            None => slug.clone().unwrap_or_else(|| slugify(&raw.name)),
        };

        Self {
            id,
            slug,
            name: raw.name,
            street_address: raw.address,
            city: raw.city,
            county: raw.county,
            state: raw.state,
            zip: raw.zip,
            denomination: raw.denomination,
            accommodations,
            phone: raw.phone,
            email: raw.email,
            website: raw.website,
            latitude: raw.latitude,
            longitude: raw.longitude,
            verified: raw.verified,
        }
    }
}

impl DirectoryRecord for FaithCommunity {
    fn name(&self) -> &str {
        &self.name
    }

    /// Faith communities facet by city.
    fn locality(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.denomination.as_deref()
    }

    fn tags(&self) -> Vec<&str> {
        self.accommodations.iter().map(String::as_str).collect()
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }
}

/// Derive a URL-safe slug from a display name: lowercase alphanumerics with
/// single hyphens between words.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
