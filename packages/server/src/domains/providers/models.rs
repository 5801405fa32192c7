//! Provider model - therapy and service providers.
//!
//! Rows live in the hosted database's `resources` table with
//! `resource_type = 'provider'`. The client side of this system never
//! mutates a provider; rows are created and edited by the content team
//! through the hosted backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ContactInfo, ProviderId};
use crate::kernel::{Coordinates, DirectoryRecord};

/// A therapy/service provider listing.
///
/// Tag dimensions (`services`, `insurances`, `scholarships`) are nullable
/// upstream; accessors treat null as empty so a malformed row filters as
/// "matches nothing" rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Provider {
    pub id: ProviderId,
    /// URL-safe detail-page key; null on legacy rows, which are addressed
    /// by id instead.
    pub slug: Option<String>,
    pub name: String,
    pub description: Option<String>,

    // Location
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub contact: ContactInfo,

    // Tag dimensions
    #[serde(default)]
    pub services: Option<Vec<String>>,
    #[serde(default)]
    pub insurances: Option<Vec<String>>,
    #[serde(default)]
    pub scholarships: Option<Vec<String>>,

    // Editorial verification
    #[serde(default)]
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl Provider {
    pub fn services(&self) -> &[String] {
        self.services.as_deref().unwrap_or_default()
    }

    pub fn insurances(&self) -> &[String] {
        self.insurances.as_deref().unwrap_or_default()
    }

    pub fn scholarships(&self) -> &[String] {
        self.scholarships.as_deref().unwrap_or_default()
    }
}

impl DirectoryRecord for Provider {
    fn name(&self) -> &str {
        &self.name
    }

    /// Providers facet by county, not city.
    fn locality(&self) -> Option<&str> {
        self.county.as_deref()
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> Vec<&str> {
        self.services()
            .iter()
            .chain(self.insurances())
            .chain(self.scholarships())
            .map(String::as_str)
            .collect()
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    /// Search covers city as well as the county facet.
    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.city.as_deref());
        fields.extend(self.county.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{filter, Criteria};

    fn provider(name: &str, county: Option<&str>, services: Option<Vec<&str>>) -> Provider {
        Provider {
            id: ProviderId::new(),
            slug: None,
            name: name.to_string(),
            description: None,
            street_address: None,
            city: None,
            county: county.map(str::to_string),
            state: Some("FL".to_string()),
            zip: None,
            latitude: None,
            longitude: None,
            contact: ContactInfo::default(),
            services: services.map(|s| s.into_iter().map(str::to_string).collect()),
            insurances: None,
            scholarships: None,
            verified: false,
            verified_at: None,
        }
    }

    #[test]
    fn null_tag_dimensions_read_as_empty() {
        let p = provider("A", None, None);
        assert!(p.services().is_empty());
        assert!(p.tags().is_empty());
    }

    #[test]
    fn tags_concatenate_all_dimensions() {
        let mut p = provider("A", None, Some(vec!["ABA Therapy"]));
        p.insurances = Some(vec!["Aetna".to_string()]);
        p.scholarships = Some(vec!["FES-UA".to_string()]);
        assert_eq!(p.tags(), vec!["ABA Therapy", "Aetna", "FES-UA"]);
    }

    #[test]
    fn filters_by_county_and_normalized_service() {
        let records = vec![
            provider("Bright Steps", Some("Hillsborough"), Some(vec!["ABA Therapy"])),
            provider("Quiet Minds", Some("Miami-Dade"), None),
        ];
        let criteria = Criteria {
            localities: vec!["Hillsborough".to_string()],
            tags: vec!["aba-therapy".to_string()],
            ..Default::default()
        };
        let matched = filter(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Bright Steps");
    }

    #[test]
    fn search_matches_city_field() {
        let mut p = provider("Bright Steps", Some("Hillsborough"), None);
        p.city = Some("Tampa".to_string());
        let records = vec![p, provider("Quiet Minds", Some("Miami-Dade"), None)];
        let criteria = Criteria {
            search: "tamp".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&records, &criteria).len(), 1);
    }
}
