//! Daycare model.
//!
//! Daycares carry named boolean capability flags instead of a tag list (a
//! historical artifact of how the dataset was collected). The flags are
//! surfaced to the filter engine as synthesized tags so the same tag
//! predicate works across every directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ContactInfo, DaycareId};
use crate::kernel::{Coordinates, DirectoryRecord};

/// Display names of the capability flags, as they appear in the filter UI.
const TAG_AUTISM_SPECIFIC: &str = "Autism Specific";
const TAG_ACCEPTS_MEDICAID: &str = "Accepts Medicaid";
const TAG_SENSORY_ROOM: &str = "Sensory Room";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Daycare {
    pub id: DaycareId,
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

    /// "Non-Profit" / "For-Profit"; the categorical facet for this
    /// directory.
    pub profit_status: Option<String>,

    // Capability flags
    #[serde(default)]
    pub autism_specific: bool,
    #[serde(default)]
    pub accepts_medicaid: bool,
    #[serde(default)]
    pub sensory_room: bool,

    #[serde(default)]
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl DirectoryRecord for Daycare {
    fn name(&self) -> &str {
        &self.name
    }

    fn locality(&self) -> Option<&str> {
        self.county.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.profit_status.as_deref()
    }

    fn tags(&self) -> Vec<&str> {
        let mut tags = Vec::new();
        if self.autism_specific {
            tags.push(TAG_AUTISM_SPECIFIC);
        }
        if self.accepts_medicaid {
            tags.push(TAG_ACCEPTS_MEDICAID);
        }
        if self.sensory_room {
            tags.push(TAG_SENSORY_ROOM);
        }
        tags
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

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
    use crate::kernel::{filter, Criteria, DirectoryRecord};

    fn daycare(name: &str, county: &str) -> Daycare {
        Daycare {
            id: DaycareId::new(),
            slug: None,
            name: name.to_string(),
            description: None,
            street_address: None,
            city: None,
            county: Some(county.to_string()),
            state: Some("FL".to_string()),
            zip: None,
            latitude: None,
            longitude: None,
            contact: ContactInfo::default(),
            profit_status: None,
            autism_specific: false,
            accepts_medicaid: false,
            sensory_room: false,
            verified: false,
            verified_at: None,
        }
    }

    #[test]
    fn flags_synthesize_tags() {
        let mut d = daycare("Little Steps", "Orange");
        assert!(d.tags().is_empty());
        d.sensory_room = true;
        d.accepts_medicaid = true;
        assert_eq!(d.tags(), vec![TAG_ACCEPTS_MEDICAID, TAG_SENSORY_ROOM]);
    }

    #[test]
    fn flag_filtering_matches_hyphenated_selections() {
        let mut a = daycare("Little Steps", "Orange");
        a.sensory_room = true;
        let b = daycare("Busy Bees", "Orange");
        let records = vec![a, b];
        let criteria = Criteria {
            tags: vec!["sensory-room".to_string()],
            ..Default::default()
        };
        let matched = filter(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Little Steps");
    }

    #[test]
    fn profit_status_is_the_category_facet() {
        let mut d = daycare("Little Steps", "Orange");
        d.profit_status = Some("Non-Profit".to_string());
        assert_eq!(d.category(), Some("Non-Profit"));
    }
}
