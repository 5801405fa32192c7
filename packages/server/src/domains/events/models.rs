//! Event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ContactInfo, EventId};
use crate::kernel::{Coordinates, DirectoryRecord};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: EventId,
    pub slug: Option<String>,
    pub name: String,
    pub description: Option<String>,

    /// "Support Group", "Sensory-Friendly Outing", "Training", ...
    pub category: Option<String>,

    // When
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,

    // Where
    pub venue: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Contact / registration
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub contact: ContactInfo,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Whether the event is still upcoming (or has no start date at all;
    /// undated entries stay listed until removed upstream).
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        match (self.starts_at, self.ends_at) {
            (_, Some(ends_at)) => ends_at >= now,
            (Some(starts_at), None) => starts_at >= now,
            (None, None) => true,
        }
    }
}

impl DirectoryRecord for Event {
    fn name(&self) -> &str {
        &self.name
    }

    fn locality(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> Vec<&str> {
        Event::tags(self).iter().map(String::as_str).collect()
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.venue.as_deref());
        fields.extend(self.city.as_deref());
        fields.extend(self.category.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(name: &str) -> Event {
        Event {
            id: EventId::new(),
            slug: None,
            name: name.to_string(),
            description: None,
            category: None,
            starts_at: None,
            ends_at: None,
            venue: None,
            street_address: None,
            city: None,
            county: None,
            state: None,
            zip: None,
            latitude: None,
            longitude: None,
            contact: ContactInfo::default(),
            tags: None,
            verified: false,
            verified_at: None,
        }
    }

    #[test]
    fn upcoming_respects_end_date_for_multi_day_events() {
        let now = Utc::now();
        let mut e = event("Walk for Autism");
        e.starts_at = Some(now - Duration::days(1));
        e.ends_at = Some(now + Duration::days(1));
        assert!(e.is_upcoming(now));

        e.ends_at = Some(now - Duration::hours(1));
        assert!(!e.is_upcoming(now));
    }

    #[test]
    fn undated_events_stay_listed() {
        assert!(event("Monthly Support Group").is_upcoming(Utc::now()));
    }

    #[test]
    fn past_single_day_event_is_not_upcoming() {
        let now = Utc::now();
        let mut e = event("Sensory Movie Night");
        e.starts_at = Some(now - Duration::days(2));
        assert!(!e.is_upcoming(now));
    }
}
