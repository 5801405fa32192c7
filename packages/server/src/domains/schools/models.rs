//! School model.
//!
//! Schools facet by district (the geographic dimension families actually
//! search by) and by denomination for private/religious schools. Grade
//! levels, scholarship programs, and accreditations are tag dimensions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ContactInfo, SchoolId};
use crate::kernel::{Coordinates, DirectoryRecord};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct School {
    pub id: SchoolId,
    pub slug: Option<String>,
    pub name: String,
    pub description: Option<String>,

    // Location
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub contact: ContactInfo,

    // Facets and tag dimensions
    pub denomination: Option<String>,
    #[serde(default)]
    pub grade_levels: Option<Vec<String>>,
    #[serde(default)]
    pub scholarships: Option<Vec<String>>,
    #[serde(default)]
    pub accreditations: Option<Vec<String>>,

    #[serde(default)]
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl School {
    pub fn grade_levels(&self) -> &[String] {
        self.grade_levels.as_deref().unwrap_or_default()
    }

    pub fn scholarships(&self) -> &[String] {
        self.scholarships.as_deref().unwrap_or_default()
    }

    pub fn accreditations(&self) -> &[String] {
        self.accreditations.as_deref().unwrap_or_default()
    }
}

impl DirectoryRecord for School {
    fn name(&self) -> &str {
        &self.name
    }

    fn locality(&self) -> Option<&str> {
        self.district.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.denomination.as_deref()
    }

    fn tags(&self) -> Vec<&str> {
        self.grade_levels()
            .iter()
            .chain(self.scholarships())
            .chain(self.accreditations())
            .map(String::as_str)
            .collect()
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.city.as_deref());
        fields.extend(self.district.as_deref());
        fields.extend(self.denomination.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{facets, filter, Criteria};

    fn school(name: &str, district: &str, scholarships: Vec<&str>) -> School {
        School {
            id: SchoolId::new(),
            slug: None,
            name: name.to_string(),
            description: None,
            street_address: None,
            city: None,
            district: Some(district.to_string()),
            state: Some("FL".to_string()),
            zip: None,
            latitude: None,
            longitude: None,
            contact: ContactInfo::default(),
            denomination: None,
            grade_levels: None,
            scholarships: Some(scholarships.into_iter().map(str::to_string).collect()),
            accreditations: None,
            verified: false,
            verified_at: None,
        }
    }

    #[test]
    fn scholarship_selection_uses_and_semantics() {
        let records = vec![
            school("Hope Academy", "Hillsborough", vec!["FES-UA", "FTC"]),
            school("Sunrise School", "Hillsborough", vec!["FES-UA"]),
        ];
        let criteria = Criteria {
            tags: vec!["fes-ua".to_string(), "ftc".to_string()],
            ..Default::default()
        };
        let matched = filter(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Hope Academy");
    }

    #[test]
    fn district_and_denomination_show_up_in_facets() {
        let mut a = school("Hope Academy", "Hillsborough", vec![]);
        a.denomination = Some("Catholic".to_string());
        let b = school("Sunrise School", "Pinellas", vec!["PEP"]);
        let f = facets(&[a, b]);
        assert_eq!(f.localities, vec!["Hillsborough", "Pinellas"]);
        assert_eq!(f.categories, vec!["Catholic"]);
        assert_eq!(f.tags, vec!["PEP"]);
    }
}
