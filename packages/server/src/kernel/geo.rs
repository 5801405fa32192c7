//! Geographic helpers for map views.
//!
//! Records without both coordinates are excluded from map rendering
//! entirely; the "near me" flow additionally narrows mappable records to a
//! radius around the user's position.

use serde::{Deserialize, Serialize};

use super::filter::DirectoryRecord;

/// Earth's radius in miles, for haversine distance.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A latitude/longitude pair. Only constructed when both components are
/// known; a record missing either is simply not mappable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates from two optional components; `None` unless both
    /// are present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Great-circle distance to another point, in miles (haversine).
    pub fn distance_miles(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }
}

/// A marker handed to the external map widget.
#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Records that can appear on a map: both coordinates present.
pub fn mappable<'a, R: DirectoryRecord>(records: &[&'a R]) -> Vec<&'a R> {
    records
        .iter()
        .copied()
        .filter(|record| record.coordinates().is_some())
        .collect()
}

/// Narrow mappable records to those within `radius_miles` of `center`.
/// Records without coordinates are excluded, never auto-included.
pub fn within_radius<'a, R: DirectoryRecord>(
    records: &[&'a R],
    center: Coordinates,
    radius_miles: f64,
) -> Vec<&'a R> {
    records
        .iter()
        .copied()
        .filter(|record| match record.coordinates() {
            Some(position) => center.distance_miles(&position) <= radius_miles,
            None => false,
        })
        .collect()
}

/// Project records into map markers, dropping anything unmappable.
pub fn map_points<R: DirectoryRecord>(records: &[&R]) -> Vec<MapPoint> {
    records
        .iter()
        .filter_map(|record| {
            record.coordinates().map(|position| MapPoint {
                latitude: position.latitude,
                longitude: position.longitude,
                label: record.name().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::filter::tests::TestRecord;
    use super::super::filter::{filter, Criteria};
    use super::*;

    const TAMPA: Coordinates = Coordinates {
        latitude: 27.9506,
        longitude: -82.4572,
    };
    const MIAMI: Coordinates = Coordinates {
        latitude: 25.7617,
        longitude: -80.1918,
    };

    #[test]
    fn from_parts_requires_both_components() {
        assert!(Coordinates::from_parts(Some(27.9), Some(-82.4)).is_some());
        assert!(Coordinates::from_parts(Some(27.9), None).is_none());
        assert!(Coordinates::from_parts(None, Some(-82.4)).is_none());
        assert!(Coordinates::from_parts(None, None).is_none());
    }

    #[test]
    fn tampa_to_miami_distance_is_plausible() {
        let miles = TAMPA.distance_miles(&MIAMI);
        // Roughly 205 miles as the crow flies.
        assert!((190.0..220.0).contains(&miles), "got {miles}");
    }

    #[test]
    fn mappable_excludes_records_missing_coordinates() {
        let records = vec![
            TestRecord::new("A").at(TAMPA.latitude, TAMPA.longitude),
            TestRecord::new("B"),
        ];
        let refs: Vec<&TestRecord> = records.iter().collect();
        let on_map = mappable(&refs);
        assert_eq!(on_map.len(), 1);
        assert_eq!(on_map[0].name, "A");
    }

    #[test]
    fn mappable_is_a_subset_of_filtered() {
        let records = vec![
            TestRecord::new("A")
                .locality("Tampa")
                .at(TAMPA.latitude, TAMPA.longitude),
            TestRecord::new("B").locality("Tampa"),
            TestRecord::new("C")
                .locality("Miami")
                .at(MIAMI.latitude, MIAMI.longitude),
        ];
        let criteria = Criteria {
            localities: vec!["Tampa".to_string()],
            ..Default::default()
        };
        let filtered = filter(&records, &criteria);
        let on_map = mappable(&filtered);
        assert!(on_map
            .iter()
            .all(|m| filtered.iter().any(|f| f.name == m.name)));
        assert_eq!(on_map.len(), 1);
    }

    #[test]
    fn within_radius_keeps_nearby_only() {
        let records = vec![
            TestRecord::new("Tampa").at(TAMPA.latitude, TAMPA.longitude),
            TestRecord::new("Miami").at(MIAMI.latitude, MIAMI.longitude),
            TestRecord::new("Nowhere"),
        ];
        let refs: Vec<&TestRecord> = records.iter().collect();
        let near = within_radius(&refs, TAMPA, 25.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].name, "Tampa");
    }

    #[test]
    fn map_points_carry_name_labels() {
        let records = vec![TestRecord::new("A").at(27.0, -82.0), TestRecord::new("B")];
        let refs: Vec<&TestRecord> = records.iter().collect();
        let points = map_points(&refs);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "A");
        assert_eq!(points[0].latitude, 27.0);
    }
}
