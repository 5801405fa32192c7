//! The directory filter engine and its supporting pieces.
//!
//! Everything here except [`cache`] is pure and synchronous: given a
//! collection already resident in memory and a criteria value, compute the
//! visible subset, the facet lists, and the map projection. No I/O, no
//! shared state, safe to call on every interaction.

pub mod cache;
pub mod facets;
pub mod filter;
pub mod geo;
pub mod tag;

pub use cache::CollectionCache;
pub use facets::{facets, search_values, FacetSet};
pub use filter::{filter, passes, Criteria, DirectoryRecord};
pub use geo::{map_points, mappable, within_radius, Coordinates, MapPoint};
