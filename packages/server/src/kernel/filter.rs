//! The directory filter engine.
//!
//! Every list page (providers, schools, daycares, faith communities, events)
//! runs the same shape of filter: free-text search, a locality multi-select,
//! a category multi-select, and a tag multi-select. This module generalizes
//! that into one pure function over any type implementing
//! [`DirectoryRecord`].
//!
//! The engine performs no I/O, holds no state, and never fails: malformed
//! or missing fields on a record simply don't match. It is cheap enough to
//! re-run on every keystroke at the observed data scale (low thousands of
//! records per directory).

use serde::{Deserialize, Serialize};

use super::geo::Coordinates;
use super::tag;

/// The filter seam implemented by every directory record type.
///
/// Each directory has its own concrete struct with its own optional-field
/// set; this trait is what the engine needs from all of them.
pub trait DirectoryRecord {
    /// Display name; always present.
    fn name(&self) -> &str;

    /// The geographic facet for this directory: county for providers and
    /// daycares, school district for schools, city for faith communities
    /// and events.
    fn locality(&self) -> Option<&str>;

    /// The categorical facet: denomination, profit status, event category.
    /// Directories without one return `None` for every record.
    fn category(&self) -> Option<&str>;

    /// All tag values carried by the record, across its tag dimensions
    /// (services, insurances, scholarships, accommodations, ...).
    fn tags(&self) -> Vec<&str>;

    /// Geographic position, when both latitude and longitude are known.
    fn coordinates(&self) -> Option<Coordinates>;

    /// Fields the free-text search runs over. Defaults to name, locality,
    /// and category; records with extra searchable fields (e.g. city in
    /// addition to county) override this.
    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name()];
        fields.extend(self.locality());
        fields.extend(self.category());
        fields
    }
}

/// Filter criteria for one render of a directory list.
///
/// A transient value object: built from the request's query parameters,
/// applied, and dropped. Empty fields are inactive and pass everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Criteria {
    /// Free-text search term; case-insensitive substring over the record's
    /// search haystack.
    #[serde(default)]
    pub search: String,
    /// Selected locality values; exact match against the raw stored value.
    #[serde(default)]
    pub localities: Vec<String>,
    /// Selected category values; exact match against the raw stored value.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Selected tag values; AND semantics, normalized bidirectional
    /// substring matching (see [`tag::matches`]).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Criteria {
    /// True when no dimension is active, i.e. `filter` is the identity.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.localities.is_empty()
            && self.categories.is_empty()
            && self.tags.is_empty()
    }
}

/// Apply the criteria to a collection, yielding the passing records in
/// their original order.
///
/// A record passes iff it passes every active dimension:
/// - search: the term (case-insensitive) is a substring of any haystack
///   field; an empty term passes everything.
/// - locality/category: empty selection passes; otherwise the record's raw
///   value must be a member of the selection.
/// - tags: the record must match *every* selected tag (AND semantics). A
///   record with no tags fails any non-empty tag selection.
pub fn filter<'a, R: DirectoryRecord>(records: &'a [R], criteria: &Criteria) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| passes(*record, criteria))
        .collect()
}

/// Whether one record passes the criteria. Exposed for callers that stream
/// or count without collecting.
pub fn passes<R: DirectoryRecord>(record: &R, criteria: &Criteria) -> bool {
    matches_search(record, &criteria.search)
        && matches_selection(record.locality(), &criteria.localities)
        && matches_selection(record.category(), &criteria.categories)
        && matches_tags(record, &criteria.tags)
}

fn matches_search<R: DirectoryRecord>(record: &R, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

fn matches_selection(value: Option<&str>, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(value) => selected.iter().any(|s| s == value),
        None => false,
    }
}

fn matches_tags<R: DirectoryRecord>(record: &R, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let record_tags = record.tags();
    if record_tags.is_empty() {
        return false;
    }
    selected
        .iter()
        .all(|sel| record_tags.iter().any(|tag| tag::matches(sel, tag)))
}
