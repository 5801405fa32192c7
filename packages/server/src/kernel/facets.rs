//! Facet computation for the filter UI.
//!
//! Facets are derived from the full collection, never from the currently
//! filtered subset: selecting a city does not shrink the denomination list.
//! That is a deliberate simplicity choice carried over from the original
//! list pages, preserved here for behavioral parity.

use serde::Serialize;
use std::collections::BTreeSet;

use super::filter::DirectoryRecord;

/// The distinct values available in each filterable dimension.
///
/// Each list is sorted ascending (case-sensitive lexical order) and
/// deduplicated, so facet output is stable under permutation of the input
/// records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FacetSet {
    pub localities: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Compute the facet value lists for a collection.
///
/// Null/absent fields contribute nothing; a record with no locality simply
/// doesn't appear in the locality facet.
pub fn facets<R: DirectoryRecord>(records: &[R]) -> FacetSet {
    let mut localities = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut tags = BTreeSet::new();

    for record in records {
        if let Some(locality) = record.locality() {
            if !locality.trim().is_empty() {
                localities.insert(locality.to_string());
            }
        }
        if let Some(category) = record.category() {
            if !category.trim().is_empty() {
                categories.insert(category.to_string());
            }
        }
        for tag in record.tags() {
            if !tag.trim().is_empty() {
                tags.insert(tag.to_string());
            }
        }
    }

    FacetSet {
        localities: localities.into_iter().collect(),
        categories: categories.into_iter().collect(),
        tags: tags.into_iter().collect(),
    }
}

/// Narrow a facet option list by a free-text term (search-within-facet).
///
/// Case-insensitive substring; used by the county/city picker so a user can
/// type "hills" and see "Hillsborough" without scrolling. Narrowing the
/// displayed options never touches selection state.
pub fn search_values(values: &[String], term: &str) -> Vec<String> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return values.to_vec();
    }
    values
        .iter()
        .filter(|value| value.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
