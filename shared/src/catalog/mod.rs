//! Client-side rating catalog: filtering, sorting, faceting and detail navigation
//!
//! Everything here operates on a rating list that has already been fetched;
//! nothing in this module performs I/O.

mod filter;
mod navigator;
mod session;
mod sort;

pub use filter::FilterState;
pub use navigator::{DetailNavigator, NavigateDirection};
pub use session::{CatalogSession, RatingsLoad, ResultSummary};
pub use sort::{locale_cmp, SortDirection, SortField, SortSelection};

use serde::Serialize;

use crate::models::Rating;

/// Distinct category and origin labels of a rating list, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub types: Vec<String>,
    pub origins: Vec<String>,
}

/// Apply the filter, then the sort, to `ratings`.
///
/// The output borrows from the input. Without a sort selection the input
/// order is kept; with one, the sort is stable so equal elements keep their
/// input order.
pub fn filter_and_sort<'a>(
    ratings: &'a [Rating],
    filters: &FilterState,
    sort: Option<SortSelection>,
) -> Vec<&'a Rating> {
    let mut visible: Vec<&Rating> = ratings.iter().filter(|r| filters.matches(r)).collect();
    if let Some(selection) = sort {
        visible.sort_by(|a, b| selection.compare(a, b));
    }
    visible
}

/// Collect the category and origin facets of `ratings`
pub fn facets(ratings: &[Rating]) -> Facets {
    let mut out = Facets::default();
    for rating in ratings {
        if !out.types.contains(&rating.kind) {
            out.types.push(rating.kind.clone());
        }
        if !out.origins.contains(&rating.origin) {
            out.origins.push(rating.origin.clone());
        }
    }
    out
}
