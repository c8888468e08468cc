//! State of one catalog page: fetched ratings, filters, sort and detail view

use serde::Serialize;

use super::{facets, filter_and_sort, DetailNavigator, Facets, FilterState, NavigateDirection, SortSelection};
use crate::models::Rating;

/// Message shown when the rating list could not be fetched
pub const LOAD_FAILED_MESSAGE: &str = "We couldn't load the ratings. Please refresh to try again.";

/// Progress of the one-per-page-load ratings fetch
#[derive(Debug, Clone, PartialEq)]
pub enum RatingsLoad {
    Loading,
    Ready(Vec<Rating>),
    Failed { message: String },
}

/// "Showing N of M items"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} of {} items", self.shown, self.total)
    }
}

/// Catalog page state, created when the page mounts and dropped when the
/// user navigates away. Filters and sort are never persisted.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    load: RatingsLoad,
    facets: Facets,
    filters: FilterState,
    sort: Option<SortSelection>,
    navigator: DetailNavigator,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSession {
    pub fn new() -> Self {
        Self {
            load: RatingsLoad::Loading,
            facets: Facets::default(),
            filters: FilterState::default(),
            sort: None,
            navigator: DetailNavigator::new(),
        }
    }

    /// Record the outcome of the ratings fetch
    pub fn finish_load(&mut self, result: Result<Vec<Rating>, String>) {
        match result {
            Ok(ratings) => {
                self.facets = facets(&ratings);
                self.load = RatingsLoad::Ready(ratings);
            }
            Err(_) => {
                self.facets = Facets::default();
                self.load = RatingsLoad::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }

    pub fn load_state(&self) -> &RatingsLoad {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, RatingsLoad::Loading)
    }

    /// User-facing error, if the fetch failed
    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            RatingsLoad::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Full fetched list in store order (empty until loaded)
    pub fn ratings(&self) -> &[Rating] {
        match &self.load {
            RatingsLoad::Ready(ratings) => ratings.as_slice(),
            _ => &[],
        }
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortSelection> {
        self.sort
    }

    /// Replace the filter state; thresholds are clamped onto the 0-10 scale
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters.clamped();
    }

    pub fn set_sort(&mut self, sort: Option<SortSelection>) {
        self.sort = sort;
    }

    /// Clear every filter and the sort selection
    pub fn reset(&mut self) {
        self.filters = FilterState::default();
        self.sort = None;
    }

    /// Ratings currently visible, in display order
    pub fn visible(&self) -> Vec<&Rating> {
        filter_and_sort(self.ratings(), &self.filters, self.sort)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.visible().len(),
            total: self.ratings().len(),
        }
    }

    /// Open the detail view for the rating with `id`; false if there is none
    pub fn open(&mut self, id: i32) -> bool {
        let Some(rating) = self.ratings().iter().find(|r| r.id == id).cloned() else {
            return false;
        };
        self.navigator.open(rating);
        true
    }

    pub fn close(&mut self) {
        self.navigator.close();
    }

    pub fn selected(&self) -> Option<&Rating> {
        self.navigator.selected()
    }

    /// Step through the visible list from the open rating
    pub fn navigate(&mut self, direction: NavigateDirection) -> Option<&Rating> {
        // Borrow fields directly so the navigator can be borrowed mutably.
        let ratings: &[Rating] = match &self.load {
            RatingsLoad::Ready(ratings) => ratings.as_slice(),
            _ => &[],
        };
        let visible = filter_and_sort(ratings, &self.filters, self.sort);
        self.navigator.navigate(direction, &visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(id: i32, name: &str, overall: i32) -> Rating {
        Rating {
            id,
            cheese_name: name.to_string(),
            kind: if id % 2 == 0 { "Soft" } else { "Hard" }.to_string(),
            origin: "France".to_string(),
            overall_rating: overall,
            flavor_intensity: 5,
            complexity: 5,
            creaminess: 5,
            tasting_notes: None,
            pairing_suggestions: None,
            image_url: None,
            affiliate_options: Vec::new(),
        }
    }

    fn loaded() -> CatalogSession {
        let mut session = CatalogSession::new();
        session.finish_load(Ok(vec![
            rating(1, "Comté", 9),
            rating(2, "Brie", 7),
            rating(3, "Mimolette", 8),
        ]));
        session
    }

    #[test]
    fn test_starts_loading() {
        let session = CatalogSession::new();
        assert!(session.is_loading());
        assert!(session.visible().is_empty());
        assert_eq!(session.summary().to_string(), "Showing 0 of 0 items");
    }

    #[test]
    fn test_failed_load_is_distinct_from_loading() {
        let mut session = CatalogSession::new();
        session.finish_load(Err("connection refused".to_string()));
        assert!(!session.is_loading());
        assert_eq!(session.load_error(), Some(LOAD_FAILED_MESSAGE));
        assert!(session.ratings().is_empty());
    }

    #[test]
    fn test_summary_and_facets() {
        let mut session = loaded();
        assert_eq!(session.facets().types, vec!["Hard", "Soft"]);
        session.set_filters(FilterState {
            min_overall_rating: 8,
            ..Default::default()
        });
        assert_eq!(session.summary(), ResultSummary { shown: 2, total: 3 });
    }

    #[test]
    fn test_set_filters_clamps() {
        let mut session = loaded();
        session.set_filters(FilterState {
            min_creaminess: 40,
            ..Default::default()
        });
        assert_eq!(session.filters().min_creaminess, 10);
    }

    #[test]
    fn test_reset_clears_filters_and_sort() {
        let mut session = loaded();
        session.set_filters(FilterState {
            search: "brie".to_string(),
            ..Default::default()
        });
        session.set_sort(SortSelection::parse("name_asc"));
        session.reset();
        assert!(session.filters().is_default());
        assert!(session.sort().is_none());
        assert_eq!(session.visible().len(), 3);
    }

    #[test]
    fn test_navigation_follows_sorted_view() {
        let mut session = loaded();
        session.set_sort(SortSelection::parse("name_asc"));
        assert!(session.open(2));
        // Brie -> Comté -> Mimolette -> Brie
        assert_eq!(session.navigate(NavigateDirection::Next).map(|r| r.id), Some(1));
        assert_eq!(session.navigate(NavigateDirection::Next).map(|r| r.id), Some(3));
        assert_eq!(session.navigate(NavigateDirection::Next).map(|r| r.id), Some(2));
    }

    #[test]
    fn test_navigation_closes_when_filtered_out() {
        let mut session = loaded();
        assert!(session.open(2));
        session.set_filters(FilterState {
            min_overall_rating: 8,
            ..Default::default()
        });
        assert!(session.navigate(NavigateDirection::Next).is_none());
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_open_unknown_id() {
        let mut session = loaded();
        assert!(!session.open(42));
        assert!(session.selected().is_none());
    }
}
