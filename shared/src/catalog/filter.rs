//! Filter predicates over the rating list

use serde::{Deserialize, Serialize};

use crate::models::{Rating, ScoreField};
use crate::validation::clamp_threshold;

/// User-chosen constraints narrowing the displayed ratings.
///
/// Every predicate is independent; a rating is shown only when all of them
/// pass. Empty strings and zero thresholds are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
    pub min_overall_rating: i32,
    pub min_flavor_intensity: i32,
    pub min_complexity: i32,
    pub min_creaminess: i32,
    pub search: String,
}

impl FilterState {
    /// Threshold configured for a score field
    pub fn threshold(&self, field: ScoreField) -> i32 {
        match field {
            ScoreField::Overall => self.min_overall_rating,
            ScoreField::Intensity => self.min_flavor_intensity,
            ScoreField::Complexity => self.min_complexity,
            ScoreField::Creaminess => self.min_creaminess,
        }
    }

    /// Set a threshold from raw input, clamped onto the 0-10 scale
    pub fn set_threshold(&mut self, field: ScoreField, value: i64) {
        let value = clamp_threshold(value);
        match field {
            ScoreField::Overall => self.min_overall_rating = value,
            ScoreField::Intensity => self.min_flavor_intensity = value,
            ScoreField::Complexity => self.min_complexity = value,
            ScoreField::Creaminess => self.min_creaminess = value,
        }
    }

    /// Copy with every threshold clamped onto the 0-10 scale
    pub fn clamped(mut self) -> Self {
        for field in SCORE_FIELDS {
            let value = self.threshold(field) as i64;
            self.set_threshold(field, value);
        }
        self
    }

    /// True when no predicate constrains the list
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, rating: &Rating) -> bool {
        (self.kind.is_empty() || rating.kind == self.kind)
            && (self.origin.is_empty() || rating.origin == self.origin)
            && SCORE_FIELDS
                .iter()
                .all(|&field| rating.score(field) >= self.threshold(field))
            && self.matches_search(rating)
    }

    fn matches_search(&self, rating: &Rating) -> bool {
        self.search.is_empty()
            || rating
                .cheese_name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}

pub(crate) const SCORE_FIELDS: [ScoreField; 4] = [
    ScoreField::Overall,
    ScoreField::Intensity,
    ScoreField::Complexity,
    ScoreField::Creaminess,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let f: FilterState =
            serde_json::from_str(r#"{"type":"Blue","minOverallRating":7,"search":"stil"}"#).unwrap();
        assert_eq!(f.kind, "Blue");
        assert_eq!(f.min_overall_rating, 7);
        assert_eq!(f.origin, "");
        assert_eq!(f.min_creaminess, 0);
    }

    #[test]
    fn test_clamped() {
        let f = FilterState {
            min_overall_rating: 15,
            min_complexity: -2,
            ..Default::default()
        }
        .clamped();
        assert_eq!(f.min_overall_rating, 10);
        assert_eq!(f.min_complexity, 0);
    }

    #[test]
    fn test_set_threshold() {
        let mut f = FilterState::default();
        f.set_threshold(ScoreField::Creaminess, 99);
        assert_eq!(f.threshold(ScoreField::Creaminess), 10);
        assert!(!f.is_default());
    }
}
