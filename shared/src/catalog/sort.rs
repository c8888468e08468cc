//! Sort selections and the rating comparator

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::{Rating, ScoreField};

/// Field a rating list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Score(ScoreField),
    Name,
    Type,
    Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A (field, direction) ordering applied after filtering.
///
/// "No explicit sort" is `Option::<SortSelection>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSelection {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSelection {
    pub const ALL: [SortSelection; 14] = [
        Self::new(SortField::Score(ScoreField::Overall), SortDirection::Desc),
        Self::new(SortField::Score(ScoreField::Overall), SortDirection::Asc),
        Self::new(SortField::Name, SortDirection::Asc),
        Self::new(SortField::Name, SortDirection::Desc),
        Self::new(SortField::Score(ScoreField::Intensity), SortDirection::Desc),
        Self::new(SortField::Score(ScoreField::Intensity), SortDirection::Asc),
        Self::new(SortField::Score(ScoreField::Complexity), SortDirection::Desc),
        Self::new(SortField::Score(ScoreField::Complexity), SortDirection::Asc),
        Self::new(SortField::Score(ScoreField::Creaminess), SortDirection::Desc),
        Self::new(SortField::Score(ScoreField::Creaminess), SortDirection::Asc),
        Self::new(SortField::Type, SortDirection::Asc),
        Self::new(SortField::Type, SortDirection::Desc),
        Self::new(SortField::Origin, SortDirection::Asc),
        Self::new(SortField::Origin, SortDirection::Desc),
    ];

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a wire key such as `name_asc`. Empty or unknown keys mean no sort.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn key(&self) -> &'static str {
        use ScoreField::*;
        use SortDirection::*;
        match (self.field, self.direction) {
            (SortField::Score(Overall), Desc) => "overall_rating_desc",
            (SortField::Score(Overall), Asc) => "overall_rating_asc",
            (SortField::Score(Intensity), Desc) => "intensity_desc",
            (SortField::Score(Intensity), Asc) => "intensity_asc",
            (SortField::Score(Complexity), Desc) => "complexity_desc",
            (SortField::Score(Complexity), Asc) => "complexity_asc",
            (SortField::Score(Creaminess), Desc) => "creaminess_desc",
            (SortField::Score(Creaminess), Asc) => "creaminess_asc",
            (SortField::Name, Asc) => "name_asc",
            (SortField::Name, Desc) => "name_desc",
            (SortField::Type, Asc) => "type_asc",
            (SortField::Type, Desc) => "type_desc",
            (SortField::Origin, Asc) => "origin_asc",
            (SortField::Origin, Desc) => "origin_desc",
        }
    }

    /// Human-readable label for the sort selector
    pub fn label(&self) -> &'static str {
        use ScoreField::*;
        use SortDirection::*;
        match (self.field, self.direction) {
            (SortField::Score(Overall), Desc) => "Overall Rating (High to Low)",
            (SortField::Score(Overall), Asc) => "Overall Rating (Low to High)",
            (SortField::Score(Intensity), Desc) => "Intensity (High to Low)",
            (SortField::Score(Intensity), Asc) => "Intensity (Low to High)",
            (SortField::Score(Complexity), Desc) => "Complexity (High to Low)",
            (SortField::Score(Complexity), Asc) => "Complexity (Low to High)",
            (SortField::Score(Creaminess), Desc) => "Creaminess (High to Low)",
            (SortField::Score(Creaminess), Asc) => "Creaminess (Low to High)",
            (SortField::Name, Asc) => "Name (A-Z)",
            (SortField::Name, Desc) => "Name (Z-A)",
            (SortField::Type, Asc) => "Type (A-Z)",
            (SortField::Type, Desc) => "Type (Z-A)",
            (SortField::Origin, Asc) => "Origin (A-Z)",
            (SortField::Origin, Desc) => "Origin (Z-A)",
        }
    }

    /// Compare two ratings under this selection
    pub fn compare(&self, a: &Rating, b: &Rating) -> Ordering {
        let ascending = match self.field {
            SortField::Score(field) => a.score(field).cmp(&b.score(field)),
            SortField::Name => locale_cmp(&a.cheese_name, &b.cheese_name),
            SortField::Type => locale_cmp(&a.kind, &b.kind),
            SortField::Origin => locale_cmp(&a.origin, &b.origin),
        };
        match self.direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }
}

impl fmt::Display for SortSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SortSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for SortSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::parse(&key)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown sort key: {}", key)))
    }
}

/// Locale-aware string ordering.
///
/// Strings first compare case- and accent-insensitively, then by accents,
/// then lowercase before uppercase, and finally by code point so that
/// distinct strings never compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let secondary = |s: &str| -> Vec<char> { s.chars().flat_map(char::to_lowercase).collect() };
    let tertiary = |s: &str| -> Vec<bool> { s.chars().map(char::is_uppercase).collect() };

    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a).cmp(&tertiary(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercase base letters: NFD-decomposed with combining marks dropped
fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
    {
        match fold_stroke(c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

/// Letters with a stroke or ligature have no canonical decomposition
fn fold_stroke(c: char) -> Option<&'static str> {
    let base = match c {
        'ł' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(base)
}
