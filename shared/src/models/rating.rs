//! Expert rating models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::validate_score;

/// Upper bound of every rating score
pub const MAX_SCORE: i32 = 10;

/// Lower bound of every rating score
pub const MIN_SCORE: i32 = 0;

/// One expert-evaluated product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub cheese_name: String,
    /// Category label, e.g. "Soft" or "Blue"
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
    pub overall_rating: i32,
    pub flavor_intensity: i32,
    pub complexity: i32,
    pub creaminess: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairing_suggestions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Purchasable variants; always serialized, empty when there are none
    #[serde(default)]
    pub affiliate_options: Vec<AffiliateOffer>,
}

/// A purchasable variant of a rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffiliateOffer {
    pub affiliate_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    pub unit: String,
}

/// Numeric score attributes of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Overall,
    Intensity,
    Complexity,
    Creaminess,
}

impl Rating {
    /// Read one of the four scores
    pub fn score(&self, field: ScoreField) -> i32 {
        match field {
            ScoreField::Overall => self.overall_rating,
            ScoreField::Intensity => self.flavor_intensity,
            ScoreField::Complexity => self.complexity,
            ScoreField::Creaminess => self.creaminess,
        }
    }

    /// Whether the "buy" section should be shown
    pub fn has_offers(&self) -> bool {
        !self.affiliate_options.is_empty()
    }

    /// Check that every score lies on the fixed 0-10 scale
    pub fn scores_in_range(&self) -> bool {
        [
            self.overall_rating,
            self.flavor_intensity,
            self.complexity,
            self.creaminess,
        ]
        .into_iter()
        .all(|s| validate_score(s).is_ok())
    }
}

impl AffiliateOffer {
    /// Price formatted with two decimals, e.g. "$12.50"
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price.round_dp(2))
    }

    /// Package size without trailing zeros, e.g. "8 oz"
    pub fn display_size(&self) -> String {
        format!("{} {}", self.weight.normalize(), self.unit)
    }

    /// Label for the purchase button, e.g. "Buy 8oz"
    pub fn buy_label(&self) -> String {
        format!("Buy {}{}", self.weight.normalize(), self.unit)
    }
}

/// Render a score as filled stars followed by empty ones, ten in total.
/// Out-of-range scores are clamped.
pub fn render_stars(score: i32) -> String {
    let filled = score.clamp(MIN_SCORE, MAX_SCORE) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(MAX_SCORE as usize - filled));
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn offer(price: &str, weight: &str, unit: &str) -> AffiliateOffer {
        AffiliateOffer {
            affiliate_url: "https://shop.example.com/item".to_string(),
            price: Decimal::from_str(price).unwrap(),
            weight: Decimal::from_str(weight).unwrap(),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(7), "★★★★★★★☆☆☆");
        assert_eq!(render_stars(0), "☆☆☆☆☆☆☆☆☆☆");
        assert_eq!(render_stars(10), "★★★★★★★★★★");
        assert_eq!(render_stars(12).chars().count(), 10);
    }

    #[test]
    fn test_offer_display() {
        let o = offer("12.5", "8.00", "oz");
        assert_eq!(o.display_price(), "$12.50");
        assert_eq!(o.display_size(), "8 oz");
        assert_eq!(o.buy_label(), "Buy 8oz");
    }

    #[test]
    fn test_rating_json_shape() {
        let json = r#"{
            "id": 3,
            "cheese_name": "Comté",
            "type": "Hard",
            "origin": "France",
            "overall_rating": 9,
            "flavor_intensity": 7,
            "complexity": 9,
            "creaminess": 4,
            "tasting_notes": "Nutty, brothy",
            "affiliate_options": [
                {"affiliate_url": "https://a.example.com", "price": 18.99, "weight": 8, "unit": "oz"}
            ]
        }"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.kind, "Hard");
        assert!(rating.has_offers());
        assert!(rating.pairing_suggestions.is_none());
        assert!(rating.scores_in_range());

        let value = serde_json::to_value(&rating).unwrap();
        assert_eq!(value["type"], "Hard");
        assert!(value.get("image_url").is_none());
        assert_eq!(value["affiliate_options"][0]["price"], serde_json::json!(18.99));
        assert!(value["affiliate_options"][0]["weight"].is_number());
    }

    #[test]
    fn test_missing_offers_default_to_empty() {
        let json = r#"{
            "id": 1, "cheese_name": "Brie", "type": "Soft", "origin": "France",
            "overall_rating": 8, "flavor_intensity": 4, "complexity": 5, "creaminess": 9
        }"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert!(!rating.has_offers());
        let value = serde_json::to_value(&rating).unwrap();
        assert_eq!(value["affiliate_options"], serde_json::json!([]));
    }

    #[test]
    fn test_scores_out_of_range() {
        let mut rating: Rating = serde_json::from_str(
            r#"{"id": 1, "cheese_name": "X", "type": "Soft", "origin": "Y",
                "overall_rating": 8, "flavor_intensity": 4, "complexity": 5, "creaminess": 9}"#,
        )
        .unwrap();
        rating.creaminess = 11;
        assert!(!rating.scores_in_range());
    }
}
