//! Expert rating catalog service

use sqlx::{types::Json, PgPool};

use crate::error::AppResult;
use crate::models::{AffiliateOffer, Rating};

/// Rating service for reading the rating catalog
#[derive(Clone)]
pub struct RatingService {
    db: PgPool,
}

/// Database row for a rating with its aggregated affiliate offers
#[derive(Debug, sqlx::FromRow)]
struct RatingRow {
    id: i32,
    cheese_name: String,
    kind: String,
    origin: String,
    overall_rating: i32,
    flavor_intensity: i32,
    complexity: i32,
    creaminess: i32,
    tasting_notes: Option<String>,
    pairing_suggestions: Option<String>,
    image_url: Option<String>,
    affiliate_options: Json<Vec<AffiliateOffer>>,
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        Rating {
            id: row.id,
            cheese_name: row.cheese_name,
            kind: row.kind,
            origin: row.origin,
            overall_rating: row.overall_rating,
            flavor_intensity: row.flavor_intensity,
            complexity: row.complexity,
            creaminess: row.creaminess,
            tasting_notes: row.tasting_notes,
            pairing_suggestions: row.pairing_suggestions,
            image_url: row.image_url,
            affiliate_options: row.affiliate_options.0,
        }
    }
}

/// One query: every rating with its offers folded into a JSON array
/// (empty when there are none), best overall score first.
const LIST_RATINGS_SQL: &str = r#"
    SELECT r.id, r.cheese_name, r.type AS kind, r.origin,
           r.overall_rating, r.flavor_intensity, r.complexity, r.creaminess,
           r.tasting_notes, r.pairing_suggestions, r.image_url,
           COALESCE(
               json_agg(
                   json_build_object(
                       'affiliate_url', a.affiliate_url,
                       'price', a.price,
                       'weight', a.weight,
                       'unit', a.unit
                   ) ORDER BY a.id
               ) FILTER (WHERE a.id IS NOT NULL),
               '[]'::json
           ) AS affiliate_options
    FROM expert_food_ratings r
    LEFT JOIN affiliate_links a ON a.cheese_rating_id = r.id
    GROUP BY r.id
    ORDER BY r.overall_rating DESC, r.id ASC
"#;

impl RatingService {
    /// Create a new RatingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get every rating in the store's default order
    pub async fn list_ratings(&self) -> AppResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingRow>(LIST_RATINGS_SQL)
            .fetch_all(&self.db)
            .await?;

        let ratings: Vec<Rating> = rows.into_iter().map(Rating::from).collect();
        tracing::debug!(count = ratings.len(), "Fetched ratings");

        for rating in ratings.iter().filter(|r| !r.scores_in_range()) {
            tracing::warn!(rating_id = rating.id, "Rating has a score outside 0-10");
        }

        Ok(ratings)
    }
}
