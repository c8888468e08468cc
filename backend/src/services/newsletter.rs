//! Newsletter subscription service
//!
//! Validates a signup, stores it, and optionally forwards it to a CRM.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::external::CrmClient;
use crate::models::{NewsletterSubscriber, SubscribeRequest};
use shared::validate_email;

/// Newsletter service for managing subscriptions
#[derive(Clone)]
pub struct NewsletterService {
    db: PgPool,
    crm: Option<CrmClient>,
}

/// Database row for a newsletter subscriber
#[derive(Debug, sqlx::FromRow)]
struct SubscriberRow {
    id: i32,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    subscribed_at: DateTime<Utc>,
    is_subscribed: bool,
}

impl From<SubscriberRow> for NewsletterSubscriber {
    fn from(row: SubscriberRow) -> Self {
        NewsletterSubscriber {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            subscribed_at: row.subscribed_at,
            is_subscribed: row.is_subscribed,
        }
    }
}

impl NewsletterService {
    /// Create a new NewsletterService instance
    pub fn new(db: PgPool, crm: Option<CrmClient>) -> Self {
        Self { db, crm }
    }

    /// Subscribe an email address. Re-subscribing an existing address turns
    /// its subscription back on and fills in any names it lacked.
    pub async fn subscribe(&self, input: SubscribeRequest) -> AppResult<NewsletterSubscriber> {
        let input = prepare_subscription(input)?;

        let row = sqlx::query_as::<_, SubscriberRow>(
            r#"
            INSERT INTO newsletter_subscribers (email, first_name, last_name, subscribed_at, is_subscribed)
            VALUES ($1, $2, $3, NOW(), true)
            ON CONFLICT (email) DO UPDATE
            SET is_subscribed = true,
                first_name = COALESCE(EXCLUDED.first_name, newsletter_subscribers.first_name),
                last_name = COALESCE(EXCLUDED.last_name, newsletter_subscribers.last_name)
            RETURNING id, email, first_name, last_name, subscribed_at, is_subscribed
            "#,
        )
        .bind(&input.email)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .fetch_one(&self.db)
        .await?;
        let subscriber = NewsletterSubscriber::from(row);
        let id = subscriber.id;

        tracing::info!(subscriber_id = id, "Newsletter subscription stored");

        if let Some(crm) = &self.crm {
            // The subscription is already stored; a CRM outage must not fail it.
            if let Err(e) = crm.forward_subscriber(&input).await {
                tracing::warn!(subscriber_id = id, error = %e, "Failed to forward subscriber to CRM");
            }
        }

        Ok(subscriber)
    }
}

/// Normalize and validate a signup before it touches the database
pub fn prepare_subscription(input: SubscribeRequest) -> AppResult<SubscribeRequest> {
    let input = input.normalized();

    if validate_email(&input.email).is_err() {
        return Err(AppError::InvalidEmail);
    }

    if let Err(errors) = input.validate() {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|f| f.to_string())
            .unwrap_or_default();
        return Err(AppError::Validation {
            message: format!("{} is too long", field),
            field,
        });
    }

    Ok(input)
}
