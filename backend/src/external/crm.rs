//! CRM webhook client for forwarding newsletter subscribers

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::SubscribeRequest;

/// CRM webhook client
#[derive(Clone)]
pub struct CrmClient {
    client: Client,
    endpoint: String,
}

/// Payload posted to the CRM webhook
#[derive(Debug, Serialize)]
struct CrmSubscriber<'a> {
    email: &'a str,
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    source: &'static str,
}

impl CrmClient {
    /// Create a new CRM client
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build CRM client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Post a new subscriber to the CRM
    pub async fn forward_subscriber(&self, subscriber: &SubscribeRequest) -> AppResult<()> {
        let payload = CrmSubscriber {
            email: &subscriber.email,
            first_name: subscriber.first_name.as_deref(),
            last_name: subscriber.last_name.as_deref(),
            source: "newsletter_popup",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("CRM request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "CRM returned status {}",
                response.status()
            )));
        }

        tracing::debug!("Subscriber forwarded to CRM");
        Ok(())
    }
}
