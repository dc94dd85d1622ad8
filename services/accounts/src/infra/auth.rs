use std::time::Duration;

use anyhow::Context as _;

use crate::domain::repository::TokenValidator;
use crate::error::AccountsServiceError;

/// HTTP client implementing `TokenValidator` against the auth service.
#[derive(Clone)]
pub struct HttpTokenValidator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTokenValidator {
    /// The timeout is mandatory: the auth service sits on the request path
    /// of every guarded endpoint.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AccountsServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build auth HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

impl TokenValidator for HttpTokenValidator {
    async fn validate_token(&self, token: &str) -> bool {
        let url = format!("{}/validate", self.base_url);
        match self.client.get(&url).bearer_auth(token).send().await {
            Ok(resp) => resp.status().is_success(),
            // Fail closed: a transport error never turns into an auth bypass,
            // at the cost of masking outages as invalid tokens.
            Err(e) => {
                tracing::warn!(error = %e, "token validation request failed");
                false
            }
        }
    }

    async fn is_access_token_expired(&self, token: &str) -> Result<bool, AccountsServiceError> {
        let url = format!("{}/is-expired-access-token", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("token expiry request")?;
        let expired: bool = resp.json().await.context("token expiry response body")?;
        Ok(expired)
    }
}
