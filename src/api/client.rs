use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use std::time::Duration;
use url::Url;

use crate::api::MessageStore;
use crate::api::models::{MessageRecord, StoreErrorBody};
use crate::config::StoreSettings;
use crate::error::StoreError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct StoreClient {
    pub http: HttpClient,
    pub settings: StoreSettings,
}

impl StoreClient {
    pub fn new(settings: StoreSettings) -> Result<Self, StoreError> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, settings })
    }

    fn rest_api(base_url: &str) -> String {
        let trimmed = base_url.trim_end_matches('/');
        if trimmed.ends_with("/rest/v1") { trimmed.to_string() } else { format!("{}/rest/v1", trimmed) }
    }

    pub fn table_url(&self) -> Result<Url, StoreError> {
        let endpoint = format!("{}/{}", Self::rest_api(&self.settings.url), self.settings.table);
        Ok(Url::parse(&endpoint)?)
    }

    fn with_auth(req: reqwest::RequestBuilder, key: &str) -> reqwest::RequestBuilder {
        req.header("apikey", key).bearer_auth(key)
    }

    async fn rejection(resp: reqwest::Response) -> StoreError {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let body = serde_json::from_str::<StoreErrorBody>(&text).unwrap_or_default();
        let message = body
            .message
            .or_else(|| Some(text.trim().to_string()).filter(|t| !t.is_empty()))
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "unknown error".into());
        StoreError::Rejected {
            status: status.as_u16(),
            code: body.code,
            message,
        }
    }
}

#[async_trait]
impl MessageStore for StoreClient {
    /// Insert one row; the store answers with an empty body on success.
    async fn insert_message(&self, record: &MessageRecord) -> Result<(), StoreError> {
        let endpoint = self.table_url()?;
        debug!("Inserting message into {endpoint}");
        let req = self
            .http
            .post(endpoint)
            .header("Prefer", "return=minimal")
            .json(&[record]);
        let resp = Self::with_auth(req, &self.settings.anon_key).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }
        Ok(())
    }
}
