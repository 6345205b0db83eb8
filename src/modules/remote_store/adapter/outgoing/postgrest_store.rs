//! REST client for the hosted table store.
//!
//! Speaks the PostgREST dialect served under `{url}/rest/v1`: equality
//! filters as `column=eq.value`, ordering as `order=column.asc|desc`, row
//! limits and offsets, and exact counts through `Prefer: count=exact` on a
//! `HEAD` request. Calls carry the public API key as the bearer unless the
//! store was narrowed to a signed-in user with `as_user`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Method, RequestBuilder, Url};
use serde_json::Value;
use tracing::debug;

use crate::modules::remote_store::application::domain::query::{RawFilter, RawQuery};
use crate::modules::remote_store::application::ports::outgoing::remote_store::{
    RemoteStore, RemoteStoreError,
};
use crate::shared::config::RemoteStoreConfig;

/// HTTP client for one hosted project.
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    rest_url: String,
    bearer: Option<String>,
}

impl PostgrestStore {
    pub fn new(config: &RemoteStoreConfig) -> Result<Self, RemoteStoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| RemoteStoreError::Transport(format!("invalid API key header: {e}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|e| RemoteStoreError::Transport(format!("invalid API key header: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteStoreError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            bearer: None,
        })
    }

    /// Request overriding the default bearer when acting for a user.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn table_url(&self, table: &str, params: &[(String, String)]) -> Result<Url, RemoteStoreError> {
        let mut url = Url::parse(&format!("{}/{}", self.rest_url, table))
            .map_err(|e| RemoteStoreError::Transport(format!("invalid table URL: {e}")))?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RemoteStoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RemoteStoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn parse_rows(response: reqwest::Response) -> Result<Vec<Value>, RemoteStoreError> {
        let response = Self::ensure_success(response).await?;
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| RemoteStoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteStore for PostgrestStore {
    fn is_configured(&self) -> bool {
        true
    }

    fn as_user(&self, access_token: &str) -> Arc<dyn RemoteStore> {
        Arc::new(Self {
            client: self.client.clone(),
            rest_url: self.rest_url.clone(),
            bearer: Some(access_token.to_string()),
        })
    }

    async fn select(&self, table: &str, query: &RawQuery) -> Result<Vec<Value>, RemoteStoreError> {
        let url = self.table_url(table, &query_params(query))?;
        debug!(%url, "select");

        let response = self.request(Method::GET, url).send().await.map_err(transport)?;
        Self::parse_rows(response).await
    }

    async fn count(&self, table: &str, filters: &[RawFilter]) -> Result<u64, RemoteStoreError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(filters.iter().map(filter_param));
        let url = self.table_url(table, &params)?;

        let response = self
            .request(Method::HEAD, url)
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(transport)?;
        let response = Self::ensure_success(response).await?;

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| RemoteStoreError::Decode("missing or invalid Content-Range".to_string()))
    }

    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, RemoteStoreError> {
        let url = self.table_url(table, &[])?;

        let response = self
            .request(Method::POST, url)
            .header("Prefer", "return=representation")
            .json(&rows)
            .send()
            .await
            .map_err(transport)?;
        Self::parse_rows(response).await
    }

    async fn update(
        &self,
        table: &str,
        key: &RawFilter,
        patch: Value,
    ) -> Result<Vec<Value>, RemoteStoreError> {
        let url = self.table_url(table, &[filter_param(key)])?;

        let response = self
            .request(Method::PATCH, url)
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        Self::parse_rows(response).await
    }

    async fn delete(&self, table: &str, key: &RawFilter) -> Result<(), RemoteStoreError> {
        let url = self.table_url(table, &[filter_param(key)])?;

        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), RemoteStoreError> {
        let url = Url::parse(&format!("{}/", self.rest_url))
            .map_err(|e| RemoteStoreError::Transport(format!("invalid URL: {e}")))?;

        let response = self.client.head(url).send().await.map_err(transport)?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> RemoteStoreError {
    RemoteStoreError::Transport(err.to_string())
}

fn query_params(query: &RawQuery) -> Vec<(String, String)> {
    let mut params = vec![(
        "select".to_string(),
        query.select.clone().unwrap_or_else(|| "*".to_string()),
    )];

    params.extend(query.filters.iter().map(filter_param));

    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }

    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }

    if let Some(offset) = query.offset {
        params.push(("offset".to_string(), offset.to_string()));
    }

    params
}

fn filter_param(filter: &RawFilter) -> (String, String) {
    let operand = match &filter.value {
        Value::Null => "is.null".to_string(),
        Value::String(s) => format!("eq.{s}"),
        other => format!("eq.{other}"),
    };
    (filter.column.clone(), operand)
}

/// `0-9/42` and `*/0` both carry the total after the slash.
fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}
