use crate::cms::{CmsError, Offer};
use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const OFFER_BY_SLUG_QUERY: &str = r#"*[_type == "offer" && slug.current == $slug][0]"#;
const ALL_OFFERS_QUERY: &str = r#"*[_type == "offer"] | order(_createdAt desc)"#;

/// Where offer records come from.
///
/// Page handlers only depend on this trait, so tests can serve offers from
/// memory instead of a live backend.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the offer whose slug matches, or `None` when there is none.
    async fn offer_by_slug(&self, slug: &str) -> Result<Option<Offer>, CmsError>;

    /// Fetch all offers, newest first.
    async fn offers(&self) -> Result<Vec<Offer>, CmsError>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

/// Client for the Sanity HTTP query API.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    query_url: String,
    token: Option<String>,
    retry: RetryConfig,
}

impl SanityClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(
            &config.sanity_api_url,
            &config.sanity_api_version,
            &config.sanity_dataset,
            config.sanity_token.clone(),
        )
    }

    pub fn with_endpoint(
        api_url: &str,
        api_version: &str,
        dataset: &str,
        token: Option<String>,
    ) -> Self {
        let version = api_version.trim_start_matches('v');
        Self {
            http: reqwest::Client::new(),
            query_url: format!(
                "{}/v{}/data/query/{}",
                api_url.trim_end_matches('/'),
                version,
                dataset
            ),
            token,
            retry: RetryConfig::cms_query(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Run a GROQ query. Parameters are sent JSON-encoded as `$name=<json>`.
    ///
    /// Returns `Ok(None)` when the query result is `null`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, Value)],
    ) -> Result<Option<T>, CmsError> {
        let mut query_params = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            query_params.push((format!("${}", name), value.to_string()));
        }

        debug!("CMS query: {} {:?}", groq, params);

        with_retry_if(
            &self.retry,
            "CMS query",
            || self.send(&query_params),
            CmsError::is_retryable,
        )
        .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        query_params: &[(String, String)],
    ) -> Result<Option<T>, CmsError> {
        let mut request = self.http.get(&self.query_url).query(query_params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Status { status, body });
        }

        let body = response.text().await?;
        let parsed: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(parsed.result)
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn offer_by_slug(&self, slug: &str) -> Result<Option<Offer>, CmsError> {
        self.query(OFFER_BY_SLUG_QUERY, &[("slug", Value::from(slug))])
            .await
    }

    /// Documents that cannot be decoded at all are skipped.
    async fn offers(&self) -> Result<Vec<Offer>, CmsError> {
        let documents: Option<Vec<Value>> = self.query(ALL_OFFERS_QUERY, &[]).await?;

        Ok(documents
            .unwrap_or_default()
            .into_iter()
            .filter_map(|document| match serde_json::from_value::<Offer>(document) {
                Ok(offer) => Some(offer),
                Err(e) => {
                    warn!("Skipping undecodable offer document: {}", e);
                    None
                }
            })
            .collect())
    }
}
