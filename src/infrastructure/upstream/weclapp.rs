//! # weclapp Gateway
//!
//! [`ErpGateway`] implementation for the weclapp REST API.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | articles | `GET {base}/article?page=&pageSize=[&properties=]` |
//! | supply sources | `GET {base}/articleSupplySource?articleId-eq=&page=1&pageSize=` |
//! | categories | `GET {base}/articleCategory?page=1&pageSize=` |
//!
//! Every request carries `AuthenticationToken: <api token>` and
//! `Content-Type: application/json`.

use crate::config::UpstreamConfig;
use crate::domain::entities::{Article, Category, SupplySource};
use crate::domain::value_objects::ArticleId;
use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use crate::infrastructure::upstream::http_client::HttpClient;
use crate::infrastructure::upstream::schema::v1::{self, WireArticle, WireCategory, WireSupplySource};
use crate::infrastructure::upstream::schema::ListEnvelope;
use crate::infrastructure::upstream::traits::ErpGateway;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

/// Name of the header that carries the API token (`AuthenticationToken`;
/// header names are case-insensitive and stored lowercase).
pub const AUTH_HEADER: &str = "authenticationtoken";

/// HTTP gateway to a weclapp tenant.
#[derive(Debug, Clone)]
pub struct WeclappGateway {
    http: HttpClient,
    base_url: String,
    provider: String,
    page_size: u32,
    article_properties: Option<String>,
}

impl WeclappGateway {
    /// Creates a gateway from validated upstream settings.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::InternalError` if the token is not a valid
    /// header value or the HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut token = HeaderValue::from_str(&config.api_token).map_err(|_| {
            UpstreamError::internal_error("API token contains characters not allowed in a header")
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(AUTH_HEADER), token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http: HttpClient::with_headers(config.timeout_ms, headers)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            provider: config.provider.clone(),
            page_size: config.page_size,
            article_properties: config.article_properties.clone(),
        })
    }

    /// Returns the base URL requests are built from.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> UpstreamResult<Vec<T>> {
        let envelope: ListEnvelope = self.http.get_with_params(&self.url(resource), params).await?;
        Ok(envelope.into_records())
    }
}

#[async_trait]
impl ErpGateway for WeclappGateway {
    fn provider(&self) -> &str {
        &self.provider
    }

    async fn list_articles(&self, page: u32, page_size: u32) -> UpstreamResult<Vec<Article>> {
        let mut params = vec![("page", page.to_string()), ("pageSize", page_size.to_string())];
        if let Some(properties) = &self.article_properties {
            params.push(("properties", properties.clone()));
        }

        let records: Vec<WireArticle> = self.fetch_list("article", &params).await?;
        let received = records.len();
        let articles: Vec<Article> = records.into_iter().filter_map(v1::article).collect();
        debug!(
            page,
            received,
            mapped = articles.len(),
            "Fetched article page"
        );
        Ok(articles)
    }

    async fn list_supply_sources(
        &self,
        article_id: &ArticleId,
    ) -> UpstreamResult<Vec<SupplySource>> {
        let params = [
            ("articleId-eq", article_id.to_string()),
            ("page", "1".to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        let records: Vec<WireSupplySource> =
            self.fetch_list("articleSupplySource", &params).await?;
        Ok(records
            .into_iter()
            .map(|wire| v1::supply_source(wire, article_id))
            .collect())
    }

    async fn list_categories(&self) -> UpstreamResult<Vec<Category>> {
        let params = [("page", "1".to_string()), ("pageSize", self.page_size.to_string())];
        let records: Vec<WireCategory> = self.fetch_list("articleCategory", &params).await?;
        Ok(records.into_iter().filter_map(v1::category).collect())
    }
}
