//! # Article Enrichment Service
//!
//! Builds the enriched article list for one request.
//!
//! Steps:
//!
//! 1. Fetch the first article page. Failure aborts the request.
//! 2. Load the category map through the [`CategoryCache`]. Failure degrades
//!    to an empty map for this request.
//! 3. In [`SupplySourceMode::Endpoint`], fetch every article's supply
//!    sources. A failed fetch degrades only that article.
//! 4. Resolve every article with at most `concurrency` in flight. Output
//!    keeps the upstream article order.
//! 5. Keep only items whose category is one of `product_groups`, if any
//!    are configured.
//!
//! # Examples
//!
//! ```ignore
//! use article_ek_proxy::application::services::ArticleEnrichmentService;
//!
//! let service = ArticleEnrichmentService::new(gateway, EnrichmentConfig::default(), 1000);
//! let outcome = service.enrich_all().await?;
//! println!("{} items, {} degraded", outcome.items.len(), outcome.degraded);
//! ```

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Article, CategoryMap, EnrichedArticle};
use crate::domain::services::ArticleEnrichmentResolver;
use crate::infrastructure::cache::CategoryCache;
use crate::infrastructure::upstream::ErpGateway;
use futures::stream::{self, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Default number of articles enriched concurrently.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Where supply sources come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplySourceMode {
    /// Use the supply sources embedded in the article record.
    #[default]
    Embedded,
    /// Fetch supply sources per article from the ERP.
    Endpoint,
}

/// Enrichment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Articles processed concurrently (at least 1).
    pub concurrency: usize,
    /// Supply source origin.
    pub supply_source_mode: SupplySourceMode,
    /// Category names to keep; empty keeps everything.
    pub product_groups: Vec<String>,
    /// Category map lifetime in seconds; `None` keeps it for the process.
    pub category_cache_ttl_secs: Option<u64>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            supply_source_mode: SupplySourceMode::Embedded,
            product_groups: Vec::new(),
            category_cache_ttl_secs: None,
        }
    }
}

impl EnrichmentConfig {
    /// Sets the supply source mode.
    #[must_use]
    pub fn with_supply_source_mode(mut self, mode: SupplySourceMode) -> Self {
        self.supply_source_mode = mode;
        self
    }

    /// Sets the concurrency limit.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets the product group filter.
    #[must_use]
    pub fn with_product_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the category cache TTL.
    #[must_use]
    pub fn category_cache_ttl(&self) -> Option<Duration> {
        self.category_cache_ttl_secs.map(Duration::from_secs)
    }
}

/// Result of one enrichment run.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentOutcome {
    /// Enriched articles in upstream order, after filtering.
    pub items: Vec<EnrichedArticle>,
    /// Articles fetched from the ERP.
    pub fetched: usize,
    /// Articles whose supply sources could not be loaded.
    pub degraded: usize,
}

impl EnrichmentOutcome {
    /// Returns the number of returned items.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Orchestrates article listing, category lookup and price resolution.
#[derive(Debug, Clone)]
pub struct ArticleEnrichmentService {
    gateway: Arc<dyn ErpGateway>,
    categories: CategoryCache,
    resolver: ArticleEnrichmentResolver,
    config: EnrichmentConfig,
    page_size: u32,
}

impl ArticleEnrichmentService {
    /// Creates a service with its own category cache.
    #[must_use]
    pub fn new(gateway: Arc<dyn ErpGateway>, config: EnrichmentConfig, page_size: u32) -> Self {
        let categories = CategoryCache::new(config.category_cache_ttl());
        Self {
            gateway,
            categories,
            resolver: ArticleEnrichmentResolver::new(),
            config,
            page_size,
        }
    }

    /// Returns the provider name of the gateway.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        self.gateway.provider()
    }

    /// Returns the category cache.
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &CategoryCache {
        &self.categories
    }

    /// Drops the cached category map.
    pub async fn invalidate_categories(&self) {
        self.categories.invalidate().await;
    }

    /// Fetches and enriches the article list.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Upstream` if the article list cannot be
    /// fetched. Category and supply source failures only degrade the result.
    pub async fn enrich_all(&self) -> ApplicationResult<EnrichmentOutcome> {
        let started = Instant::now();
        let articles = self.gateway.list_articles(1, self.page_size).await?;
        let fetched = articles.len();

        let categories = self.load_categories().await;
        let concurrency = self.config.concurrency.max(1);

        let enriched: Vec<(EnrichedArticle, bool)> = stream::iter(articles)
            .map(|article| self.enrich_one(article, &categories))
            .buffered(concurrency)
            .collect()
            .await;

        let degraded = enriched.iter().filter(|(_, degraded)| *degraded).count();
        let items: Vec<EnrichedArticle> = enriched
            .into_iter()
            .map(|(item, _)| item)
            .filter(|item| self.in_product_groups(item))
            .collect();

        info!(
            provider = self.provider(),
            fetched,
            returned = items.len(),
            degraded,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Articles enriched"
        );

        Ok(EnrichmentOutcome {
            items,
            fetched,
            degraded,
        })
    }

    async fn load_categories(&self) -> Arc<CategoryMap> {
        match self.categories.get_or_load(self.gateway.as_ref()).await {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    provider = self.provider(),
                    error = %e,
                    "Category lookup failed, continuing without category names"
                );
                Arc::new(CategoryMap::new())
            }
        }
    }

    /// Returns the enriched article and whether it was degraded.
    async fn enrich_one(
        &self,
        mut article: Article,
        categories: &CategoryMap,
    ) -> (EnrichedArticle, bool) {
        let mut degraded = false;

        if self.config.supply_source_mode == SupplySourceMode::Endpoint {
            match self.gateway.list_supply_sources(article.id()).await {
                Ok(sources) => article.replace_supply_sources(sources),
                Err(e) => {
                    warn!(
                        article_id = %article.id(),
                        error = %e,
                        "Supply source fetch failed, purchase price left empty"
                    );
                    article.replace_supply_sources(Vec::new());
                    degraded = true;
                }
            }
        }

        (self.resolver.resolve(&article, categories), degraded)
    }

    fn in_product_groups(&self, item: &EnrichedArticle) -> bool {
        if self.config.product_groups.is_empty() {
            return true;
        }
        item.category_name.as_deref().is_some_and(|name| {
            self.config
                .product_groups
                .iter()
                .any(|group| group.trim() == name.trim())
        })
    }
}
