//! # ERP Gateway Trait
//!
//! Port definition for the upstream ERP.
//!
//! The enrichment service only depends on [`ErpGateway`]; the HTTP
//! implementation lives in [`crate::infrastructure::upstream::weclapp`] and
//! tests substitute in-memory fakes.
//!
//! # Examples
//!
//! ```ignore
//! use article_ek_proxy::infrastructure::upstream::traits::ErpGateway;
//!
//! #[async_trait::async_trait]
//! impl ErpGateway for MyErp {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{Article, Category, SupplySource};
use crate::domain::value_objects::ArticleId;
use crate::infrastructure::upstream::error::UpstreamResult;
use async_trait::async_trait;
use std::fmt;

/// Read access to the ERP list endpoints.
#[async_trait]
pub trait ErpGateway: Send + Sync + fmt::Debug {
    /// Returns the provider name used in the public URL (e.g. `weclapp`).
    fn provider(&self) -> &str;

    /// Lists one page of articles, in upstream order.
    ///
    /// # Errors
    ///
    /// - `UpstreamError::Timeout` / `Connection` - Transport failure
    /// - `UpstreamError::Authentication` - Token rejected
    /// - `UpstreamError::ProtocolError` - Body is not a list envelope
    async fn list_articles(&self, page: u32, page_size: u32) -> UpstreamResult<Vec<Article>>;

    /// Lists the supply sources of one article.
    ///
    /// # Errors
    ///
    /// Same as [`ErpGateway::list_articles`].
    async fn list_supply_sources(&self, article_id: &ArticleId)
    -> UpstreamResult<Vec<SupplySource>>;

    /// Lists all article categories.
    ///
    /// # Errors
    ///
    /// Same as [`ErpGateway::list_articles`].
    async fn list_categories(&self) -> UpstreamResult<Vec<Category>>;
}
