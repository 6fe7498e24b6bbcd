//! # Application Services
//!
//! - [`ArticleEnrichmentService`]: article list enrichment per request

pub mod article_enrichment;

pub use article_enrichment::{
    ArticleEnrichmentService, EnrichmentConfig, EnrichmentOutcome, SupplySourceMode,
};
