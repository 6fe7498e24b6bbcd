//! # Article EK Proxy
//!
//! HTTP proxy that reads the article list of an ERP (weclapp), resolves the
//! most recent purchase price ("EK") of every article from its supply
//! sources and returns one flat JSON record per article for spreadsheet
//! imports.
//!
//! # Architecture
//!
//! - [`domain`]: entities, value objects and price resolution (no I/O)
//! - [`application`]: the per-request enrichment use case
//! - [`infrastructure`]: ERP gateway and the category cache
//! - [`api`]: axum REST surface
//! - [`config`]: layered configuration
//!
//! # Example
//!
//! ```ignore
//! use article_ek_proxy::api::rest::{create_router, AppState};
//! use article_ek_proxy::application::services::ArticleEnrichmentService;
//! use article_ek_proxy::config::AppConfig;
//! use article_ek_proxy::infrastructure::upstream::WeclappGateway;
//! use std::sync::Arc;
//!
//! let config = AppConfig::load()?;
//! let gateway = Arc::new(WeclappGateway::new(&config.upstream)?);
//! let service = ArticleEnrichmentService::new(gateway, config.enrichment, config.upstream.page_size);
//! let router = create_router(AppState::new(service));
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
