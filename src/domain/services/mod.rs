//! # Domain Services
//!
//! Domain logic that spans several entities.
//!
//! ## Services
//!
//! - [`price_resolution::ArticleEnrichmentResolver`]: Sales price, last purchase
//!   price and category name of an article

pub mod price_resolution;

pub use price_resolution::{
    ArticleEnrichmentResolver, CandidateOrigin, PurchasePriceCandidate, collect_candidates,
    select_latest,
};
