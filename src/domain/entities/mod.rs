//! # Domain Entities
//!
//! Records reconstructed per request from the upstream ERP.
//!
//! ## Entities
//!
//! - [`Article`]: Product with sales prices and supply sources
//! - [`SupplySource`]: Vendor channel with purchase prices
//! - [`Category`] / [`CategoryMap`]: Product groups
//!
//! ## Output
//!
//! - [`EnrichedArticle`]: Flat record served to the spreadsheet import

pub mod article;
pub mod category;
pub mod enriched_article;
pub mod supply_source;

pub use article::{Article, SalesPrice};
pub use category::{Category, CategoryMap};
pub use enriched_article::EnrichedArticle;
pub use supply_source::{LastPurchasePrice, PurchasePriceEntry, SupplySource};
