//! # Value Objects
//!
//! Immutable types with parsing and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ArticleId`], [`CategoryId`], [`SupplySourceId`]: String-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: Decimal price with locale-aware parsing
//!
//! ## Time
//!
//! - [`Timestamp`]: UTC instant, ISO 8601 on output

pub mod ids;
pub mod price;
pub mod timestamp;

pub use ids::{ArticleId, CategoryId, SupplySourceId};
pub use price::Price;
pub use timestamp::Timestamp;
