//! # Caches
//!
//! Process-local caches of upstream reference data.

pub mod category_cache;

pub use category_cache::CategoryCache;
