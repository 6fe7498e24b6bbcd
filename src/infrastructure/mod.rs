//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`upstream`]: ERP REST gateway
//! - [`cache`]: process-local reference data caches

pub mod cache;
pub mod upstream;
