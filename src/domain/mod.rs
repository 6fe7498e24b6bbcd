//! # Domain Layer
//!
//! ERP records, value objects and the purchase-price resolution.
//! Nothing in here performs I/O.

pub mod entities;
pub mod services;
pub mod value_objects;
