//! # Application Layer
//!
//! Use cases that orchestrate the domain and the upstream gateway.

pub mod error;
pub mod services;
