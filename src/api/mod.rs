//! # API Layer
//!
//! External interfaces of the proxy.

pub mod rest;
