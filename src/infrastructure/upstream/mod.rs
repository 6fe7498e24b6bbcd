//! # Upstream ERP
//!
//! Gateway to the ERP REST API.
//!
//! - [`traits`]: the [`ErpGateway`] port
//! - [`weclapp`]: HTTP implementation for weclapp
//! - [`schema`]: lenient wire records and their domain mapping
//! - [`http_client`]: `reqwest` wrapper with status mapping
//! - [`error`]: [`UpstreamError`]

pub mod error;
pub mod http_client;
pub mod schema;
pub mod traits;
pub mod weclapp;

pub use error::{UpstreamError, UpstreamResult};
pub use http_client::HttpClient;
pub use traits::ErpGateway;
pub use weclapp::WeclappGateway;
