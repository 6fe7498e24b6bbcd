//! # Identifiers
//!
//! String-based identifiers for upstream ERP records.
//!
//! The ERP hands out opaque string ids; they are never parsed, only compared
//! and echoed back, so each kind gets its own newtype to keep joins honest.
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::domain::value_objects::ids::{ArticleId, SupplySourceId};
//!
//! let article = ArticleId::new("4711");
//! let source = SupplySourceId::new("4711");
//! assert_eq!(article.as_str(), source.as_str());
//! ```

use serde::Serialize;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of an article (product/SKU).
    ArticleId
);

string_id!(
    /// Identifier of an article category (product group).
    CategoryId
);

string_id!(
    /// Identifier of a supply source (vendor channel) of an article.
    SupplySourceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_value() {
        assert_eq!(ArticleId::new("a-1").to_string(), "a-1");
        assert_eq!(CategoryId::from("c-9").to_string(), "c-9");
    }

    #[test]
    fn serializes_transparently() {
        let id = SupplySourceId::new("s-3");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"s-3\""));
    }
}
