//! # Enriched Article
//!
//! The flat output record handed to the spreadsheet import.
//!
//! Every field is always present in the JSON; unknown values are `null` so
//! that the importing tool sees a stable column set.

use crate::domain::value_objects::{ArticleId, CategoryId, Price, Timestamp};
use serde::Serialize;

/// One article with its sales price and resolved last purchase price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedArticle {
    /// Upstream article id.
    pub article_id: ArticleId,
    /// Article number.
    pub article_number: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Article type.
    pub article_type: Option<String>,
    /// Unit of measure.
    pub unit_name: Option<String>,
    /// Category id.
    pub category_id: Option<CategoryId>,
    /// Category display name, if the id is known.
    pub category_name: Option<String>,
    /// First sales price in upstream order.
    pub sales_price: Option<Price>,
    /// Currency of the sales price.
    pub sales_price_currency: Option<String>,
    /// Most recent purchase price (EK).
    pub last_purchase_price: Option<Price>,
    /// Currency of the purchase price.
    pub last_purchase_price_currency: Option<String>,
    /// Date of the purchase price, ISO 8601.
    pub last_purchase_price_date: Option<Timestamp>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_all_columns_with_nulls() {
        let item = EnrichedArticle {
            article_id: ArticleId::new("1"),
            article_number: None,
            name: Some("Mini PC".to_string()),
            article_type: None,
            unit_name: None,
            category_id: None,
            category_name: None,
            sales_price: None,
            sales_price_currency: None,
            last_purchase_price: None,
            last_purchase_price_currency: None,
            last_purchase_price_date: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 12);
        assert_eq!(json["articleId"], "1");
        assert_eq!(json["name"], "Mini PC");
        assert!(json["lastPurchasePriceDate"].is_null());
    }
}
