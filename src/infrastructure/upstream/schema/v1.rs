//! # Wire Schema v1
//!
//! weclapp REST v1 records and their mapping to domain entities.
//!
//! ## Field fallback order
//!
//! | domain field            | wire fields, first usable wins                      |
//! |-------------------------|-----------------------------------------------------|
//! | article category        | `articleCategoryId` → `categoryId`                  |
//! | sales price currency    | `currencyName` → `currency`                         |
//! | source currency         | `currencyName` → `currency`                         |
//! | last purchase price     | `lastPurchasePrice`                                 |
//! | last purchase currency  | `lastPurchasePriceCurrencyName` → `lastPurchasePriceCurrency` |
//! | last purchase date      | `lastPurchasePriceDate`                             |
//! | purchase entry price    | `price` → `amount` → `purchasePrice`                |
//! | purchase entry currency | `currencyName` → `currency`                         |
//! | purchase entry date     | `startDate` → `validFrom`                           |
//!
//! A record without an id is skipped (articles, categories). A supply source
//! without `articleId` is attributed to the article it was fetched for.

use crate::domain::entities::{
    Article, Category, LastPurchasePrice, PurchasePriceEntry, SalesPrice, SupplySource,
};
use crate::domain::value_objects::{ArticleId, CategoryId, SupplySourceId};
use crate::infrastructure::upstream::schema::{WireScalar, first_of, lenient_list};
use serde::Deserialize;

/// Article record of `GET /article`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireArticle {
    #[serde(default)]
    id: Option<WireScalar>,
    #[serde(default)]
    article_number: Option<WireScalar>,
    #[serde(default)]
    name: Option<WireScalar>,
    #[serde(default)]
    article_type: Option<WireScalar>,
    #[serde(default)]
    unit_name: Option<WireScalar>,
    #[serde(default)]
    article_category_id: Option<WireScalar>,
    #[serde(default)]
    category_id: Option<WireScalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    article_prices: Vec<WireSalesPrice>,
    #[serde(default, deserialize_with = "lenient_list")]
    supply_sources: Vec<WireSupplySource>,
    #[serde(default)]
    primary_supply_source_id: Option<WireScalar>,
}

/// Entry of an article's `articlePrices`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSalesPrice {
    #[serde(default)]
    price: Option<WireScalar>,
    #[serde(default)]
    currency_name: Option<WireScalar>,
    #[serde(default)]
    currency: Option<WireScalar>,
}

/// Supply source, embedded in an article or from `GET /articleSupplySource`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSupplySource {
    #[serde(default)]
    id: Option<WireScalar>,
    #[serde(default)]
    article_id: Option<WireScalar>,
    #[serde(default)]
    currency_name: Option<WireScalar>,
    #[serde(default)]
    currency: Option<WireScalar>,
    #[serde(default)]
    last_purchase_price: Option<WireScalar>,
    #[serde(default)]
    last_purchase_price_currency_name: Option<WireScalar>,
    #[serde(default)]
    last_purchase_price_currency: Option<WireScalar>,
    #[serde(default)]
    last_purchase_price_date: Option<WireScalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    purchase_prices: Vec<WirePurchasePrice>,
}

/// Entry of a supply source's `purchasePrices`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePurchasePrice {
    #[serde(default)]
    price: Option<WireScalar>,
    #[serde(default)]
    amount: Option<WireScalar>,
    #[serde(default)]
    purchase_price: Option<WireScalar>,
    #[serde(default)]
    currency_name: Option<WireScalar>,
    #[serde(default)]
    currency: Option<WireScalar>,
    #[serde(default)]
    start_date: Option<WireScalar>,
    #[serde(default)]
    valid_from: Option<WireScalar>,
}

/// Category record of `GET /articleCategory`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCategory {
    #[serde(default)]
    id: Option<WireScalar>,
    #[serde(default)]
    name: Option<WireScalar>,
}

/// Maps an article record; `None` if it has no id.
#[must_use]
pub fn article(wire: WireArticle) -> Option<Article> {
    let id = ArticleId::new(first_of(&[&wire.id], WireScalar::as_text)?);

    let mut article = Article::new(id.clone());
    if let Some(number) = first_of(&[&wire.article_number], WireScalar::as_text) {
        article = article.with_number(number);
    }
    if let Some(name) = first_of(&[&wire.name], WireScalar::as_text) {
        article = article.with_name(name);
    }
    if let Some(article_type) = first_of(&[&wire.article_type], WireScalar::as_text) {
        article = article.with_article_type(article_type);
    }
    if let Some(unit_name) = first_of(&[&wire.unit_name], WireScalar::as_text) {
        article = article.with_unit_name(unit_name);
    }
    if let Some(category) = first_of(
        &[&wire.article_category_id, &wire.category_id],
        WireScalar::as_text,
    ) {
        article = article.with_category_id(CategoryId::new(category));
    }
    if let Some(primary) = first_of(&[&wire.primary_supply_source_id], WireScalar::as_text) {
        article = article.with_primary_supply_source_id(SupplySourceId::new(primary));
    }

    for price in wire.article_prices {
        article = article.with_sales_price(sales_price(price));
    }
    for source in wire.supply_sources {
        article = article.with_supply_source(supply_source(source, &id));
    }

    Some(article)
}

/// Maps a sales price entry.
#[must_use]
pub fn sales_price(wire: WireSalesPrice) -> SalesPrice {
    SalesPrice::new(
        first_of(&[&wire.price], WireScalar::as_price),
        first_of(&[&wire.currency_name, &wire.currency], WireScalar::as_text),
    )
}

/// Maps a supply source, attributing it to `article_id` if the record
/// does not name its article.
#[must_use]
pub fn supply_source(wire: WireSupplySource, article_id: &ArticleId) -> SupplySource {
    let id = first_of(&[&wire.id], WireScalar::as_text).unwrap_or_default();
    let owner = first_of(&[&wire.article_id], WireScalar::as_text)
        .map(ArticleId::new)
        .unwrap_or_else(|| article_id.clone());

    let mut source = SupplySource::new(SupplySourceId::new(id), owner);
    if let Some(currency) = first_of(&[&wire.currency_name, &wire.currency], WireScalar::as_text)
    {
        source = source.with_currency(currency);
    }

    if let Some(price) = first_of(&[&wire.last_purchase_price], WireScalar::as_price) {
        let mut last = LastPurchasePrice::new(price);
        if let Some(currency) = first_of(
            &[
                &wire.last_purchase_price_currency_name,
                &wire.last_purchase_price_currency,
            ],
            WireScalar::as_text,
        ) {
            last = last.with_currency(currency);
        }
        if let Some(date) = first_of(&[&wire.last_purchase_price_date], WireScalar::as_timestamp)
        {
            last = last.with_recorded_at(date);
        }
        source = source.with_last_purchase_price(last);
    }

    source.with_purchase_prices(wire.purchase_prices.into_iter().map(purchase_price).collect())
}

/// Maps a purchase price entry.
#[must_use]
pub fn purchase_price(wire: WirePurchasePrice) -> PurchasePriceEntry {
    let mut entry = PurchasePriceEntry::new(first_of(
        &[&wire.price, &wire.amount, &wire.purchase_price],
        WireScalar::as_price,
    ));
    if let Some(currency) = first_of(&[&wire.currency_name, &wire.currency], WireScalar::as_text) {
        entry = entry.with_currency(currency);
    }
    if let Some(date) = first_of(&[&wire.start_date, &wire.valid_from], WireScalar::as_timestamp) {
        entry = entry.with_effective_at(date);
    }
    entry
}

/// Maps a category; `None` if id or name is missing.
#[must_use]
pub fn category(wire: WireCategory) -> Option<Category> {
    let id = first_of(&[&wire.id], WireScalar::as_text)?;
    let name = first_of(&[&wire.name], WireScalar::as_text)?;
    Some(Category::new(CategoryId::new(id), name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Price, Timestamp};
    use serde_json::json;

    fn wire<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_full_article() {
        let mapped = article(wire(json!({
            "id": "4711",
            "articleNumber": "A-4711",
            "name": "Barebone X1",
            "articleType": "STORABLE",
            "unitName": "Stk.",
            "articleCategoryId": "12",
            "primarySupplySourceId": "s-2",
            "articlePrices": [{"price": "100,00", "currencyName": "EUR"}],
            "supplySources": [
                {"id": "s-1", "lastPurchasePrice": 80},
                {"id": "s-2", "lastPurchasePrice": 85, "lastPurchasePriceDate": 1700000000000_i64}
            ]
        })))
        .unwrap();

        assert_eq!(mapped.id().as_str(), "4711");
        assert_eq!(mapped.number(), Some("A-4711"));
        assert_eq!(mapped.unit_name(), Some("Stk."));
        assert_eq!(mapped.category_id().map(|c| c.as_str()), Some("12"));
        assert_eq!(mapped.sales_prices()[0].price(), Price::parse_locale("100"));
        assert_eq!(mapped.supply_sources().len(), 2);
        assert_eq!(mapped.supply_sources()[1].article_id().as_str(), "4711");
        assert_eq!(
            mapped.primary_supply_source().map(|s| s.id().as_str()),
            Some("s-2")
        );
    }

    #[test]
    fn article_without_id_is_skipped() {
        assert!(article(wire(json!({"name": "ghost"}))).is_none());
    }

    #[test]
    fn category_id_fallback() {
        let mapped = article(wire(json!({"id": 1, "categoryId": 9}))).unwrap();
        assert_eq!(mapped.id().as_str(), "1");
        assert_eq!(mapped.category_id().map(|c| c.as_str()), Some("9"));
    }

    #[test]
    fn malformed_fields_are_absent() {
        let mapped = article(wire(json!({
            "id": "1",
            "name": {"de": "Name"},
            "articlePrices": "none",
            "supplySources": [42, {"id": "s", "lastPurchasePrice": true}]
        })))
        .unwrap();

        assert!(mapped.name().is_none());
        assert!(mapped.sales_prices().is_empty());
        assert_eq!(mapped.supply_sources().len(), 1);
        assert!(mapped.supply_sources()[0].last_purchase_price().is_none());
    }

    #[test]
    fn purchase_price_field_fallback_order() {
        let entry = purchase_price(wire(json!({"amount": "12,5", "purchasePrice": 99})));
        assert_eq!(entry.price(), Price::parse_locale("12.5"));

        let entry = purchase_price(wire(json!({"price": 1, "amount": 2})));
        assert_eq!(entry.price(), Price::parse_locale("1"));

        let entry = purchase_price(wire(json!({"purchasePrice": "7"})));
        assert_eq!(entry.price(), Price::parse_locale("7"));
    }

    #[test]
    fn purchase_price_date_fallback_order() {
        let entry = purchase_price(wire(json!({"price": 1, "validFrom": 200, "startDate": 100})));
        assert_eq!(entry.effective_at(), Timestamp::from_millis(100));

        let entry = purchase_price(wire(json!({"price": 1, "validFrom": 200})));
        assert_eq!(entry.effective_at(), Timestamp::from_millis(200));

        let entry = purchase_price(wire(json!({"price": 1})));
        assert!(entry.effective_at().is_none());
    }

    #[test]
    fn supply_source_last_purchase_price() {
        let source = supply_source(
            wire(json!({
                "id": "s",
                "articleId": "other",
                "currencyName": "USD",
                "lastPurchasePrice": "85,10",
                "lastPurchasePriceCurrency": "EUR",
                "lastPurchasePriceDate": "2023-11-14T22:13:20Z"
            })),
            &ArticleId::new("a"),
        );

        assert_eq!(source.article_id().as_str(), "other");
        assert_eq!(source.currency(), Some("USD"));
        let last = source.last_purchase_price().unwrap();
        assert_eq!(last.price(), Price::parse_locale("85.1").unwrap());
        assert_eq!(last.currency(), Some("EUR"));
        assert_eq!(last.recorded_at(), Timestamp::from_millis(1_700_000_000_000));
    }

    #[test]
    fn category_requires_id_and_name() {
        assert!(category(wire(json!({"id": "1", "name": "CPU"}))).is_some());
        assert!(category(wire(json!({"id": "1"}))).is_none());
        assert!(category(wire(json!({"name": "CPU"}))).is_none());
    }
}
