//! # Supply Source Entity
//!
//! A vendor channel through which an article is procured.
//!
//! A supply source may carry its own pricing history (a list of
//! [`PurchasePriceEntry`]) and, independently, a directly attached
//! "last purchase price" maintained by the ERP. Both feed the purchase-price
//! resolution in [`crate::domain::services::price_resolution`].
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::domain::entities::supply_source::{PurchasePriceEntry, SupplySource};
//! use article_ek_proxy::domain::value_objects::{ArticleId, Price, SupplySourceId, Timestamp};
//!
//! let source = SupplySource::new(SupplySourceId::new("s-1"), ArticleId::new("a-1"))
//!     .with_currency("EUR")
//!     .with_purchase_price(PurchasePriceEntry::new(Price::parse_locale("12,50")));
//!
//! assert_eq!(source.purchase_prices().len(), 1);
//! assert!(source.last_purchase_price().is_none());
//! ```

use crate::domain::value_objects::{ArticleId, Price, SupplySourceId, Timestamp};

/// One entry of a supply source's purchase price list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchasePriceEntry {
    price: Option<Price>,
    currency: Option<String>,
    effective_at: Option<Timestamp>,
}

impl PurchasePriceEntry {
    /// Creates an entry with the given price and no currency or date.
    #[must_use]
    pub fn new(price: Option<Price>) -> Self {
        Self {
            price,
            currency: None,
            effective_at: None,
        }
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the effective (start / valid-from) timestamp.
    #[must_use]
    pub fn with_effective_at(mut self, effective_at: Timestamp) -> Self {
        self.effective_at = Some(effective_at);
        self
    }

    /// Returns the price, if the upstream record had a usable one.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns the effective timestamp.
    #[inline]
    #[must_use]
    pub fn effective_at(&self) -> Option<Timestamp> {
        self.effective_at
    }
}

/// The ERP-maintained last purchase price attached directly to a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastPurchasePrice {
    price: Price,
    currency: Option<String>,
    recorded_at: Option<Timestamp>,
}

impl LastPurchasePrice {
    /// Creates a last purchase price without currency or date.
    #[must_use]
    pub fn new(price: Price) -> Self {
        Self {
            price,
            currency: None,
            recorded_at: None,
        }
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the date the price was recorded.
    #[must_use]
    pub fn with_recorded_at(mut self, recorded_at: Timestamp) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns the recorded date.
    #[inline]
    #[must_use]
    pub fn recorded_at(&self) -> Option<Timestamp> {
        self.recorded_at
    }
}

/// A supply source of exactly one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplySource {
    id: SupplySourceId,
    article_id: ArticleId,
    currency: Option<String>,
    last_purchase_price: Option<LastPurchasePrice>,
    purchase_prices: Vec<PurchasePriceEntry>,
}

impl SupplySource {
    /// Creates a supply source without prices.
    #[must_use]
    pub fn new(id: SupplySourceId, article_id: ArticleId) -> Self {
        Self {
            id,
            article_id,
            currency: None,
            last_purchase_price: None,
            purchase_prices: Vec::new(),
        }
    }

    /// Sets the source-level currency used as fallback for its prices.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the directly attached last purchase price.
    #[must_use]
    pub fn with_last_purchase_price(mut self, last: LastPurchasePrice) -> Self {
        self.last_purchase_price = Some(last);
        self
    }

    /// Appends an entry to the purchase price list.
    #[must_use]
    pub fn with_purchase_price(mut self, entry: PurchasePriceEntry) -> Self {
        self.purchase_prices.push(entry);
        self
    }

    /// Replaces the purchase price list.
    #[must_use]
    pub fn with_purchase_prices(mut self, entries: Vec<PurchasePriceEntry>) -> Self {
        self.purchase_prices = entries;
        self
    }

    /// Returns the source id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &SupplySourceId {
        &self.id
    }

    /// Returns the owning article id.
    #[inline]
    #[must_use]
    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    /// Returns the source-level currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns the directly attached last purchase price.
    #[inline]
    #[must_use]
    pub fn last_purchase_price(&self) -> Option<&LastPurchasePrice> {
        self.last_purchase_price.as_ref()
    }

    /// Returns the purchase price list in upstream order.
    #[inline]
    #[must_use]
    pub fn purchase_prices(&self) -> &[PurchasePriceEntry] {
        &self.purchase_prices
    }
}
