//! # Article Entity
//!
//! A sellable product record from the ERP, reduced to the attributes the
//! enrichment needs.
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::domain::entities::article::{Article, SalesPrice};
//! use article_ek_proxy::domain::value_objects::{ArticleId, CategoryId, Price};
//!
//! let article = Article::new(ArticleId::new("4711"))
//!     .with_number("A-4711")
//!     .with_name("Mini PC")
//!     .with_category_id(CategoryId::new("12"))
//!     .with_sales_price(SalesPrice::new(Price::parse_locale("100,00"), Some("EUR".into())));
//!
//! assert_eq!(article.number(), Some("A-4711"));
//! assert_eq!(article.sales_prices().len(), 1);
//! ```

use crate::domain::entities::supply_source::SupplySource;
use crate::domain::value_objects::{ArticleId, CategoryId, Price, SupplySourceId};

/// One sales price entry of an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SalesPrice {
    price: Option<Price>,
    currency: Option<String>,
}

impl SalesPrice {
    /// Creates a sales price entry.
    #[must_use]
    pub fn new(price: Option<Price>, currency: Option<String>) -> Self {
        Self { price, currency }
    }

    /// Returns the price.
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
}

/// An article (product/SKU).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    number: Option<String>,
    name: Option<String>,
    article_type: Option<String>,
    unit_name: Option<String>,
    category_id: Option<CategoryId>,
    sales_prices: Vec<SalesPrice>,
    supply_sources: Vec<SupplySource>,
    primary_supply_source_id: Option<SupplySourceId>,
}

impl Article {
    /// Creates an article with only its identifier set.
    #[must_use]
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            number: None,
            name: None,
            article_type: None,
            unit_name: None,
            category_id: None,
            sales_prices: Vec::new(),
            supply_sources: Vec::new(),
            primary_supply_source_id: None,
        }
    }

    /// Sets the article number.
    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the article type (e.g. `STORABLE`, `SERVICE`).
    #[must_use]
    pub fn with_article_type(mut self, article_type: impl Into<String>) -> Self {
        self.article_type = Some(article_type.into());
        self
    }

    /// Sets the unit of measure.
    #[must_use]
    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = Some(unit_name.into());
        self
    }

    /// Sets the category id.
    #[must_use]
    pub fn with_category_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Appends a sales price entry.
    #[must_use]
    pub fn with_sales_price(mut self, sales_price: SalesPrice) -> Self {
        self.sales_prices.push(sales_price);
        self
    }

    /// Appends a supply source.
    #[must_use]
    pub fn with_supply_source(mut self, source: SupplySource) -> Self {
        self.supply_sources.push(source);
        self
    }

    /// Designates the primary supply source.
    #[must_use]
    pub fn with_primary_supply_source_id(mut self, id: SupplySourceId) -> Self {
        self.primary_supply_source_id = Some(id);
        self
    }

    /// Replaces all supply sources, e.g. with ones fetched separately.
    pub fn replace_supply_sources(&mut self, sources: Vec<SupplySource>) {
        self.supply_sources = sources;
    }

    /// Returns the article id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    /// Returns the article number.
    #[inline]
    #[must_use]
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the article type.
    #[inline]
    #[must_use]
    pub fn article_type(&self) -> Option<&str> {
        self.article_type.as_deref()
    }

    /// Returns the unit of measure.
    #[inline]
    #[must_use]
    pub fn unit_name(&self) -> Option<&str> {
        self.unit_name.as_deref()
    }

    /// Returns the category id.
    #[inline]
    #[must_use]
    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    /// Returns the sales prices in upstream order.
    #[inline]
    #[must_use]
    pub fn sales_prices(&self) -> &[SalesPrice] {
        &self.sales_prices
    }

    /// Returns the supply sources in upstream order.
    #[inline]
    #[must_use]
    pub fn supply_sources(&self) -> &[SupplySource] {
        &self.supply_sources
    }

    /// Returns the primary supply source id, if designated.
    #[inline]
    #[must_use]
    pub fn primary_supply_source_id(&self) -> Option<&SupplySourceId> {
        self.primary_supply_source_id.as_ref()
    }

    /// Returns the designated primary supply source if it is among the
    /// article's sources.
    #[must_use]
    pub fn primary_supply_source(&self) -> Option<&SupplySource> {
        let primary = self.primary_supply_source_id.as_ref()?;
        self.supply_sources.iter().find(|s| s.id() == primary)
    }
}
