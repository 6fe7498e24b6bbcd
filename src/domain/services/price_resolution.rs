//! # Purchase Price Resolution
//!
//! Turns an [`Article`] and a [`CategoryMap`] into an [`EnrichedArticle`].
//!
//! # Candidate pool
//!
//! ```text
//! sources = [primary]            if the primary source id is set and present
//!           all supply sources   otherwise
//!
//! for source in sources (upstream order):
//!     lastPurchasePrice          if present (zero allowed)
//!     purchasePrices[i]          if price present and non-zero, list order
//! ```
//!
//! The winner is the candidate with the largest [`Timestamp::sort_key`];
//! a missing date counts as `0`. On equal keys the earlier candidate in pool
//! order wins.
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::domain::entities::{Article, CategoryMap, LastPurchasePrice, SupplySource};
//! use article_ek_proxy::domain::services::price_resolution::ArticleEnrichmentResolver;
//! use article_ek_proxy::domain::value_objects::{ArticleId, Price, SupplySourceId, Timestamp};
//!
//! let source = SupplySource::new(SupplySourceId::new("s"), ArticleId::new("a"))
//!     .with_last_purchase_price(
//!         LastPurchasePrice::new(Price::parse_locale("85").unwrap())
//!             .with_recorded_at(Timestamp::from_millis(1_700_000_000_000).unwrap()),
//!     );
//! let article = Article::new(ArticleId::new("a")).with_supply_source(source);
//!
//! let enriched = ArticleEnrichmentResolver::new().resolve(&article, &CategoryMap::new());
//! assert_eq!(enriched.last_purchase_price.map(|p| p.to_string()), Some("85".to_string()));
//! ```

use crate::domain::entities::{Article, CategoryMap, EnrichedArticle, SupplySource};
use crate::domain::value_objects::{Price, SupplySourceId, Timestamp};
use std::fmt;

/// Where a purchase price candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateOrigin {
    /// The source's directly attached last purchase price.
    LastPurchasePrice,
    /// An entry of the source's purchase price list.
    PriceList,
}

impl fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastPurchasePrice => write!(f, "LAST_PURCHASE_PRICE"),
            Self::PriceList => write!(f, "PRICE_LIST"),
        }
    }
}

/// A purchase price that may become the article's last purchase price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasePriceCandidate {
    /// Supply source the price belongs to.
    pub source_id: SupplySourceId,
    /// The price.
    pub price: Price,
    /// Currency after fallback to the source currency.
    pub currency: Option<String>,
    /// Effective date, if known.
    pub timestamp: Option<Timestamp>,
    /// Where the price came from.
    pub origin: CandidateOrigin,
}

impl PurchasePriceCandidate {
    /// Sort key used to pick the latest candidate.
    #[inline]
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        Timestamp::sort_key(self.timestamp)
    }
}

/// Collects the candidates of one supply source in pool order.
fn source_candidates(source: &SupplySource) -> impl Iterator<Item = PurchasePriceCandidate> + '_ {
    let fallback_currency = source.currency();

    let direct = source
        .last_purchase_price()
        .map(|last| PurchasePriceCandidate {
            source_id: source.id().clone(),
            price: last.price(),
            currency: last.currency().or(fallback_currency).map(str::to_owned),
            timestamp: last.recorded_at(),
            origin: CandidateOrigin::LastPurchasePrice,
        });

    let listed = source.purchase_prices().iter().filter_map(move |entry| {
        let price = entry.price().filter(|p| !p.is_zero())?;
        Some(PurchasePriceCandidate {
            source_id: source.id().clone(),
            price,
            currency: entry.currency().or(fallback_currency).map(str::to_owned),
            timestamp: entry.effective_at(),
            origin: CandidateOrigin::PriceList,
        })
    });

    direct.into_iter().chain(listed)
}

/// Builds the candidate pool of an article.
///
/// Restricted to the primary supply source when one is designated and
/// present among the article's sources.
#[must_use]
pub fn collect_candidates(article: &Article) -> Vec<PurchasePriceCandidate> {
    match article.primary_supply_source() {
        Some(primary) => source_candidates(primary).collect(),
        None => article
            .supply_sources()
            .iter()
            .flat_map(source_candidates)
            .collect(),
    }
}

/// Picks the candidate with the latest timestamp; first wins on ties.
#[must_use]
pub fn select_latest(candidates: &[PurchasePriceCandidate]) -> Option<&PurchasePriceCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.sort_key() <= current.sort_key() => Some(current),
        _ => Some(candidate),
    })
}

/// Resolves sales price, last purchase price and category name of articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleEnrichmentResolver;

impl ArticleEnrichmentResolver {
    /// Creates a new resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Produces the enriched record of one article.
    #[must_use]
    pub fn resolve(&self, article: &Article, categories: &CategoryMap) -> EnrichedArticle {
        let sales = article.sales_prices().first();

        let candidates = collect_candidates(article);
        let latest = select_latest(&candidates);

        let category_name = article
            .category_id()
            .and_then(|id| categories.name_of(id))
            .map(str::to_owned);

        EnrichedArticle {
            article_id: article.id().clone(),
            article_number: article.number().map(str::to_owned),
            name: article.name().map(str::to_owned),
            article_type: article.article_type().map(str::to_owned),
            unit_name: article.unit_name().map(str::to_owned),
            category_id: article.category_id().cloned(),
            category_name,
            sales_price: sales.and_then(|s| s.price()),
            sales_price_currency: sales.and_then(|s| s.currency()).map(str::to_owned),
            last_purchase_price: latest.map(|c| c.price),
            last_purchase_price_currency: latest.and_then(|c| c.currency.clone()),
            last_purchase_price_date: latest.and_then(|c| c.timestamp),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Category, LastPurchasePrice, PurchasePriceEntry, SalesPrice,
    };
    use crate::domain::value_objects::{ArticleId, CategoryId};
    use proptest::prelude::*;

    fn price(text: &str) -> Price {
        Price::parse_locale(text).unwrap()
    }

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millis(millis).unwrap()
    }

    fn source(id: &str) -> SupplySource {
        SupplySource::new(SupplySourceId::new(id), ArticleId::new("a"))
    }

    fn entry(p: &str, at: Option<i64>) -> PurchasePriceEntry {
        let e = PurchasePriceEntry::new(Price::parse_locale(p));
        match at {
            Some(millis) => e.with_effective_at(ts(millis)),
            None => e,
        }
    }

    fn resolve(article: &Article) -> EnrichedArticle {
        ArticleEnrichmentResolver::new().resolve(article, &CategoryMap::new())
    }

    #[test]
    fn no_sources_no_purchase_price() {
        let enriched = resolve(&Article::new(ArticleId::new("a")));
        assert!(enriched.last_purchase_price.is_none());
        assert!(enriched.last_purchase_price_currency.is_none());
        assert!(enriched.last_purchase_price_date.is_none());
    }

    #[test]
    fn sales_price_is_first_entry_unsorted() {
        let article = Article::new(ArticleId::new("a"))
            .with_sales_price(SalesPrice::new(Some(price("100,00")), Some("EUR".into())))
            .with_sales_price(SalesPrice::new(Some(price("5")), Some("USD".into())));

        let enriched = resolve(&article);
        assert_eq!(enriched.sales_price, Some(price("100")));
        assert_eq!(enriched.sales_price_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn later_timestamp_wins() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_purchase_price(entry("10", Some(100)))
                .with_purchase_price(entry("20", Some(200))),
        );

        let enriched = resolve(&article);
        assert_eq!(enriched.last_purchase_price, Some(price("20")));
        assert_eq!(enriched.last_purchase_price_date, Some(ts(200)));
    }

    #[test]
    fn equal_timestamps_first_wins() {
        let article = Article::new(ArticleId::new("a"))
            .with_supply_source(source("s-1").with_purchase_price(entry("10", Some(100))))
            .with_supply_source(source("s-2").with_purchase_price(entry("20", Some(100))));

        assert_eq!(resolve(&article).last_purchase_price, Some(price("10")));
    }

    #[test]
    fn direct_field_precedes_list_on_tie() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_last_purchase_price(
                    LastPurchasePrice::new(price("30")).with_recorded_at(ts(500)),
                )
                .with_purchase_price(entry("40", Some(500))),
        );

        assert_eq!(resolve(&article).last_purchase_price, Some(price("30")));
    }

    #[test]
    fn nested_entry_beats_older_direct_field() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_last_purchase_price(
                    LastPurchasePrice::new(price("30")).with_recorded_at(ts(100)),
                )
                .with_purchase_price(entry("40", Some(900))),
        );

        let enriched = resolve(&article);
        assert_eq!(enriched.last_purchase_price, Some(price("40")));
        assert_eq!(enriched.last_purchase_price_date, Some(ts(900)));
    }

    #[test]
    fn direct_field_beats_older_nested_entry() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_last_purchase_price(
                    LastPurchasePrice::new(price("30")).with_recorded_at(ts(900)),
                )
                .with_purchase_price(entry("40", Some(100))),
        );

        assert_eq!(resolve(&article).last_purchase_price, Some(price("30")));
    }

    #[test]
    fn undated_loses_to_dated() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_purchase_price(entry("10", None))
                .with_purchase_price(entry("20", Some(1))),
        );

        assert_eq!(resolve(&article).last_purchase_price, Some(price("20")));
    }

    #[test]
    fn undated_only_candidate_is_selected_without_date() {
        let article = Article::new(ArticleId::new("a"))
            .with_supply_source(source("s").with_purchase_price(entry("10", None)));

        let enriched = resolve(&article);
        assert_eq!(enriched.last_purchase_price, Some(price("10")));
        assert!(enriched.last_purchase_price_date.is_none());
    }

    #[test]
    fn zero_and_missing_list_prices_are_skipped() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_purchase_price(entry("0,00", Some(900)))
                .with_purchase_price(entry("n/a", Some(800)))
                .with_purchase_price(entry("7", Some(1))),
        );

        assert_eq!(resolve(&article).last_purchase_price, Some(price("7")));
    }

    #[test]
    fn zero_direct_price_is_a_candidate() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s").with_last_purchase_price(
                LastPurchasePrice::new(price("0")).with_recorded_at(ts(5)),
            ),
        );

        assert_eq!(resolve(&article).last_purchase_price, Some(price("0")));
    }

    #[test]
    fn primary_source_restricts_pool() {
        let article = Article::new(ArticleId::new("a"))
            .with_supply_source(source("s-1").with_purchase_price(entry("99", Some(9_999))))
            .with_supply_source(source("s-2").with_purchase_price(entry("50", Some(1))))
            .with_primary_supply_source_id(SupplySourceId::new("s-2"));

        assert_eq!(resolve(&article).last_purchase_price, Some(price("50")));
    }

    #[test]
    fn absent_primary_source_uses_all() {
        let article = Article::new(ArticleId::new("a"))
            .with_supply_source(source("s-1").with_purchase_price(entry("99", Some(9_999))))
            .with_supply_source(source("s-2").with_purchase_price(entry("50", Some(1))))
            .with_primary_supply_source_id(SupplySourceId::new("gone"));

        assert_eq!(resolve(&article).last_purchase_price, Some(price("99")));
    }

    #[test]
    fn currency_falls_back_to_source() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_currency("CHF")
                .with_purchase_price(entry("10", Some(1))),
        );
        assert_eq!(
            resolve(&article).last_purchase_price_currency.as_deref(),
            Some("CHF")
        );
    }

    #[test]
    fn entry_currency_precedes_source_currency() {
        let article = Article::new(ArticleId::new("a")).with_supply_source(
            source("s")
                .with_currency("CHF")
                .with_purchase_price(entry("10", Some(1)).with_currency("EUR")),
        );
        assert_eq!(
            resolve(&article).last_purchase_price_currency.as_deref(),
            Some("EUR")
        );
    }

    #[test]
    fn currency_absent_when_nothing_known() {
        let article = Article::new(ArticleId::new("a"))
            .with_supply_source(source("s").with_purchase_price(entry("10", Some(1))));
        assert!(resolve(&article).last_purchase_price_currency.is_none());
    }

    #[test]
    fn category_lookup() {
        let categories =
            CategoryMap::from_categories(vec![Category::new(CategoryId::new("7"), "RAM")]);
        let resolver = ArticleEnrichmentResolver::new();

        let known = Article::new(ArticleId::new("a")).with_category_id(CategoryId::new("7"));
        let unknown = Article::new(ArticleId::new("b")).with_category_id(CategoryId::new("8"));
        let none = Article::new(ArticleId::new("c"));

        assert_eq!(
            resolver.resolve(&known, &categories).category_name.as_deref(),
            Some("RAM")
        );
        assert!(resolver.resolve(&unknown, &categories).category_name.is_none());
        assert!(resolver.resolve(&none, &categories).category_name.is_none());
    }

    #[test]
    fn pool_order_is_source_then_direct_then_list() {
        let article = Article::new(ArticleId::new("a"))
            .with_supply_source(
                source("s-1")
                    .with_last_purchase_price(LastPurchasePrice::new(price("1")))
                    .with_purchase_price(entry("2", None)),
            )
            .with_supply_source(source("s-2").with_purchase_price(entry("3", None)));

        let origins: Vec<_> = collect_candidates(&article)
            .into_iter()
            .map(|c| (c.source_id.to_string(), c.origin))
            .collect();
        assert_eq!(
            origins,
            vec![
                ("s-1".to_string(), CandidateOrigin::LastPurchasePrice),
                ("s-1".to_string(), CandidateOrigin::PriceList),
                ("s-2".to_string(), CandidateOrigin::PriceList),
            ]
        );
    }

    #[test]
    fn select_latest_empty() {
        assert!(select_latest(&[]).is_none());
    }

    proptest! {
        #[test]
        fn selects_first_maximum(dates in proptest::collection::vec(
            proptest::option::of(0_i64..4_000_000_000_000), 1..24)
        ) {
            let entries = dates
                .iter()
                .enumerate()
                .map(|(i, at)| entry(&(i + 1).to_string(), *at))
                .collect();
            let article = Article::new(ArticleId::new("a"))
                .with_supply_source(source("s").with_purchase_prices(entries));

            let keys: Vec<i64> = dates.iter().map(|d| d.unwrap_or(0)).collect();
            let max = *keys.iter().max().unwrap();
            let first_max = keys.iter().position(|k| *k == max).unwrap();

            let enriched = resolve(&article);
            prop_assert_eq!(enriched.last_purchase_price, Some(price(&(first_max + 1).to_string())));
        }
    }
}
