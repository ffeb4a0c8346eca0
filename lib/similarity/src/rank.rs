//! Composite ranking
//!
//! Blends text similarity, rating and price proximity into one score per
//! candidate, then keeps the best few. Price proximity is measured against
//! the middle of the shopper's budget and normalized by the most expensive
//! product in the whole catalog, not just the filtered candidates, so scores
//! stay comparable across requests with different filters.

use serde::Serialize;
use shelfmatch_core::{Catalog, Error, Product, Result, MAX_RATING};

/// Number of recommendations returned by default
pub const DEFAULT_LIMIT: usize = 4;

/// Weights and result size for [`CompositeRanker`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankerConfig {
    pub similarity_weight: f64,
    pub rating_weight: f64,
    pub price_weight: f64,
    pub limit: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            similarity_weight: 0.5,
            rating_weight: 0.3,
            price_weight: 0.2,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RankerConfig {
    pub fn validate(&self) -> Result<()> {
        let weights = [self.similarity_weight, self.rating_weight, self.price_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::InvalidConfig(
                "ranker weights must be finite and non-negative".to_string(),
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(Error::InvalidConfig("total ranker weight cannot be zero".to_string()));
        }
        if self.limit == 0 {
            return Err(Error::InvalidConfig("ranker limit must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// A ranked recommendation
///
/// Borrows the product from the catalog; scores live only here and are
/// never written back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult<'a> {
    pub product: &'a Product,
    pub similarity_score: f64,
    pub rating_score: f64,
    pub price_score: f64,
    pub combined_score: f64,
}

/// Per-term breakdown of a combined score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub similarity_score: f64,
    pub rating_score: f64,
    pub price_score: f64,
    pub combined_score: f64,
}

#[derive(Debug, Clone)]
pub struct CompositeRanker {
    config: RankerConfig,
    max_price: f64,
}

impl CompositeRanker {
    /// Ranker normalizing prices by the catalog's maximum price
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_max_price(catalog.max_price())
    }

    pub fn with_max_price(max_price: f64) -> Self {
        Self {
            config: RankerConfig::default(),
            max_price,
        }
    }

    pub fn with_config(mut self, config: RankerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    #[inline]
    pub fn rating_score(rating: f64) -> f64 {
        rating / MAX_RATING
    }

    /// `1 - |price - budget/2| / max_price`, clamped to [0, 1]; 1 when every price is 0
    #[inline]
    pub fn price_score(&self, price: f64, max_budget: f64) -> f64 {
        if self.max_price <= 0.0 {
            return 1.0;
        }
        let price_mid = max_budget / 2.0;
        (1.0 - (price - price_mid).abs() / self.max_price).clamp(0.0, 1.0)
    }

    pub fn score(&self, similarity: f64, product: &Product, max_budget: f64) -> ScoreBreakdown {
        let rating_score = Self::rating_score(product.rating());
        let price_score = self.price_score(product.price(), max_budget);
        let combined_score = self.config.similarity_weight * similarity
            + self.config.rating_weight * rating_score
            + self.config.price_weight * price_score;

        ScoreBreakdown {
            similarity_score: similarity,
            rating_score,
            price_score,
            combined_score,
        }
    }

    /// Score, sort and truncate
    ///
    /// `similarities[i]` belongs to `candidates[i]`. The sort is stable, so
    /// equal scores keep candidate order.
    pub fn rank<'a>(
        &self,
        candidates: &[&'a Product],
        similarities: &[f64],
        max_budget: f64,
    ) -> Vec<RecommendationResult<'a>> {
        debug_assert_eq!(candidates.len(), similarities.len());

        let mut results: Vec<RecommendationResult<'a>> = candidates
            .iter()
            .zip(similarities.iter())
            .map(|(&product, &similarity)| {
                let s = self.score(similarity, product, max_budget);
                RecommendationResult {
                    product,
                    similarity_score: s.similarity_score,
                    rating_score: s.rating_score,
                    price_score: s.price_score,
                    combined_score: s.combined_score,
                }
            })
            .collect();

        results.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
        results.truncate(self.config.limit);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electronics() -> Catalog {
        let prices = [50.0, 100.0, 150.0, 200.0, 250.0];
        let ratings = [4.0, 4.5, 3.0, 5.0, 2.0];
        Catalog::new(
            prices
                .iter()
                .zip(ratings.iter())
                .enumerate()
                .map(|(i, (&p, &r))| {
                    Product::new(format!("Gadget {}", i), "", "Electronics", p, r).unwrap()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_worked_example() {
        let catalog = electronics();
        let ranker = CompositeRanker::new(&catalog);
        assert_eq!(ranker.max_price(), 250.0);

        let cheapest = catalog.get("Gadget 0").unwrap();
        let s = ranker.score(0.2, cheapest, 300.0);
        assert!((s.price_score - 0.6).abs() < 1e-12);
        assert!((s.rating_score - 0.8).abs() < 1e-12);
        assert!((s.combined_score - 0.46).abs() < 1e-12);
    }

    #[test]
    fn test_zero_price_catalog() {
        let catalog = Catalog::new(vec![
            Product::new("A", "", "Free", 0.0, 1.0).unwrap(),
            Product::new("B", "", "Free", 0.0, 2.0).unwrap(),
        ])
        .unwrap();
        let ranker = CompositeRanker::new(&catalog);
        for p in catalog.iter() {
            assert_eq!(ranker.price_score(p.price(), 100.0), 1.0);
        }
    }

    #[test]
    fn test_price_score_clamped() {
        let ranker = CompositeRanker::with_max_price(250.0);
        // budget 1000 puts the midpoint far above every price
        assert_eq!(ranker.price_score(50.0, 1000.0), 0.0);
        assert_eq!(ranker.price_score(150.0, 300.0), 1.0);
    }

    #[test]
    fn test_rank_sorts_and_truncates() {
        let catalog = electronics();
        let ranker = CompositeRanker::new(&catalog);
        let candidates: Vec<&Product> = catalog.iter().collect();
        let sims = vec![0.1, 0.2, 0.3, 0.4, 0.5];
        let results = ranker.rank(&candidates, &sims, 300.0);

        assert_eq!(results.len(), DEFAULT_LIMIT);
        assert!(results.windows(2).all(|w| w[0].combined_score >= w[1].combined_score));
        for r in &results {
            let expected = 0.5 * r.similarity_score + 0.3 * r.rating_score + 0.2 * r.price_score;
            assert!((r.combined_score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let catalog = Catalog::new(vec![
            Product::new("First", "", "Toys", 10.0, 3.0).unwrap(),
            Product::new("Second", "", "Toys", 10.0, 3.0).unwrap(),
            Product::new("Third", "", "Toys", 10.0, 3.0).unwrap(),
        ])
        .unwrap();
        let ranker = CompositeRanker::new(&catalog);
        let candidates: Vec<&Product> = catalog.iter().collect();
        let results = ranker.rank(&candidates, &[0.3, 0.3, 0.3], 20.0);
        let names: Vec<&str> = results.iter().map(|r| r.product.name()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_config_validation() {
        assert!(RankerConfig::default().validate().is_ok());
        let bad = RankerConfig { rating_weight: -0.1, ..Default::default() };
        assert!(bad.validate().is_err());
        let zero = RankerConfig {
            similarity_weight: 0.0,
            rating_weight: 0.0,
            price_weight: 0.0,
            limit: 4,
        };
        assert!(zero.validate().is_err());
        let no_limit = RankerConfig { limit: 0, ..Default::default() };
        assert!(no_limit.validate().is_err());
    }

    #[test]
    fn test_custom_limit() {
        let catalog = electronics();
        let ranker = CompositeRanker::new(&catalog)
            .with_config(RankerConfig { limit: 2, ..Default::default() });
        let candidates: Vec<&Product> = catalog.iter().collect();
        assert_eq!(ranker.rank(&candidates, &[0.0; 5], 300.0).len(), 2);
    }
}
