//! Recommendation pipeline
//!
//! ```text
//! Catalog ──candidates──> TfidfVectorizer ──> SimilarityScorer ──> CompositeRanker ──> top N
//! ```
//!
//! Every call is a pure function of the catalog snapshot and the request.

use crate::rank::{CompositeRanker, RankerConfig, RecommendationResult};
use crate::scorer::SimilarityScorer;
use crate::tfidf::{TextVectorizer, TfidfVectorizer};
use shelfmatch_core::{Catalog, CategorySelector, Product, Result, ValidationError};
use tracing::debug;

/// Recommends alternatives to a selected product from one catalog
#[derive(Debug, Clone)]
pub struct Recommender<'c, V = TfidfVectorizer> {
    catalog: &'c Catalog,
    vectorizer: V,
    scorer: SimilarityScorer,
    ranker: CompositeRanker,
}

impl<'c> Recommender<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            vectorizer: TfidfVectorizer::new(),
            scorer: SimilarityScorer::new(),
            ranker: CompositeRanker::new(catalog),
        }
    }

    /// Use custom weights or result size
    pub fn with_config(mut self, config: RankerConfig) -> Result<Self> {
        config.validate()?;
        self.ranker = self.ranker.with_config(config);
        Ok(self)
    }

}

impl<'c, V: TextVectorizer> Recommender<'c, V> {
    /// Swap the text vectorizer, keeping scorer and ranker
    pub fn with_vectorizer<W: TextVectorizer>(self, vectorizer: W) -> Recommender<'c, W> {
        Recommender {
            catalog: self.catalog,
            vectorizer,
            scorer: self.scorer,
            ranker: self.ranker,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Rank same-category products within budget, excluding `selected`
    ///
    /// An empty candidate set returns an empty list without vectorizing.
    pub fn recommend(
        &self,
        selected: &Product,
        category: &CategorySelector,
        max_budget: f64,
    ) -> Result<Vec<RecommendationResult<'c>>> {
        if max_budget.is_nan() || max_budget < 0.0 {
            return Err(ValidationError::InvalidBudget(max_budget).into());
        }

        let category = category.resolve(selected);
        let candidates = self.catalog.candidates(category, max_budget, selected.name());
        if candidates.is_empty() {
            debug!(product = selected.name(), category, max_budget, "no recommendation candidates");
            return Ok(Vec::new());
        }

        // Query text goes last
        let mut corpus: Vec<&str> = candidates.iter().map(|p| p.combined_text()).collect();
        corpus.push(selected.combined_text());

        let mut matrix = self.vectorizer.vectorize(&corpus);
        let query = matrix.vectors.pop().unwrap_or_default();
        let similarities = self.scorer.score(&query, &matrix.vectors);

        debug!(
            product = selected.name(),
            category,
            candidates = candidates.len(),
            vocabulary = matrix.vocabulary.len(),
            "ranking recommendation candidates"
        );

        Ok(self.ranker.rank(&candidates, &similarities, max_budget))
    }
}

/// Top recommendations for `selected` using the default weights and limit
pub fn get_recommendations<'c>(
    catalog: &'c Catalog,
    selected: &Product,
    category: &CategorySelector,
    max_budget: f64,
) -> Result<Vec<RecommendationResult<'c>>> {
    Recommender::new(catalog).recommend(selected, category, max_budget)
}
