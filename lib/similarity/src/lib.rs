//! # ShelfMatch Similarity
//!
//! Scoring and ranking for product recommendations.
//!
//! ## Features
//!
//! - **Per-request TF-IDF**: vocabulary rebuilt from each request's candidates
//! - **Cosine scoring**: similarity of every candidate to the selected product
//! - **Composite ranking**: similarity, rating and budget fit blended into one score
//!
//! ## Example
//!
//! ```rust
//! use shelfmatch_core::{Catalog, CategorySelector, Product};
//! use shelfmatch_similarity::get_recommendations;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("Trail Shoes", "Grippy trail running shoes", "Sports", 95.0, 4.5).unwrap(),
//!     Product::new("Road Shoes", "Cushioned road running shoes", "Sports", 110.0, 4.2).unwrap(),
//!     Product::new("Yoga Mat", "Non-slip mat", "Sports", 25.0, 4.0).unwrap(),
//! ]).unwrap();
//!
//! let selected = catalog.get("Trail Shoes").unwrap();
//! let results = get_recommendations(&catalog, selected, &CategorySelector::Any, 200.0).unwrap();
//! assert_eq!(results.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Catalog    │────>│ Vectorizer  │────>│   Scorer    │
//! │ (candidates)│     │  (TF-IDF)   │     │  (cosine)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                     ┌─────────────┐            │
//!                     │   Ranker    │<───────────┘
//!                     │ (composite) │
//!                     └─────────────┘
//! ```

pub mod tokenizer;
pub mod tfidf;
pub mod scorer;
pub mod rank;
pub mod recommend;

pub use tokenizer::{analyze, is_stop_word, tokenize, ENGLISH_STOP_WORDS};
pub use tfidf::{TextVectorizer, TfidfMatrix, TfidfVectorizer};
pub use scorer::SimilarityScorer;
pub use rank::{CompositeRanker, RankerConfig, RecommendationResult, ScoreBreakdown, DEFAULT_LIMIT};
pub use recommend::{get_recommendations, Recommender};
