//! # ShelfMatch
//!
//! In-memory product recommendations for a shopper who has picked one item.
//!
//! Alternatives come from the same category and stay under a budget ceiling.
//! They are ranked by a blend of TF-IDF text relevance, rating, and how close
//! the price sits to the middle of the budget.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! shelfmatch --catalog ./data.json --http-port 8080
//! curl 'localhost:8080/products/Kettle/recommendations?max_budget=120'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use shelfmatch::prelude::*;
//!
//! let catalog = parse_catalog(r#"[
//!     {"product_name": "Kettle", "description": "Electric kettle", "category": "Kitchen", "price": 29, "rating": 4.4},
//!     {"product_name": "Teapot", "description": "Ceramic teapot", "category": "Kitchen", "price": 22, "rating": 4.0}
//! ]"#).unwrap();
//!
//! let kettle = catalog.get("Kettle").unwrap();
//! let results = get_recommendations(&catalog, kettle, &CategorySelector::Any, 100.0).unwrap();
//! assert_eq!(results[0].product.name(), "Teapot");
//! ```
//!
//! ## Crate Structure
//!
//! - `shelfmatch-core` - Product, Catalog, SearchFilter, pagination, vectors
//! - `shelfmatch-similarity` - TF-IDF, cosine scoring, composite ranking
//! - `shelfmatch-storage` - JSON catalog loading and snapshots
//! - `shelfmatch-api` - REST API

// Re-export core types
pub use shelfmatch_core::{
    search_filter, Catalog, CategorySelector, Error, Page, Product, Result, SearchFilter,
    ValidationError, Vector,
};

// Re-export scoring
pub use shelfmatch_similarity::{
    get_recommendations, CompositeRanker, RankerConfig, RecommendationResult, Recommender,
    SimilarityScorer, TextVectorizer, TfidfVectorizer,
};

// Re-export storage
pub use shelfmatch_storage::{load_catalog, parse_catalog, CatalogStore, LoadError};

// Re-export API
pub use shelfmatch_api::{ApiConfig, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        get_recommendations, load_catalog, parse_catalog, search_filter, Catalog,
        CategorySelector, Product, RankerConfig, RecommendationResult, Recommender,
        SearchFilter,
    };
}
