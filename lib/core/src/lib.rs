//! # ShelfMatch Core
//!
//! Core data structures for the ShelfMatch recommendation engine.
//!
//! - [`Product`] - A validated, immutable catalog entry
//! - [`Catalog`] - Ordered, read-only product collection with candidate filtering
//! - [`SearchFilter`] - Category / budget / substring browsing filter
//! - [`Page`] - Pagination over filtered results
//! - [`Vector`] - Dense vector with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use shelfmatch_core::{Catalog, Product, search_filter};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("Desk Lamp", "LED lamp", "Home", 19.99, 4.0).unwrap(),
//!     Product::new("Kettle", "Electric kettle", "Kitchen", 29.0, 4.4).unwrap(),
//! ]).unwrap();
//!
//! let home = search_filter(&catalog, Some("Home"), 50.0, None);
//! assert_eq!(home.len(), 1);
//!
//! let candidates = catalog.candidates("Kitchen", 100.0, "Desk Lamp");
//! assert_eq!(candidates[0].name(), "Kettle");
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod page;
pub mod product;
pub mod vector;

pub use catalog::{Catalog, CategorySelector, ALL_CATEGORIES};
pub use error::{Error, Result, ValidationError};
pub use filter::{search_filter, Filter, FilterCondition, SearchFilter};
pub use page::{Page, DEFAULT_PER_PAGE};
pub use product::{Product, MAX_RATING};
pub use vector::Vector;
