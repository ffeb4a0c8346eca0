// Product filters for catalog browsing
use crate::{Catalog, Product};

pub trait Filter {
    fn matches(&self, product: &Product) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    Category(String),
    MaxPrice(f64),
    /// Case-insensitive substring of name or description; the needle is stored lowercased
    TextContains(String),
    NotNamed(String),
    And(Vec<FilterCondition>),
}

impl FilterCondition {
    /// Substring condition, lowercasing the needle once
    pub fn text_contains(needle: &str) -> Self {
        FilterCondition::TextContains(needle.to_lowercase())
    }

    fn matches_condition(&self, product: &Product) -> bool {
        match self {
            FilterCondition::Category(category) => product.category() == category,
            FilterCondition::MaxPrice(max) => product.price() <= *max,
            FilterCondition::TextContains(needle) => {
                product.name().to_lowercase().contains(needle.as_str())
                    || product.description().to_lowercase().contains(needle.as_str())
            }
            FilterCondition::NotNamed(name) => product.name() != name,
            FilterCondition::And(conditions) => {
                conditions.iter().all(|c| c.matches_condition(product))
            }
        }
    }
}

impl Filter for FilterCondition {
    fn matches(&self, product: &Product) -> bool {
        self.matches_condition(product)
    }
}

/// Browsing filter: optional category, budget ceiling, optional free text
///
/// All specified predicates are ANDed. A query that is empty or only
/// whitespace is treated as absent, but a non-blank query is matched as
/// typed (lowercased, not trimmed).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub category: Option<String>,
    pub max_budget: f64,
    pub query: Option<String>,
}

impl SearchFilter {
    pub fn new(category: Option<String>, max_budget: f64, query: Option<String>) -> Self {
        Self {
            category,
            max_budget,
            query,
        }
    }

    /// Filter that accepts every product
    pub fn any() -> Self {
        Self::new(None, f64::INFINITY, None)
    }

    pub fn to_condition(&self) -> FilterCondition {
        let mut conditions = Vec::with_capacity(3);
        if let Some(category) = &self.category {
            conditions.push(FilterCondition::Category(category.clone()));
        }
        conditions.push(FilterCondition::MaxPrice(self.max_budget));
        if let Some(query) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            conditions.push(FilterCondition::text_contains(query));
        }
        FilterCondition::And(conditions)
    }

    /// Apply to a catalog, preserving catalog order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let condition = self.to_condition();
        catalog.iter().filter(|p| condition.matches(p)).collect()
    }
}

/// Order-preserving catalog search by category, budget and substring
pub fn search_filter<'a>(
    catalog: &'a Catalog,
    category: Option<&str>,
    max_budget: f64,
    query: Option<&str>,
) -> Vec<&'a Product> {
    SearchFilter::new(
        category.map(str::to_string),
        max_budget,
        query.map(str::to_string),
    )
    .apply(catalog)
}
