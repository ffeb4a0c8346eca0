use crate::error::ValidationError;
use crate::filter::{Filter, FilterCondition};
use crate::Product;
use ahash::AHashMap;
use std::collections::BTreeSet;

/// Reserved category value meaning "the selected product's category"
pub const ALL_CATEGORIES: &str = "All";

/// Category choice for a recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    /// Use the selected product's own category
    Any,
    Named(String),
}

impl CategorySelector {
    /// Parse a category parameter
    ///
    /// Absent, empty and exactly `"All"` mean [`CategorySelector::Any`]. Any
    /// other value, including `"all"` or `"Any"`, names a category verbatim.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_CATEGORIES) => CategorySelector::Any,
            Some(v) => CategorySelector::Named(v.to_string()),
        }
    }

    /// Resolve to a concrete category for the given selected product
    pub fn resolve<'a>(&'a self, selected: &'a Product) -> &'a str {
        match self {
            CategorySelector::Any => selected.category(),
            CategorySelector::Named(c) => c.as_str(),
        }
    }
}

/// An immutable, ordered collection of products
///
/// Order is insertion order and is what ties are broken on during ranking.
/// The maximum price and category list are computed once here because
/// every recommendation request needs the full-catalog maximum.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_name: AHashMap<String, usize>,
    categories: Vec<String>,
    max_price: f64,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new(products: Vec<Product>) -> Result<Self, ValidationError> {
        let mut by_name = AHashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if by_name.insert(product.name().to_string(), idx).is_some() {
                return Err(ValidationError::DuplicateName(product.name().to_string()));
            }
        }

        let categories: Vec<String> = products
            .iter()
            .map(|p| p.category().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let max_price = products.iter().map(Product::price).fold(0.0_f64, f64::max);

        Ok(Self {
            products,
            by_name,
            categories,
            max_price,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in catalog order
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.by_name.get(name).map(|&idx| &self.products[idx])
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Highest price over the whole catalog, 0 when empty
    #[inline]
    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// Products eligible for recommendation
    ///
    /// Same category, price within budget, and not the excluded product.
    /// Catalog order is preserved; an empty result is not an error.
    pub fn candidates(&self, category: &str, max_budget: f64, exclude_name: &str) -> Vec<&Product> {
        let condition = FilterCondition::And(vec![
            FilterCondition::Category(category.to_string()),
            FilterCondition::MaxPrice(max_budget),
            FilterCondition::NotNamed(exclude_name.to_string()),
        ]);
        self.products.iter().filter(|p| condition.matches(p)).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
