use serde::Serialize;
use crate::error::ValidationError;

/// Highest rating a product can carry
pub const MAX_RATING: f64 = 5.0;

/// A catalog entry
///
/// Fields are private so a product cannot change once it has been validated.
/// `combined_text` is derived at construction and feeds the text vectorizer.
/// Products are only built through [`Product::new`]; the catalog loader owns
/// the file format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    description: String,
    category: String,
    price: f64,
    rating: f64,
    #[serde(skip)]
    combined_text: String,
}

impl Product {
    /// Create a validated product
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        let category = category.into();

        if !price.is_finite() {
            return Err(ValidationError::NonNumeric { product: name, field: "price" });
        }
        if !rating.is_finite() {
            return Err(ValidationError::NonNumeric { product: name, field: "rating" });
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice { product: name, price });
        }
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange { product: name, rating });
        }
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory(name));
        }

        let combined_text = format!("{} {} {}", name, description, category);
        Ok(Self {
            name,
            description,
            category,
            price,
            rating,
            combined_text,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Name, description and category joined by single spaces
    #[inline]
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }
}
