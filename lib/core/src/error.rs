use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Malformed input reaching the engine.
///
/// Catalogs are validated at load time, so inside the engine these only
/// surface when a caller bypasses the loader.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Field '{field}' of product '{product}' is not a finite number")]
    NonNumeric { product: String, field: &'static str },

    #[error("Product '{product}' has negative price {price}")]
    NegativePrice { product: String, price: f64 },

    #[error("Product '{product}' has rating {rating} outside [0, 5]")]
    RatingOutOfRange { product: String, rating: f64 },

    #[error("Product '{0}' has an empty category")]
    EmptyCategory(String),

    #[error("Duplicate product name: {0}")]
    DuplicateName(String),

    #[error("Invalid budget: {0}")]
    InvalidBudget(f64),
}
