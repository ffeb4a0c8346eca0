use serde::Deserialize;
use serde_json::Value;
use shelfmatch_core::{Catalog, Product, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Validation(#[from] ValidationError),
}

/// A product as written in the catalog file
///
/// Price and rating stay untyped so a non-numeric value is reported as a
/// validation failure naming the product, not a bare JSON error.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(alias = "name")]
    product_name: String,
    #[serde(default)]
    description: String,
    category: String,
    price: Value,
    rating: Value,
}

impl ProductRecord {
    fn into_product(self) -> std::result::Result<Product, ValidationError> {
        let price = self.price.as_f64().ok_or_else(|| ValidationError::NonNumeric {
            product: self.product_name.clone(),
            field: "price",
        })?;
        let rating = self.rating.as_f64().ok_or_else(|| ValidationError::NonNumeric {
            product: self.product_name.clone(),
            field: "rating",
        })?;
        Product::new(self.product_name, self.description, self.category, price, rating)
    }
}

/// Parse a JSON array of products into a validated catalog
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    let products = records
        .into_iter()
        .map(ProductRecord::into_product)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Catalog::new(products)?)
}

/// Read and validate a catalog file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;
    let catalog = parse_catalog(&contents)?;
    info!(
        path = %path.display(),
        products = catalog.len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"product_name": "Desk Lamp", "description": "LED desk lamp", "category": "Home", "price": 19.99, "rating": 4.1},
        {"product_name": "Kettle", "description": "Electric kettle", "category": "Kitchen", "price": 29, "rating": 4.4},
        {"name": "Throw Pillow", "description": "Velvet cover", "category": "Home", "price": 14.5, "rating": 3.9}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[2].name(), "Throw Pillow");
        assert_eq!(catalog.get("Kettle").unwrap().price(), 29.0);
        assert_eq!(catalog.categories(), &["Home".to_string(), "Kitchen".to_string()]);
    }

    #[test]
    fn test_non_numeric_price() {
        let err = parse_catalog(
            r#"[{"product_name": "Lamp", "description": "", "category": "Home", "price": "cheap", "rating": 4}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Validation(ValidationError::NonNumeric { field: "price", .. })
        ));
    }

    #[test]
    fn test_rating_out_of_range() {
        let err = parse_catalog(
            r#"[{"product_name": "Lamp", "description": "", "category": "Home", "price": 3, "rating": 6}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Validation(ValidationError::RatingOutOfRange { .. })));
    }

    #[test]
    fn test_duplicate_names() {
        let err = parse_catalog(
            r#"[{"product_name": "Lamp", "category": "Home", "price": 3, "rating": 1},
                {"product_name": "Lamp", "category": "Home", "price": 4, "rating": 2}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Validation(ValidationError::DuplicateName(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_catalog("[{").unwrap_err(), LoadError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("data.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }
}
