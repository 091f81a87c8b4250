//! Product catalog lookup.

use crate::error::Result;
use crate::types::{Asin, Product};
use std::fs;
use std::path::{Path, PathBuf};

/// Product existence and subscribable-flag check by ASIN.
pub trait ProductCatalog {
    /// Look up a product, returning `None` if the ASIN is unknown.
    fn find_product_by_asin(&self, asin: &Asin) -> Result<Option<Product>>;
}

/// Catalog lookup backed by a JSON document.
///
/// The file holds a top-level array of product entries. Each lookup
/// re-reads and re-parses the file.
pub struct FileProductCatalog {
    path: PathBuf,
}

impl FileProductCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ProductCatalog for FileProductCatalog {
    fn find_product_by_asin(&self, asin: &Asin) -> Result<Option<Product>> {
        let contents = fs::read_to_string(&self.path)?;
        let products: Vec<Product> = serde_json::from_str(&contents)?;

        Ok(products.into_iter().find(|product| &product.asin == asin))
    }
}
