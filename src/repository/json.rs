use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{error, info, instrument};
use crate::domain::Product;
use crate::error::ProductError;
use super::ProductRepository;

/// Repository backed by a JSON array of products, read once at construction.
///
/// Not-found policy: `find_by_id` fails with [`ProductError::NotFound`].
///
/// A source that cannot be read or parsed fails construction, so an instance
/// always holds the full contents of its file.
#[derive(Debug, Clone)]
pub struct ProductRepositoryJson {
    list: Vec<Product>,
}

impl ProductRepositoryJson {
    /// Loads products from a file on disk.
    #[instrument(fields(path = %path.as_ref().display()), skip(path))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProductError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            error!(error = %e, "Could not open product data");
            ProductError::Load {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads products from any byte stream holding a JSON array.
    pub fn from_reader(reader: impl Read) -> Result<Self, ProductError> {
        let list: Vec<Product> = serde_json::from_reader(reader).map_err(|e| {
            error!(error = %e, "Could not parse product data");
            ProductError::Parse(e.to_string())
        })?;
        info!(product_count = list.len(), "Loaded products from JSON");
        Ok(Self { list })
    }
}

impl ProductRepository for ProductRepositoryJson {
    fn find_all(&self) -> Vec<Product> {
        self.list.clone()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        self.list
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(Some)
            .ok_or(ProductError::NotFound(id))
    }
}
