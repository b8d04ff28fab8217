use tracing::debug;
use crate::domain::Product;
use crate::error::ProductError;
use super::ProductRepository;

/// In-memory repository seeded with a fixed catalog. This is the primary source.
///
/// Not-found policy: `find_by_id` answers `Ok(None)` for an unknown id.
#[derive(Debug, Clone)]
pub struct ProductRepositoryList {
    data: Vec<Product>,
}

impl ProductRepositoryList {
    pub fn new() -> Self {
        Self {
            data: vec![
                Product::new(1, "RAM Memory", 200),
                Product::new(2, "Keyboard Razer Mini 60%", 150),
                Product::new(3, "CPU Intel Core i9", 350),
                Product::new(4, "MotherBoard Gigabyte", 490),
            ],
        }
    }
}

impl Default for ProductRepositoryList {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for ProductRepositoryList {
    fn find_all(&self) -> Vec<Product> {
        self.data.clone()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        let product = self.data.iter().find(|p| p.id == id).cloned();
        if product.is_none() {
            debug!(product_id = id, "No product in static list");
        }
        Ok(product)
    }
}
