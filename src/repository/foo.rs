use crate::domain::Product;
use crate::error::ProductError;
use super::ProductRepository;

const FALLBACK_NAME: &str = "Monitor Asus 27";
const FALLBACK_PRICE: i64 = 600;

/// Constant fallback source.
///
/// Not-found policy: there is none. `find_by_id` always synthesizes a product
/// carrying the requested id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductRepositoryFoo;

impl ProductRepository for ProductRepositoryFoo {
    fn find_all(&self) -> Vec<Product> {
        vec![Product::new(1, FALLBACK_NAME, FALLBACK_PRICE)]
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        Ok(Some(Product::new(id, FALLBACK_NAME, FALLBACK_PRICE)))
    }
}
