//! Business layer over a product repository.

use std::sync::Arc;
use tracing::{debug, instrument};
use crate::config::PriceConfig;
use crate::domain::Product;
use crate::error::ProductError;
use crate::repository::ProductRepository;

/// Applies a tax multiplier to a raw price. The fractional part is dropped.
pub fn apply_tax(price: i64, tax: f64) -> i64 {
    (price as f64 * tax) as i64
}

/// Serves products from an injected repository with prices adjusted by the configured tax.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    price: PriceConfig,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, price: PriceConfig) -> Self {
        Self { repository, price }
    }

    pub fn tax_rate(&self) -> f64 {
        self.price.tax
    }

    /// Lists every product with its price multiplied by the tax rate.
    ///
    /// Each entry is a fresh copy; the repository's records keep their raw prices.
    #[instrument(skip(self), fields(tax = self.price.tax))]
    pub fn find_all(&self) -> Vec<Product> {
        let products: Vec<Product> = self
            .repository
            .find_all()
            .iter()
            .map(|p| p.with_price(apply_tax(p.price, self.price.tax)))
            .collect();
        debug!(product_count = products.len(), "Applied tax to listing");
        products
    }

    /// Looks up a product without any price adjustment.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        self.repository.find_by_id(id)
    }
}
