use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Records are never edited in place once a repository hands them out;
/// use [`Product::with_price`] to derive an adjusted copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Returns a copy of this product carrying `price` instead of the original one.
    pub fn with_price(&self, price: i64) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            price,
        }
    }
}
