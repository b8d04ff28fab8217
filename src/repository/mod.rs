//! Product data sources.
//!
//! Every source implements [`ProductRepository`]. The sources disagree on what
//! a lookup miss means, and each documents its own policy:
//!
//! | Source                    | `find_by_id` miss            |
//! |---------------------------|------------------------------|
//! | [`ProductRepositoryList`] | `Ok(None)`                   |
//! | [`ProductRepositoryFoo`]  | never misses                 |
//! | [`ProductRepositoryJson`] | `Err(ProductError::NotFound)`|

mod foo;
mod json;
mod list;

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::domain::Product;
use crate::error::{ConfigError, ProductError};

pub use foo::ProductRepositoryFoo;
pub use json::ProductRepositoryJson;
pub use list::ProductRepositoryList;

/// Read access to a collection of products.
pub trait ProductRepository: Send + Sync {
    /// All products in the source's natural order.
    fn find_all(&self) -> Vec<Product>;

    /// The first product whose id equals `id`, subject to the source's not-found policy.
    fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError>;
}

/// Names a repository variant by the qualifier callers use to select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepositoryKind {
    /// The primary source, used when nothing else is asked for.
    #[default]
    #[serde(rename = "productList")]
    List,
    #[serde(rename = "productFoo")]
    Foo,
    #[serde(rename = "productJson")]
    Json,
}

impl RepositoryKind {
    pub fn qualifier(&self) -> &'static str {
        match self {
            RepositoryKind::List => "productList",
            RepositoryKind::Foo => "productFoo",
            RepositoryKind::Json => "productJson",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}

impl FromStr for RepositoryKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productList" => Ok(RepositoryKind::List),
            "productFoo" => Ok(RepositoryKind::Foo),
            "productJson" => Ok(RepositoryKind::Json),
            other => Err(ConfigError::UnknownRepository(other.to_string())),
        }
    }
}
