//! Client handles for the service actors.

mod macros;
mod product_client;

pub use product_client::ProductClient;
