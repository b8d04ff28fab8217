use tokio::sync::oneshot;
use crate::domain::Product;
use crate::error::ProductError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by the product service actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum ProductRequest {
    FindAll {
        respond_to: ServiceResponse<Vec<Product>, ProductError>,
    },
    FindById {
        id: i64,
        respond_to: ServiceResponse<Option<Product>, ProductError>,
    },
    Shutdown,
}
