use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::client_method;
use crate::domain::Product;
use crate::error::ProductError;
use crate::messages::ProductRequest;

/// Cloneable handle for talking to the product service actor.
#[derive(Clone)]
pub struct ProductClient {
    sender: mpsc::Sender<ProductRequest>,
}

impl ProductClient {
    pub fn new(sender: mpsc::Sender<ProductRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop. No reply is expected.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ProductError> {
        debug!("Sending shutdown request");
        self.sender
            .send(ProductRequest::Shutdown)
            .await
            .map_err(|_| ProductError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(ProductClient => fn find_all() -> Vec<Product> as ProductRequest::FindAll, Error = ProductError);
client_method!(ProductClient => fn find_by_id(id: i64) -> Option<Product> as ProductRequest::FindById, Error = ProductError);
