//! # Mock Framework
//!
//! Utilities for testing code that talks to the product service through a
//! [`ProductClient`] without spinning up the actor.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then use [`expect_find_all`] or [`expect_find_by_id`] to assert on
//! the request and answer it however the test needs.

use tokio::sync::{mpsc, oneshot};
use crate::clients::ProductClient;
use crate::domain::Product;
use crate::error::ProductError;
use crate::messages::ProductRequest;

/// Creates a client whose requests arrive on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (ProductClient, mpsc::Receiver<ProductRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ProductClient::new(sender), receiver)
}

/// Helper to verify that the next message is a FindAll request
pub async fn expect_find_all(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<oneshot::Sender<Result<Vec<Product>, ProductError>>> {
    match receiver.recv().await {
        Some(ProductRequest::FindAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindById request
pub async fn expect_find_by_id(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(i64, oneshot::Sender<Result<Option<Product>, ProductError>>)> {
    match receiver.recv().await {
        Some(ProductRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Shutdown request
pub async fn expect_shutdown(receiver: &mut mpsc::Receiver<ProductRequest>) -> bool {
    matches!(receiver.recv().await, Some(ProductRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let lookup = tokio::spawn(async move { client.find_by_id(2).await });

        let (id, responder) = expect_find_by_id(&mut receiver).await.expect("Expected FindById request");
        assert_eq!(id, 2);
        responder.send(Ok(Some(Product::new(2, "Stub", 1)))).unwrap();

        let result = lookup.await.unwrap();
        assert_eq!(result, Ok(Some(Product::new(2, "Stub", 1))));
    }
}
