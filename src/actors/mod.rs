use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::ProductClient;
use crate::domain::Product;
use crate::error::ProductError;
use crate::messages::{ProductRequest, ServiceResponse};
use crate::service::ProductService;

// =============================================================================
// PRODUCT ACTOR
// =============================================================================

/// Owns a [`ProductService`] on its own task and answers [`ProductRequest`]s in arrival order.
pub struct ProductActor {
    receiver: mpsc::Receiver<ProductRequest>,
    service: ProductService,
}

impl ProductActor {
    pub fn new(buffer_size: usize, service: ProductService) -> (Self, ProductClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        let client = ProductClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "product_service", skip(self))]
    pub async fn run(mut self) {
        info!(tax = self.service.tax_rate(), "ProductService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ProductRequest::FindAll { respond_to } => {
                    self.handle_find_all(respond_to);
                }
                ProductRequest::FindById { id, respond_to } => {
                    self.handle_find_by_id(id, respond_to);
                }
                ProductRequest::Shutdown => {
                    info!("ProductService shutting down");
                    break;
                }
            }
        }
        info!("ProductService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_find_all(&self, respond_to: ServiceResponse<Vec<Product>, ProductError>) {
        debug!("Processing find_all request");
        let products = self.service.find_all();
        info!(product_count = products.len(), "Listed products");
        let _ = respond_to.send(Ok(products));
    }

    #[instrument(fields(product_id = id), skip(self, respond_to))]
    fn handle_find_by_id(&self, id: i64, respond_to: ServiceResponse<Option<Product>, ProductError>) {
        debug!("Processing find_by_id request");
        let result = self.service.find_by_id(id);
        match &result {
            Ok(Some(product)) => info!(product_name = %product.name, "Product found"),
            Ok(None) => debug!("Product not found"),
            Err(e) => warn!(error = %e, "Product lookup failed"),
        }
        let _ = respond_to.send(result);
    }
}
