use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};
use crate::actors::ProductActor;
use crate::app_system::AppError;
use crate::clients::ProductClient;
use crate::config::{AppConfig, PriceConfig};
use crate::error::ProductError;
use crate::repository::{
    ProductRepository, ProductRepositoryFoo, ProductRepositoryJson, ProductRepositoryList, RepositoryKind,
};
use crate::service::ProductService;

const ACTOR_BUFFER_SIZE: usize = 32;

/// Builds the repository named by `kind`. Only the JSON source touches `products_json`.
#[instrument(skip(products_json))]
pub fn build_repository(kind: RepositoryKind, products_json: &Path) -> Result<Arc<dyn ProductRepository>, ProductError> {
    let repository: Arc<dyn ProductRepository> = match kind {
        RepositoryKind::List => Arc::new(ProductRepositoryList::new()),
        RepositoryKind::Foo => Arc::new(ProductRepositoryFoo),
        RepositoryKind::Json => Arc::new(ProductRepositoryJson::from_path(products_json)?),
    };
    info!(repository = %kind, "Repository selected");
    Ok(repository)
}

/// Wires a repository and the price settings into a running product service.
///
/// Responsible for startup and shutdown of the service actor.
pub struct ProductSystem {
    pub product_client: ProductClient,
    handle: JoinHandle<()>,
}

impl ProductSystem {
    /// Builds the repository selected by `config` and starts the service over it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let repository = build_repository(config.repository, &config.data.products_json)?;
        Ok(Self::with_repository(repository, config.price))
    }

    /// Starts the service over a repository the caller has already built.
    pub fn with_repository(repository: Arc<dyn ProductRepository>, price: PriceConfig) -> Self {
        let service = ProductService::new(repository, price);
        let (actor, product_client) = ProductActor::new(ACTOR_BUFFER_SIZE, service);
        let handle = tokio::spawn(actor.run());

        Self { product_client, handle }
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        // A failed send means the actor already stopped; the join below still reports how.
        let _ = self.product_client.shutdown().await;
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(AppError::Task(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
