mod domain;
mod error;
mod repository;
mod service;
mod config;
mod messages;
mod actors;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

use std::path::PathBuf;
use clap::Parser;
use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, AppError, ProductSystem};
use crate::config::{ConfigLoader, DEFAULT_CONFIG_FILENAME};
use crate::repository::RepositoryKind;

#[derive(Parser, Debug)]
#[command(name = "product_di", about = "Product catalog over swappable repositories", version)]
struct CliArgs {
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME, help = "Path to the TOML configuration file")]
    config: PathBuf,

    #[arg(
        long,
        value_name = "QUALIFIER",
        help = "Repository to wire into the service (productList, productFoo, productJson)"
    )]
    repository: Option<String>,

    #[arg(long, value_name = "ID", default_value_t = 1, help = "Product id to look up after listing")]
    product_id: i64,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_tracing();
    let args = CliArgs::parse();

    let mut config = ConfigLoader::new().with_config_path(&args.config).load()?;
    if let Some(qualifier) = &args.repository {
        config.repository = qualifier.parse::<RepositoryKind>()?;
    }

    info!(repository = %config.repository, tax = config.price.tax, "Starting product system");
    let system = ProductSystem::new(&config)?;

    let span = tracing::info_span!("listing");
    let products = async {
        info!("Listing products with tax applied");
        system.product_client.find_all().await
    }
    .instrument(span)
    .await?;

    for product in &products {
        info!(product_id = product.id, name = %product.name, price = product.price, "Product");
    }

    let span = tracing::info_span!("lookup", product_id = args.product_id);
    let lookup = async { system.product_client.find_by_id(args.product_id).await }
        .instrument(span)
        .await;

    match lookup {
        Ok(Some(product)) => info!(name = %product.name, price = product.price, "Product found"),
        Ok(None) => info!(product_id = args.product_id, "No such product"),
        Err(e) => error!(error = %e, "Product lookup failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
