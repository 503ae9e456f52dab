//! Application context - dependency injection container

use std::path::{Path, PathBuf};
use std::sync::Arc;

use upsbridge_core::{
    AddressBook, PayloadOptions, ShipmentRepository, ShipmentRequestBuilder, ShipmentService,
};
use upsbridge_domain::{Result, UpsConfig};
use upsbridge_infra::config::loader;
use upsbridge_infra::{JsonAddressBook, JsonShipmentRepository, UpsClient, UpsSettingsStore};

/// Default address book file, relative to the working directory.
pub const DEFAULT_ADDRESS_BOOK: &str = "addresses.json";

/// Default shipment directory, relative to the working directory.
pub const DEFAULT_SHIPMENTS_DIR: &str = "shipments";

/// Where the context reads its configuration and data from.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Explicit config file; environment then probed files when unset.
    pub config_path: Option<PathBuf>,
    pub address_book: PathBuf,
    pub shipments_dir: PathBuf,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            address_book: PathBuf::from(DEFAULT_ADDRESS_BOOK),
            shipments_dir: PathBuf::from(DEFAULT_SHIPMENTS_DIR),
        }
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: UpsConfig,
    pub settings: Arc<UpsSettingsStore>,
    pub repository: Arc<JsonShipmentRepository>,
    pub shipments: ShipmentService<UpsClient>,
}

impl AppContext {
    /// Load configuration and wire every service.
    ///
    /// # Errors
    /// Returns an error if the configuration or the address book cannot be
    /// loaded.
    pub fn new(options: &ContextOptions) -> Result<Self> {
        let config = match &options.config_path {
            Some(path) => loader::load_from_file(Some(path.clone()))?,
            None => loader::load()?,
        };

        Self::with_config(config, &options.address_book, &options.shipments_dir)
    }

    /// Wire services around an already-loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the address book cannot be loaded.
    pub fn with_config(
        config: UpsConfig,
        address_book: &Path,
        shipments_dir: &Path,
    ) -> Result<Self> {
        let settings = Arc::new(UpsSettingsStore::new(config.clone()));
        let addresses: Arc<dyn AddressBook> = Arc::new(JsonAddressBook::from_path(address_book)?);
        let repository = Arc::new(JsonShipmentRepository::new(shipments_dir));

        let builder =
            ShipmentRequestBuilder::new(addresses, &config.account_number, &config.api_version)
                .with_options(PayloadOptions {
                    label_image_format: config.label_image_format.clone(),
                    receipt_image_format: config.receipt_image_format.clone(),
                });

        let shipments = ShipmentService::new(
            builder,
            UpsClient::new(Arc::clone(&settings)),
            Arc::clone(&repository) as Arc<dyn ShipmentRepository>,
        );

        tracing::info!(
            base_url = config.api_base_url(),
            address_book = %address_book.display(),
            shipments_dir = %shipments_dir.display(),
            "application context initialized"
        );

        Ok(Self { config, settings, repository, shipments })
    }

    /// Gateway sharing this context's credential store.
    pub fn gateway(&self) -> UpsClient {
        UpsClient::new(Arc::clone(&self.settings))
    }
}
