//! Integration tests for AppContext wiring

mod support;

use std::path::Path;

use support::Workspace;
use upsbridge_common::CredentialStore;
use upsbridge_domain::UpsBridgeError;
use upsbridge_lib::context::{AppContext, ContextOptions};

#[test]
fn context_wires_services_from_config() {
    let workspace = Workspace::new();
    let context = workspace.context("http://127.0.0.1:9/");

    assert_eq!(context.config.api_base_url(), "http://127.0.0.1:9");
    assert_eq!(context.repository.root(), workspace.shipments_dir().as_path());
    assert_eq!(context.settings.cache_path(), Some(workspace.token_cache().as_path()));
}

#[tokio::test]
async fn corrupt_token_cache_does_not_block_startup() {
    let workspace = Workspace::new();
    std::fs::write(workspace.token_cache(), r#"{"access_token": "abc""#).unwrap();

    let context = workspace.context("http://127.0.0.1:9");

    assert!(context.settings.cached_token().await.is_none());
}

#[test]
fn missing_address_book_fails_initialization() {
    let workspace = Workspace::new();
    let result = AppContext::with_config(
        workspace.config("http://127.0.0.1:9"),
        &workspace.dir.path().join("nope.json"),
        &workspace.shipments_dir(),
    );

    assert!(matches!(result, Err(UpsBridgeError::NotFound(_))));
}

#[test]
fn explicit_config_file_is_loaded() {
    let workspace = Workspace::new();
    let config_path = workspace.dir.path().join("upsbridge.toml");
    std::fs::write(
        &config_path,
        r#"
target_server = "Production Environment"
client_id = "client-1"
client_secret = "s3cret"
account_number = "A1B2C3"
label_image_format = "GIF"
"#,
    )
    .unwrap();

    let options = ContextOptions {
        config_path: Some(config_path),
        address_book: workspace.address_book(),
        shipments_dir: workspace.shipments_dir(),
    };
    let context = AppContext::new(&options).unwrap();

    assert_eq!(context.config.api_base_url(), "https://onlinetools.ups.com");
    assert_eq!(context.config.label_image_format.as_deref(), Some("GIF"));
    assert_eq!(context.settings.cache_path(), None::<&Path>);
}

#[test]
fn default_options_use_working_directory_files() {
    let options = ContextOptions::default();
    assert_eq!(options.address_book, Path::new("addresses.json"));
    assert_eq!(options.shipments_dir, Path::new("shipments"));
    assert!(options.config_path.is_none());
}
