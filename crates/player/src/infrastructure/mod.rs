//! Infrastructure adapters: webhook HTTP client, configuration, event bus,
//! image loading and tracing setup.

pub mod config;
pub mod http_client;
pub mod image_loader;
pub mod logging;
pub mod messaging;

pub use config::{ConfigError, PlayerConfig, DEFAULT_WEBHOOK_URL};
pub use http_client::WebhookClient;
pub use image_loader::{load_image, ImageLoadError};
pub use logging::init_tracing;
pub use messaging::{FormEventBus, SubscriptionId};
