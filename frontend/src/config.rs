use gloo_storage::{LocalStorage, Storage};
use shared::config::STORAGE_KEY;
use shared::ClientConfig;

/// Build-time defaults, overridden by a JSON blob in LocalStorage when one is
/// present and valid.
pub fn load_client_config() -> ClientConfig {
    let defaults = ClientConfig::default();
    if let Err(e) = defaults.validate() {
        log::error!("Built-in client config is invalid: {}", e);
    }

    match LocalStorage::raw().get_item(STORAGE_KEY) {
        Ok(Some(json)) => match ClientConfig::from_override(&json) {
            Ok(config) => {
                log::info!("Using client config override from LocalStorage");
                config
            }
            Err(e) => {
                log::warn!("Ignoring LocalStorage override {}: {}", STORAGE_KEY, e);
                defaults
            }
        },
        Ok(None) => defaults,
        Err(e) => {
            log::warn!("LocalStorage unavailable: {:?}", e);
            defaults
        }
    }
}
