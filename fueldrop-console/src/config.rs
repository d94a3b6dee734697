//! TOML file configuration for the console.
//!
//! The payment secret is deliberately not part of the file: it is a
//! merchant credential and comes from [`ESEWA_SECRET_ENV`] only.

use anyhow::Context;
use fueldrop_sdk::objects::payment::TEST_PRODUCT_CODE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable holding the merchant's signing secret.
pub const ESEWA_SECRET_ENV: &str = "FUELDROP_ESEWA_SECRET";

/// Root configuration structure as read from `fueldrop.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: ApiConfig,
    pub payment: PaymentConfig,
}

/// Order API section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the order API.
    pub base_url: Url,
}

/// Payment hand-off section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    #[serde(default = "default_product_code")]
    pub product_code: String,
    pub success_url: Url,
    pub failure_url: Url,
}

fn default_product_code() -> String {
    TEST_PRODUCT_CODE.to_owned()
}

/// Load and parse the config file.
pub fn load(path: &Path) -> anyhow::Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

/// Read the signing secret from the environment.
pub fn esewa_secret() -> anyhow::Result<String> {
    std::env::var(ESEWA_SECRET_ENV)
        .with_context(|| format!("{ESEWA_SECRET_ENV} environment variable not set"))
}
