// Copyright (c) 2025 - Cowboy AI, Inc.
//! Namer selection
//!
//! The vendor is chosen once, when configuration is loaded, and callers then
//! work against the returned `&dyn Namer`.
//!
//! ```rust
//! use entity_naming::NamerConfig;
//!
//! let config = NamerConfig::from_json(r#"{ "vendor": "nokia" }"#).unwrap();
//! assert_eq!(config.namer().aggregate_interface(0).unwrap(), "lag1.0");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::namer::Namer;
use crate::vendor::{UnknownVendor, Vendor};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid namer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownVendor(#[from] UnknownVendor),
}

/// Which vendor's naming conventions to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamerConfig {
    pub vendor: Vendor,
}

impl NamerConfig {
    pub fn new(vendor: Vendor) -> Self {
        Self { vendor }
    }

    /// Parse a JSON document such as `{"vendor": "arista"}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        info!(vendor = %config.vendor, "loaded namer configuration");
        Ok(config)
    }

    /// Build from a free-form vendor name (`"Arista"`, `"srlinux"`, ...)
    pub fn from_vendor_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn namer(&self) -> &'static dyn Namer {
        self.vendor.namer()
    }
}
