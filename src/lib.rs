// Copyright (c) 2025 - Cowboy AI, Inc.
//! Vendor-specific names for network device components
//!
//! Maps a logical index for a device resource (loopback, aggregate port or
//! interface, linecard, controller card, fabric module) to the exact name a
//! vendor's operating system uses for it, so configuration code can address
//! resources without hardcoding each vendor's numbering.
//!
//! ```rust
//! use entity_naming::{Namer, ResourceKind, Vendor};
//!
//! let namer = Vendor::Arista.namer();
//! assert_eq!(namer.linecard(0).unwrap(), "Linecard3");
//! assert_eq!(namer.name(ResourceKind::Fabric, 5).unwrap(), "Fabric6");
//! assert!(namer.fabric(6).unwrap_err().to_string().contains("exceed"));
//! ```

pub mod config;
pub mod errors;
pub mod namer;
pub mod resource_kind;
pub mod rule;
pub mod vendor;

// Re-export commonly used types
pub use config::{ConfigError, NamerConfig};
pub use errors::{NamingError, NamingResult};
pub use namer::Namer;
pub use resource_kind::{ResourceKind, UnknownResourceKind};
pub use rule::NamingRule;
pub use vendor::{AristaNamer, NokiaNamer, UnknownVendor, Vendor};
