// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for naming operations

use thiserror::Error;

use crate::resource_kind::ResourceKind;
use crate::vendor::Vendor;

/// Errors that can occur while naming a device component
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NamingError {
    /// Index is past the vendor's last supported instance of this kind
    #[error("{vendor} {kind} index cannot exceed {max}, got {index}")]
    RangeExceeded {
        vendor: Vendor,
        kind: ResourceKind,
        max: u32,
        index: u32,
    },
}

/// Result type for naming operations
pub type NamingResult<T> = Result<T, NamingError>;
