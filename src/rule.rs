// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-kind naming rules
//!
//! A [`NamingRule`] is the whole naming convention for one resource kind on
//! one vendor: an inclusive index bound plus the `prefix`, numeric offset and
//! `suffix` used to build the display name. Vendor namers declare their rules
//! as `const` tables and route every operation through [`NamingRule::apply`].

use tracing::{debug, trace};

use crate::errors::{NamingError, NamingResult};
use crate::resource_kind::ResourceKind;
use crate::vendor::Vendor;

/// Bound and format for one (vendor, kind) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingRule {
    /// Largest accepted index, inclusive
    pub max_index: u32,
    /// Added to the index to get the displayed number
    pub offset: u32,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl NamingRule {
    /// Rule with no suffix
    pub const fn new(prefix: &'static str, max_index: u32, offset: u32) -> Self {
        Self {
            max_index,
            offset,
            prefix,
            suffix: "",
        }
    }

    /// Same bound and numbering, with `suffix` appended to every name
    pub const fn with_suffix(self, suffix: &'static str) -> Self {
        Self {
            max_index: self.max_index,
            offset: self.offset,
            prefix: self.prefix,
            suffix,
        }
    }

    /// Check `index` against the bound and format the name
    ///
    /// The displayed number is computed in `u64`, so `index + offset` never
    /// overflows even at `u32::MAX`.
    pub fn apply(&self, vendor: Vendor, kind: ResourceKind, index: u32) -> NamingResult<String> {
        if index > self.max_index {
            debug!(%vendor, %kind, index, max = self.max_index, "index out of range");
            return Err(NamingError::RangeExceeded {
                vendor,
                kind,
                max: self.max_index,
                index,
            });
        }

        let number = u64::from(index) + u64::from(self.offset);
        let name = format!("{}{}{}", self.prefix, number, self.suffix);
        trace!(%vendor, %kind, index, %name, "named component");
        Ok(name)
    }
}
