// Copyright (c) 2025 - Cowboy AI, Inc.
//! The `Namer` capability set
//!
//! One naming operation per [`ResourceKind`]. Callers hold a `&dyn Namer`
//! (usually obtained from [`Vendor::namer`](crate::Vendor::namer) or
//! [`NamerConfig`](crate::NamerConfig)) and never depend on a concrete vendor.

use crate::errors::NamingResult;
use crate::resource_kind::ResourceKind;
use crate::vendor::Vendor;

/// Vendor-specific names for device components
///
/// Every operation takes a zero-based index and either returns the name the
/// vendor's OS uses for that instance or fails with
/// [`NamingError::RangeExceeded`](crate::NamingError::RangeExceeded).
/// Implementations are stateless and must be deterministic.
pub trait Namer: Send + Sync {
    /// Vendor this namer produces names for
    fn vendor(&self) -> Vendor;

    /// Largest accepted index for `kind`, inclusive
    fn max_index(&self, kind: ResourceKind) -> u32;

    /// Name of the loopback interface at `index`
    fn loopback_interface(&self, index: u32) -> NamingResult<String>;

    /// Name of the aggregation group object at `index`
    fn aggregate_port(&self, index: u32) -> NamingResult<String>;

    /// Name of the interface on top of the aggregation group at `index`
    ///
    /// Shares its bound with [`Namer::aggregate_port`]. The result is either
    /// the aggregate port name unchanged or that name plus a fixed suffix.
    fn aggregate_interface(&self, index: u32) -> NamingResult<String>;

    fn linecard(&self, index: u32) -> NamingResult<String>;

    fn controller_card(&self, index: u32) -> NamingResult<String>;

    fn fabric(&self, index: u32) -> NamingResult<String>;

    /// Dispatch on `kind`
    fn name(&self, kind: ResourceKind, index: u32) -> NamingResult<String> {
        match kind {
            ResourceKind::LoopbackInterface => self.loopback_interface(index),
            ResourceKind::AggregatePort => self.aggregate_port(index),
            ResourceKind::AggregateInterface => self.aggregate_interface(index),
            ResourceKind::Linecard => self.linecard(index),
            ResourceKind::ControllerCard => self.controller_card(index),
            ResourceKind::Fabric => self.fabric(index),
        }
    }
}
