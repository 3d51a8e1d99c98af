// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Vendor Namers
//!
//! For every vendor and resource kind, naming must be a deterministic total
//! function on `[0, max_index]` and must fail everywhere above it.

use entity_naming::{AristaNamer, Namer, NamingError, NokiaNamer, ResourceKind, Vendor};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn vendor_strategy() -> impl Strategy<Value = Vendor> {
    prop::sample::select(Vendor::ALL.to_vec())
}

fn kind_strategy() -> impl Strategy<Value = ResourceKind> {
    prop::sample::select(ResourceKind::ALL.to_vec())
}

/// Vendor, kind, and an index inside that pair's bound
fn in_range() -> impl Strategy<Value = (Vendor, ResourceKind, u32)> {
    (vendor_strategy(), kind_strategy()).prop_flat_map(|(vendor, kind)| {
        let max = vendor.namer().max_index(kind);
        (Just(vendor), Just(kind), 0..=max)
    })
}

/// Vendor, kind, and an index past that pair's bound
fn out_of_range() -> impl Strategy<Value = (Vendor, ResourceKind, u32)> {
    (vendor_strategy(), kind_strategy()).prop_flat_map(|(vendor, kind)| {
        let max = vendor.namer().max_index(kind);
        (Just(vendor), Just(kind), (max + 1)..=u32::MAX)
    })
}

/// Expected name, written out from each vendor's documented convention
fn expected(vendor: Vendor, kind: ResourceKind, index: u32) -> String {
    let n = u64::from(index);
    match (vendor, kind) {
        (Vendor::Arista, ResourceKind::LoopbackInterface) => format!("Loopback{n}"),
        (Vendor::Arista, ResourceKind::AggregatePort | ResourceKind::AggregateInterface) => {
            format!("Port-Channel{}", n + 1)
        }
        (Vendor::Arista, ResourceKind::Linecard) => format!("Linecard{}", n + 3),
        (Vendor::Nokia, ResourceKind::LoopbackInterface) => format!("lo{n}"),
        (Vendor::Nokia, ResourceKind::AggregatePort) => format!("lag{}", n + 1),
        (Vendor::Nokia, ResourceKind::AggregateInterface) => format!("lag{}.0", n + 1),
        (Vendor::Nokia, ResourceKind::Linecard) => format!("Linecard{}", n + 1),
        (_, ResourceKind::ControllerCard) => format!("Supervisor{}", n + 1),
        (_, ResourceKind::Fabric) => format!("Fabric{}", n + 1),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: every in-range index produces the vendor's exact format
    #[test]
    fn prop_in_range_matches_format((vendor, kind, index) in in_range()) {
        let name = vendor.namer().name(kind, index);
        prop_assert_eq!(name, Ok(expected(vendor, kind, index)));
    }

    /// Property: every index above the bound fails with RangeExceeded
    #[test]
    fn prop_out_of_range_fails((vendor, kind, index) in out_of_range()) {
        let namer = vendor.namer();
        let err = namer.name(kind, index).unwrap_err();
        prop_assert_eq!(
            err,
            NamingError::RangeExceeded {
                vendor,
                kind,
                max: namer.max_index(kind),
                index,
            }
        );
        prop_assert!(err.to_string().contains("exceed"));
    }

    /// Property: same input, same output
    #[test]
    fn prop_deterministic(vendor in vendor_strategy(), kind in kind_strategy(), index in any::<u32>()) {
        let namer = vendor.namer();
        prop_assert_eq!(namer.name(kind, index), namer.name(kind, index));
    }

    /// Property: aggregate interfaces share the aggregate port bound, and
    /// Arista reuses the port name while Nokia appends ".0"
    #[test]
    fn prop_aggregate_interface_follows_port(index in 0u32..1_000_100) {
        let arista = AristaNamer;
        prop_assert_eq!(arista.aggregate_interface(index), arista.aggregate_port(index));

        let nokia = NokiaNamer;
        match (nokia.aggregate_port(index), nokia.aggregate_interface(index)) {
            (Ok(port), Ok(interface)) => prop_assert_eq!(interface, format!("{port}.0")),
            (Err(_), Err(err)) => prop_assert!(err.to_string().contains("exceed")),
            (port, interface) => prop_assert!(false, "bounds diverge: {:?} vs {:?}", port, interface),
        }
    }
}
