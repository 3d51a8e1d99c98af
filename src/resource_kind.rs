// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device Component Taxonomy
//!
//! The classes of logical and chassis-resident resources that a vendor
//! namer knows how to address.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name any [`ResourceKind`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown resource kind: {0}")]
pub struct UnknownResourceKind(pub String);

/// Class of device component to be named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Loopback interface
    LoopbackInterface,
    /// Link aggregation group object (port-channel, lag)
    AggregatePort,
    /// Addressable interface on top of an aggregation group
    AggregateInterface,
    /// Linecard module
    Linecard,
    /// Controller card (supervisor, control processor)
    ControllerCard,
    /// Switch fabric module
    Fabric,
}

impl ResourceKind {
    /// Every kind, in declaration order
    pub const ALL: [ResourceKind; 6] = [
        Self::LoopbackInterface,
        Self::AggregatePort,
        Self::AggregateInterface,
        Self::Linecard,
        Self::ControllerCard,
        Self::Fabric,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoopbackInterface => "loopback_interface",
            Self::AggregatePort => "aggregate_port",
            Self::AggregateInterface => "aggregate_interface",
            Self::Linecard => "linecard",
            Self::ControllerCard => "controller_card",
            Self::Fabric => "fabric",
        }
    }

    /// Label used in human-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoopbackInterface => "loopback",
            Self::AggregatePort => "aggregate",
            Self::AggregateInterface => "aggregate interface",
            Self::Linecard => "linecard",
            Self::ControllerCard => "controller card",
            Self::Fabric => "fabric",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loopback_interface" | "loopback" => Ok(Self::LoopbackInterface),
            "aggregate_port" | "aggregate" | "lag" | "port_channel" => Ok(Self::AggregatePort),
            "aggregate_interface" => Ok(Self::AggregateInterface),
            "linecard" => Ok(Self::Linecard),
            "controller_card" | "supervisor" => Ok(Self::ControllerCard),
            "fabric" => Ok(Self::Fabric),
            _ => Err(UnknownResourceKind(s.to_string())),
        }
    }
}
