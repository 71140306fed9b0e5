// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data model shared by the resolver and the manifest writer.

pub mod cluster;
pub mod dns;
pub mod platform;

pub use cluster::ClusterId;
pub use dns::{ClusterDns, DnsSpec, DnsZoneConfig, ZoneKind, ZoneReference};
pub use platform::PlatformKind;
