// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod manifest;
pub mod types;
pub mod zones;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{InstallConfig, PublishingStrategy};
pub use error::{Result, ZoneError};
pub use lookup::{LookupError, LookupProvider};
pub use types::{ClusterDns, ClusterId, DnsZoneConfig, PlatformKind, ZoneReference};
pub use zones::ZoneResolver;
