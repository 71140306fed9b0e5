// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Install configuration consumed by the zone resolver.

use crate::error::ZoneError;
use crate::types::{ClusterId, PlatformKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The parts of the install config that drive DNS zone selection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    pub metadata: InstallMetadata,
    pub base_domain: String,
    #[serde(default)]
    pub publish: PublishingStrategy,
    pub platform: PlatformConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InstallMetadata {
    /// Cluster name
    pub name: String,
}

impl InstallConfig {
    /// Parse an install config document
    pub fn from_yaml(data: &str) -> Result<Self> {
        let config: InstallConfig =
            serde_yaml::from_str(data).context("Failed to parse install config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load an install config from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read install config {}", path.display()))?;
        Self::from_yaml(&data).with_context(|| format!("Invalid install config {}", path.display()))
    }

    pub fn validate(&self) -> std::result::Result<(), ZoneError> {
        if self.metadata.name.is_empty() {
            return Err(ZoneError::InvalidConfig("metadata.name is empty".to_string()));
        }
        if self.base_domain.is_empty() {
            return Err(ZoneError::InvalidConfig("baseDomain is empty".to_string()));
        }
        Ok(())
    }

    /// `<clusterName>.<baseDomain>`
    pub fn cluster_domain(&self) -> String {
        format!("{}.{}", self.metadata.name, self.base_domain)
    }

    pub fn is_external(&self) -> bool {
        self.publish == PublishingStrategy::External
    }
}

/// Whether cluster endpoints are published outside the private network
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PublishingStrategy {
    #[default]
    External,
    Internal,
}

/// Platform section of the install config. Exactly one platform is set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlatformConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzurePlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpPlatform>,
    /// Platforms whose settings play no part in zone selection, keyed by name
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

impl PlatformConfig {
    pub fn aws(aws: AwsPlatform) -> Self {
        Self {
            aws: Some(aws),
            ..Default::default()
        }
    }

    pub fn azure(azure: AzurePlatform) -> Self {
        Self {
            azure: Some(azure),
            ..Default::default()
        }
    }

    pub fn gcp(gcp: GcpPlatform) -> Self {
        Self {
            gcp: Some(gcp),
            ..Default::default()
        }
    }

    /// A platform section with no settings, e.g. `none: {}`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            other: BTreeMap::from([(
                name.into(),
                serde_yaml::Value::Mapping(Default::default()),
            )]),
            ..Default::default()
        }
    }

    /// Names of all platform sections present
    pub fn names(&self) -> Vec<&str> {
        let typed = [
            (self.aws.is_some(), PlatformKind::Aws.name()),
            (self.azure.is_some(), PlatformKind::Azure.name()),
            (self.gcp.is_some(), PlatformKind::Gcp.name()),
        ];
        typed
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .chain(self.other.keys().map(String::as_str))
            .collect()
    }

    /// The configured platform. An unknown or missing platform name is an
    /// `InvalidPlatform` error.
    pub fn kind(&self) -> std::result::Result<PlatformKind, ZoneError> {
        match self.names().as_slice() {
            [name] => name.parse(),
            [] => Err(ZoneError::InvalidPlatform(String::new())),
            names => Err(ZoneError::InvalidConfig(format!(
                "multiple platforms configured: {}",
                names.join(", ")
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatform {
    #[serde(default)]
    pub region: String,
    /// Existing Route 53 private hosted zone to use instead of creating one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_zone: Option<String>,
}

impl AwsPlatform {
    pub fn hosted_zone(&self) -> Option<&str> {
        self.hosted_zone.as_deref().filter(|z| !z.is_empty())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AzurePlatform {
    /// Resource group holding the public DNS zone of the base domain
    #[serde(default)]
    pub base_domain_resource_group_name: String,
    /// Pre-existing resource group for cluster resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
    #[serde(default)]
    pub cloud_name: AzureCloudEnvironment,
}

impl AzurePlatform {
    /// Resource group the cluster resources, private zone included, live in
    pub fn cluster_resource_group_name(&self, cluster_id: &ClusterId) -> String {
        match self.resource_group_name.as_deref() {
            Some(rg) if !rg.is_empty() => rg.to_string(),
            _ => cluster_id.azure_resource_group(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AzureCloudEnvironment {
    #[default]
    AzurePublicCloud,
    #[serde(rename = "AzureUSGovernmentCloud")]
    AzureUsGovernmentCloud,
    AzureChinaCloud,
    AzureGermanCloud,
    AzureStackCloud,
}

impl AzureCloudEnvironment {
    /// Azure Stack Hub has no private DNS zones
    pub fn supports_private_zones(&self) -> bool {
        *self != AzureCloudEnvironment::AzureStackCloud
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GcpPlatform {
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(rename = "publicDNSZone", default, skip_serializing_if = "Option::is_none")]
    pub public_dns_zone: Option<DnsZoneOverride>,
    #[serde(rename = "privateDNSZone", default, skip_serializing_if = "Option::is_none")]
    pub private_dns_zone: Option<DnsZoneOverride>,
}

/// Operator-supplied existing zone, possibly in another project
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DnsZoneOverride {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "projectID", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl DnsZoneOverride {
    pub fn new(id: impl Into<String>, project_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.map(str::to_string),
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref().filter(|p| !p.is_empty())
    }
}
