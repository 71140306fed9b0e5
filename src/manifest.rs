// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the cluster DNS config manifest.

use crate::config::InstallConfig;
use crate::constants::manifest::{DNS_CONFIG_FILENAME, DNS_CONFIG_NAME};
use crate::error::Result;
use crate::types::{ClusterDns, ClusterId, DnsZoneConfig};
use crate::zones::ZoneResolver;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// A generated manifest, ready to be written below the asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Build the cluster-scoped DNS config object for the resolved zones
pub fn dns_config(install: &InstallConfig, zones: DnsZoneConfig) -> ClusterDns {
    ClusterDns::new(DNS_CONFIG_NAME, zones.into_spec(install.cluster_domain()))
}

/// Render the DNS config object as YAML
pub fn render(dns: &ClusterDns) -> Result<ManifestFile> {
    let data = serde_yaml::to_string(dns)?;
    Ok(ManifestFile {
        filename: DNS_CONFIG_FILENAME.to_string(),
        data: data.into_bytes(),
    })
}

/// Resolve the cluster's zones and render the DNS config manifest
#[instrument(skip_all, fields(cluster_domain = %install.cluster_domain()))]
pub async fn generate(
    resolver: &ZoneResolver,
    install: &InstallConfig,
    cluster_id: &ClusterId,
    cancel: &CancellationToken,
) -> Result<ManifestFile> {
    let zones = resolver
        .resolve_with_cancel(install, cluster_id, cancel)
        .await?;
    let file = render(&dns_config(install, zones))?;
    info!("Generated {} ({} bytes)", file.filename, file.data.len());
    Ok(file)
}
