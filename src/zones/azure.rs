// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Azure: zone IDs are ARM resource IDs computed from the subscription and
//! the configured resource groups. No zone search is needed.

use super::{ResolveContext, ZoneStrategy};
use crate::error::{Result, ZoneError};
use crate::types::{DnsZoneConfig, ZoneKind, ZoneReference};
use async_trait::async_trait;
use tracing::debug;

pub struct AzureZones;

#[async_trait]
impl ZoneStrategy for AzureZones {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig> {
        let azure = ctx.install.platform.azure.as_ref().ok_or_else(|| {
            ZoneError::InvalidConfig("platform.azure section is missing".to_string())
        })?;

        // One session serves both zones, failures are reported against the first
        let (zone, domain) = if ctx.is_external() {
            (ZoneKind::Public, ctx.base_domain().to_string())
        } else {
            (ZoneKind::Private, ctx.install.cluster_domain())
        };
        let session = ctx.client(zone, &domain, ctx.lookups.azure()).await?;
        let subscription_id = ctx
            .client(zone, &domain, session.subscription_id())
            .await?;

        let public_zone = ctx.is_external().then(|| {
            ZoneReference::by_id(dns_zone_id(
                &subscription_id,
                &azure.base_domain_resource_group_name,
                ctx.base_domain(),
            ))
        });

        // Azure Stack Hub has no private DNS, regardless of publishing strategy
        let private_zone = if azure.cloud_name.supports_private_zones() {
            let resource_group = azure.cluster_resource_group_name(ctx.cluster_id);
            Some(ZoneReference::by_id(private_dns_zone_id(
                &subscription_id,
                &resource_group,
                &ctx.install.cluster_domain(),
            )))
        } else {
            debug!("{:?} has no private DNS zones", azure.cloud_name);
            None
        };

        Ok(DnsZoneConfig {
            public_zone,
            private_zone,
        })
    }
}

/// ARM resource ID of a public DNS zone
pub fn dns_zone_id(subscription_id: &str, resource_group: &str, zone: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/dnszones/{}",
        subscription_id, resource_group, zone
    )
}

/// ARM resource ID of a private DNS zone
pub fn private_dns_zone_id(subscription_id: &str, resource_group: &str, zone: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/privateDnsZones/{}",
        subscription_id, resource_group, zone
    )
}
