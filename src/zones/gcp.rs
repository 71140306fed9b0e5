// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GCP: operator-supplied managed zones win, possibly living in another
//! project. Otherwise the public zone is searched for in the install project
//! and the private zone is the one the installer creates.

use super::{ResolveContext, ZoneStrategy};
use crate::config::DnsZoneOverride;
use crate::error::{Result, ZoneError};
use crate::types::{DnsZoneConfig, ZoneKind, ZoneReference};
use async_trait::async_trait;
use tracing::debug;

pub struct GcpZones;

#[async_trait]
impl ZoneStrategy for GcpZones {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig> {
        let gcp = ctx.install.platform.gcp.as_ref().ok_or_else(|| {
            ZoneError::InvalidConfig("platform.gcp section is missing".to_string())
        })?;

        let public_override = gcp
            .public_dns_zone
            .as_ref()
            .and_then(|zone| gcp_zone_reference(&gcp.project_id, zone));

        let public_zone = match public_override {
            _ if !ctx.is_external() => None,
            Some(zone_id) => {
                debug!("Using provided public zone {}", zone_id);
                Some(ZoneReference::by_id(zone_id))
            }
            None => {
                let client = ctx
                    .client(ZoneKind::Public, ctx.base_domain(), ctx.lookups.gcp())
                    .await?;
                let zone_name = ctx
                    .lookup(
                        ZoneKind::Public,
                        ctx.base_domain(),
                        client.public_zone(&gcp.project_id, ctx.base_domain()),
                    )
                    .await?;
                Some(ZoneReference::by_id(zone_name))
            }
        };

        let private_override = gcp
            .private_dns_zone
            .as_ref()
            .and_then(|zone| gcp_zone_reference(&gcp.project_id, zone));

        let private_zone = match private_override {
            Some(zone_id) => {
                debug!("Using provided private zone {}", zone_id);
                ZoneReference::by_id(zone_id)
            }
            None => ZoneReference::by_id(ctx.cluster_id.gcp_private_zone_name()),
        };

        Ok(DnsZoneConfig {
            public_zone,
            private_zone: Some(private_zone),
        })
    }
}

/// Zone ID to publish for an operator-supplied zone, or `None` when the
/// override names no zone. Zones in another project are referenced by their
/// full path; zones in the install project by bare name.
pub fn gcp_zone_reference(own_project: &str, zone: &DnsZoneOverride) -> Option<String> {
    if zone.id.is_empty() {
        return None;
    }
    match zone.project_id() {
        Some(project) if project != own_project => Some(compose_gcp_zone_id(project, &zone.id)),
        _ => Some(zone.id.clone()),
    }
}

pub fn compose_gcp_zone_id(project: &str, zone: &str) -> String {
    format!("project/{}/managedZones/{}", project, zone)
}
