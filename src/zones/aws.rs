// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! AWS: the public zone is looked up in Route 53, the private zone is either
//! an operator-supplied hosted zone or the one the installer will create and
//! tag for the cluster.

use super::{ResolveContext, ZoneStrategy};
use crate::constants::aws::{cluster_tag, HOSTED_ZONE_PREFIX, NAME_TAG, OWNED};
use crate::error::{Result, ZoneError};
use crate::types::{ClusterId, DnsZoneConfig, ZoneKind, ZoneReference};
use async_trait::async_trait;
use tracing::debug;

pub struct AwsZones;

#[async_trait]
impl ZoneStrategy for AwsZones {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig> {
        let aws = ctx.install.platform.aws.as_ref().ok_or_else(|| {
            ZoneError::InvalidConfig("platform.aws section is missing".to_string())
        })?;

        let public_zone = if ctx.is_external() {
            let client = ctx
                .client(ZoneKind::Public, ctx.base_domain(), ctx.lookups.aws())
                .await?;
            let handle = ctx
                .lookup(
                    ZoneKind::Public,
                    ctx.base_domain(),
                    client.public_zone(ctx.base_domain()),
                )
                .await?;
            Some(ZoneReference::by_id(hosted_zone_id(&handle)))
        } else {
            debug!("Internal publishing, skipping public zone lookup");
            None
        };

        let private_zone = match aws.hosted_zone() {
            Some(hosted_zone) => {
                debug!("Using existing private hosted zone {}", hosted_zone);
                ZoneReference::by_id(hosted_zone)
            }
            None => private_zone_tags(ctx.cluster_id),
        };

        Ok(DnsZoneConfig {
            public_zone,
            private_zone: Some(private_zone),
        })
    }
}

/// Route 53 returns zone IDs as `/hostedzone/<id>`
pub fn hosted_zone_id(handle: &str) -> &str {
    handle.strip_prefix(HOSTED_ZONE_PREFIX).unwrap_or(handle)
}

/// Tags of the private hosted zone the installer creates for the cluster
pub fn private_zone_tags(cluster_id: &ClusterId) -> ZoneReference {
    ZoneReference::by_tags([
        (cluster_tag(&cluster_id.infra_id), OWNED.to_string()),
        (NAME_TAG.to_string(), cluster_id.aws_private_zone_name()),
    ])
}
