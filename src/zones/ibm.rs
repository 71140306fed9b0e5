// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! IBM Cloud and Power VS: one zone serves both roles. The ID found for the
//! base domain is always the private zone, and also the public zone when
//! publishing externally.

use super::{ResolveContext, ZoneStrategy};
use crate::error::Result;
use crate::types::{DnsZoneConfig, ZoneKind, ZoneReference};
use async_trait::async_trait;

pub struct IbmCloudZones;

#[async_trait]
impl ZoneStrategy for IbmCloudZones {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig> {
        let client = ctx
            .client(ZoneKind::Private, ctx.base_domain(), ctx.lookups.ibmcloud())
            .await?;
        let zone_id = ctx
            .lookup(
                ZoneKind::Private,
                ctx.base_domain(),
                client.zone_id_by_name(ctx.base_domain(), ctx.install.publish),
            )
            .await?;

        Ok(shared_zone(ctx, zone_id))
    }
}

pub struct PowerVsZones;

#[async_trait]
impl ZoneStrategy for PowerVsZones {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig> {
        let client = ctx
            .client(ZoneKind::Private, ctx.base_domain(), ctx.lookups.powervs())
            .await?;
        let zone_id = ctx
            .lookup(
                ZoneKind::Private,
                ctx.base_domain(),
                client.zone_id_by_name(ctx.base_domain()),
            )
            .await?;

        Ok(shared_zone(ctx, zone_id))
    }
}

fn shared_zone(ctx: &ResolveContext<'_>, zone_id: String) -> DnsZoneConfig {
    DnsZoneConfig {
        public_zone: ctx
            .is_external()
            .then(|| ZoneReference::by_id(zone_id.clone())),
        private_zone: Some(ZoneReference::by_id(zone_id)),
    }
}
