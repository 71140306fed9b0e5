// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Platforms where cluster DNS is set up outside the installer.

use super::{ResolveContext, ZoneStrategy};
use crate::error::Result;
use crate::types::DnsZoneConfig;
use async_trait::async_trait;
use tracing::debug;

pub struct ExternalDns;

#[async_trait]
impl ZoneStrategy for ExternalDns {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig> {
        debug!("DNS for {} is managed outside the installer", ctx.platform);
        Ok(DnsZoneConfig::default())
    }
}
