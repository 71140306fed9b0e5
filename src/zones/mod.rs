// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! DNS zone resolution.
//!
//! [`ZoneResolver`] picks the [`ZoneStrategy`] for the configured platform and
//! runs it. Strategies issue their provider lookups sequentially through
//! [`ResolveContext`], which checks for cancellation before every call and
//! wraps failures with the platform, zone and domain involved.

pub mod aws;
pub mod azure;
pub mod external;
pub mod gcp;
pub mod ibm;

use crate::config::InstallConfig;
use crate::error::{Result, ZoneError};
use crate::lookup::{LookupError, LookupProvider};
use crate::types::{ClusterId, DnsZoneConfig, PlatformKind, ZoneKind};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

pub use aws::AwsZones;
pub use azure::AzureZones;
pub use external::ExternalDns;
pub use gcp::{compose_gcp_zone_id, gcp_zone_reference, GcpZones};
pub use ibm::{IbmCloudZones, PowerVsZones};

/// Zone selection policy for one platform family
#[async_trait]
pub trait ZoneStrategy: Send + Sync {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<DnsZoneConfig>;
}

/// Everything a strategy may consult while resolving zones
pub struct ResolveContext<'a> {
    pub platform: PlatformKind,
    pub install: &'a InstallConfig,
    pub cluster_id: &'a ClusterId,
    pub lookups: &'a dyn LookupProvider,
    pub cancel: &'a CancellationToken,
}

impl<'a> ResolveContext<'a> {
    pub fn base_domain(&self) -> &str {
        &self.install.base_domain
    }

    pub fn is_external(&self) -> bool {
        self.install.is_external()
    }

    /// Build the platform client needed for the `zone` lookup of `domain`.
    /// Failures are reported as client init errors.
    pub async fn client<T, F>(&self, zone: ZoneKind, domain: &str, build: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, LookupError>> + Send,
        T: Send,
    {
        self.ensure_not_cancelled()?;
        let platform = self.platform;
        self.guarded(build)
            .await
            .map_err(|source| ZoneError::ClientInit {
                platform,
                zone,
                domain: domain.to_string(),
                source,
            })
    }

    /// Run a zone lookup for `domain`. Failures are reported as lookup errors.
    pub async fn lookup<T, F>(&self, zone: ZoneKind, domain: &str, call: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, LookupError>> + Send,
        T: Send,
    {
        self.ensure_not_cancelled()?;
        let platform = self.platform;
        debug!("Looking up {} zone for {} on {}", zone, domain, platform);
        self.guarded(call)
            .await
            .map_err(|source| ZoneError::Lookup {
                platform,
                zone,
                domain: domain.to_string(),
                source,
            })
    }

    async fn guarded<T, F>(&self, call: F) -> std::result::Result<T, LookupError>
    where
        F: Future<Output = std::result::Result<T, LookupError>> + Send,
    {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(LookupError::Cancelled),
            res = call => res,
        }
    }

    /// Fail fast when the caller has already given up
    pub fn ensure_not_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(ZoneError::Cancelled {
                platform: self.platform,
            });
        }
        Ok(())
    }
}

/// Strategy used for a platform
pub fn strategy_for(platform: PlatformKind) -> &'static dyn ZoneStrategy {
    match platform {
        PlatformKind::Aws => &AwsZones,
        PlatformKind::Azure => &AzureZones,
        PlatformKind::Gcp => &GcpZones,
        PlatformKind::IbmCloud => &IbmCloudZones,
        PlatformKind::PowerVs => &PowerVsZones,
        PlatformKind::BareMetal
        | PlatformKind::None
        | PlatformKind::Libvirt
        | PlatformKind::OpenStack
        | PlatformKind::VSphere
        | PlatformKind::Ovirt
        | PlatformKind::Nutanix => &ExternalDns,
    }
}

/// Resolves the public and private DNS zones of a cluster
#[derive(Clone)]
pub struct ZoneResolver {
    lookups: Arc<dyn LookupProvider>,
}

impl ZoneResolver {
    pub fn new(lookups: Arc<dyn LookupProvider>) -> Self {
        Self { lookups }
    }

    /// Resolve zones for the install. Either every applicable zone resolves
    /// or the whole call fails.
    pub async fn resolve(
        &self,
        install: &InstallConfig,
        cluster_id: &ClusterId,
    ) -> Result<DnsZoneConfig> {
        self.resolve_with_cancel(install, cluster_id, &CancellationToken::new())
            .await
    }

    /// Like [`ZoneResolver::resolve`], aborting when `cancel` fires.
    #[instrument(
        skip(self, install, cluster_id, cancel),
        fields(base_domain = %install.base_domain, infra_id = %cluster_id.infra_id)
    )]
    pub async fn resolve_with_cancel(
        &self,
        install: &InstallConfig,
        cluster_id: &ClusterId,
        cancel: &CancellationToken,
    ) -> Result<DnsZoneConfig> {
        install.validate()?;
        let platform = install.platform.kind()?;

        let ctx = ResolveContext {
            platform,
            install,
            cluster_id,
            lookups: self.lookups.as_ref(),
            cancel,
        };

        let zones = strategy_for(platform).resolve(&ctx).await?;
        info!(
            "Resolved DNS zones for {} on {}: public={:?} private={:?}",
            install.cluster_domain(),
            platform,
            zones.public_zone,
            zones.private_zone
        );
        Ok(zones)
    }
}
