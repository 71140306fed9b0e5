// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking provider zone lookups.

use crate::config::{InstallConfig, InstallMetadata, PlatformConfig, PublishingStrategy};
use crate::error::Result;
use crate::lookup::{
    AwsZoneLookup, AzureDnsLookup, GcpZoneLookup, IbmCloudZoneLookup, LookupError,
    LookupProvider, PowerVsZoneLookup,
};
use crate::types::{ClusterId, DnsZoneConfig, PlatformKind};
use crate::zones::ZoneResolver;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A provider call observed by [`MockLookups`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupCall {
    AwsPublicZone(String),
    AzureSubscription,
    GcpPublicZone { project: String, domain: String },
    IbmCloudZone { domain: String, publish: PublishingStrategy },
    PowerVsZone(String),
}

#[derive(Clone)]
enum Reply {
    Zone(String),
    Fail(LookupError),
    /// Client construction itself fails
    InitFail(LookupError),
    /// Never completes
    Pending,
}

/// A mock lookup provider that returns predefined answers per platform and
/// records every call it receives. Platforms without an answer report
/// `Unsupported`.
#[derive(Clone, Default)]
pub struct MockLookups {
    calls: Arc<Mutex<Vec<LookupCall>>>,
    aws: Option<Reply>,
    azure: Option<Reply>,
    gcp: Option<Reply>,
    ibmcloud: Option<Reply>,
    powervs: Option<Reply>,
}

impl MockLookups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aws_zone(mut self, handle: &str) -> Self {
        self.aws = Some(Reply::Zone(handle.to_string()));
        self
    }

    pub fn with_aws_error(mut self, err: LookupError) -> Self {
        self.aws = Some(Reply::Fail(err));
        self
    }

    pub fn with_pending_aws_lookup(mut self) -> Self {
        self.aws = Some(Reply::Pending);
        self
    }

    pub fn with_azure_subscription(mut self, subscription_id: &str) -> Self {
        self.azure = Some(Reply::Zone(subscription_id.to_string()));
        self
    }

    pub fn with_azure_error(mut self, err: LookupError) -> Self {
        self.azure = Some(Reply::Fail(err));
        self
    }

    pub fn with_gcp_zone(mut self, name: &str) -> Self {
        self.gcp = Some(Reply::Zone(name.to_string()));
        self
    }

    pub fn with_gcp_error(mut self, err: LookupError) -> Self {
        self.gcp = Some(Reply::Fail(err));
        self
    }

    pub fn with_ibmcloud_zone(mut self, id: &str) -> Self {
        self.ibmcloud = Some(Reply::Zone(id.to_string()));
        self
    }

    pub fn with_ibmcloud_init_error(mut self, err: LookupError) -> Self {
        self.ibmcloud = Some(Reply::InitFail(err));
        self
    }

    pub fn with_powervs_zone(mut self, id: &str) -> Self {
        self.powervs = Some(Reply::Zone(id.to_string()));
        self
    }

    pub fn with_powervs_error(mut self, err: LookupError) -> Self {
        self.powervs = Some(Reply::Fail(err));
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<LookupCall> {
        self.calls.lock().unwrap().clone()
    }

    fn client(
        &self,
        reply: &Option<Reply>,
        platform: PlatformKind,
    ) -> std::result::Result<Arc<MockClient>, LookupError> {
        match reply {
            None => Err(LookupError::Unsupported(platform)),
            Some(Reply::InitFail(err)) => Err(err.clone()),
            Some(reply) => Ok(Arc::new(MockClient {
                calls: self.calls.clone(),
                reply: reply.clone(),
            })),
        }
    }
}

#[async_trait]
impl LookupProvider for MockLookups {
    async fn aws(&self) -> std::result::Result<Arc<dyn AwsZoneLookup>, LookupError> {
        let client: Arc<dyn AwsZoneLookup> = self.client(&self.aws, PlatformKind::Aws)?;
        Ok(client)
    }

    async fn azure(&self) -> std::result::Result<Arc<dyn AzureDnsLookup>, LookupError> {
        let client: Arc<dyn AzureDnsLookup> = self.client(&self.azure, PlatformKind::Azure)?;
        Ok(client)
    }

    async fn gcp(&self) -> std::result::Result<Arc<dyn GcpZoneLookup>, LookupError> {
        let client: Arc<dyn GcpZoneLookup> = self.client(&self.gcp, PlatformKind::Gcp)?;
        Ok(client)
    }

    async fn ibmcloud(&self) -> std::result::Result<Arc<dyn IbmCloudZoneLookup>, LookupError> {
        let client: Arc<dyn IbmCloudZoneLookup> =
            self.client(&self.ibmcloud, PlatformKind::IbmCloud)?;
        Ok(client)
    }

    async fn powervs(&self) -> std::result::Result<Arc<dyn PowerVsZoneLookup>, LookupError> {
        let client: Arc<dyn PowerVsZoneLookup> =
            self.client(&self.powervs, PlatformKind::PowerVs)?;
        Ok(client)
    }
}

struct MockClient {
    calls: Arc<Mutex<Vec<LookupCall>>>,
    reply: Reply,
}

impl MockClient {
    async fn answer(&self, call: LookupCall) -> std::result::Result<String, LookupError> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Zone(zone) => Ok(zone.clone()),
            Reply::Fail(err) | Reply::InitFail(err) => Err(err.clone()),
            Reply::Pending => std::future::pending().await,
        }
    }
}

#[async_trait]
impl AwsZoneLookup for MockClient {
    async fn public_zone(&self, base_domain: &str) -> std::result::Result<String, LookupError> {
        self.answer(LookupCall::AwsPublicZone(base_domain.to_string()))
            .await
    }
}

#[async_trait]
impl AzureDnsLookup for MockClient {
    async fn subscription_id(&self) -> std::result::Result<String, LookupError> {
        self.answer(LookupCall::AzureSubscription).await
    }
}

#[async_trait]
impl GcpZoneLookup for MockClient {
    async fn public_zone(
        &self,
        project_id: &str,
        base_domain: &str,
    ) -> std::result::Result<String, LookupError> {
        self.answer(LookupCall::GcpPublicZone {
            project: project_id.to_string(),
            domain: base_domain.to_string(),
        })
        .await
    }
}

#[async_trait]
impl IbmCloudZoneLookup for MockClient {
    async fn zone_id_by_name(
        &self,
        base_domain: &str,
        publish: PublishingStrategy,
    ) -> std::result::Result<String, LookupError> {
        self.answer(LookupCall::IbmCloudZone {
            domain: base_domain.to_string(),
            publish,
        })
        .await
    }
}

#[async_trait]
impl PowerVsZoneLookup for MockClient {
    async fn zone_id_by_name(&self, base_domain: &str) -> std::result::Result<String, LookupError> {
        self.answer(LookupCall::PowerVsZone(base_domain.to_string()))
            .await
    }
}

/// Install config for cluster `demo` under `example.com`
pub fn install_config(platform: PlatformConfig, publish: PublishingStrategy) -> InstallConfig {
    InstallConfig {
        metadata: InstallMetadata {
            name: "demo".to_string(),
        },
        base_domain: "example.com".to_string(),
        publish,
        platform,
    }
}

/// Resolve zones through a [`ZoneResolver`] sharing `lookups`' call log
pub async fn resolve(
    lookups: &MockLookups,
    install: &InstallConfig,
    infra_id: &str,
) -> Result<DnsZoneConfig> {
    ZoneResolver::new(Arc::new(lookups.clone()))
        .resolve(install, &ClusterId::new(infra_id))
        .await
}
