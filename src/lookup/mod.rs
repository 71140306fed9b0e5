// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provider-side zone lookups.
//!
//! The resolver never talks to a cloud API directly. Each platform that needs
//! a network call exposes it through one of the traits below, and a
//! [`LookupProvider`] builds those clients on demand. Construction failures
//! (missing credentials, bad endpoints) surface as client init errors, call
//! failures as lookup errors.

use crate::config::PublishingStrategy;
use crate::types::platform::PlatformKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Classified failure of a provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("zone not found: {0}")]
    NotFound(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("lookup cancelled")]
    Cancelled,

    #[error("no {0} lookup available")]
    Unsupported(PlatformKind),

    #[error("{0}")]
    Other(String),
}

/// Route 53 hosted zone search
#[async_trait]
pub trait AwsZoneLookup: Send + Sync {
    /// Returns the hosted zone handle, e.g. `/hostedzone/Z123`
    async fn public_zone(&self, base_domain: &str) -> Result<String, LookupError>;
}

/// Azure session details needed to compute DNS zone resource IDs
#[async_trait]
pub trait AzureDnsLookup: Send + Sync {
    async fn subscription_id(&self) -> Result<String, LookupError>;
}

/// Cloud DNS managed zone search
#[async_trait]
pub trait GcpZoneLookup: Send + Sync {
    /// Returns the name of the public managed zone serving `base_domain`
    async fn public_zone(&self, project_id: &str, base_domain: &str)
        -> Result<String, LookupError>;
}

/// IBM Cloud CIS / DNS Services zone search
#[async_trait]
pub trait IbmCloudZoneLookup: Send + Sync {
    async fn zone_id_by_name(
        &self,
        base_domain: &str,
        publish: PublishingStrategy,
    ) -> Result<String, LookupError>;
}

/// IBM Power Virtual Server zone search
#[async_trait]
pub trait PowerVsZoneLookup: Send + Sync {
    async fn zone_id_by_name(&self, base_domain: &str) -> Result<String, LookupError>;
}

/// Builds platform lookup clients. Platforms a provider does not implement
/// report [`LookupError::Unsupported`].
#[async_trait]
pub trait LookupProvider: Send + Sync {
    async fn aws(&self) -> Result<Arc<dyn AwsZoneLookup>, LookupError> {
        Err(LookupError::Unsupported(PlatformKind::Aws))
    }

    async fn azure(&self) -> Result<Arc<dyn AzureDnsLookup>, LookupError> {
        Err(LookupError::Unsupported(PlatformKind::Azure))
    }

    async fn gcp(&self) -> Result<Arc<dyn GcpZoneLookup>, LookupError> {
        Err(LookupError::Unsupported(PlatformKind::Gcp))
    }

    async fn ibmcloud(&self) -> Result<Arc<dyn IbmCloudZoneLookup>, LookupError> {
        Err(LookupError::Unsupported(PlatformKind::IbmCloud))
    }

    async fn powervs(&self) -> Result<Arc<dyn PowerVsZoneLookup>, LookupError> {
        Err(LookupError::Unsupported(PlatformKind::PowerVs))
    }
}

/// Provider for installs that never need a network lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookups;

impl LookupProvider for NoLookups {}
