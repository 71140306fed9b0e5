// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Cluster-wide DNS configuration consumed by the ingress and DNS operators
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "DNS",
    plural = "dnses"
)]
#[serde(rename_all = "camelCase")]
pub struct DnsSpec {
    /// Domain every cluster record is created under, `<clusterName>.<baseDomain>`
    pub base_domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_zone: Option<ZoneReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_zone: Option<ZoneReference>,
}

/// The `config.openshift.io/v1` `DNS` object named `cluster`
pub type ClusterDns = DNS;

/// How a hosted zone is identified to the operators. Serialized as either
/// `{id: ...}` or `{tags: {...}}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(untagged)]
pub enum ZoneReference {
    /// Exact provider handle of an existing zone
    Id { id: String },
    /// Tags a zone created later will carry
    Tags { tags: BTreeMap<String, String> },
}

impl ZoneReference {
    pub fn by_id(id: impl Into<String>) -> Self {
        ZoneReference::Id { id: id.into() }
    }

    pub fn by_tags<K, V>(tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ZoneReference::Tags {
            tags: tags
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            ZoneReference::Id { id } => Some(id),
            ZoneReference::Tags { .. } => None,
        }
    }
}

/// Which of the two cluster zones an operation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Public,
    Private,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneKind::Public => write!(f, "public"),
            ZoneKind::Private => write!(f, "private"),
        }
    }
}

/// Zones resolved for a cluster. An absent zone means the installer does
/// not manage that kind of zone for this cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DnsZoneConfig {
    pub public_zone: Option<ZoneReference>,
    pub private_zone: Option<ZoneReference>,
}

impl DnsZoneConfig {
    pub fn is_empty(&self) -> bool {
        self.public_zone.is_none() && self.private_zone.is_none()
    }

    /// Build the DNS config spec for the given cluster domain
    pub fn into_spec(self, cluster_domain: impl Into<String>) -> DnsSpec {
        DnsSpec {
            base_domain: cluster_domain.into(),
            public_zone: self.public_zone,
            private_zone: self.private_zone,
        }
    }
}
