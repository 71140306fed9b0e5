// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::ZoneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Infrastructure platforms a cluster can be installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Aws,
    Azure,
    Gcp,
    #[serde(rename = "ibmcloud")]
    IbmCloud,
    #[serde(rename = "powervs")]
    PowerVs,
    #[serde(rename = "baremetal")]
    BareMetal,
    None,
    Libvirt,
    #[serde(rename = "openstack")]
    OpenStack,
    #[serde(rename = "vsphere")]
    VSphere,
    Ovirt,
    Nutanix,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 12] = [
        PlatformKind::Aws,
        PlatformKind::Azure,
        PlatformKind::Gcp,
        PlatformKind::IbmCloud,
        PlatformKind::PowerVs,
        PlatformKind::BareMetal,
        PlatformKind::None,
        PlatformKind::Libvirt,
        PlatformKind::OpenStack,
        PlatformKind::VSphere,
        PlatformKind::Ovirt,
        PlatformKind::Nutanix,
    ];

    /// Name used for the platform section of the install config
    pub fn name(&self) -> &'static str {
        match self {
            PlatformKind::Aws => "aws",
            PlatformKind::Azure => "azure",
            PlatformKind::Gcp => "gcp",
            PlatformKind::IbmCloud => "ibmcloud",
            PlatformKind::PowerVs => "powervs",
            PlatformKind::BareMetal => "baremetal",
            PlatformKind::None => "none",
            PlatformKind::Libvirt => "libvirt",
            PlatformKind::OpenStack => "openstack",
            PlatformKind::VSphere => "vsphere",
            PlatformKind::Ovirt => "ovirt",
            PlatformKind::Nutanix => "nutanix",
        }
    }

    /// Whether the installer manages cluster DNS zones on this platform.
    /// Everything else relies on DNS set up outside the installer.
    pub fn manages_dns(&self) -> bool {
        matches!(
            self,
            PlatformKind::Aws
                | PlatformKind::Azure
                | PlatformKind::Gcp
                | PlatformKind::IbmCloud
                | PlatformKind::PowerVs
        )
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformKind {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlatformKind::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ZoneError::InvalidPlatform(s.to_string()))
    }
}
