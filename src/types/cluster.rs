// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Identity generated for a cluster earlier in the install pipeline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterId {
    /// Unique-enough token used to name and tag cluster-owned cloud resources
    #[serde(rename = "infraID")]
    pub infra_id: String,
}

impl ClusterId {
    pub fn new(infra_id: impl Into<String>) -> Self {
        Self {
            infra_id: infra_id.into(),
        }
    }

    /// Name tag of the installer-created AWS private hosted zone
    pub fn aws_private_zone_name(&self) -> String {
        format!("{}-int", self.infra_id)
    }

    /// Name of the installer-created GCP private managed zone
    pub fn gcp_private_zone_name(&self) -> String {
        format!(
            "{}{}",
            self.infra_id,
            crate::constants::gcp::PRIVATE_ZONE_SUFFIX
        )
    }

    /// Resource group the installer creates on Azure when none is configured
    pub fn azure_resource_group(&self) -> String {
        format!(
            "{}{}",
            self.infra_id,
            crate::constants::azure::RESOURCE_GROUP_SUFFIX
        )
    }
}
