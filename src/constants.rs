// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// DNS config manifest output
pub mod manifest {
    /// Path of the rendered DNS config, relative to the asset directory
    pub const DNS_CONFIG_FILENAME: &str = "manifests/cluster-dns-02-config.yml";
    /// The DNS config object is cluster scoped and always named "cluster"
    pub const DNS_CONFIG_NAME: &str = "cluster";
}

/// AWS Route 53 naming
pub mod aws {
    /// Prefix Route 53 puts in front of hosted zone IDs
    pub const HOSTED_ZONE_PREFIX: &str = "/hostedzone/";
    /// Value of the cluster ownership tag on the private zone
    pub const OWNED: &str = "owned";
    pub const NAME_TAG: &str = "Name";

    pub fn cluster_tag(infra_id: &str) -> String {
        format!("kubernetes.io/cluster/{}", infra_id)
    }
}

/// GCP Cloud DNS naming
pub mod gcp {
    pub const PRIVATE_ZONE_SUFFIX: &str = "-private-zone";
}

/// Azure DNS naming
pub mod azure {
    /// Suffix of the installer-created resource group when none is configured
    pub const RESOURCE_GROUP_SUFFIX: &str = "-rg";
}
