// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::lookup::LookupError;
use crate::types::dns::ZoneKind;
use crate::types::platform::PlatformKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("invalid platform {0:?}")]
    InvalidPlatform(String),

    #[error("invalid install config: {0}")]
    InvalidConfig(String),

    #[error("failed to initialize {platform} client for {zone} zone of {domain:?}: {source}")]
    ClientInit {
        platform: PlatformKind,
        zone: ZoneKind,
        domain: String,
        #[source]
        source: LookupError,
    },

    #[error("getting {zone} zone for {domain:?} on {platform}: {source}")]
    Lookup {
        platform: PlatformKind,
        zone: ZoneKind,
        domain: String,
        #[source]
        source: LookupError,
    },

    #[error("zone resolution cancelled before {platform} lookup")]
    Cancelled { platform: PlatformKind },

    #[error("failed to render DNS config manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),
}

impl ZoneError {
    /// True when resolution stopped because the caller cancelled it,
    /// either before a lookup started or while one was in flight.
    pub fn is_cancelled(&self) -> bool {
        match self {
            ZoneError::Cancelled { .. } => true,
            ZoneError::Lookup { source, .. } | ZoneError::ClientInit { source, .. } => {
                matches!(source, LookupError::Cancelled)
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_message_names_zone_and_domain() {
        let err = ZoneError::Lookup {
            platform: PlatformKind::Aws,
            zone: ZoneKind::Public,
            domain: "example.com".to_string(),
            source: LookupError::NotFound("no hosted zone".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "getting public zone for \"example.com\" on aws: zone not found: no hosted zone"
        );
    }

    #[test]
    fn test_client_init_message_names_zone_and_domain() {
        let err = ZoneError::ClientInit {
            platform: PlatformKind::Gcp,
            zone: ZoneKind::Public,
            domain: "example.com".to_string(),
            source: LookupError::Auth("no credentials".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "failed to initialize gcp client for public zone of \"example.com\": \
             authentication failed: no credentials"
        );
    }

    #[test]
    fn test_is_cancelled() {
        assert!(ZoneError::Cancelled {
            platform: PlatformKind::Gcp
        }
        .is_cancelled());
        assert!(ZoneError::Lookup {
            platform: PlatformKind::Gcp,
            zone: ZoneKind::Public,
            domain: "example.com".to_string(),
            source: LookupError::Cancelled,
        }
        .is_cancelled());
        assert!(ZoneError::ClientInit {
            platform: PlatformKind::Azure,
            zone: ZoneKind::Private,
            domain: "demo.example.com".to_string(),
            source: LookupError::Cancelled,
        }
        .is_cancelled());
        assert!(!ZoneError::InvalidPlatform("foo".to_string()).is_cancelled());
    }
}
