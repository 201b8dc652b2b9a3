//! The canonical configuration record.
//!
//! One record describes one remote-access VPN design. The editing surface
//! mutates it field by field; everything in this crate only reads it. The
//! wire shape is a string-keyed camelCase mapping, stored verbatim by the
//! persistence collaborator as JSON or TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults;
use crate::enums::{DhGroup, DnsMode, Proposal, SplitMode};

/// One listener the appliance terminates remote-access tunnels on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tunnel {
    pub name: String,
    pub comments: String,
    pub wan_interface: String,
    pub fqdn: String,
    pub port: String,
}

/// A user group mapped to an identity-provider group object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserGroup {
    pub name: String,
    pub external_object_id: String,
}

/// The full VPN design: tunnels, negotiation parameters, client addressing,
/// split tunneling, identity federation, and client-side toggles.
///
/// `tunnels[0]` is the canonical source for derived identity-provider
/// endpoint URLs. `presharedKey` is a secret: only the client-profile
/// artifact may embed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigRecord {
    pub tunnels: Vec<Tunnel>,
    pub user_groups: Vec<UserGroup>,

    // Phase 1
    pub phase1_proposals: Vec<Proposal>,
    pub phase1_dh_groups: Vec<DhGroup>,
    pub phase1_key_lifetime_seconds: String,
    pub nat_traversal: bool,
    pub dead_peer_detection_enabled: bool,
    pub dpd_interval_seconds: String,
    pub dpd_retry_count: String,

    // Phase 2
    pub phase2_proposals: Vec<Proposal>,
    pub pfs_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfs_dh_group: Option<DhGroup>,
    pub phase2_key_lifetime_seconds: String,

    // Client addressing
    pub pool_start_ip: String,
    pub pool_end_ip: String,
    pub dns_mode: DnsMode,
    pub dns1: String,
    pub dns2: String,

    // Split tunneling
    pub split_mode: SplitMode,
    pub split_group_name: String,
    pub split_subnets: String,

    // Identity federation
    pub saml_server_name: String,
    pub idp_login_url: String,
    pub idp_entity_id: String,
    pub idp_logout_url: String,
    pub idp_certificate_name: String,
    pub appliance_certificate_name: String,

    // Advanced
    pub group_restriction_at_phase1: bool,
    pub client_auto_negotiate: bool,
    pub client_keep_alive: bool,
    pub childless_ike: bool,
    pub save_password: bool,
    pub preshared_key: String,
    pub banner: String,
}

impl ConfigRecord {
    /// The documented default instance: one tunnel on the default port,
    /// every enumeration at its recommended-practice value. Passes every
    /// field validator.
    pub fn recommended() -> Self {
        ConfigRecord {
            tunnels: vec![Tunnel {
                name: defaults::TUNNEL_NAME.to_string(),
                comments: String::new(),
                wan_interface: defaults::WAN_INTERFACE.to_string(),
                fqdn: String::new(),
                port: defaults::PORT.to_string(),
            }],
            user_groups: Vec::new(),
            phase1_proposals: defaults::PHASE1_PROPOSALS.to_vec(),
            phase1_dh_groups: defaults::PHASE1_DH_GROUPS.to_vec(),
            phase1_key_lifetime_seconds: defaults::PHASE1_KEY_LIFETIME.to_string(),
            nat_traversal: true,
            dead_peer_detection_enabled: true,
            dpd_interval_seconds: defaults::DPD_INTERVAL.to_string(),
            dpd_retry_count: defaults::DPD_RETRY.to_string(),
            phase2_proposals: defaults::PHASE2_PROPOSALS.to_vec(),
            pfs_enabled: true,
            pfs_dh_group: Some(defaults::PFS_DH_GROUP),
            phase2_key_lifetime_seconds: defaults::PHASE2_KEY_LIFETIME.to_string(),
            pool_start_ip: defaults::POOL_START.to_string(),
            pool_end_ip: defaults::POOL_END.to_string(),
            dns_mode: DnsMode::Auto,
            dns1: String::new(),
            dns2: String::new(),
            split_mode: SplitMode::Disabled,
            split_group_name: String::new(),
            split_subnets: String::new(),
            saml_server_name: String::new(),
            idp_login_url: String::new(),
            idp_entity_id: String::new(),
            idp_logout_url: String::new(),
            idp_certificate_name: String::new(),
            appliance_certificate_name: String::new(),
            group_restriction_at_phase1: false,
            client_auto_negotiate: true,
            client_keep_alive: true,
            childless_ike: true,
            save_password: false,
            preshared_key: String::new(),
            banner: String::new(),
        }
    }
}

/// Errors raised while reading or writing a record file.
///
/// Malformed persisted data is the file loader's problem, not the core's:
/// validators, generators, and scoring all operate on an already-loaded
/// record and never fail.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML record: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialize TOML record: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Load a record file, choosing the format by extension (`.toml` is TOML,
/// anything else JSON).
pub fn load_record(path: &Path) -> Result<ConfigRecord, RecordError> {
    let raw = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "toml") {
        Ok(toml::from_str(&raw)?)
    } else {
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Serialize a record in the named format.
pub fn render_record(record: &ConfigRecord, as_toml: bool) -> Result<String, RecordError> {
    if as_toml {
        Ok(toml::to_string_pretty(record)?)
    } else {
        Ok(serde_json::to_string_pretty(record)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ConfigRecord, Tunnel, UserGroup};
    use crate::enums::{DnsMode, SplitMode};

    #[test]
    fn wire_shape_uses_camel_case_keys() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0].fqdn = "vpn.example.com".to_string();
        record.user_groups.push(UserGroup {
            name: "vpn-users".to_string(),
            external_object_id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        });

        let json = serde_json::to_string(&record).expect("serialize");
        for key in [
            "\"wanInterface\"",
            "\"phase1Proposals\"",
            "\"phase1DhGroups\"",
            "\"externalObjectId\"",
            "\"poolStartIp\"",
            "\"splitMode\"",
            "\"idpLoginUrl\"",
            "\"presharedKey\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
        assert!(json.contains("\"dnsMode\":\"auto\""));
        assert!(json.contains("\"splitMode\":\"disabled\""));
    }

    #[test]
    fn partial_record_files_fill_with_empty_fields() {
        let record: ConfigRecord =
            serde_json::from_str(r#"{"tunnels": [{"name": "HQ-VPN"}]}"#).expect("parse");
        assert_eq!(
            record.tunnels,
            vec![Tunnel {
                name: "HQ-VPN".to_string(),
                ..Tunnel::default()
            }]
        );
        assert_eq!(record.dns_mode, DnsMode::Auto);
        assert_eq!(record.split_mode, SplitMode::Disabled);
        assert!(record.phase1_proposals.is_empty());
        assert!(!record.pfs_enabled);
    }

    #[test]
    fn recommended_record_round_trips_through_toml() {
        let record = ConfigRecord::recommended();
        let toml_text = super::render_record(&record, true).expect("toml");
        let back: ConfigRecord = toml::from_str(&toml_text).expect("parse back");
        assert_eq!(back, record);
    }
}
