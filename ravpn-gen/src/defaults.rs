//! The single shared default table.
//!
//! Every generator and the recommended record resolve missing optional
//! fields through this module; no fallback literal lives anywhere else.
//! The validator's accepted lifetime range stays in `netcheck-core` —
//! this table only owns the substituted values.

use crate::enums::{DhGroup, Proposal};
use crate::record::{ConfigRecord, Tunnel};

/// SAML/IKE service port the appliance listens on when none is set.
pub const PORT: &str = "10428";
/// Egress interface assumed for a tunnel without one.
pub const WAN_INTERFACE: &str = "wan1";
/// Placeholder endpoint host for a tunnel without an FQDN.
pub const FQDN: &str = "vpn.example.com";
/// Name given to the single tunnel in the recommended record.
pub const TUNNEL_NAME: &str = "RAVPN-1";

pub const PHASE1_PROPOSALS: &[Proposal] = &[Proposal::Aes256Sha256, Proposal::Aes256Gcm];
pub const PHASE1_DH_GROUPS: &[DhGroup] = &[DhGroup::G20, DhGroup::G21];
pub const PHASE1_KEY_LIFETIME: &str = "86400";
pub const DPD_INTERVAL: &str = "20";
pub const DPD_RETRY: &str = "3";

pub const PHASE2_PROPOSALS: &[Proposal] = &[Proposal::Aes256Sha256, Proposal::Aes256Gcm];
pub const PFS_DH_GROUP: DhGroup = DhGroup::G20;
pub const PHASE2_KEY_LIFETIME: &str = "43200";

pub const POOL_START: &str = "10.212.134.200";
pub const POOL_END: &str = "10.212.134.210";

/// Address object holding the client pool.
pub const POOL_OBJECT: &str = "ravpn-client-pool";
/// Address group holding split-tunnel destinations when the record names none.
pub const SPLIT_GROUP: &str = "ravpn-split-destinations";
/// SAML server object name when the record names none.
pub const SAML_SERVER: &str = "saml-idp";

/// Pick the value, or the fallback when the value is blank.
pub fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

pub fn tunnel_port(tunnel: &Tunnel) -> &str {
    or_default(&tunnel.port, PORT)
}

/// Tunnel display name, falling back to a position-derived one.
pub fn tunnel_name(tunnel: &Tunnel, index: usize) -> String {
    let trimmed = tunnel.name.trim();
    if trimmed.is_empty() {
        format!("RAVPN-{}", index + 1)
    } else {
        trimmed.to_string()
    }
}

pub fn tunnel_interface(tunnel: &Tunnel) -> &str {
    or_default(&tunnel.wan_interface, WAN_INTERFACE)
}

pub fn tunnel_fqdn(tunnel: &Tunnel) -> &str {
    or_default(&tunnel.fqdn, FQDN)
}

pub fn phase1_proposals(record: &ConfigRecord) -> &[Proposal] {
    if record.phase1_proposals.is_empty() {
        PHASE1_PROPOSALS
    } else {
        &record.phase1_proposals
    }
}

pub fn phase1_dh_groups(record: &ConfigRecord) -> &[DhGroup] {
    if record.phase1_dh_groups.is_empty() {
        PHASE1_DH_GROUPS
    } else {
        &record.phase1_dh_groups
    }
}

pub fn phase1_lifetime(record: &ConfigRecord) -> &str {
    or_default(&record.phase1_key_lifetime_seconds, PHASE1_KEY_LIFETIME)
}

pub fn dpd_interval(record: &ConfigRecord) -> &str {
    or_default(&record.dpd_interval_seconds, DPD_INTERVAL)
}

pub fn dpd_retry(record: &ConfigRecord) -> &str {
    or_default(&record.dpd_retry_count, DPD_RETRY)
}

pub fn phase2_proposals(record: &ConfigRecord) -> &[Proposal] {
    if record.phase2_proposals.is_empty() {
        PHASE2_PROPOSALS
    } else {
        &record.phase2_proposals
    }
}

pub fn pfs_group(record: &ConfigRecord) -> DhGroup {
    record.pfs_dh_group.unwrap_or(PFS_DH_GROUP)
}

pub fn phase2_lifetime(record: &ConfigRecord) -> &str {
    or_default(&record.phase2_key_lifetime_seconds, PHASE2_KEY_LIFETIME)
}

pub fn pool_start(record: &ConfigRecord) -> &str {
    or_default(&record.pool_start_ip, POOL_START)
}

pub fn pool_end(record: &ConfigRecord) -> &str {
    or_default(&record.pool_end_ip, POOL_END)
}

pub fn split_group(record: &ConfigRecord) -> &str {
    or_default(&record.split_group_name, SPLIT_GROUP)
}

pub fn saml_server(record: &ConfigRecord) -> &str {
    or_default(&record.saml_server_name, SAML_SERVER)
}

/// `host:port` of the SAML service endpoint, derived from `tunnels[0]`.
pub fn sp_address(record: &ConfigRecord) -> String {
    match record.tunnels.first() {
        Some(tunnel) => format!("{}:{}", tunnel_fqdn(tunnel), tunnel_port(tunnel)),
        None => format!("{FQDN}:{PORT}"),
    }
}

/// Service-provider URL under the derived SAML endpoint.
pub fn sp_url(record: &ConfigRecord, path: &str) -> String {
    format!("https://{}{}", sp_address(record), path)
}

#[cfg(test)]
mod tests {
    use super::{or_default, sp_address, sp_url, tunnel_port};
    use crate::record::{ConfigRecord, Tunnel};

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(or_default("", "10428"), "10428");
        assert_eq!(or_default("   ", "10428"), "10428");
        assert_eq!(or_default("444", "10428"), "444");
    }

    #[test]
    fn first_tunnel_drives_sp_endpoints() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0].fqdn = "vpn.corp.example".to_string();
        record.tunnels[0].port = "444".to_string();
        record.tunnels.push(Tunnel {
            fqdn: "other.example.com".to_string(),
            ..Tunnel::default()
        });

        assert_eq!(sp_address(&record), "vpn.corp.example:444");
        assert_eq!(
            sp_url(&record, "/remote/saml/login"),
            "https://vpn.corp.example:444/remote/saml/login"
        );
    }

    #[test]
    fn empty_tunnel_list_still_yields_an_endpoint() {
        let record = ConfigRecord::default();
        assert_eq!(sp_address(&record), "vpn.example.com:10428");
    }

    #[test]
    fn default_tunnel_port_is_the_documented_one() {
        let record = ConfigRecord::recommended();
        assert_eq!(tunnel_port(&record.tunnels[0]), "10428");
    }
}
