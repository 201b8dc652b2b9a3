//! Documentation generator.
//!
//! Renders the design as a markdown summary: parameter tables using the
//! shared label tables, derived tunnel and user-group tables, and a fixed
//! validation checklist. Never includes the pre-shared key.

use crate::defaults;
use crate::enums::{DnsMode, SplitMode};
use crate::labels;
use crate::record::ConfigRecord;

/// Items the operator walks through before go-live. Static by design:
/// the checklist does not vary with the record.
const VALIDATION_CHECKLIST: &[&str] = &[
    "IdP sign-on and logout URLs respond over HTTPS",
    "IdP signing certificate imported and not expired",
    "Group object IDs match the identity provider exactly",
    "Client pool does not overlap any routed subnet",
    "Firewall policy allows pool-to-internal traffic",
    "Test login succeeds from an external network",
    "Dead peer detection tears down dropped sessions",
];

/// Render the markdown summary document.
pub fn render(record: &ConfigRecord) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("# Remote-Access VPN Design".to_string());
    out.push(String::new());
    out.push("## Overview".to_string());
    out.push(String::new());
    out.push(format!("- Tunnels: {}", record.tunnels.len()));
    out.push(format!("- User groups: {}", record.user_groups.len()));
    out.push(format!(
        "- Authentication: SAML via {}",
        defaults::saml_server(record)
    ));
    out.push(format!(
        "- Service endpoint: {}",
        defaults::sp_address(record)
    ));
    out.push(String::new());

    out.push("## Phase 1 (IKE)".to_string());
    out.push(String::new());
    out.push("| Parameter | Value |".to_string());
    out.push("| --- | --- |".to_string());
    out.push(format!(
        "| Proposals | {} |",
        labels::proposal_labels(defaults::phase1_proposals(record)).join(", ")
    ));
    out.push(format!(
        "| DH groups | {} |",
        labels::dh_group_labels(defaults::phase1_dh_groups(record)).join(", ")
    ));
    out.push(format!(
        "| Key lifetime | {} seconds |",
        defaults::phase1_lifetime(record)
    ));
    out.push(format!(
        "| NAT traversal | {} |",
        enabled(record.nat_traversal)
    ));
    if record.dead_peer_detection_enabled {
        out.push(format!(
            "| Dead peer detection | enabled, interval {}s, retries {} |",
            defaults::dpd_interval(record),
            defaults::dpd_retry(record)
        ));
    } else {
        out.push("| Dead peer detection | disabled |".to_string());
    }
    out.push(format!(
        "| Childless IKE | {} |",
        enabled(record.childless_ike)
    ));
    out.push(String::new());

    out.push("## Phase 2 (IPsec)".to_string());
    out.push(String::new());
    out.push("| Parameter | Value |".to_string());
    out.push("| --- | --- |".to_string());
    out.push(format!(
        "| Proposals | {} |",
        labels::proposal_labels(defaults::phase2_proposals(record)).join(", ")
    ));
    if record.pfs_enabled {
        out.push(format!(
            "| Perfect forward secrecy | enabled, {} |",
            labels::dh_group_label(defaults::pfs_group(record))
        ));
    } else {
        out.push("| Perfect forward secrecy | disabled |".to_string());
    }
    out.push(format!(
        "| Key lifetime | {} seconds |",
        defaults::phase2_lifetime(record)
    ));
    out.push(String::new());

    out.push("## Client addressing".to_string());
    out.push(String::new());
    out.push(format!(
        "- Pool: {} - {}",
        defaults::pool_start(record),
        defaults::pool_end(record)
    ));
    match record.dns_mode {
        DnsMode::Auto => out.push("- DNS: automatic (appliance DNS)".to_string()),
        DnsMode::Manual => {
            let mut servers: Vec<&str> = Vec::new();
            if !record.dns1.trim().is_empty() {
                servers.push(record.dns1.trim());
            }
            if !record.dns2.trim().is_empty() {
                servers.push(record.dns2.trim());
            }
            if servers.is_empty() {
                out.push("- DNS: manual (servers not set yet)".to_string());
            } else {
                out.push(format!("- DNS: manual ({})", servers.join(", ")));
            }
        }
    }
    if record.split_mode == SplitMode::Enabled {
        out.push(format!(
            "- Split tunneling: enabled via group `{}`",
            defaults::split_group(record)
        ));
        for line in record
            .split_subnets
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
        {
            out.push(format!("  - `{line}`"));
        }
    } else {
        out.push("- Split tunneling: disabled (full tunnel)".to_string());
    }
    out.push(String::new());

    out.push("## Tunnels".to_string());
    out.push(String::new());
    out.push("| # | Name | Interface | Endpoint | Port |".to_string());
    out.push("| --- | --- | --- | --- | --- |".to_string());
    for (index, tunnel) in record.tunnels.iter().enumerate() {
        out.push(format!(
            "| {} | {} | {} | {} | {} |",
            index + 1,
            defaults::tunnel_name(tunnel, index),
            defaults::tunnel_interface(tunnel),
            defaults::tunnel_fqdn(tunnel),
            defaults::tunnel_port(tunnel)
        ));
    }
    out.push(String::new());

    out.push("## User groups".to_string());
    out.push(String::new());
    if record.user_groups.is_empty() {
        out.push("No user groups configured.".to_string());
    } else {
        out.push("| Name | Identity-provider object ID |".to_string());
        out.push("| --- | --- |".to_string());
        for group in &record.user_groups {
            out.push(format!(
                "| {} | {} |",
                group.name.trim(),
                group.external_object_id.trim()
            ));
        }
    }
    out.push(String::new());

    out.push("## Identity federation".to_string());
    out.push(String::new());
    out.push("| Field | Value |".to_string());
    out.push("| --- | --- |".to_string());
    push_row(&mut out, "SAML server", defaults::saml_server(record));
    push_row(
        &mut out,
        "SP entity ID",
        &defaults::sp_url(record, "/remote/saml/metadata/"),
    );
    push_row(&mut out, "IdP entity ID", record.idp_entity_id.trim());
    push_row(&mut out, "IdP sign-on URL", record.idp_login_url.trim());
    push_row(&mut out, "IdP logout URL", record.idp_logout_url.trim());
    push_row(
        &mut out,
        "IdP certificate",
        record.idp_certificate_name.trim(),
    );
    push_row(
        &mut out,
        "Appliance certificate",
        record.appliance_certificate_name.trim(),
    );
    out.push(String::new());

    out.push("## Validation checklist".to_string());
    out.push(String::new());
    for item in VALIDATION_CHECKLIST {
        out.push(format!("- [ ] {item}"));
    }

    out.join("\n")
}

fn push_row(out: &mut Vec<String>, field: &str, value: &str) {
    let shown = if value.is_empty() { "not set" } else { value };
    out.push(format!("| {field} | {shown} |"));
}

fn enabled(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::record::{ConfigRecord, Tunnel, UserGroup};

    #[test]
    fn tunnel_table_has_one_row_per_tunnel() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0] = Tunnel {
            name: "HQ-VPN".to_string(),
            fqdn: "vpn.example.com".to_string(),
            port: "10428".to_string(),
            wan_interface: "wan1".to_string(),
            comments: String::new(),
        };
        let text = render(&record);
        assert!(text.contains("| 1 | HQ-VPN | wan1 | vpn.example.com | 10428 |"));
        let rows = text
            .lines()
            .filter(|line| line.starts_with("| 1 |") || line.starts_with("| 2 |"))
            .count();
        assert_eq!(rows, 1);
    }

    #[test]
    fn checklist_is_fixed_text() {
        let sparse = render(&ConfigRecord::default());
        let full = render(&ConfigRecord::recommended());
        let checklist = |text: &str| {
            text.lines()
                .filter(|line| line.starts_with("- [ ]"))
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(checklist(&sparse), checklist(&full));
        assert!(!checklist(&sparse).is_empty());
    }

    #[test]
    fn user_group_table_lists_object_ids() {
        let mut record = ConfigRecord::recommended();
        record.user_groups.push(UserGroup {
            name: "vpn-users".to_string(),
            external_object_id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        });
        let text = render(&record);
        assert!(text.contains("| vpn-users | 123e4567-e89b-12d3-a456-426614174000 |"));
    }

    #[test]
    fn labels_match_the_shared_tables() {
        let text = render(&ConfigRecord::recommended());
        assert!(text.contains("| Proposals | AES256-SHA256, AES256-GCM |"));
        assert!(text.contains("| DH groups | Group 20 (384-bit ECP), Group 21 (521-bit ECP) |"));
    }
}
