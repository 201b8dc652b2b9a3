//! GUI walkthrough generator.
//!
//! Renders the same design as a numbered sequence of web-UI steps: shared
//! objects first (SAML server, groups, pool, split tunneling), then one
//! step per tunnel.

use crate::defaults;
use crate::enums::{DnsMode, SplitMode};
use crate::labels;
use crate::record::ConfigRecord;

/// Render the step-by-step walkthrough.
pub fn render(record: &ConfigRecord) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut step = 0usize;

    out.push("Remote-access IPsec VPN -- GUI walkthrough".to_string());
    out.push("==========================================".to_string());
    out.push(String::new());

    step += 1;
    out.push(format!("Step {step}: Create the SAML server"));
    out.push("  Navigate: User & Authentication > Single Sign-On".to_string());
    out.push(format!("  - Name: {}", defaults::saml_server(record)));
    out.push(format!("  - Address: {}", defaults::sp_address(record)));
    out.push(format!(
        "  - SP entity ID: {}",
        defaults::sp_url(record, "/remote/saml/metadata/")
    ));
    out.push(format!(
        "  - SP sign-on URL: {}",
        defaults::sp_url(record, "/remote/saml/login")
    ));
    out.push(format!(
        "  - SP logout URL: {}",
        defaults::sp_url(record, "/remote/saml/logout")
    ));
    push_optional(&mut out, "  - IdP entity ID", &record.idp_entity_id);
    push_optional(&mut out, "  - IdP sign-on URL", &record.idp_login_url);
    push_optional(&mut out, "  - IdP logout URL", &record.idp_logout_url);
    push_optional(&mut out, "  - IdP certificate", &record.idp_certificate_name);
    push_optional(
        &mut out,
        "  - Server certificate",
        &record.appliance_certificate_name,
    );
    out.push(String::new());

    step += 1;
    out.push(format!("Step {step}: Create user groups"));
    out.push("  Navigate: User & Authentication > User Groups".to_string());
    if record.user_groups.is_empty() {
        out.push("  - No groups configured; add at least one before go-live.".to_string());
    }
    for group in &record.user_groups {
        if group.name.trim().is_empty() {
            continue;
        }
        out.push(format!(
            "  - Create \"{}\" with remote server {}",
            group.name.trim(),
            defaults::saml_server(record)
        ));
        if !group.external_object_id.trim().is_empty() {
            out.push(format!(
                "    Group claim value: {}",
                group.external_object_id.trim()
            ));
        }
    }
    out.push(String::new());

    step += 1;
    out.push(format!("Step {step}: Define the client address pool"));
    out.push("  Navigate: Policy & Objects > Addresses".to_string());
    out.push(format!("  - Name: {}", defaults::POOL_OBJECT));
    out.push(format!(
        "  - Range: {} - {}",
        defaults::pool_start(record),
        defaults::pool_end(record)
    ));
    match record.dns_mode {
        DnsMode::Auto => {
            out.push("  - Client DNS: automatic (inherit appliance DNS)".to_string());
        }
        DnsMode::Manual => {
            out.push("  - Client DNS: manual".to_string());
            push_optional(&mut out, "    Primary", &record.dns1);
            push_optional(&mut out, "    Secondary", &record.dns2);
        }
    }
    out.push(String::new());

    step += 1;
    out.push(format!("Step {step}: Split tunneling"));
    if record.split_mode == SplitMode::Enabled {
        out.push(format!(
            "  - Create address group \"{}\" with these members:",
            defaults::split_group(record)
        ));
        let subnets: Vec<&str> = record
            .split_subnets
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if subnets.is_empty() {
            out.push("    (no destinations listed yet)".to_string());
        }
        for subnet in subnets {
            out.push(format!("    * {subnet}"));
        }
    } else {
        out.push("  - Disabled: all client traffic is routed through the tunnel.".to_string());
    }
    out.push(String::new());

    let total = record.tunnels.len();
    for (index, tunnel) in record.tunnels.iter().enumerate() {
        step += 1;
        let name = defaults::tunnel_name(tunnel, index);
        out.push(format!(
            "Step {step}: Tunnel {} of {} -- {}",
            index + 1,
            total,
            name
        ));
        out.push("  Navigate: VPN > IPsec Tunnels > Create New".to_string());
        out.push("  - Template: remote access, IKEv2".to_string());
        out.push(format!(
            "  - Incoming interface: {}",
            defaults::tunnel_interface(tunnel)
        ));
        out.push(format!("  - Listen port: {}", defaults::tunnel_port(tunnel)));
        push_optional(&mut out, "  - Peer address (FQDN)", &tunnel.fqdn);
        push_optional(&mut out, "  - Comments", &tunnel.comments);
        out.push(format!(
            "  - Phase 1 proposals: {}",
            labels::proposal_labels(defaults::phase1_proposals(record)).join(", ")
        ));
        out.push(format!(
            "  - Diffie-Hellman groups: {}",
            labels::dh_group_labels(defaults::phase1_dh_groups(record)).join(", ")
        ));
        out.push(format!(
            "  - Phase 1 key lifetime: {} seconds",
            defaults::phase1_lifetime(record)
        ));
        out.push(format!(
            "  - NAT traversal: {}",
            enabled(record.nat_traversal)
        ));
        if record.dead_peer_detection_enabled {
            out.push(format!(
                "  - Dead peer detection: enabled (interval {}s, retries {})",
                defaults::dpd_interval(record),
                defaults::dpd_retry(record)
            ));
        } else {
            out.push("  - Dead peer detection: disabled".to_string());
        }
        out.push(format!(
            "  - Phase 2 proposals: {}",
            labels::proposal_labels(defaults::phase2_proposals(record)).join(", ")
        ));
        if record.pfs_enabled {
            out.push(format!(
                "  - Perfect forward secrecy: enabled, {}",
                labels::dh_group_label(defaults::pfs_group(record))
            ));
        } else {
            out.push("  - Perfect forward secrecy: disabled".to_string());
        }
        out.push(format!(
            "  - Phase 2 key lifetime: {} seconds",
            defaults::phase2_lifetime(record)
        ));
        out.push(String::new());
    }

    step += 1;
    out.push(format!("Step {step}: Client options"));
    out.push(format!(
        "  - Save password: {}",
        enabled(record.save_password)
    ));
    out.push(format!(
        "  - Auto negotiate: {}",
        enabled(record.client_auto_negotiate)
    ));
    out.push(format!(
        "  - Keep alive: {}",
        enabled(record.client_keep_alive)
    ));
    if !record.banner.trim().is_empty() {
        out.push(format!("  - Login banner: {}", record.banner.trim()));
    }

    out.join("\n")
}

fn push_optional(out: &mut Vec<String>, label: &str, value: &str) {
    if !value.trim().is_empty() {
        out.push(format!("{label}: {}", value.trim()));
    }
}

fn enabled(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}
