//! Appliance CLI script generator.
//!
//! Emits the design as FortiGate-style configuration blocks: address
//! objects for the client pool and split-tunnel destinations, the SAML
//! server object, one user group per record row, then one
//! `phase1-interface`/`phase2-interface` block pair per tunnel, in list
//! order. The pre-shared key is never emitted here.

use crate::defaults;
use crate::enums::{DnsMode, SplitMode};
use crate::record::{ConfigRecord, Tunnel};

/// Render the full CLI script.
pub fn render(record: &ConfigRecord) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("# Remote-access IPsec VPN -- appliance CLI script".to_string());
    out.push("# Review each block before applying in a maintenance window.".to_string());
    out.push(String::new());

    push_pool_block(&mut out, record);
    push_dns_block(&mut out, record);
    if record.split_mode == SplitMode::Enabled {
        push_split_block(&mut out, record);
    }
    push_saml_block(&mut out, record);
    push_user_group_blocks(&mut out, record);

    for (index, tunnel) in record.tunnels.iter().enumerate() {
        push_tunnel_blocks(&mut out, record, tunnel, index);
    }

    out.join("\n")
}

fn push_pool_block(out: &mut Vec<String>, record: &ConfigRecord) {
    out.push("# --- Client address pool ---".to_string());
    out.push("config firewall address".to_string());
    out.push(format!("    edit {}", quote(defaults::POOL_OBJECT)));
    out.push("        set type iprange".to_string());
    out.push(format!("        set start-ip {}", defaults::pool_start(record)));
    out.push(format!("        set end-ip {}", defaults::pool_end(record)));
    out.push("    next".to_string());
    out.push("end".to_string());
    out.push(String::new());
}

fn push_dns_block(out: &mut Vec<String>, record: &ConfigRecord) {
    match record.dns_mode {
        DnsMode::Auto => {
            out.push("# --- Client DNS (mode: auto) ---".to_string());
            out.push(
                "# Clients inherit the appliance's DNS servers via IKE mode-cfg.".to_string(),
            );
        }
        DnsMode::Manual => {
            out.push("# --- Client DNS (mode: manual) ---".to_string());
            out.push("# Pushed to clients via IKE mode-cfg:".to_string());
            if !record.dns1.trim().is_empty() {
                out.push(format!("#   primary   : {}", record.dns1.trim()));
            }
            if !record.dns2.trim().is_empty() {
                out.push(format!("#   secondary : {}", record.dns2.trim()));
            }
        }
    }
    out.push(String::new());
}

/// Split-tunnel destinations.
///
/// Lines are emitted as given, without re-validating the CIDR grammar: a
/// record with a bad line still produces a best-effort block the operator
/// can fix up by hand.
fn push_split_block(out: &mut Vec<String>, record: &ConfigRecord) {
    let group = defaults::split_group(record);
    let subnets: Vec<&str> = record
        .split_subnets
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    out.push("# --- Split-tunnel destinations ---".to_string());
    out.push("config firewall address".to_string());
    for (index, subnet) in subnets.iter().enumerate() {
        out.push(format!("    edit {}", quote(&member_name(group, index))));
        out.push("        set allow-routing enable".to_string());
        out.push(format!("        set subnet {subnet}"));
        out.push("    next".to_string());
    }
    out.push("end".to_string());
    out.push("config firewall addrgrp".to_string());
    out.push(format!("    edit {}", quote(group)));
    let members: Vec<String> = (0..subnets.len())
        .map(|index| quote(&member_name(group, index)))
        .collect();
    if !members.is_empty() {
        out.push(format!("        set member {}", members.join(" ")));
    }
    out.push("        set allow-routing enable".to_string());
    out.push("    next".to_string());
    out.push("end".to_string());
    out.push(String::new());
}

fn push_saml_block(out: &mut Vec<String>, record: &ConfigRecord) {
    let server = defaults::saml_server(record);
    out.push("# --- SAML identity provider ---".to_string());
    out.push("config user saml".to_string());
    out.push(format!("    edit {}", quote(server)));
    if !record.appliance_certificate_name.trim().is_empty() {
        out.push(format!(
            "        set cert {}",
            quote(record.appliance_certificate_name.trim())
        ));
    }
    out.push(format!(
        "        set entity-id {}",
        quote(&defaults::sp_url(record, "/remote/saml/metadata/"))
    ));
    out.push(format!(
        "        set single-sign-on-url {}",
        quote(&defaults::sp_url(record, "/remote/saml/login"))
    ));
    out.push(format!(
        "        set single-logout-url {}",
        quote(&defaults::sp_url(record, "/remote/saml/logout"))
    ));
    if !record.idp_entity_id.trim().is_empty() {
        out.push(format!(
            "        set idp-entity-id {}",
            quote(record.idp_entity_id.trim())
        ));
    }
    if !record.idp_login_url.trim().is_empty() {
        out.push(format!(
            "        set idp-single-sign-on-url {}",
            quote(record.idp_login_url.trim())
        ));
    }
    if !record.idp_logout_url.trim().is_empty() {
        out.push(format!(
            "        set idp-single-logout-url {}",
            quote(record.idp_logout_url.trim())
        ));
    }
    if !record.idp_certificate_name.trim().is_empty() {
        out.push(format!(
            "        set idp-cert {}",
            quote(record.idp_certificate_name.trim())
        ));
    }
    out.push("        set digest-method sha256".to_string());
    out.push("    next".to_string());
    out.push("end".to_string());
    out.push(String::new());
}

fn push_user_group_blocks(out: &mut Vec<String>, record: &ConfigRecord) {
    if record.user_groups.is_empty() {
        return;
    }
    let server = defaults::saml_server(record);
    out.push("# --- User groups ---".to_string());
    out.push("config user group".to_string());
    for group in &record.user_groups {
        if group.name.trim().is_empty() {
            continue;
        }
        out.push(format!("    edit {}", quote(group.name.trim())));
        out.push(format!("        set member {}", quote(server)));
        if !group.external_object_id.trim().is_empty() {
            out.push("        config match".to_string());
            out.push("            edit 1".to_string());
            out.push(format!("                set server-name {}", quote(server)));
            out.push(format!(
                "                set group-name {}",
                quote(group.external_object_id.trim())
            ));
            out.push("            next".to_string());
            out.push("        end".to_string());
        }
        out.push("    next".to_string());
    }
    out.push("end".to_string());
    out.push(String::new());
}

fn push_tunnel_blocks(out: &mut Vec<String>, record: &ConfigRecord, tunnel: &Tunnel, index: usize) {
    let name = defaults::tunnel_name(tunnel, index);
    let total = record.tunnels.len();

    out.push(format!("# --- Tunnel {} of {}: {} ---", index + 1, total, name));
    out.push("config vpn ipsec phase1-interface".to_string());
    out.push(format!("    edit {}", quote(&name)));
    if !tunnel.comments.trim().is_empty() {
        out.push(format!(
            "        set comments {}",
            quote(tunnel.comments.trim())
        ));
    }
    out.push("        set type dynamic".to_string());
    out.push(format!(
        "        set interface {}",
        quote(defaults::tunnel_interface(tunnel))
    ));
    out.push("        set ike-version 2".to_string());
    out.push(format!(
        "        set ike-port {}",
        defaults::tunnel_port(tunnel)
    ));
    out.push("        set peertype any".to_string());
    out.push("        set net-device disable".to_string());
    out.push("        set mode-cfg enable".to_string());
    let proposals: Vec<&str> = defaults::phase1_proposals(record)
        .iter()
        .map(|p| p.id())
        .collect();
    out.push(format!("        set proposal {}", proposals.join(" ")));
    let groups: Vec<String> = defaults::phase1_dh_groups(record)
        .iter()
        .map(|g| g.number().to_string())
        .collect();
    out.push(format!("        set dhgrp {}", groups.join(" ")));
    if record.childless_ike {
        out.push("        set childless-ike enable".to_string());
    }
    out.push("        set eap enable".to_string());
    out.push("        set eap-identity send-request".to_string());
    if record.group_restriction_at_phase1 {
        if let Some(group) = record
            .user_groups
            .iter()
            .find(|g| !g.name.trim().is_empty())
        {
            out.push(format!(
                "        set authusrgrp {}",
                quote(group.name.trim())
            ));
        }
    }
    out.push(format!(
        "        set ipv4-start-ip {}",
        defaults::pool_start(record)
    ));
    out.push(format!(
        "        set ipv4-end-ip {}",
        defaults::pool_end(record)
    ));
    match record.dns_mode {
        DnsMode::Auto => out.push("        set dns-mode auto".to_string()),
        DnsMode::Manual => {
            out.push("        set dns-mode manual".to_string());
            if !record.dns1.trim().is_empty() {
                out.push(format!(
                    "        set ipv4-dns-server1 {}",
                    record.dns1.trim()
                ));
            }
            if !record.dns2.trim().is_empty() {
                out.push(format!(
                    "        set ipv4-dns-server2 {}",
                    record.dns2.trim()
                ));
            }
        }
    }
    if record.split_mode == SplitMode::Enabled {
        out.push(format!(
            "        set ipv4-split-include {}",
            quote(defaults::split_group(record))
        ));
    }
    if !record.banner.trim().is_empty() {
        out.push(format!("        set banner {}", quote(record.banner.trim())));
    }
    out.push(format!(
        "        set save-password {}",
        onoff(record.save_password)
    ));
    out.push(format!(
        "        set client-auto-negotiate {}",
        onoff(record.client_auto_negotiate)
    ));
    out.push(format!(
        "        set client-keep-alive {}",
        onoff(record.client_keep_alive)
    ));
    out.push(format!(
        "        set keylife {}",
        defaults::phase1_lifetime(record)
    ));
    out.push(format!(
        "        set nattraversal {}",
        onoff(record.nat_traversal)
    ));
    if record.dead_peer_detection_enabled {
        out.push("        set dpd on-idle".to_string());
        out.push(format!(
            "        set dpd-retryinterval {}",
            defaults::dpd_interval(record)
        ));
        out.push(format!(
            "        set dpd-retrycount {}",
            defaults::dpd_retry(record)
        ));
    } else {
        out.push("        set dpd disable".to_string());
    }
    out.push("    next".to_string());
    out.push("end".to_string());

    out.push("config vpn ipsec phase2-interface".to_string());
    out.push(format!("    edit {}", quote(&format!("{name}-p2"))));
    out.push(format!("        set phase1name {}", quote(&name)));
    let proposals: Vec<&str> = defaults::phase2_proposals(record)
        .iter()
        .map(|p| p.id())
        .collect();
    out.push(format!("        set proposal {}", proposals.join(" ")));
    if record.pfs_enabled {
        out.push("        set pfs enable".to_string());
        out.push(format!(
            "        set dhgrp {}",
            defaults::pfs_group(record).number()
        ));
    } else {
        out.push("        set pfs disable".to_string());
    }
    out.push(format!(
        "        set keylifeseconds {}",
        defaults::phase2_lifetime(record)
    ));
    out.push("    next".to_string());
    out.push("end".to_string());
    out.push(String::new());
}

fn member_name(group: &str, index: usize) -> String {
    format!("{}-net{}", group, index + 1)
}

fn onoff(enabled: bool) -> &'static str {
    if enabled {
        "enable"
    } else {
        "disable"
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}
