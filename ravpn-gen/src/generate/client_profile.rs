//! Client profile generator.
//!
//! Produces a markup-style `.conf` document a VPN client can import: shared
//! IKE/ESP settings once, then one `<connection>` element per tunnel. This
//! is the only artifact allowed to carry the pre-shared key; every text
//! value is entity-escaped before embedding.

use crate::defaults;
use crate::enums::{DnsMode, SplitMode};
use crate::record::ConfigRecord;

/// Render the importable client profile.
pub fn render(record: &ConfigRecord) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string());
    out.push("<vpn_profile>".to_string());
    out.push("  <type>ipsec-ikev2</type>".to_string());

    out.push("  <common>".to_string());
    push_flag(&mut out, "save_password", record.save_password);
    push_flag(&mut out, "auto_negotiate", record.client_auto_negotiate);
    push_flag(&mut out, "keep_alive", record.client_keep_alive);
    if !record.banner.trim().is_empty() {
        out.push(format!("    <banner>{}</banner>", escape(record.banner.trim())));
    }

    out.push("    <ike_settings>".to_string());
    let proposals: Vec<&str> = defaults::phase1_proposals(record)
        .iter()
        .map(|p| p.id())
        .collect();
    out.push(format!(
        "      <proposals>{}</proposals>",
        proposals.join(" ")
    ));
    let groups: Vec<String> = defaults::phase1_dh_groups(record)
        .iter()
        .map(|g| g.number().to_string())
        .collect();
    out.push(format!("      <dh_groups>{}</dh_groups>", groups.join(" ")));
    out.push(format!(
        "      <key_lifetime>{}</key_lifetime>",
        defaults::phase1_lifetime(record)
    ));
    push_flag_at(&mut out, 6, "nat_traversal", record.nat_traversal);
    push_flag_at(&mut out, 6, "childless", record.childless_ike);
    if record.dead_peer_detection_enabled {
        out.push("      <dpd>1</dpd>".to_string());
        out.push(format!(
            "      <dpd_interval>{}</dpd_interval>",
            defaults::dpd_interval(record)
        ));
        out.push(format!(
            "      <dpd_retry>{}</dpd_retry>",
            defaults::dpd_retry(record)
        ));
    } else {
        out.push("      <dpd>0</dpd>".to_string());
    }
    if !record.preshared_key.trim().is_empty() {
        out.push(format!(
            "      <preshared_key>{}</preshared_key>",
            escape(record.preshared_key.trim())
        ));
    }
    out.push("    </ike_settings>".to_string());

    out.push("    <esp_settings>".to_string());
    let proposals: Vec<&str> = defaults::phase2_proposals(record)
        .iter()
        .map(|p| p.id())
        .collect();
    out.push(format!(
        "      <proposals>{}</proposals>",
        proposals.join(" ")
    ));
    push_flag_at(&mut out, 6, "pfs", record.pfs_enabled);
    if record.pfs_enabled {
        out.push(format!(
            "      <pfs_group>{}</pfs_group>",
            defaults::pfs_group(record).number()
        ));
    }
    out.push(format!(
        "      <key_lifetime>{}</key_lifetime>",
        defaults::phase2_lifetime(record)
    ));
    out.push("    </esp_settings>".to_string());

    match record.dns_mode {
        DnsMode::Auto => out.push("    <dns_mode>auto</dns_mode>".to_string()),
        DnsMode::Manual => {
            out.push("    <dns_mode>manual</dns_mode>".to_string());
            if !record.dns1.trim().is_empty() {
                out.push(format!("    <dns1>{}</dns1>", escape(record.dns1.trim())));
            }
            if !record.dns2.trim().is_empty() {
                out.push(format!("    <dns2>{}</dns2>", escape(record.dns2.trim())));
            }
        }
    }

    if record.split_mode == SplitMode::Enabled {
        out.push("    <split_tunnel>1</split_tunnel>".to_string());
        let subnets: Vec<String> = record
            .split_subnets
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(escape)
            .collect();
        out.push(format!(
            "    <split_include>{}</split_include>",
            subnets.join(" ")
        ));
    } else {
        out.push("    <split_tunnel>0</split_tunnel>".to_string());
    }
    out.push("  </common>".to_string());

    for (index, tunnel) in record.tunnels.iter().enumerate() {
        let name = defaults::tunnel_name(tunnel, index);
        out.push("  <connection>".to_string());
        out.push(format!("    <name>{}</name>", escape(&name)));
        if !tunnel.comments.trim().is_empty() {
            out.push(format!(
                "    <description>{}</description>",
                escape(tunnel.comments.trim())
            ));
        }
        out.push(format!(
            "    <server>{}:{}</server>",
            escape(defaults::tunnel_fqdn(tunnel)),
            defaults::tunnel_port(tunnel)
        ));
        out.push("    <sso_enabled>1</sso_enabled>".to_string());
        out.push("  </connection>".to_string());
    }

    out.push("</vpn_profile>".to_string());
    out.join("\n")
}

fn push_flag(out: &mut Vec<String>, tag: &str, value: bool) {
    push_flag_at(out, 4, tag, value);
}

fn push_flag_at(out: &mut Vec<String>, indent: usize, tag: &str, value: bool) {
    let pad = " ".repeat(indent);
    let bit = if value { "1" } else { "0" };
    out.push(format!("{pad}<{tag}>{bit}</{tag}>"));
}

/// Entity-escape a text value for embedding in the profile markup.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
