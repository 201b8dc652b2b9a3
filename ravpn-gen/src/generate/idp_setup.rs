//! Identity-provider setup guide generator.
//!
//! The counterpart of the appliance-side artifacts: what to configure in
//! the IdP's enterprise application so SAML assertions reach the VPN
//! gateway. Service-provider endpoints are derived from `tunnels[0]`; a
//! per-tunnel endpoint section lists every listener.

use crate::defaults;
use crate::labels;
use crate::record::ConfigRecord;

/// Render the IdP-side guide.
pub fn render(record: &ConfigRecord) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("Identity provider setup".to_string());
    out.push("=======================".to_string());
    out.push(String::new());
    out.push(
        "Register the VPN gateway as a SAML service provider with the values below."
            .to_string(),
    );
    out.push(String::new());

    out.push("1. Service-provider endpoints".to_string());
    out.push(format!(
        "   Identifier (entity ID) : {}",
        defaults::sp_url(record, "/remote/saml/metadata/")
    ));
    out.push(format!(
        "   Reply URL (ACS)        : {}",
        defaults::sp_url(record, "/remote/saml/login")
    ));
    out.push(format!(
        "   Sign-on URL            : {}",
        defaults::sp_url(record, "/remote/saml/")
    ));
    out.push(format!(
        "   Logout URL             : {}",
        defaults::sp_url(record, "/remote/saml/logout")
    ));
    out.push(String::new());

    out.push("2. Provider values expected by the appliance".to_string());
    push_value(&mut out, "IdP entity ID", &record.idp_entity_id);
    push_value(&mut out, "IdP sign-on URL", &record.idp_login_url);
    push_value(&mut out, "IdP logout URL", &record.idp_logout_url);
    out.push(String::new());

    out.push("3. Claims".to_string());
    out.push("   - username : user principal name".to_string());
    out.push("   - group    : group object identifiers".to_string());
    out.push(String::new());

    out.push("4. Group objects to release in the group claim".to_string());
    let rows: Vec<String> = record
        .user_groups
        .iter()
        .filter(|g| !g.name.trim().is_empty())
        .map(|g| {
            if g.external_object_id.trim().is_empty() {
                format!("   - {} (object ID not set)", g.name.trim())
            } else {
                format!("   - {} -> {}", g.name.trim(), g.external_object_id.trim())
            }
        })
        .collect();
    if rows.is_empty() {
        out.push("   - none configured".to_string());
    } else {
        out.extend(rows);
    }
    out.push(String::new());

    out.push("5. Certificates".to_string());
    out.push(format!(
        "   - Export the IdP signing certificate and import it on the appliance as \"{}\".",
        defaults::or_default(&record.idp_certificate_name, "idp-signing-cert")
    ));
    if !record.appliance_certificate_name.trim().is_empty() {
        out.push(format!(
            "   - The appliance presents \"{}\" on the SAML endpoints.",
            record.appliance_certificate_name.trim()
        ));
    }
    out.push(String::new());

    out.push("Gateway parameters (for reference)".to_string());
    out.push(format!(
        "   IKE proposals : {}",
        labels::proposal_labels(defaults::phase1_proposals(record)).join(", ")
    ));
    out.push(format!(
        "   DH groups     : {}",
        labels::dh_group_labels(defaults::phase1_dh_groups(record)).join(", ")
    ));
    out.push(String::new());

    out.push("Per-tunnel service endpoints".to_string());
    let total = record.tunnels.len();
    if total == 0 {
        out.push("   - no tunnels defined".to_string());
    }
    for (index, tunnel) in record.tunnels.iter().enumerate() {
        let name = defaults::tunnel_name(tunnel, index);
        out.push(format!("   Tunnel {} of {}: {}", index + 1, total, name));
        out.push(format!(
            "     https://{}:{}/remote/saml/login",
            defaults::tunnel_fqdn(tunnel),
            defaults::tunnel_port(tunnel)
        ));
    }

    out.join("\n")
}

fn push_value(out: &mut Vec<String>, label: &str, value: &str) {
    let shown = if value.trim().is_empty() {
        "(not set yet)"
    } else {
        value.trim()
    };
    out.push(format!("   {label:<15}: {shown}"));
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::record::{ConfigRecord, Tunnel, UserGroup};

    #[test]
    fn endpoints_derive_from_the_first_tunnel() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0].fqdn = "vpn.corp.example".to_string();
        record.tunnels[0].port = "444".to_string();
        let text = render(&record);
        assert!(text.contains("https://vpn.corp.example:444/remote/saml/metadata/"));
        assert!(text.contains("https://vpn.corp.example:444/remote/saml/login"));
    }

    #[test]
    fn lists_group_object_ids() {
        let mut record = ConfigRecord::recommended();
        record.user_groups.push(UserGroup {
            name: "vpn-users".to_string(),
            external_object_id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        });
        record.user_groups.push(UserGroup {
            name: "vpn-admins".to_string(),
            external_object_id: String::new(),
        });
        let text = render(&record);
        assert!(text.contains("vpn-users -> 123e4567-e89b-12d3-a456-426614174000"));
        assert!(text.contains("vpn-admins (object ID not set)"));
    }

    #[test]
    fn per_tunnel_endpoint_sections_cover_every_listener() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0].name = "HQ-VPN".to_string();
        record.tunnels.push(Tunnel {
            name: "DR-VPN".to_string(),
            fqdn: "dr.example.com".to_string(),
            port: "10429".to_string(),
            ..Tunnel::default()
        });
        let text = render(&record);
        assert!(text.contains("Tunnel 1 of 2: HQ-VPN"));
        assert!(text.contains("Tunnel 2 of 2: DR-VPN"));
        assert!(text.contains("https://dr.example.com:10429/remote/saml/login"));
    }
}
