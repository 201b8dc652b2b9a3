//! Port, lifetime, and identifier syntax checks.

use crate::outcome::{is_blank, ValidationOutcome};

/// Names longer than this are rejected by every identifier validator; the
/// appliance truncates object names at 35 characters.
const MAX_NAME_LEN: usize = 35;

/// Validate a TCP/UDP port number in `[1, 65535]`.
pub fn validate_port(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    match parse_integer(input.trim()) {
        Some(port) if (1..=65_535).contains(&port) => ValidationOutcome::valid(),
        Some(_) => ValidationOutcome::invalid(format!("Port must be between 1 and 65535: {input}")),
        None => ValidationOutcome::invalid(format!("Invalid port number: {input}")),
    }
}

/// Validate an IKE key lifetime in seconds, `[120, 172800]`.
pub fn validate_key_lifetime(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    match parse_integer(input.trim()) {
        Some(seconds) if (120..=172_800).contains(&seconds) => ValidationOutcome::valid(),
        Some(_) => ValidationOutcome::invalid(format!(
            "Key lifetime must be between 120 and 172800 seconds: {input}"
        )),
        None => ValidationOutcome::invalid(format!("Invalid key lifetime: {input}")),
    }
}

/// Validate a tunnel name: letters, digits, and hyphens.
pub fn validate_tunnel_name(input: &str) -> ValidationOutcome {
    validate_name(
        input,
        |b| b.is_ascii_alphanumeric() || b == b'-',
        "Invalid tunnel name (letters, digits and hyphens only)",
        "Tunnel name too long (max 35 characters)",
    )
}

/// Validate a group name: letters, digits, underscores, and hyphens.
pub fn validate_group_name(input: &str) -> ValidationOutcome {
    validate_name(
        input,
        |b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-',
        "Invalid group name (letters, digits, underscores and hyphens only)",
        "Group name too long (max 35 characters)",
    )
}

/// Validate an interface name: letters, digits, dots, underscores, hyphens.
///
/// Dots are allowed because sub-interfaces and VLAN children use them
/// (`wan1`, `port3`, `ssl.root`).
pub fn validate_interface_name(input: &str) -> ValidationOutcome {
    validate_name(
        input,
        |b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'-',
        "Invalid interface name",
        "Interface name too long (max 35 characters)",
    )
}

fn validate_name(
    input: &str,
    allowed: fn(u8) -> bool,
    charset_error: &str,
    length_error: &str,
) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    let trimmed = input.trim();
    if !trimmed.bytes().all(allowed) {
        return ValidationOutcome::invalid(format!("{charset_error}: {input}"));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return ValidationOutcome::invalid(format!("{length_error}: {input}"));
    }
    ValidationOutcome::valid()
}

fn parse_integer(input: &str) -> Option<u32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        validate_group_name, validate_interface_name, validate_key_lifetime, validate_port,
        validate_tunnel_name,
    };

    #[test]
    fn port_bounds_are_inclusive() {
        assert!(validate_port("1").is_valid);
        assert!(validate_port("65535").is_valid);
        assert!(validate_port("10428").is_valid);
        assert!(!validate_port("0").is_valid);
        assert!(!validate_port("65536").is_valid);
        assert!(!validate_port("-1").is_valid);
        assert!(!validate_port("10.5").is_valid);
        assert!(validate_port("").is_valid);
    }

    #[test]
    fn lifetime_bounds_are_inclusive() {
        assert!(validate_key_lifetime("120").is_valid);
        assert!(validate_key_lifetime("86400").is_valid);
        assert!(validate_key_lifetime("172800").is_valid);
        assert!(!validate_key_lifetime("119").is_valid);
        assert!(!validate_key_lifetime("172801").is_valid);
        assert!(!validate_key_lifetime("1d").is_valid);
    }

    #[test]
    fn tunnel_names_reject_underscores() {
        assert!(validate_tunnel_name("HQ-VPN").is_valid);
        assert!(validate_tunnel_name("branch2").is_valid);
        assert!(!validate_tunnel_name("HQ_VPN").is_valid);
        assert!(!validate_tunnel_name("HQ VPN").is_valid);
    }

    #[test]
    fn group_names_allow_underscores() {
        assert!(validate_group_name("saml_users-eu").is_valid);
        assert!(!validate_group_name("saml users").is_valid);
        assert!(!validate_group_name("grp$1").is_valid);
    }

    #[test]
    fn interface_names_allow_dots() {
        assert!(validate_interface_name("wan1").is_valid);
        assert!(validate_interface_name("ssl.root").is_valid);
        assert!(!validate_interface_name("wan 1").is_valid);
    }

    #[test]
    fn long_names_are_rejected() {
        let long = "a".repeat(36);
        assert!(!validate_tunnel_name(&long).is_valid);
        assert!(!validate_group_name(&long).is_valid);
        assert!(!validate_interface_name(&long).is_valid);
        let max = "a".repeat(35);
        assert!(validate_tunnel_name(&max).is_valid);
    }
}
