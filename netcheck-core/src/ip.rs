//! IPv4 address, subnet, and range syntax checks.

use crate::outcome::{is_blank, ValidationOutcome};

/// Validate a dotted-quad IPv4 address (four octets, each 0-255).
pub fn validate_ipv4(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    if parse_ipv4_octets(input.trim()).is_some() {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(format!("Invalid IP address: {input}"))
    }
}

/// Validate IPv4 CIDR notation: dotted quad plus `/0`-`/32`.
pub fn validate_cidr(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    let trimmed = input.trim();
    if !trimmed.contains('/') {
        return ValidationOutcome::invalid(format!(
            "Invalid subnet (missing CIDR notation): {input}"
        ));
    }
    if is_cidr(trimmed) {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(format!("Invalid subnet: {input}"))
    }
}

/// Validate an address range given as two dotted quads.
///
/// Both ends must parse individually; the start, folded into an unsigned
/// 32-bit integer octet by octet, must be strictly below the end.
pub fn validate_ip_range(start: &str, end: &str) -> ValidationOutcome {
    if is_blank(start) || is_blank(end) {
        return ValidationOutcome::valid();
    }
    let start_check = validate_ipv4(start);
    if !start_check.is_valid {
        return start_check;
    }
    let end_check = validate_ipv4(end);
    if !end_check.is_valid {
        return end_check;
    }

    // Both ends parsed above, so the conversions cannot miss.
    match (ipv4_to_u32(start.trim()), ipv4_to_u32(end.trim())) {
        (Some(start_int), Some(end_int)) if start_int < end_int => ValidationOutcome::valid(),
        _ => ValidationOutcome::invalid("Start IP must be less than End IP"),
    }
}

/// Validate a newline-delimited list of CIDR entries.
///
/// Lines are trimmed and empty lines dropped before checking; an empty list
/// is valid. On failure the message lists every failing line in original
/// order, joined by `", "`.
pub fn validate_cidr_list(input: &str) -> ValidationOutcome {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return ValidationOutcome::valid();
    }

    let failing: Vec<&str> = lines
        .iter()
        .filter(|line| !is_cidr(line))
        .copied()
        .collect();
    if failing.is_empty() {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(format!("Invalid CIDR: {}", failing.join(", ")))
    }
}

/// Fold a dotted quad into an unsigned 32-bit integer.
///
/// Returns `None` when the input is not a valid IPv4 address.
pub fn ipv4_to_u32(input: &str) -> Option<u32> {
    let octets = parse_ipv4_octets(input)?;
    Some(
        octets
            .iter()
            .fold(0u32, |acc, octet| (acc << 8) + u32::from(*octet)),
    )
}

fn parse_ipv4_octets(input: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in input.split('.') {
        if count == 4 {
            return None;
        }
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u32 = part.parse().ok()?;
        if value > 255 {
            return None;
        }
        octets[count] = value as u8;
        count += 1;
    }
    if count == 4 {
        Some(octets)
    } else {
        None
    }
}

fn is_cidr(input: &str) -> bool {
    let Some((address, prefix)) = input.split_once('/') else {
        return false;
    };
    if parse_ipv4_octets(address).is_none() {
        return false;
    }
    if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    prefix.parse::<u32>().is_ok_and(|bits| bits <= 32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ipv4_to_u32, validate_cidr, validate_cidr_list, validate_ip_range, validate_ipv4};

    #[test]
    fn accepts_valid_dotted_quads() {
        for ip in ["192.168.1.1", "10.0.0.1", "255.255.255.255", "0.0.0.0"] {
            assert!(validate_ipv4(ip).is_valid, "expected {ip} valid");
        }
    }

    #[test]
    fn rejects_malformed_dotted_quads() {
        for ip in [
            "256.1.1.1",
            "192.168.1",
            "192.168.1.1.1",
            "192.168.-1.1",
            "abc.def.ghi.jkl",
            "192.168.1.1/24",
            "192.168.1.1:8080",
        ] {
            let outcome = validate_ipv4(ip);
            assert!(!outcome.is_valid, "expected {ip} invalid");
            assert!(outcome.error.unwrap().contains("Invalid IP address"));
        }
    }

    #[test]
    fn blank_input_is_valid() {
        assert!(validate_ipv4("").is_valid);
        assert!(validate_ipv4("   ").is_valid);
        assert!(validate_cidr("").is_valid);
        assert!(validate_ip_range("", "10.0.0.5").is_valid);
        assert!(validate_cidr_list("\n  \n").is_valid);
    }

    #[test]
    fn cidr_requires_slash_and_prefix_bounds() {
        assert!(validate_cidr("192.168.1.0/24").is_valid);
        assert!(validate_cidr("0.0.0.0/0").is_valid);
        assert!(validate_cidr("10.1.2.3/32").is_valid);

        let missing = validate_cidr("192.168.1.0");
        assert!(!missing.is_valid);
        assert!(missing.error.unwrap().contains("missing CIDR notation"));

        assert!(!validate_cidr("10.0.0.0/33").is_valid);
        assert!(!validate_cidr("10.0.0/24").is_valid);
        assert!(!validate_cidr("10.0.0.0/").is_valid);
    }

    #[test]
    fn ipv4_folds_to_expected_integer() {
        assert_eq!(ipv4_to_u32("0.0.0.1"), Some(1));
        assert_eq!(ipv4_to_u32("1.0.0.0"), Some(1 << 24));
        assert_eq!(ipv4_to_u32("255.255.255.255"), Some(u32::MAX));
        assert_eq!(ipv4_to_u32("not-an-ip"), None);
    }

    #[test]
    fn range_orders_by_unsigned_integer_value() {
        assert!(validate_ip_range("10.0.0.5", "10.0.0.10").is_valid);
        assert!(validate_ip_range("9.255.255.255", "10.0.0.0").is_valid);

        let backwards = validate_ip_range("10.0.0.10", "10.0.0.5");
        assert!(!backwards.is_valid);
        assert_eq!(
            backwards.error.as_deref(),
            Some("Start IP must be less than End IP")
        );

        // Equal endpoints fail the strict ordering too.
        assert!(!validate_ip_range("10.0.0.5", "10.0.0.5").is_valid);
    }

    #[test]
    fn range_reports_malformed_end_first_encountered() {
        let outcome = validate_ip_range("10.0.0.300", "10.0.0.5");
        assert!(!outcome.is_valid);
        assert!(outcome.error.unwrap().contains("Invalid IP address"));
    }

    #[test]
    fn cidr_list_reports_failing_lines_in_order() {
        let outcome = validate_cidr_list("192.168.1.0/24\n10.0.0.0/33\nbad\n172.16.0.0/12");
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Invalid CIDR: 10.0.0.0/33, bad")
        );
    }

    #[test]
    fn cidr_list_trims_and_skips_blank_lines() {
        let outcome = validate_cidr_list("  192.168.1.0/24  \n\n   \n10.8.0.0/16");
        assert!(outcome.is_valid);
    }
}
