//! Hostname, URL, and UUID syntax checks.

use url::Url;

use crate::ip::validate_ipv4;
use crate::outcome::{is_blank, ValidationOutcome};

/// Validate a peer endpoint given as either an IPv4 address or an FQDN.
///
/// The FQDN grammar is at least two dot-separated labels of alphanumerics
/// and hyphens, with a final label of letters only, two or more characters.
pub fn validate_fqdn_or_ip(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    let trimmed = input.trim();
    if validate_ipv4(trimmed).is_valid && !trimmed.is_empty() {
        return ValidationOutcome::valid();
    }
    if is_fqdn(trimmed) {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(format!("Invalid hostname or IP address: {input}"))
    }
}

/// Validate an absolute URL.
pub fn validate_url(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    if Url::parse(input.trim()).is_ok() {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(format!("Invalid URL: {input}"))
    }
}

/// Validate the 8-4-4-4-12 hexadecimal UUID grouping.
pub fn validate_uuid(input: &str) -> ValidationOutcome {
    if is_blank(input) {
        return ValidationOutcome::valid();
    }
    if is_uuid(input.trim()) {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(format!("Invalid UUID: {input}"))
    }
}

fn is_fqdn(input: &str) -> bool {
    let labels: Vec<&str> = input.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let last = labels[labels.len() - 1];
    if last.len() < 2 || !last.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    labels[..labels.len() - 1].iter().all(|label| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

fn is_uuid(input: &str) -> bool {
    let groups: Vec<&str> = input.split('-').collect();
    if groups.len() != 5 {
        return false;
    }
    let widths = [8, 4, 4, 4, 12];
    groups
        .iter()
        .zip(widths)
        .all(|(group, width)| group.len() == width && group.bytes().all(|b| b.is_ascii_hexdigit()))
}
