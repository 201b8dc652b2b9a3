//! Display-name tables shared by every generator.
//!
//! All five artifacts must list the same proposal and DH-group labels for
//! the same record, so the label text lives here and nowhere else.

use crate::enums::{DhGroup, Proposal};

/// Human-readable proposal name.
pub fn proposal_label(proposal: Proposal) -> &'static str {
    match proposal {
        Proposal::Aes128Sha256 => "AES128-SHA256",
        Proposal::Aes256Sha256 => "AES256-SHA256",
        Proposal::Aes128Gcm => "AES128-GCM",
        Proposal::Aes256Gcm => "AES256-GCM",
        Proposal::Chacha20Poly1305 => "ChaCha20-Poly1305",
    }
}

/// Human-readable DH-group name with exchange size.
pub fn dh_group_label(group: DhGroup) -> &'static str {
    match group {
        DhGroup::G14 => "Group 14 (2048-bit MODP)",
        DhGroup::G15 => "Group 15 (3072-bit MODP)",
        DhGroup::G16 => "Group 16 (4096-bit MODP)",
        DhGroup::G19 => "Group 19 (256-bit ECP)",
        DhGroup::G20 => "Group 20 (384-bit ECP)",
        DhGroup::G21 => "Group 21 (521-bit ECP)",
    }
}

/// Labels for a proposal selection, in selection order.
pub fn proposal_labels(proposals: &[Proposal]) -> Vec<&'static str> {
    proposals.iter().map(|p| proposal_label(*p)).collect()
}

/// Labels for a DH-group selection, in selection order.
pub fn dh_group_labels(groups: &[DhGroup]) -> Vec<&'static str> {
    groups.iter().map(|g| dh_group_label(*g)).collect()
}
