//! Security posture and completeness scoring.
//!
//! Pure and total: every record scores, nothing fails. The posture score is
//! an additive heuristic with fixed weights, capped at 100; completeness is
//! the filled share of a fixed expected-field budget. Scoring grades the
//! record as entered — unlike the generators it never substitutes defaults,
//! so an empty selection earns nothing.

use serde::Serialize;

use crate::defaults;
use crate::enums::{DhGroup, Proposal};
use crate::record::ConfigRecord;

/// Strength classification of the selected phase-1 DH groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DhTier {
    /// Every selected group is 19 or higher (elliptic curve).
    Strong,
    /// Every selected group is 15 or higher.
    Acceptable,
    /// At least one selected group is below 15.
    Weak,
    /// Nothing selected.
    None,
}

impl DhTier {
    /// Stable badge string for display surfaces.
    pub fn badge(self) -> &'static str {
        match self {
            DhTier::Strong => "STRONG",
            DhTier::Acceptable => "OK",
            DhTier::Weak => "WEAK",
            DhTier::None => "NONE",
        }
    }
}

/// Classify a DH-group selection.
pub fn classify_dh(groups: &[DhGroup]) -> DhTier {
    if groups.is_empty() {
        DhTier::None
    } else if groups.iter().all(|g| g.number() >= 19) {
        DhTier::Strong
    } else if groups.iter().all(|g| g.number() >= 15) {
        DhTier::Acceptable
    } else {
        DhTier::Weak
    }
}

/// The scoring result: both values already rounded and capped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posture {
    pub score: u8,
    pub completeness: u8,
}

/// Grade a record's security posture and completeness.
pub fn evaluate(record: &ConfigRecord) -> Posture {
    let mut score: u32 = 0;

    score += match classify_dh(&record.phase1_dh_groups) {
        DhTier::Strong => 30,
        DhTier::Acceptable => 20,
        DhTier::Weak => 5,
        DhTier::None => 0,
    };

    score += proposal_points(&record.phase1_proposals, 15, 8);
    if record.phase1_proposals.iter().any(|p| p.is_aead()) {
        score += 5;
    }

    if record.pfs_enabled {
        score += 15;
    }

    score += saml_port_points(record);

    if record.dead_peer_detection_enabled {
        score += 5;
    }
    if record.nat_traversal {
        score += 5;
    }
    if record.childless_ike {
        score += 5;
    }

    let phase2 = &record.phase2_proposals;
    if phase2.contains(&Proposal::STRONGEST) || phase2.iter().any(|p| p.is_aead()) {
        score += 10;
    } else if !phase2.is_empty() {
        score += 5;
    }

    Posture {
        score: score.min(100) as u8,
        completeness: completeness(record),
    }
}

fn proposal_points(proposals: &[Proposal], strongest: u32, other: u32) -> u32 {
    if proposals.contains(&Proposal::STRONGEST) {
        strongest
    } else if !proposals.is_empty() {
        other
    } else {
        0
    }
}

/// Points for the SAML service port on `tunnels[0]`: moving off the
/// well-known default is worth more than keeping it, and an unset or zero
/// port earns nothing.
fn saml_port_points(record: &ConfigRecord) -> u32 {
    let raw = record
        .tunnels
        .first()
        .map(|t| t.port.trim())
        .unwrap_or_default();
    let Ok(port) = raw.parse::<u32>() else {
        return 0;
    };
    if port == 0 {
        0
    } else if raw == defaults::PORT {
        3
    } else {
        10
    }
}

/// Shared fields counted toward completeness, fixed at 18 entries.
const SHARED_FIELD_COUNT: u32 = 18;
/// Expected user-group rows in the denominator.
const EXPECTED_GROUP_ROWS: u32 = 2;
/// Derived extras: the three non-empty selection sets.
const DERIVED_EXTRAS: u32 = 3;

fn completeness(record: &ConfigRecord) -> u8 {
    let mut filled: u32 = 0;

    for value in [
        &record.phase1_key_lifetime_seconds,
        &record.dpd_interval_seconds,
        &record.dpd_retry_count,
        &record.phase2_key_lifetime_seconds,
        &record.pool_start_ip,
        &record.pool_end_ip,
        &record.dns1,
        &record.dns2,
        &record.split_group_name,
        &record.split_subnets,
        &record.saml_server_name,
        &record.idp_login_url,
        &record.idp_entity_id,
        &record.idp_logout_url,
        &record.idp_certificate_name,
        &record.appliance_certificate_name,
        &record.banner,
    ] {
        if is_filled(value) {
            filled += 1;
        }
    }
    if record.pfs_dh_group.is_some() {
        filled += 1;
    }

    for tunnel in &record.tunnels {
        for value in [&tunnel.name, &tunnel.fqdn, &tunnel.port] {
            if is_filled(value) {
                filled += 1;
            }
        }
    }

    for group in &record.user_groups {
        if is_filled(&group.name) && is_filled(&group.external_object_id) {
            filled += 1;
        }
    }

    if !record.phase1_proposals.is_empty() {
        filled += 1;
    }
    if !record.phase1_dh_groups.is_empty() {
        filled += 1;
    }
    if !record.phase2_proposals.is_empty() {
        filled += 1;
    }

    let expected = SHARED_FIELD_COUNT
        + 3 * record.tunnels.len() as u32
        + EXPECTED_GROUP_ROWS
        + DERIVED_EXTRAS;
    let ratio = f64::from(filled) * 100.0 / f64::from(expected);
    (ratio.round() as u32).min(100) as u8
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{classify_dh, evaluate, DhTier};
    use crate::enums::{DhGroup, Proposal};
    use crate::record::{ConfigRecord, Tunnel, UserGroup};

    #[test]
    fn dh_tiers_split_at_15_and_19() {
        assert_eq!(classify_dh(&[]), DhTier::None);
        assert_eq!(classify_dh(&[DhGroup::G14]), DhTier::Weak);
        assert_eq!(classify_dh(&[DhGroup::G14, DhGroup::G21]), DhTier::Weak);
        assert_eq!(classify_dh(&[DhGroup::G15, DhGroup::G16]), DhTier::Acceptable);
        assert_eq!(classify_dh(&[DhGroup::G19, DhGroup::G21]), DhTier::Strong);
        assert_eq!(DhTier::Weak.badge(), "WEAK");
    }

    #[test]
    fn recommended_record_scores_the_maximum() {
        // Strong DH (30) + strongest AEAD phase-1 (15+5) + PFS (15) +
        // default port (3) + DPD/NAT-T/childless (15) + AEAD phase-2 (10).
        let posture = evaluate(&ConfigRecord::recommended());
        assert_eq!(posture.score, 93);
    }

    #[test]
    fn moving_off_the_default_port_adds_seven() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0].port = "4500".to_string();
        assert_eq!(evaluate(&record).score, 100);
    }

    #[test]
    fn empty_record_scores_zero() {
        let posture = evaluate(&ConfigRecord::default());
        assert_eq!(posture.score, 0);
    }

    #[test]
    fn enabling_pfs_adds_exactly_fifteen() {
        let mut record = ConfigRecord::recommended();
        record.tunnels[0].port = "4500".to_string();
        record.pfs_enabled = false;
        let without = evaluate(&record).score;
        record.pfs_enabled = true;
        let with = evaluate(&record).score;
        assert_eq!(u32::from(with), u32::from(without) + 15);
    }

    #[test]
    fn weak_dh_group_contributes_five() {
        let mut record = ConfigRecord::default();
        record.phase1_dh_groups = vec![DhGroup::G14];
        assert_eq!(evaluate(&record).score, 5);
        assert_eq!(classify_dh(&record.phase1_dh_groups), DhTier::Weak);
    }

    #[test]
    fn non_strongest_phase1_selection_earns_eight() {
        let mut record = ConfigRecord::default();
        record.phase1_proposals = vec![Proposal::Aes256Sha256];
        assert_eq!(evaluate(&record).score, 8);
        // ChaCha is not the strongest proposal but is AEAD.
        record.phase1_proposals = vec![Proposal::Chacha20Poly1305];
        assert_eq!(evaluate(&record).score, 13);
    }

    #[test]
    fn phase2_aead_or_strongest_earns_ten() {
        let mut record = ConfigRecord::default();
        record.phase2_proposals = vec![Proposal::Aes128Sha256];
        assert_eq!(evaluate(&record).score, 5);
        record.phase2_proposals = vec![Proposal::Aes128Gcm];
        assert_eq!(evaluate(&record).score, 10);
    }

    #[test]
    fn completeness_counts_filled_fields_against_fixed_budget() {
        // One tunnel, nothing filled: denominator 18 + 3 + 2 + 3 = 26.
        let record = ConfigRecord {
            tunnels: vec![Tunnel::default()],
            ..ConfigRecord::default()
        };
        assert_eq!(evaluate(&record).completeness, 0);

        // Recommended: lifetimes, DPD interval/retry, PFS group, pool pair
        // (7 shared) + tunnel name/port (2) + three selection extras = 12.
        let recommended = evaluate(&ConfigRecord::recommended());
        assert_eq!(recommended.completeness, 46);
    }

    #[test]
    fn group_rows_need_both_columns() {
        let mut record = ConfigRecord {
            tunnels: vec![Tunnel::default()],
            ..ConfigRecord::default()
        };
        record.user_groups.push(UserGroup {
            name: "vpn-users".to_string(),
            external_object_id: String::new(),
        });
        let half = evaluate(&record).completeness;
        record.user_groups[0].external_object_id =
            "123e4567-e89b-12d3-a456-426614174000".to_string();
        let full = evaluate(&record).completeness;
        assert_eq!(half, 0);
        assert_eq!(full, 4); // 1/26 rounded
    }

    #[test]
    fn completeness_is_clamped_at_100() {
        let mut record = ConfigRecord::recommended();
        for index in 0..25 {
            record.user_groups.push(UserGroup {
                name: format!("group-{index}"),
                external_object_id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
            });
        }
        // 25 filled rows push the numerator past the fixed denominator.
        assert_eq!(evaluate(&record).completeness, 100);
    }
}
