//! Record-level validation sweep.
//!
//! Applies the right `netcheck-core` validator to each field of a record
//! and collects the failures. Advisory only: generators and scoring run
//! whether or not the sweep is clean, and a missing value is never an
//! issue here.

use netcheck_core::{
    validate_cidr_list, validate_fqdn_or_ip, validate_group_name, validate_interface_name,
    validate_ip_range, validate_ipv4, validate_key_lifetime, validate_port, validate_tunnel_name,
    validate_url, validate_uuid, ValidationOutcome,
};
use serde::Serialize;

use crate::enums::SplitMode;
use crate::record::ConfigRecord;

/// One field that failed its syntax check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub error: String,
}

/// All failures found in one sweep over a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub issues: Vec<FieldIssue>,
}

impl FieldReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Run every field validator over the record.
pub fn check_record(record: &ConfigRecord) -> FieldReport {
    let mut issues = Vec::new();

    for (index, tunnel) in record.tunnels.iter().enumerate() {
        push(
            &mut issues,
            format!("tunnels[{index}].name"),
            validate_tunnel_name(&tunnel.name),
        );
        push(
            &mut issues,
            format!("tunnels[{index}].wanInterface"),
            validate_interface_name(&tunnel.wan_interface),
        );
        push(
            &mut issues,
            format!("tunnels[{index}].fqdn"),
            validate_fqdn_or_ip(&tunnel.fqdn),
        );
        push(
            &mut issues,
            format!("tunnels[{index}].port"),
            validate_port(&tunnel.port),
        );
    }

    for (index, group) in record.user_groups.iter().enumerate() {
        push(
            &mut issues,
            format!("userGroups[{index}].name"),
            validate_group_name(&group.name),
        );
        push(
            &mut issues,
            format!("userGroups[{index}].externalObjectId"),
            validate_uuid(&group.external_object_id),
        );
    }

    push(
        &mut issues,
        "phase1KeyLifetimeSeconds".to_string(),
        validate_key_lifetime(&record.phase1_key_lifetime_seconds),
    );
    push(
        &mut issues,
        "phase2KeyLifetimeSeconds".to_string(),
        validate_key_lifetime(&record.phase2_key_lifetime_seconds),
    );

    push(
        &mut issues,
        "poolStartIp".to_string(),
        validate_ipv4(&record.pool_start_ip),
    );
    push(
        &mut issues,
        "poolEndIp".to_string(),
        validate_ipv4(&record.pool_end_ip),
    );
    push(
        &mut issues,
        "poolRange".to_string(),
        validate_ip_range(&record.pool_start_ip, &record.pool_end_ip),
    );

    push(&mut issues, "dns1".to_string(), validate_ipv4(&record.dns1));
    push(&mut issues, "dns2".to_string(), validate_ipv4(&record.dns2));

    push(
        &mut issues,
        "splitGroupName".to_string(),
        validate_group_name(&record.split_group_name),
    );
    // Split subnets are only parsed when split tunneling is on.
    if record.split_mode == SplitMode::Enabled {
        push(
            &mut issues,
            "splitSubnets".to_string(),
            validate_cidr_list(&record.split_subnets),
        );
    }

    push(
        &mut issues,
        "idpLoginUrl".to_string(),
        validate_url(&record.idp_login_url),
    );
    push(
        &mut issues,
        "idpEntityId".to_string(),
        validate_url(&record.idp_entity_id),
    );
    push(
        &mut issues,
        "idpLogoutUrl".to_string(),
        validate_url(&record.idp_logout_url),
    );

    FieldReport { issues }
}

fn push(issues: &mut Vec<FieldIssue>, field: String, outcome: ValidationOutcome) {
    if let Some(error) = outcome.error {
        issues.push(FieldIssue { field, error });
    }
}
