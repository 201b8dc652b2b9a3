//! Terminal rendering for validation and scoring reports.
//!
//! Reports are built as plain strings; color is applied here at the edge
//! and nowhere else.

use colored::Colorize;

use crate::score::{DhTier, Posture};
use crate::validate::FieldReport;

/// Render the field-validation sweep for terminal output.
pub fn render_field_report(report: &FieldReport) -> String {
    let mut out = Vec::new();
    out.push(format!("validate issues={}", report.issues.len()));
    out.push("issues".to_string());
    if report.is_clean() {
        out.push("- none".to_string());
        return out.join("\n");
    }
    for issue in &report.issues {
        out.push(format!(
            "- {} {}: {}",
            "[invalid]".red(),
            issue.field,
            issue.error
        ));
    }
    out.join("\n")
}

/// Render posture score, DH tier badge, and completeness.
pub fn render_posture(posture: &Posture, tier: DhTier) -> String {
    let score = format!("{}", posture.score);
    let colored_score = if posture.score >= 80 {
        score.green().to_string()
    } else if posture.score >= 50 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    };
    let mut out = Vec::new();
    out.push(format!(
        "score {colored_score}/100 dh_tier={}",
        tier.badge()
    ));
    out.push(format!("completeness {}/100", posture.completeness));
    out.join("\n")
}
