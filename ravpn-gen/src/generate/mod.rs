//! Artifact generators.
//!
//! Each generator is a pure `&ConfigRecord -> String` function. All five
//! consult the same default table and label tables, so for one record they
//! agree on the number of per-tunnel sections and on the proposal and
//! DH-group lists they show. Generated text is deterministic: no
//! timestamps, no environment lookups.

pub mod cli_script;
pub mod client_profile;
pub mod docs;
pub mod gui_steps;
pub mod idp_setup;

use crate::record::ConfigRecord;

/// The artifact families the export collaborator can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    CliScript,
    GuiSteps,
    IdpSetup,
    ClientProfile,
    Docs,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::CliScript,
        Target::GuiSteps,
        Target::IdpSetup,
        Target::ClientProfile,
        Target::Docs,
    ];

    /// File extension the export layer appends for this artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Target::CliScript | Target::GuiSteps | Target::IdpSetup => "txt",
            Target::ClientProfile => "conf",
            Target::Docs => "md",
        }
    }

    /// Stable short name used in file names and CLI output.
    pub fn slug(self) -> &'static str {
        match self {
            Target::CliScript => "cli-script",
            Target::GuiSteps => "gui-steps",
            Target::IdpSetup => "idp-setup",
            Target::ClientProfile => "client-profile",
            Target::Docs => "documentation",
        }
    }
}

/// Render one artifact.
pub fn render(record: &ConfigRecord, target: Target) -> String {
    match target {
        Target::CliScript => cli_script::render(record),
        Target::GuiSteps => gui_steps::render(record),
        Target::IdpSetup => idp_setup::render(record),
        Target::ClientProfile => client_profile::render(record),
        Target::Docs => docs::render(record),
    }
}
