use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ravpn-gen")]
#[command(about = "Assemble remote-access VPN designs and generate appliance artifacts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Write the recommended default record.
    Init(InitArgs),
    /// Run the field-validator sweep over a record file.
    Validate(ValidateArgs),
    /// Grade a record's security posture and completeness.
    Score(ScoreArgs),
    /// Render artifacts from a record file.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output file path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Emit TOML instead of JSON.
    #[arg(long)]
    pub toml: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Record file (.json or .toml).
    pub file: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Exit with failure when any field fails its syntax check.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Record file (.json or .toml).
    pub file: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Record file (.json or .toml).
    pub file: PathBuf,
    /// Artifact to render.
    #[arg(long, value_enum, conflicts_with = "all")]
    pub target: Option<TargetArg>,
    /// Render every artifact into --out-dir.
    #[arg(long, requires = "out_dir")]
    pub all: bool,
    /// Output file for a single target; stdout when omitted.
    #[arg(short, long, conflicts_with = "all")]
    pub output: Option<PathBuf>,
    /// Directory for --all output files.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Base name for --all output files; derived from the first tunnel when omitted.
    #[arg(long)]
    pub basename: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum TargetArg {
    CliScript,
    GuiSteps,
    IdpSetup,
    ClientProfile,
    Docs,
}
