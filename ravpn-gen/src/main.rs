use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ravpn_gen::record::{load_record, render_record, ConfigRecord};
use ravpn_gen::report::{render_field_report, render_posture};
use ravpn_gen::score::{classify_dh, evaluate};
use ravpn_gen::validate::check_record;

mod cli;
mod generate_cmd;

use cli::{Cli, Command, InitArgs, OutputFormat, ScoreArgs, ValidateArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init(args) => run_init(args),
        Command::Validate(args) => run_validate(args),
        Command::Score(args) => run_score(args),
        Command::Generate(args) => generate_cmd::run_generate(args),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let record = ConfigRecord::recommended();
    let text = render_record(&record, args.toml)?;
    match args.output {
        Some(path) => fs::write(&path, text)
            .with_context(|| format!("failed to write record file {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let record = load_record(&args.file)
        .with_context(|| format!("failed to load record {}", args.file.display()))?;
    let report = check_record(&record);

    match args.format {
        OutputFormat::Text => println!("{}", render_field_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if args.strict && !report.is_clean() {
        bail!("validate failed: {} issues", report.issues.len());
    }
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let record = load_record(&args.file)
        .with_context(|| format!("failed to load record {}", args.file.display()))?;
    let posture = evaluate(&record);
    let tier = classify_dh(&record.phase1_dh_groups);

    match args.format {
        OutputFormat::Text => println!("{}", render_posture(&posture, tier)),
        OutputFormat::Json => {
            let report = ScoreReport {
                score: posture.score,
                completeness: posture.completeness,
                dh_tier: tier.badge(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct ScoreReport {
    score: u8,
    completeness: u8,
    dh_tier: &'static str,
}
