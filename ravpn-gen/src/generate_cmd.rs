use std::fs;

use anyhow::{bail, Context, Result};
use ravpn_gen::defaults;
use ravpn_gen::generate::{render, Target};
use ravpn_gen::record::{load_record, ConfigRecord};

use crate::cli::{GenerateArgs, TargetArg};

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let record = load_record(&args.file)
        .with_context(|| format!("failed to load record {}", args.file.display()))?;

    if args.all {
        let Some(dir) = args.out_dir else {
            bail!("--all requires --out-dir");
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        let base = args
            .basename
            .unwrap_or_else(|| derive_basename(&record));
        for target in Target::ALL {
            let path = dir.join(format!("{base}-{}.{}", target.slug(), target.extension()));
            let text = render(&record, target);
            fs::write(&path, text + "\n")
                .with_context(|| format!("failed to write artifact {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        return Ok(());
    }

    let Some(target) = args.target else {
        bail!("choose an artifact with --target, or --all with --out-dir");
    };
    let text = render(&record, to_target(target));
    match args.output {
        Some(path) => {
            fs::write(&path, text + "\n")
                .with_context(|| format!("failed to write artifact {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn to_target(arg: TargetArg) -> Target {
    match arg {
        TargetArg::CliScript => Target::CliScript,
        TargetArg::GuiSteps => Target::GuiSteps,
        TargetArg::IdpSetup => Target::IdpSetup,
        TargetArg::ClientProfile => Target::ClientProfile,
        TargetArg::Docs => Target::Docs,
    }
}

/// File base name from the first tunnel's display name.
fn derive_basename(record: &ConfigRecord) -> String {
    let name = record
        .tunnels
        .first()
        .map(|tunnel| defaults::tunnel_name(tunnel, 0))
        .unwrap_or_default();
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "ravpn".to_string()
    } else {
        trimmed.to_string()
    }
}
