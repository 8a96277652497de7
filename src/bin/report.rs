//! Load report for the configured design load cases
//!
//! Usage: load-report [PROJECT.json] [--case NAME] [--json]

use anyhow::{bail, Context, Result};

use monopile_loads::prelude::*;

struct Args {
    project: Option<String>,
    case: Option<String>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        project: None,
        case: None,
        json: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--case" => {
                args.case = Some(iter.next().context("--case needs a load case name")?);
            }
            "-h" | "--help" => {
                println!("Usage: load-report [PROJECT.json] [--case NAME] [--json]");
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown option '{}'", other),
            other => {
                if args.project.is_some() {
                    bail!("only one project file can be given");
                }
                args.project = Some(other.to_string());
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config = match &args.project {
        Some(path) => ProjectConfig::from_file(path)
            .with_context(|| format!("failed to read project file {}", path))?,
        None => ProjectConfig::default(),
    };

    let reports = match &args.case {
        Some(name) => vec![evaluate_case(&config, config.case(name)?)?],
        None => evaluate_project(&config)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}\n", report);
        }
    }

    Ok(())
}
