use anyhow::{anyhow, Result};
use clap::Parser;

use maskfield::cli::CliArgs;
use maskfield::field::{update, FieldMsg, MaskedField};
use maskfield::report::FieldReport;
use maskfield::FieldsConfig;

fn main() -> Result<()> {
    maskfield::tracing::init();

    let run = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let fields = match &run.config_path {
        Some(path) => FieldsConfig::load(path)?,
        None => FieldsConfig::load_default()?,
    };
    let mut field = MaskedField::new(fields.field(&run.field)?);

    for msg in run.keystrokes {
        update(&mut field, FieldMsg::Edit(msg));
    }

    let report = FieldReport::run(&mut field, &run.checks);
    if run.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
