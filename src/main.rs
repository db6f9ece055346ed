use anyhow::{Context, Result};
use clap::Parser;

use datefield::cli::{run_script, CliArgs};
use datefield::config::FieldConfig;

fn main() -> Result<()> {
    datefield::tracing::init();

    let args = CliArgs::parse();
    let config = match args.config.as_deref() {
        Some(path) => FieldConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FieldConfig::load(),
    };

    let json = args.json;
    let today = jiff::Zoned::now().date();
    let session = args
        .into_session(&config, today)
        .map_err(anyhow::Error::msg)?;

    tracing::info!(format = %session.props.format, steps = session.steps.len(), "starting session");

    for frame in run_script(session.props, &session.steps) {
        if json {
            let line = serde_json::to_string(&frame).context("serializing frame")?;
            println!("{}", line);
        } else {
            println!("{}", frame);
        }
    }

    Ok(())
}
