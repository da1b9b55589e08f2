// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use jestad_scrape::{cli, logger, runner};

fn main() -> Result<()> {
    color_eyre::install()?;

    let params = cli::params_from_env();
    logger::init(params.log_level, params.log_file.as_deref()).map_err(|e| eyre!("logger: {e}"))?;

    // RunError keeps its cause, so the report lists the whole chain
    runner::run(&params)?;
    Ok(())
}
