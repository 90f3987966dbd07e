use anyhow::{Context, Result};
use clap::Parser;
use proscons_reviews::cli::Cli;
use proscons_reviews::logging::init_tracing;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.resolve().context("failed to load configuration")?;
    proscons_reviews::run(&cli.input, &cli.output, &config, cli.explain).with_context(|| {
        format!(
            "failed to label {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    Ok(())
}
