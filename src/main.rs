use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use astwav::cli::Cli;
use astwav::convert;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("logger already initialized");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.input.is_dir() {
        let output_dir = cli.resolve_output_dir();
        let failures = convert::convert_dir(&cli.input, &output_dir, cli.loops)
            .with_context(|| format!("converting directory {}", cli.input.display()))?;
        if failures > 0 {
            anyhow::bail!("{} file(s) failed to convert", failures);
        }
    } else {
        let output = cli.resolve_output_file()?;
        convert::convert_file(&cli.input, &output, cli.loops)
            .with_context(|| format!("converting {}", cli.input.display()))?;
    }

    Ok(())
}
