//! Furlong CLI - extract entrant records from past-performance documents.

use clap::Parser;
use furlong_cli::commands;
use furlong_cli::{load_extractor_config, Cli, Command, Formatter, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color_enabled = !cli.no_color;
    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::default(), color_enabled);
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> furlong_cli::Result<()> {
    let config = load_extractor_config(cli.config.as_deref(), cli.preset)?;
    let format = cli.format.map(Into::into).unwrap_or_default();
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &config, &formatter)?,
        Command::Boundaries(args) => commands::execute_boundaries(args, &config, &formatter)?,
        Command::Config => commands::execute_config(&config)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
