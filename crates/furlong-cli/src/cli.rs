//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Furlong CLI - Extract entrant records from past-performance text.
#[derive(Debug, Parser)]
#[command(name = "furlong")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Extractor configuration file (TOML)
    #[arg(short, long, global = true, env = "FURLONG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in heuristic preset, applied before the configuration file
    #[arg(short, long, value_enum, global = true)]
    pub preset: Option<PresetArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (post and name only)
    Quiet,
}

/// Heuristic presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Default limits
    Default,
    /// Narrow fallback windows
    Strict,
    /// Wide fallback windows for badly broken extractions
    Lenient,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a document into entrant records
    Parse(ParseArgs),

    /// List the entry boundaries found in a document
    Boundaries(InputArgs),

    /// Print the effective extractor configuration as TOML
    Config,
}

/// Where the document comes from.
#[derive(Debug, Clone, Parser)]
pub struct InputArgs {
    /// Input file; `.pdf` files are decoded, anything else is read as text.
    /// Reads text from stdin when omitted.
    pub input: Option<PathBuf>,

    /// Decode the input as PDF whatever its extension
    #[arg(long)]
    pub pdf: bool,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show the entrant at this post position
    #[arg(short = 'e', long)]
    pub entrant: Option<u8>,

    /// Show race history rows (table format)
    #[arg(long)]
    pub races: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let cli = Cli::parse_from(["furlong", "parse", "card.txt", "--entrant", "3"]);
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.input.input, Some(PathBuf::from("card.txt")));
                assert_eq!(args.entrant, Some(3));
                assert!(!args.input.pdf);
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["furlong", "boundaries", "-vv", "--format", "json", "--preset", "strict"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.preset, Some(PresetArg::Strict));
        assert!(matches!(cli.command, Command::Boundaries(InputArgs { input: None, .. })));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
