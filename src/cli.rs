use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "subtab")]
#[command(about = "Merge speaker-prefixed SRT dialogue into a Timecode/Speaker/Text table.")]
pub struct Args {
    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an SRT file into a dialogue table
    Convert(ConvertCmd),
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
pub struct ConvertCmd {
    /// Input SRT file path, or '-' for stdin
    pub input: String,

    /// Output file path (optional)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Target table format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub to: Format,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Allow overwriting output file
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Html,
    Tsv,
    Csv,
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Tsv => "tsv",
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_defaults_to_html() {
        let args = Args::try_parse_from(["subtab", "convert", "in.srt"]).unwrap();
        match args.command {
            Command::Convert(cmd) => {
                assert_eq!(cmd.input, "in.srt");
                assert_eq!(cmd.to, Format::Html);
                assert!(!cmd.stdout);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_and_convert_flags() {
        let args = Args::try_parse_from([
            "subtab",
            "--log-level",
            "debug",
            "convert",
            "-",
            "--to",
            "tsv",
            "--stdout",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        let Command::Convert(cmd) = args.command else {
            panic!("expected convert");
        };
        assert_eq!(cmd.to, Format::Tsv);
        assert!(cmd.stdout);
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
