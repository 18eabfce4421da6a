//! Command-line interface for counting_circle.

use clap::{Parser, Subcommand, ValueEnum};

/// Counting circle - play the counting-out elimination game
#[derive(Parser, Debug)]
#[command(name = "counting_circle")]
#[command(about = "Counts children out of a circle until one is left", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game and print the outcome
    Play {
        /// Number of children in the circle (overrides config)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        children: Option<i64>,

        /// Count each round runs to (overrides config)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How the outcome is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line
    Text,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from(["counting_circle", "play", "-n", "7", "-k", "3"]).unwrap();
        match cli.command {
            Command::Play {
                children,
                count,
                config,
                format,
            } => {
                assert_eq!(children, Some(7));
                assert_eq!(count, Some(3));
                assert!(config.is_none());
                assert_eq!(format, OutputFormat::Text);
            }
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli =
            Cli::try_parse_from(["counting_circle", "play", "--children", "-1", "--format", "json"])
                .unwrap();
        let Command::Play { children, format, .. } = cli.command;
        assert_eq!(children, Some(-1));
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["counting_circle", "play", "--format", "yaml"]).is_err());
    }
}
