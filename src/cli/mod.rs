use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::Format;

#[derive(Parser)]
#[command(name = "statusboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dashboard definition file (TOML)
    #[arg(long, global = true, env = "STATUSBOARD_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the monitoring dashboard
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Disable colorized terminal output
        #[arg(long)]
        no_color: bool,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["statusboard", "render"]).unwrap();
        match cli.command {
            Commands::Render {
                format,
                output,
                no_color,
            } => {
                assert_eq!(format, Format::Text);
                assert!(output.is_none());
                assert!(!no_color);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_render_options() {
        let cli = Cli::try_parse_from([
            "statusboard",
            "--verbose",
            "render",
            "--format",
            "html",
            "-o",
            "out.html",
            "--config",
            "board.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
        match cli.command {
            Commands::Render { format, output, .. } => {
                assert_eq!(format, Format::Html);
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_reject_unknown_format() {
        assert!(Cli::try_parse_from(["statusboard", "render", "--format", "pdf"]).is_err());
    }
}
