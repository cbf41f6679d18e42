use anyhow::Result;
use clap::Parser;
use statusboard::{
    cli::{Cli, Commands},
    config::{Config, Source},
    service::{RenderConfig, RenderService},
};
use std::io::{IsTerminal, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            format,
            output,
            no_color,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            if let Source::File(path) = &config.source {
                debug!("Dashboard source: {}", path.display());
            }

            // Only colour when writing text straight to a terminal
            let color = !no_color && output.is_none() && std::io::stdout().is_terminal();
            let render_config = RenderConfig {
                format,
                color,
                output,
            };

            info!(
                "Rendering {} service(s) as {}",
                config.dashboard.services.len(),
                format
            );
            let result = RenderService::render(&config.dashboard, &render_config)?;

            if let Some(document) = result.document {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.flush()?;
            }
        }
        Commands::Version => {
            println!("statusboard {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
