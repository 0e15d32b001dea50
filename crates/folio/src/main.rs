//! Folio CLI - portfolio and blog renderer.
//!
//! Provides commands for:
//! - `render`: Render a markdown file to HTML
//! - `sections`: List the heading anchors of a markdown file
//! - `posts`: Fetch and print the blog list page
//! - `post`: Fetch and print a blog post page

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_config::{CliSettings, Config};
use tracing_subscriber::EnvFilter;

use commands::{PostArgs, RenderArgs, SectionsArgs, list_posts};
use error::CliError;
use output::Output;

/// Folio - portfolio and blog renderer.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content backend URL (overrides config).
    #[arg(long, global = true, env = "FOLIO_BACKEND_URL")]
    backend_url: Option<String>,

    /// Enable verbose output (INFO level logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to HTML.
    Render(RenderArgs),
    /// List heading anchors of a markdown file.
    Sections(SectionsArgs),
    /// Fetch and print the blog list page.
    Posts,
    /// Fetch and print a blog post page.
    Post(PostArgs),
}

impl Cli {
    fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            backend_url: self.backend_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match self.command {
            Commands::Render(args) => args.execute(&config),
            Commands::Sections(args) => args.execute(&config),
            Commands::Posts => list_posts(&config),
            Commands::Post(args) => args.execute(&config),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "folio",
            "post",
            "hello",
            "--backend-url",
            "http://127.0.0.1:9000",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.backend_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert!(matches!(cli.command, Commands::Post(_)));
    }

    #[test]
    fn test_render_flags() {
        let cli =
            Cli::try_parse_from(["folio", "render", "post.md", "--plain", "--escape-html"]).unwrap();
        assert!(matches!(cli.command, Commands::Render(_)));
    }
}
