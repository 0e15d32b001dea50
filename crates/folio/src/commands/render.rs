//! `folio render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{Config, RenderConfig};
use folio_renderer::{MarkdownPipeline, PlainRules, RawHtml, RenderResult};
use folio_site::{raw_html, styled_pipeline};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Emit semantic HTML without styling classes.
    #[arg(long)]
    plain: bool,

    /// Escape raw HTML instead of sanitizing it (overrides config).
    #[arg(long)]
    escape_html: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let output = Output::new();
        let result = render_file(&self.file, &config.render, self.plain, self.escape_html)?;

        for warning in &result.warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        output.document(&result.html);
        Ok(())
    }
}

/// Render the markdown file at `path`.
pub(crate) fn render_file(
    path: &Path,
    config: &RenderConfig,
    plain: bool,
    escape_html: bool,
) -> Result<RenderResult, CliError> {
    let markdown = std::fs::read_to_string(path)?;
    let raw = if escape_html {
        RawHtml::Escape
    } else {
        raw_html(config)
    };

    let result = if plain {
        MarkdownPipeline::new(PlainRules)
            .with_gfm(config.gfm)
            .with_raw_html(raw)
            .render(&markdown)
    } else {
        styled_pipeline(config).with_raw_html(raw).render(&markdown)
    };
    Ok(result)
}
