//! `folio sections` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use folio_config::Config;
use folio_renderer::TocEntry;
use folio_scrollspy::Section;

use super::render::render_file;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    /// Markdown file to scan.
    file: PathBuf,

    /// List every heading, not only level-2 sections.
    #[arg(long)]
    all: bool,

    /// Print a JSON array instead of tab-separated lines.
    #[arg(long)]
    json: bool,
}

impl SectionsArgs {
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let result = render_file(&self.file, &config.render, true, false)?;
        let listing = if self.json {
            sections_json(&result.toc, self.all)?
        } else {
            format_sections(&result.toc, self.all)
        };
        if !listing.is_empty() {
            Output::new().document(listing.trim_end());
        }
        Ok(())
    }
}

/// One `id<TAB>label` line per heading anchor.
pub(crate) fn format_sections(toc: &[TocEntry], all: bool) -> String {
    let mut out = String::new();
    for entry in toc.iter().filter(|entry| all || entry.level == 2) {
        writeln!(out, "{}\t{}", entry.id, entry.title).unwrap();
    }
    out
}

/// Level-2 sections as `{id, label}` objects, or every TOC entry with `all`.
pub(crate) fn sections_json(toc: &[TocEntry], all: bool) -> Result<String, serde_json::Error> {
    if all {
        return serde_json::to_string_pretty(toc);
    }
    let sections: Vec<Section> = toc
        .iter()
        .filter(|entry| entry.level == 2)
        .map(|entry| Section::new(&entry.id, &entry.title))
        .collect();
    serde_json::to_string_pretty(&sections)
}
