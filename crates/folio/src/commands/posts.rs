//! `folio posts` and `folio post` command implementations.

use std::time::Duration;

use clap::Args;
use folio_config::Config;
use folio_content::ContentClient;
use folio_site::{BlogListPage, BlogPostPage, PageState, styled_pipeline};

use crate::error::CliError;
use crate::output::Output;

fn client(config: &Config) -> ContentClient {
    ContentClient::with_timeout(
        &config.content.backend_url,
        Duration::from_secs(config.content.timeout_secs),
    )
}

/// Print the page, then fail if it loaded into an error state.
fn finish<T>(html: &str, state: &PageState<T>) -> Result<(), CliError> {
    Output::new().document(html);
    match state.error() {
        Some(message) => Err(CliError::Fetch(message.to_owned())),
        None => Ok(()),
    }
}

/// Print the blog list page.
pub(crate) fn list_posts(config: &Config) -> Result<(), CliError> {
    let page = BlogListPage::new(BlogListPage::load(&client(config)));
    finish(&page.render(), page.state())
}

/// Arguments for the post command.
#[derive(Args)]
pub(crate) struct PostArgs {
    /// Post slug.
    slug: String,
}

impl PostArgs {
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let pipeline = styled_pipeline(&config.render);
        let page = BlogPostPage::new(BlogPostPage::load(
            &client(config),
            Some(&self.slug),
            &pipeline,
        ));
        finish(&page.render(), page.state())
    }
}
