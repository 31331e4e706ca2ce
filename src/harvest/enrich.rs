//! Item enrichment: attaching comments to stories
//!
//! Given a story from a listing page, fetch its detail page and attach the
//! parsed comments. Fetch failures propagate to the caller untouched.

use crate::config::Config;
use crate::harvest::extract::{extract_comments, Story};
use crate::harvest::fetcher::fetch_page;
use crate::Result;
use reqwest::Client;

/// Fetches a story's detail page and attaches its comments
///
/// The story's `id`, `title`, and `link` are left unchanged; only the
/// `comments` field is assigned, from the detail page as fetched right now.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The scraper configuration (supplies the item URL template)
/// * `story` - The story to enrich
///
/// # Returns
///
/// * `Ok(Story)` - The story with comments attached
/// * `Err(ScrapeError)` - The detail-page fetch failed
pub async fn attach_comments(client: &Client, config: &Config, mut story: Story) -> Result<Story> {
    let url = config.item_url(&story.id);
    let html = fetch_page(client, &url).await?;
    story.comments = extract_comments(&html);
    Ok(story)
}
