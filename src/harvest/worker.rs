//! Worker loop draining the page queue
//!
//! Each worker claims listing pages until the queue runs dry or a claimed
//! page yields no stories. The zero-story case is the end-of-data signal
//! for a page range that overshoots the real number of pages, and it halts
//! only the worker that saw it.

use crate::config::Config;
use crate::harvest::enrich::attach_comments;
use crate::harvest::extract::extract_stories;
use crate::harvest::fetcher::fetch_page;
use crate::harvest::queue::{PageQueue, StorySink};
use crate::Result;
use futures::future::try_join_all;
use reqwest::Client;

/// Drains the queue until it is empty or a page yields zero stories
///
/// For every claimed listing page the worker fetches the markup, extracts
/// the stories, launches one enrichment fetch per story, and awaits the
/// whole batch before appending it to the sink. The first enrichment
/// failure aborts the batch: the error propagates and the in-flight
/// sibling fetches are dropped with it. Nothing from a failed page reaches
/// the sink.
///
/// # Arguments
///
/// * `client` - The HTTP client owned by this worker
/// * `config` - The scraper configuration
/// * `queue` - The shared queue of listing-page URLs
/// * `sink` - The shared result collection
pub async fn drain_queue(
    client: &Client,
    config: &Config,
    queue: &PageQueue,
    sink: &StorySink,
) -> Result<()> {
    while let Some(url) = queue.pop() {
        tracing::debug!("Fetching listing page: {}", url);
        let html = fetch_page(client, &url).await?;

        let stories = extract_stories(&html);
        if stories.is_empty() {
            tracing::debug!("No stories on {}, worker stopping", url);
            break;
        }

        let batch = try_join_all(
            stories
                .into_iter()
                .map(|story| attach_comments(client, config, story)),
        )
        .await?;

        tracing::debug!("Collected {} stories from {}", batch.len(), url);
        sink.append(batch);
    }

    Ok(())
}
