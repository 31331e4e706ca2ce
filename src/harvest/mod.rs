//! Harvest module for fetching and extracting forum stories
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching of listing and item pages
//! - Story and comment extraction from HTML
//! - The shared work queue and result sink
//! - Worker loops and overall run coordination

mod coordinator;
mod enrich;
mod extract;
mod fetcher;
mod queue;
mod report;
mod worker;

pub use coordinator::{run, Mode};
pub use enrich::attach_comments;
pub use extract::{extract_comments, extract_stories, Comment, Story};
pub use fetcher::{build_http_client, fetch_page};
pub use queue::{PageQueue, StorySink};
pub use report::{print_report, HarvestReport};
pub use worker::drain_queue;
