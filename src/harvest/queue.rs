//! Shared work queue and result sink
//!
//! Both types are shared across workers behind `Arc` and protect their
//! contents with a mutex: the queue must hand each entry to exactly one
//! worker, and the sink must accept appends from several workers at once.

use crate::harvest::extract::Story;
use std::collections::VecDeque;
use std::sync::Mutex;

/// FIFO queue of listing-page URLs
///
/// The queue is filled once at construction and only ever drained; there is
/// no way to add entries afterwards.
pub struct PageQueue {
    entries: Mutex<VecDeque<String>>,
}

impl PageQueue {
    /// Creates a queue holding the given URLs in order
    pub fn new<I>(urls: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            entries: Mutex::new(urls.into_iter().collect()),
        }
    }

    /// Claims the next URL, or None when the queue is exhausted
    ///
    /// Each entry is delivered to exactly one caller.
    pub fn pop(&self) -> Option<String> {
        self.entries.lock().unwrap().pop_front()
    }

    /// Returns the number of unclaimed entries
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns whether all entries have been claimed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Append-only collection of enriched stories
///
/// Workers append whole page batches; the contents are read only after all
/// workers have finished.
#[derive(Default)]
pub struct StorySink {
    stories: Mutex<Vec<Story>>,
}

impl StorySink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page's batch of enriched stories
    pub fn append(&self, batch: Vec<Story>) {
        self.stories.lock().unwrap().extend(batch);
    }

    /// Returns the number of collected stories
    pub fn len(&self) -> usize {
        self.stories.lock().unwrap().len()
    }

    /// Returns whether the sink holds no stories
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains the collected stories, leaving the sink empty
    pub fn take(&self) -> Vec<Story> {
        std::mem::take(&mut *self.stories.lock().unwrap())
    }
}
