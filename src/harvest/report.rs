//! Throughput report for a completed run

use crate::harvest::extract::Story;
use std::time::Duration;

/// Result of a completed scrape run
#[derive(Debug)]
pub struct HarvestReport {
    /// All enriched stories collected across workers
    pub stories: Vec<Story>,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl HarvestReport {
    /// Aggregate throughput in stories per second
    ///
    /// Defined as 0.0 when no time elapsed, so an empty run still reports a
    /// finite rate.
    pub fn stories_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.stories.len() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Prints the final throughput line
pub fn print_report(report: &HarvestReport) {
    println!(
        "Scraping speed: {:.0} stories/sec",
        report.stories_per_second()
    );
}
