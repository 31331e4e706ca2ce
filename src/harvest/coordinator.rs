//! Run coordination: queue setup, worker execution, and timing
//!
//! The coordinator builds the work queue from the configured page range,
//! runs the workers in the selected mode, measures wall-clock duration, and
//! produces the final report. The per-page enrichment fan-out is always
//! cooperative; the mode only controls how many OS-level workers drain the
//! queue in parallel.

use crate::config::Config;
use crate::harvest::fetcher::build_http_client;
use crate::harvest::queue::{PageQueue, StorySink};
use crate::harvest::report::{print_report, HarvestReport};
use crate::harvest::worker::drain_queue;
use crate::Result;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tokio::runtime;

/// Worker execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One worker drains the whole queue
    SingleWorker,

    /// A fixed pool of workers drains the queue in parallel
    Pooled,
}

/// Runs a complete scrape in the given mode
///
/// Prints the mode banner, runs the workers, and after they all finish
/// prints the throughput line. In single-worker mode a worker error aborts
/// the run before any summary is printed; in pooled mode a failed worker is
/// logged and the remaining workers keep draining the queue.
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `mode` - Single-worker or pooled execution
///
/// # Returns
///
/// * `Ok(HarvestReport)` - The collected stories and elapsed time
/// * `Err(ScrapeError)` - Setup failed, or the single worker failed
///
/// # Example
///
/// ```no_run
/// use storyrake::config::Config;
/// use storyrake::harvest::{run, Mode};
///
/// let report = run(Config::default(), Mode::SingleWorker).unwrap();
/// println!("{} stories", report.stories.len());
/// ```
pub fn run(config: Config, mode: Mode) -> Result<HarvestReport> {
    let pages = config.listing_pages();
    tracing::info!("Queued {} listing pages", pages.len());

    let queue = Arc::new(PageQueue::new(pages));
    let sink = Arc::new(StorySink::new());

    let started = Instant::now();

    match mode {
        Mode::SingleWorker => {
            println!("Using single thread for fetching stories...");
            run_single(&config, &queue, &sink)?;
        }
        Mode::Pooled => {
            println!("Using multithreading for fetching stories...");
            run_pooled(&config, &queue, &sink)?;
        }
    }

    let report = HarvestReport {
        stories: sink.take(),
        elapsed: started.elapsed(),
    };

    tracing::info!(
        "Run finished: {} stories in {:?}",
        report.stories.len(),
        report.elapsed
    );
    print_report(&report);

    Ok(report)
}

/// Runs one worker on a current-thread runtime
fn run_single(config: &Config, queue: &Arc<PageQueue>, sink: &Arc<StorySink>) -> Result<()> {
    let rt = runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(async {
        let client = build_http_client(config)?;
        drain_queue(&client, config, queue, sink).await
    })
}

/// Runs a pool of workers, each on its own thread and runtime
///
/// Every worker owns its HTTP client and its cooperative scheduler; only
/// the queue and the sink are shared. A worker that fails or panics takes
/// down only its own thread.
fn run_pooled(config: &Config, queue: &Arc<PageQueue>, sink: &Arc<StorySink>) -> Result<()> {
    let mut handles = Vec::new();

    for worker_id in 0..config.scraper.workers {
        let config = config.clone();
        let queue = Arc::clone(queue);
        let sink = Arc::clone(sink);

        let handle = thread::Builder::new()
            .name(format!("worker-{}", worker_id))
            .spawn(move || -> Result<()> {
                let rt = runtime::Builder::new_current_thread().enable_all().build()?;
                rt.block_on(async {
                    let client = build_http_client(&config)?;
                    drain_queue(&client, &config, &queue, &sink).await
                })
            })?;

        handles.push(handle);
    }

    for handle in handles {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Worker failed: {}", e),
            Err(_) => tracing::error!("Worker thread panicked"),
        }
    }

    Ok(())
}
