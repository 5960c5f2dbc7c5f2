//! Purpose: Size and build the thread pool used for CPU-bound protocol work.
//! Exports: `WorkerBudget`, `worker_budget`, `detected_parallelism`, `WorkerPool`.
//! Role: Sizing policy shared by anything running parallel work off the caller's own loop.
//! Invariants: Budgets are never zero; an undetectable host degrades to one worker plus a notice.
use std::num::NonZeroUsize;
use std::thread::available_parallelism;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::notice::{Notice, notice_json};

/// Worker count decided by [`worker_budget`], plus the fallback notice when
/// the host could not be probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerBudget {
    pub workers: usize,
    pub notice: Option<Notice>,
}

/// Number of logical CPUs the host reports, if it reports anything.
pub fn detected_parallelism() -> Option<usize> {
    available_parallelism().ok().map(NonZeroUsize::get)
}

/// Decide how many workers to run given a detected logical CPU count.
///
/// One CPU is left free for the caller's own coordination work. A host that
/// cannot be probed, or that reports zero, gets a single worker and a notice
/// describing the fallback.
pub fn worker_budget(detected: Option<usize>) -> WorkerBudget {
    match detected {
        Some(count) if count > 0 => WorkerBudget {
            workers: (count - 1).max(1),
            notice: None,
        },
        unknown => {
            let notice = Notice::new(
                "worker_fallback",
                "could not determine host CPU count, defaulting to 1 worker",
            )
            .with_detail("detected", unknown.map_or(Value::Null, Value::from))
            .with_detail("workers", Value::from(1));
            WorkerBudget {
                workers: 1,
                notice: Some(notice),
            }
        }
    }
}

/// A fixed-size thread pool for CPU-bound work.
#[derive(Debug)]
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a pool sized for this host.
    ///
    /// Applies [`worker_budget`] to the detected CPU count and logs a warning
    /// when the sizing had to fall back.
    pub fn for_host() -> Result<Self, Error> {
        let budget = worker_budget(detected_parallelism());
        if let Some(notice) = &budget.notice {
            tracing::warn!(notice = %notice_json(notice), "{}", notice.message);
        }
        Self::with_workers(budget.workers)
    }

    /// Build a pool with exactly `workers` threads.
    pub fn with_workers(workers: usize) -> Result<Self, Error> {
        if workers == 0 {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("worker pool needs at least one thread"));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("peerkit-worker-{index}"))
            .build()
            .map_err(|source| {
                Error::new(ErrorKind::Internal)
                    .with_message("could not spawn worker threads")
                    .with_source(source)
            })?;
        tracing::debug!(workers, "worker pool ready");
        Ok(WorkerPool { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `job` inside the pool, blocking until it returns.
    pub fn run<F, R>(&self, job: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(job)
    }

    /// Borrow the underlying pool for its full submission interface.
    pub fn handle(&self) -> &rayon::ThreadPool {
        &self.pool
    }
}
