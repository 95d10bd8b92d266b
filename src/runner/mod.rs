//! Download dispatch and run orchestration.
//!
//! - [`queue`] - Join-able task queue
//! - [`pool`] - Worker threads draining the queue
//! - [`cancel`] - Cooperative cancellation
//! - [`bootstrap`] - The end-to-end flow

pub mod bootstrap;
pub mod cancel;
pub mod pool;
pub mod queue;

pub use bootstrap::{Bootstrap, DownloadReport, RunOutcome, DOWNLOAD_QUESTION, HEADER};
pub use cancel::CancellationToken;
pub use pool::WorkerPool;
pub use queue::{QueueError, TaskQueue};
