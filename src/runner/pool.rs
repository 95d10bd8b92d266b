//! Fixed-size pool of worker threads draining a [`TaskQueue`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::cancel::CancellationToken;
use super::queue::TaskQueue;
use crate::error::Result;

/// Long-lived workers, each looping get → handle → task_done.
///
/// Workers stop when the [`CancellationToken`] is cancelled (checked between
/// items) or the queue is closed. An item already dequeued when cancellation
/// arrives is dropped, not re-queued. A panicking handler still counts as a
/// finished task so that [`TaskQueue::join`] cannot hang on it.
pub struct WorkerPool<T> {
    handles: Vec<JoinHandle<()>>,
    queue: Arc<TaskQueue<T>>,
    cancel: CancellationToken,
}

impl<T: Send + 'static> WorkerPool<T> {
    /// Spawn `size` workers calling `handler` for every dequeued item.
    pub fn start<F>(
        size: usize,
        queue: Arc<TaskQueue<T>>,
        cancel: CancellationToken,
        handler: F,
    ) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let mut handles = Vec::with_capacity(size);

        for id in 0..size {
            let queue = Arc::clone(&queue);
            let cancel = cancel.clone();
            let handler = Arc::clone(&handler);
            let handle = thread::Builder::new()
                .name(format!("download-worker-{}", id))
                .spawn(move || worker_loop(id, &queue, &cancel, handler.as_ref()))?;
            handles.push(handle);
        }

        debug!("started {} workers", size);
        Ok(Self {
            handles,
            queue,
            cancel,
        })
    }

    /// Number of worker threads still owned by the pool.
    pub fn size(&self) -> usize {
        self.handles.len()
    }

    /// Cancel, wake idle workers and wait for every thread to exit.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        self.queue.close();
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!("worker thread panicked during shutdown");
            }
        }
    }
}

impl<T> Drop for WorkerPool<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.queue.close();
    }
}

fn worker_loop<T, F>(id: usize, queue: &TaskQueue<T>, cancel: &CancellationToken, handler: &F)
where
    F: Fn(T),
{
    loop {
        if cancel.is_cancelled() {
            break;
        }
        let Some(item) = queue.get() else {
            break;
        };
        if cancel.is_cancelled() {
            finish_task(id, queue);
            break;
        }

        if panic::catch_unwind(AssertUnwindSafe(|| handler(item))).is_err() {
            warn!("worker {} handler panicked", id);
        }
        finish_task(id, queue);
    }
    debug!("worker {} stopped", id);
}

fn finish_task<T>(id: usize, queue: &TaskQueue<T>) {
    if let Err(e) = queue.task_done() {
        warn!("worker {}: {}", id, e);
    }
}
