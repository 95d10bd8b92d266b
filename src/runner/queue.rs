//! Join-able multi-producer multi-consumer task queue.
//!
//! Every [`TaskQueue::put`] raises an unfinished-task count that only a
//! matching [`TaskQueue::task_done`] lowers. [`TaskQueue::join`] waits for that
//! count to reach zero, so it returns once every item has been processed, not
//! merely dequeued.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;

/// Misuse of a [`TaskQueue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// An item was put after the queue was closed.
    #[error("queue is closed")]
    Closed,

    /// `task_done` was called more times than items were put.
    #[error("task_done called more times than items were put")]
    TaskDoneOverflow,
}

#[derive(Debug)]
struct State<T> {
    items: VecDeque<T>,
    unfinished: usize,
    closed: bool,
}

/// Unbounded FIFO shared between producers and worker threads.
#[derive(Debug)]
pub struct TaskQueue<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    all_done: Condvar,
}

impl<T> TaskQueue<T> {
    /// Create an empty, open queue.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::new(),
                unfinished: 0,
                closed: false,
            }),
            not_empty: Condvar::new(),
            all_done: Condvar::new(),
        }
    }

    // No code panics while holding the lock, so a poisoned state is still consistent.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an item and wake one waiting consumer.
    pub fn put(&self, item: T) -> Result<(), QueueError> {
        let mut state = self.lock();
        if state.closed {
            return Err(QueueError::Closed);
        }
        state.items.push_back(item);
        state.unfinished += 1;
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove the oldest item, blocking while the queue is empty.
    ///
    /// Returns `None` once the queue has been closed.
    pub fn get(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if state.closed {
                return None;
            }
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            state = self
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Remove the oldest item without blocking.
    pub fn try_get(&self) -> Option<T> {
        let mut state = self.lock();
        if state.closed {
            return None;
        }
        state.items.pop_front()
    }

    /// Mark one previously gotten item as finished.
    pub fn task_done(&self) -> Result<(), QueueError> {
        let mut state = self.lock();
        if state.unfinished == 0 {
            return Err(QueueError::TaskDoneOverflow);
        }
        state.unfinished -= 1;
        if state.unfinished == 0 {
            self.all_done.notify_all();
        }
        Ok(())
    }

    /// Block until every put item has been marked done.
    pub fn join(&self) {
        let state = self.lock();
        let _state = self
            .all_done
            .wait_while(state, |s| s.unfinished > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Like [`join`](Self::join) but gives up after `timeout`.
    ///
    /// Returns `true` if all work finished in time.
    pub fn join_timeout(&self, timeout: Duration) -> bool {
        let state = self.lock();
        let (state, _) = self
            .all_done
            .wait_timeout_while(state, timeout, |s| s.unfinished > 0)
            .unwrap_or_else(PoisonError::into_inner);
        state.unfinished == 0
    }

    /// Close the queue: blocked and future `get` calls return `None`.
    pub fn close(&self) {
        self.lock().closed = true;
        self.not_empty.notify_all();
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Items waiting to be gotten.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Whether no items are waiting.
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Items put but not yet marked done.
    pub fn unfinished(&self) -> usize {
        self.lock().unfinished
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
