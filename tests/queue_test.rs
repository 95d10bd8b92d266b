//! Concurrency properties of the task queue and worker pool.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tidal_bootstrap::runner::{CancellationToken, QueueError, TaskQueue, WorkerPool};

#[test]
fn join_waits_for_every_task_done() {
    let queue: Arc<TaskQueue<String>> = Arc::new(TaskQueue::new());
    for name in ["a", "b", "c"] {
        queue.put(name.to_string()).unwrap();
    }

    // Consume everything but acknowledge only two items.
    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            for i in 0..3 {
                queue.get().unwrap();
                if i < 2 {
                    queue.task_done().unwrap();
                }
            }
        })
    };
    consumer.join().unwrap();

    assert!(queue.is_empty());
    assert_eq!(queue.unfinished(), 1);
    assert!(!queue.join_timeout(Duration::from_millis(100)));

    queue.task_done().unwrap();
    assert!(queue.join_timeout(Duration::from_secs(1)));
}

#[test]
fn task_done_without_get_is_rejected() {
    let queue: TaskQueue<u8> = TaskQueue::new();
    assert!(matches!(queue.task_done(), Err(QueueError::TaskDoneOverflow)));
}

#[test]
fn concurrent_consumers_receive_each_item_once() {
    let queue: Arc<TaskQueue<String>> = Arc::new(TaskQueue::new());
    let seen: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));

    let names: Vec<String> = (0..200).map(|i| format!("dep-{i}")).collect();
    for name in &names {
        queue.put(name.clone()).unwrap();
    }

    let consumers: Vec<_> = (0..8)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                while let Some(name) = queue.try_get() {
                    *seen.lock().unwrap().entry(name).or_insert(0) += 1;
                    queue.task_done().unwrap();
                }
            })
        })
        .collect();
    for consumer in consumers {
        consumer.join().unwrap();
    }

    queue.join();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), names.len());
    assert!(seen.values().all(|count| *count == 1));
}

#[test]
fn pool_processes_items_put_after_start() {
    let queue: Arc<TaskQueue<usize>> = Arc::new(TaskQueue::new());
    let total = Arc::new(AtomicUsize::new(0));

    let mut pool = {
        let total = Arc::clone(&total);
        WorkerPool::start(4, Arc::clone(&queue), CancellationToken::new(), move |n| {
            thread::sleep(Duration::from_millis(1));
            total.fetch_add(n, Ordering::SeqCst);
        })
        .unwrap()
    };

    for n in 1..=20 {
        queue.put(n).unwrap();
    }
    assert!(queue.join_timeout(Duration::from_secs(10)));
    pool.shutdown();

    assert_eq!(total.load(Ordering::SeqCst), (1..=20).sum::<usize>());
    assert!(queue.is_closed());
}

#[test]
fn panicking_handler_does_not_hang_join() {
    let queue: Arc<TaskQueue<u32>> = Arc::new(TaskQueue::new());
    let handled = Arc::new(AtomicUsize::new(0));

    let mut pool = {
        let handled = Arc::clone(&handled);
        WorkerPool::start(2, Arc::clone(&queue), CancellationToken::new(), move |n| {
            if n == 3 {
                panic!("boom");
            }
            handled.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap()
    };

    for n in 0..6 {
        queue.put(n).unwrap();
    }
    assert!(queue.join_timeout(Duration::from_secs(10)));
    pool.shutdown();

    assert_eq!(handled.load(Ordering::SeqCst), 5);
}

#[test]
fn put_after_close_fails() {
    let queue: TaskQueue<u8> = TaskQueue::new();
    queue.close();
    assert!(matches!(queue.put(1), Err(QueueError::Closed)));
    assert!(queue.get().is_none());
}
