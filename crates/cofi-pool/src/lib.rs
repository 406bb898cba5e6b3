//! Fixed-size worker pool draining a shared FIFO task queue.
//!
//! N OS threads block on a condition variable while the queue is empty and
//! pop tasks in submission order as they arrive. Shutdown is cooperative:
//! [`WorkerPool::shutdown`] sets a flag and wakes every worker, but a worker
//! only exits once the flag is set AND the queue is empty, so every task
//! submitted before shutdown runs to completion.
//!
//! There is no work stealing and no per-worker queue; a single mutex guards
//! the queue and provides all the cross-thread visibility the pool relies
//! on.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use cofi_pool::WorkerPool;
//!
//! let mut pool = WorkerPool::new(4)?;
//! let counter = Arc::new(AtomicUsize::new(0));
//!
//! for _ in 0..100 {
//!     let counter = Arc::clone(&counter);
//!     pool.submit(move || {
//!         counter.fetch_add(1, Ordering::Relaxed);
//!     })?;
//! }
//!
//! pool.shutdown();
//! assert_eq!(counter.load(Ordering::Relaxed), 100);
//! # Ok::<(), cofi_pool::PoolError>(())
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

/// Errors that can occur while operating a [`WorkerPool`].
#[derive(Debug)]
pub enum PoolError {
    /// The pool was asked for zero workers.
    ZeroWorkers,
    /// An OS thread failed to start. Workers that had already started were
    /// shut down and joined before this was returned.
    Spawn(io::Error),
    /// The task was rejected because the pool is shutting down.
    ShuttingDown,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::ZeroWorkers => write!(f, "Worker pool requires at least one worker"),
            PoolError::Spawn(e) => write!(f, "Failed to spawn worker thread: {}", e),
            PoolError::ShuttingDown => write!(f, "Worker pool is shutting down"),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoolError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

type Task = Box<dyn FnOnce() + Send + 'static>;

struct TaskQueue {
    tasks: VecDeque<Task>,
    shutting_down: bool,
}

struct Shared {
    queue: Mutex<TaskQueue>,
    available: Condvar,
}

/// A pool of worker threads consuming tasks in FIFO order.
pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn a pool with `nworkers` threads.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroWorkers`] for an empty pool and
    /// [`PoolError::Spawn`] if a thread fails to start; in the latter case
    /// any workers that did start are signalled and joined first, so no
    /// thread outlives the error.
    pub fn new(nworkers: usize) -> Result<Self, PoolError> {
        if nworkers == 0 {
            return Err(PoolError::ZeroWorkers);
        }

        let shared = Arc::new(Shared {
            queue: Mutex::new(TaskQueue {
                tasks: VecDeque::new(),
                shutting_down: false,
            }),
            available: Condvar::new(),
        });

        let mut pool = Self {
            shared,
            workers: Vec::with_capacity(nworkers),
        };

        for i in 0..nworkers {
            let shared = Arc::clone(&pool.shared);
            let handle = thread::Builder::new()
                .name(format!("cofi-worker-{}", i))
                .spawn(move || worker_loop(&shared));

            match handle {
                Ok(handle) => pool.workers.push(handle),
                Err(e) => {
                    pool.shutdown();
                    return Err(PoolError::Spawn(e));
                }
            }
        }

        Ok(pool)
    }

    /// Enqueue a task at the tail of the queue and wake one worker.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ShuttingDown`] once [`shutdown`] has begun; the
    /// task is dropped, not enqueued.
    ///
    /// [`shutdown`]: WorkerPool::shutdown
    pub fn submit<F>(&self, task: F) -> Result<(), PoolError>
    where
        F: FnOnce() + Send + 'static,
    {
        let mut queue = self.shared.queue.lock().unwrap();
        if queue.shutting_down {
            return Err(PoolError::ShuttingDown);
        }
        queue.tasks.push_back(Box::new(task));
        self.shared.available.notify_one();
        Ok(())
    }

    /// Number of worker threads the pool was built with.
    pub fn nworkers(&self) -> usize {
        self.workers.len()
    }

    /// Begin shutdown and block until every worker has exited.
    ///
    /// Workers drain the queue before exiting, so this is also the barrier
    /// after which the effects of all previously submitted tasks are
    /// visible. Idempotent; dropping the pool performs the same shutdown.
    pub fn shutdown(&mut self) {
        {
            let mut queue = self.shared.queue.lock().unwrap();
            queue.shutting_down = true;
        }
        self.shared.available.notify_all();

        for worker in self.workers.drain(..) {
            // A worker that panicked already tore its task down; the pool
            // itself stays usable for joining the rest.
            let _ = worker.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let task = {
            let mut queue = shared.queue.lock().unwrap();
            while queue.tasks.is_empty() && !queue.shutting_down {
                queue = shared.available.wait(queue).unwrap();
            }
            match queue.tasks.pop_front() {
                Some(task) => task,
                // Shutting down with an empty queue: exit.
                None => return,
            }
        };

        task();
    }
}
