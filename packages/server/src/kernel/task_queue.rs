//! Bounded in-process queue for detached background work.
//!
//! Each spawned future holds one permit until it finishes. When every permit is
//! taken, [`BoundedTaskQueue::try_spawn`] refuses the work instead of letting
//! tasks pile up.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("task queue is at capacity ({capacity} tasks in flight)")]
pub struct QueueFull {
    pub capacity: usize,
}

#[derive(Debug, Clone)]
pub struct BoundedTaskQueue {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl BoundedTaskQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tasks currently holding a permit.
    pub fn in_flight(&self) -> usize {
        self.capacity - self.semaphore.available_permits()
    }

    /// Spawn `fut` on the runtime if a permit is free.
    pub fn try_spawn<F>(&self, fut: F) -> Result<(), QueueFull>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let permit = Arc::clone(&self.semaphore)
            .try_acquire_owned()
            .map_err(|_| QueueFull {
                capacity: self.capacity,
            })?;

        tokio::spawn(async move {
            let _permit = permit;
            fut.await;
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn rejects_work_beyond_capacity() {
        let queue = BoundedTaskQueue::new(1);
        let (release_tx, release_rx) = oneshot::channel::<()>();

        queue
            .try_spawn(async move {
                let _ = release_rx.await;
            })
            .unwrap();
        assert_eq!(queue.in_flight(), 1);

        let err = queue.try_spawn(async {}).unwrap_err();
        assert_eq!(err, QueueFull { capacity: 1 });

        release_tx.send(()).unwrap();
        for _ in 0..100 {
            if queue.in_flight() == 0 {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        assert_eq!(queue.in_flight(), 0);
        assert!(queue.try_spawn(async {}).is_ok());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let queue = BoundedTaskQueue::new(0);
        assert_eq!(queue.capacity(), 1);
    }
}
