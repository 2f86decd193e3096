use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};

use crate::error::LimiterError;

/// Counting-semaphore admission gate for store operations.
///
/// At most `capacity` permits are outstanding at any time, across all
/// callers. Capacity is fixed at construction and not adjustable at runtime.
#[derive(Clone)]
pub struct AdmissionLimiter {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl AdmissionLimiter {
    /// Create a limiter with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-capacity limiter would suspend
    /// every caller forever.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "admission capacity must be non-zero");
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Acquire an admission slot, suspending until one is free.
    ///
    /// The returned permit releases its slot when dropped.
    pub async fn acquire(&self) -> Result<AdmissionPermit, LimiterError> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| LimiterError::Closed)?;
        Ok(AdmissionPermit { _permit: permit })
    }

    /// Acquire an admission slot without suspending.
    pub fn try_acquire(&self) -> Result<AdmissionPermit, LimiterError> {
        match Arc::clone(&self.semaphore).try_acquire_owned() {
            Ok(permit) => Ok(AdmissionPermit { _permit: permit }),
            Err(TryAcquireError::NoPermits) => Err(LimiterError::Exhausted),
            Err(TryAcquireError::Closed) => Err(LimiterError::Closed),
        }
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl std::fmt::Debug for AdmissionLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionLimiter")
            .field("capacity", &self.capacity)
            .field("available", &self.available())
            .finish()
    }
}

/// One unit of permitted concurrency.
///
/// Holding a permit admits exactly one in-flight store operation. The slot
/// is returned when the permit is dropped, including on error returns and
/// panic unwinds, so acquire/release imbalance cannot occur.
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    // -----------------------------------------------------------------------
    // Capacity invariant
    // -----------------------------------------------------------------------

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_holds_never_exceed_capacity() {
        const CAPACITY: usize = 5;
        const TASKS: usize = 64;

        let limiter = AdmissionLimiter::new(CAPACITY);
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_observed = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::with_capacity(TASKS);
        for _ in 0..TASKS {
            let limiter = limiter.clone();
            let in_flight = Arc::clone(&in_flight);
            let max_observed = Arc::clone(&max_observed);
            handles.push(tokio::spawn(async move {
                let _permit = limiter.acquire().await.unwrap();
                let held = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_observed.fetch_max(held, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(1)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(max_observed.load(Ordering::SeqCst) <= CAPACITY);
        assert_eq!(limiter.available(), CAPACITY);
    }

    // -----------------------------------------------------------------------
    // Scoped release
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn drop_returns_slot() {
        let limiter = AdmissionLimiter::new(1);
        let permit = limiter.acquire().await.unwrap();
        assert_eq!(limiter.available(), 0);
        assert_eq!(limiter.try_acquire().unwrap_err(), LimiterError::Exhausted);

        drop(permit);
        assert_eq!(limiter.available(), 1);
        assert!(limiter.try_acquire().is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn slot_is_released_on_panic() {
        let limiter = AdmissionLimiter::new(1);

        let task = {
            let limiter = limiter.clone();
            tokio::spawn(async move {
                let _permit = limiter.acquire().await.unwrap();
                panic!("worker died mid-operation");
            })
        };
        assert!(task.await.is_err());

        // The unwind dropped the permit; the slot must be back.
        assert_eq!(limiter.available(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn acquire_waits_for_a_free_slot() {
        let limiter = AdmissionLimiter::new(1);
        let held = limiter.acquire().await.unwrap();

        let waiter = {
            let limiter = limiter.clone();
            tokio::spawn(async move { limiter.acquire().await.map(|_| ()) })
        };

        // The waiter cannot complete while the slot is held.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        drop(held);
        waiter.await.unwrap().unwrap();
    }

    // -----------------------------------------------------------------------
    // Construction and accessors
    // -----------------------------------------------------------------------

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_capacity_panics() {
        let _ = AdmissionLimiter::new(0);
    }

    #[tokio::test]
    async fn capacity_and_available() {
        let limiter = AdmissionLimiter::new(3);
        assert_eq!(limiter.capacity(), 3);
        assert_eq!(limiter.available(), 3);

        let _p1 = limiter.acquire().await.unwrap();
        let _p2 = limiter.acquire().await.unwrap();
        assert_eq!(limiter.capacity(), 3);
        assert_eq!(limiter.available(), 1);
    }

    #[tokio::test]
    async fn debug_format() {
        let limiter = AdmissionLimiter::new(2);
        let debug = format!("{limiter:?}");
        assert!(debug.contains("AdmissionLimiter"));
        assert!(debug.contains("capacity"));
    }
}
