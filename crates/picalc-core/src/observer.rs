//! Observer pattern for worker lifecycle notifications.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::WorkerUpdate;

/// Observer trait for receiving worker updates.
///
/// Called from worker threads, so implementations must be thread-safe.
pub trait WorkerObserver: Send + Sync {
    /// Receive a worker update.
    fn on_update(&self, update: &WorkerUpdate);
}

/// Subject that fans updates out to a collection of observers.
pub struct WorkerSubject {
    observers: RwLock<Vec<Arc<dyn WorkerObserver>>>,
}

impl WorkerSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn WorkerObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }
}

impl Default for WorkerSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerObserver for WorkerSubject {
    fn on_update(&self, update: &WorkerUpdate) {
        for observer in self.observers.read().iter() {
            observer.on_update(update);
        }
    }
}
