//! Shared test utilities.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

/// Collects every value a subscriber receives, in order.
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler that records each notification into this recorder.
    pub fn handler(&self) -> impl Fn(&T) + Send + Sync + 'static {
        let values = Arc::clone(&self.values);
        move |value: &T| values.lock().push(value.clone())
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    /// How many notifications have been recorded so far.
    pub fn count(&self) -> usize {
        self.values.lock().len()
    }
}

/// Route crate logs to the test harness when RUST_LOG is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
