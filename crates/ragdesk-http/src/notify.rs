//! User-visible error notifications
//!
//! The gateway surfaces every rejection through a notification sink before
//! returning the error, so callers must not display it a second time. The
//! sink is injected at construction instead of living in a global.

use std::sync::{Arc, Mutex};

use tracing::error;

/// Fire-and-forget sink for transient error messages
pub trait Notifier: Send + Sync {
    /// Display one error message to the user
    fn error(&self, message: &str);
}

/// Default sink: emits through the `tracing` error level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Recording sink for assertions in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages emitted so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("notifier lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }
}
