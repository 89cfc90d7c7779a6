use std::sync::Mutex;

/// Diagnostic channel handed to the check by its host.
pub trait CheckLogger {
    fn warn(&self, message: &str);
}

/// Forwards to the `log` facade under the check's target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl CheckLogger for LogLogger {
    fn warn(&self, message: &str) {
        log::warn!(target: "custom_lighthouse", "{}", message);
    }
}

/// Keeps warnings in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(w) => w.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl CheckLogger for RecordingLogger {
    fn warn(&self, message: &str) {
        match self.warnings.lock() {
            Ok(mut w) => w.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

impl<T: CheckLogger + ?Sized> CheckLogger for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
