pub mod log_utils;
pub mod metrics;

pub use log_utils::{CheckLogger, LogLogger, RecordingLogger};
pub use metrics::{DogStatsdSink, MetricSink, RecordingSink, StdoutSink};
