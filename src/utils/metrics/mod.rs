pub mod dogstatsd;
pub mod stdout;

pub use dogstatsd::{DogStatsdSink, DEFAULT_STATSD_ADDR};
pub use stdout::StdoutSink;

use crate::models::Gauge;

/// Where the check reports its gauges.
pub trait MetricSink {
    fn gauge(&mut self, name: &str, value: f64, tags: &[String]);
}

impl<S: MetricSink + ?Sized> MetricSink for &mut S {
    fn gauge(&mut self, name: &str, value: f64, tags: &[String]) {
        (**self).gauge(name, value, tags)
    }
}

impl<S: MetricSink + ?Sized> MetricSink for Box<S> {
    fn gauge(&mut self, name: &str, value: f64, tags: &[String]) {
        (**self).gauge(name, value, tags)
    }
}

// In-memory sink, used for dry runs and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub gauges: Vec<Gauge>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricSink for RecordingSink {
    fn gauge(&mut self, name: &str, value: f64, tags: &[String]) {
        self.gauges.push(Gauge::new(name, value, tags));
    }
}
