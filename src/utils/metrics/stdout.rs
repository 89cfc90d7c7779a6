use crate::utils::metrics::MetricSink;
use chrono::Utc;
use serde_json::json;
use std::io::{self, Write};

// Writes each gauge as one JSON line
pub struct StdoutSink<W: Write = io::Stdout> {
    out: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MetricSink for StdoutSink<W> {
    fn gauge(&mut self, name: &str, value: f64, tags: &[String]) {
        let line = json!({
            "metric": name,
            "value": value,
            "tags": tags,
            "timestamp": Utc::now().to_rfc3339(),
        });
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("failed to write {}: {}", name, e);
        }
    }
}
