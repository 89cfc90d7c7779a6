//! Lighthouse check: audits a URL with the lighthouse CLI and reports the five
//! category scores (as percentages) as `custom_lighthouse.*` gauges.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{CheckError, ConfigError};
pub use models::{AuditReport, CategoryScores, CheckConfig, InstanceConfig, RawInstance, ScoreCategory};
pub use services::{AuditRunner, CommandOutput, ProcessRunner, ScoreCollector};
pub use utils::{CheckLogger, LogLogger, MetricSink};

// shown by the runner's --version
pub const CHECK_VERSION: &str = env!("CARGO_PKG_VERSION");
