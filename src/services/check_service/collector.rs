use log::{debug, info};

use crate::error::CheckError;
use crate::models::{AuditReport, CategoryScores, InstanceConfig, RawInstance};
use crate::services::check_service::runner::AuditRunner;
use crate::utils::{CheckLogger, LogLogger, MetricSink};

pub const UNEXPECTED_RESPONSE_WARNING: &str =
    "lighthouse response JSON structure different than expected";

/// Runs lighthouse against one instance and reports its five category scores
/// as gauges. Holds no state between invocations.
pub struct ScoreCollector<R, L = LogLogger> {
    runner: R,
    logger: L,
}

impl<R: AuditRunner> ScoreCollector<R, LogLogger> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            logger: LogLogger,
        }
    }
}

impl<R: AuditRunner, L: CheckLogger> ScoreCollector<R, L> {
    pub fn with_logger(runner: R, logger: L) -> Self {
        Self { runner, logger }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Validates a raw host instance, then collects it.
    pub async fn check<S: MetricSink>(
        &self,
        raw: &RawInstance,
        sink: &mut S,
    ) -> Result<CategoryScores, CheckError> {
        let instance = InstanceConfig::from_raw(raw, &self.logger)?;
        self.collect(&instance, sink).await
    }

    /// Either all five gauges are emitted or none are.
    pub async fn collect<S: MetricSink>(
        &self,
        instance: &InstanceConfig,
        sink: &mut S,
    ) -> Result<CategoryScores, CheckError> {
        debug!("collecting lighthouse scores for {}", instance.url);
        let output = self
            .runner
            .run(&instance.url)
            .await
            .map_err(CheckError::Spawn)?;

        if !output.success() {
            return Err(CheckError::SubprocessFailure {
                stdout: output.stdout,
                stderr: output.stderr,
                exit_code: output.exit_code,
            });
        }

        let scores = match AuditReport::from_json(&output.stdout) {
            Ok(report) => report.scores(),
            Err(source) => {
                self.logger.warn(UNEXPECTED_RESPONSE_WARNING);
                return Err(CheckError::UnexpectedResponseShape {
                    stdout: output.stdout,
                    stderr: output.stderr,
                    exit_code: output.exit_code,
                    source,
                });
            }
        };

        let tags = instance.metric_tags();
        let mut emitted = 0;
        for (category, value) in scores.iter() {
            sink.gauge(category.metric_name(), value, &tags);
            emitted += 1;
        }
        info!(
            "reported {} lighthouse gauges for {} ({})",
            emitted, instance.name, instance.url
        );

        Ok(scores)
    }
}
