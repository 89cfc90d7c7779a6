use std::io;

use proptest::prelude::*;
use serde_json::json;

use custom_lighthouse::utils::RecordingSink;
use custom_lighthouse::{AuditRunner, CommandOutput, InstanceConfig, ScoreCategory, ScoreCollector};

struct ReportRunner(String);

impl AuditRunner for ReportRunner {
    async fn run(&self, _url: &str) -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            stdout: self.0.clone(),
            stderr: String::new(),
            exit_code: 0,
        })
    }
}

fn report(scores: [f64; 5]) -> String {
    json!({
        "categories": {
            "accessibility": {"score": scores[0]},
            "best-practices": {"score": scores[1]},
            "performance": {"score": scores[2]},
            "pwa": {"score": scores[3]},
            "seo": {"score": scores[4]},
        }
    })
    .to_string()
}

proptest! {
    #[test]
    fn every_score_is_reported_as_a_percentage(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        p in 0.0f64..=1.0,
        w in 0.0f64..=1.0,
        s in 0.0f64..=1.0,
    ) {
        let scores = [a, b, p, w, s];
        let collector = ScoreCollector::new(ReportRunner(report(scores)));
        let instance = InstanceConfig::new("https://x.test", "home", Vec::new());
        let mut sink = RecordingSink::new();

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(collector.collect(&instance, &mut sink)).unwrap();

        prop_assert_eq!(sink.gauges.len(), 5);
        for ((gauge, category), score) in sink.gauges.iter().zip(ScoreCategory::ALL).zip(scores) {
            prop_assert_eq!(gauge.name.as_str(), category.metric_name());
            // serde_json float parsing may differ from the source by one ulp
            prop_assert!((gauge.value - score * 100.0).abs() <= 1e-9);
        }
    }
}
