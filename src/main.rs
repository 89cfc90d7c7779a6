use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use log::{debug, error, info};
use serde_yaml::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use custom_lighthouse::models::{CheckConfig, InitConfig, RawInstance};
use custom_lighthouse::utils::metrics::DEFAULT_STATSD_ADDR;
use custom_lighthouse::utils::{DogStatsdSink, MetricSink, StdoutSink};
use custom_lighthouse::{AuditRunner, CheckError, ProcessRunner, ScoreCollector, CHECK_VERSION};

#[derive(Debug, Parser)]
#[command(name = "custom-lighthouse", version = CHECK_VERSION, about = "Report lighthouse category scores as gauges")]
struct Cli {
    /// Check config in agent conf.yaml layout (init_config + instances)
    #[arg(short, long, conflicts_with = "url")]
    config: Option<PathBuf>,

    /// Audit a single URL instead of reading a config file
    #[arg(long, requires = "name")]
    url: Option<String>,

    #[arg(long, requires = "url")]
    name: Option<String>,

    /// Extra tag for the ad-hoc instance, may be repeated
    #[arg(long = "tag", requires = "url")]
    tags: Vec<String>,

    /// Overrides init_config.lighthouse_path and $LIGHTHOUSE_PATH
    #[arg(long)]
    lighthouse_path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SinkKind::Dogstatsd)]
    sink: SinkKind,

    #[arg(long, default_value = DEFAULT_STATSD_ADDR)]
    statsd_addr: String,

    /// Re-run every N seconds instead of once
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// Per-instance timeout in seconds, the lighthouse process is killed when it expires
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    Dogstatsd,
    Stdout,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    if config.instances.is_empty() {
        bail!("no instances configured");
    }

    let program = cli
        .lighthouse_path
        .clone()
        .unwrap_or_else(|| config.lighthouse_path());
    info!(
        "custom_lighthouse {} using {} for {} instance(s)",
        CHECK_VERSION,
        program.display(),
        config.instances.len()
    );
    let collector = ScoreCollector::new(ProcessRunner::new(program));

    let mut sink: Box<dyn MetricSink> = match cli.sink {
        SinkKind::Dogstatsd => Box::new(
            DogStatsdSink::connect(cli.statsd_addr.as_str())
                .with_context(|| format!("failed to open DogStatsD socket to {}", cli.statsd_addr))?,
        ),
        SinkKind::Stdout => Box::new(StdoutSink::new()),
    };

    let timeout = cli.timeout.map(Duration::from_secs);
    // a lighthouse run can outlast the interval; missed ticks are not replayed
    let mut ticker = cli.interval.map(|secs| {
        let mut ticker = tokio::time::interval(Duration::from_secs(secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });

    loop {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }
        let failures = run_once(&collector, &config.instances, &mut sink, timeout).await;
        if ticker.is_none() {
            return Ok(failures == 0);
        }
    }
}

fn load_config(cli: &Cli) -> Result<CheckConfig> {
    if let Some(path) = &cli.config {
        return CheckConfig::load(path).context("could not load check config");
    }

    let (url, name) = match (&cli.url, &cli.name) {
        (Some(url), Some(name)) => (url.clone(), name.clone()),
        _ => return Err(anyhow!("either --config or --url and --name are required")),
    };
    let tags = if cli.tags.is_empty() {
        None
    } else {
        Some(Value::Sequence(
            cli.tags.iter().cloned().map(Value::String).collect(),
        ))
    };

    Ok(CheckConfig {
        init_config: Some(InitConfig {
            lighthouse_path: cli.lighthouse_path.clone(),
        }),
        instances: vec![RawInstance {
            url: Some(url),
            name: Some(name),
            tags,
        }],
    })
}

// Instances run one after another; a failure does not stop the rest
async fn run_once<R: AuditRunner, S: MetricSink>(
    collector: &ScoreCollector<R>,
    instances: &[RawInstance],
    sink: &mut S,
    timeout: Option<Duration>,
) -> usize {
    let mut failures = 0;
    for raw in instances {
        let label = raw
            .name
            .as_deref()
            .or(raw.url.as_deref())
            .unwrap_or("<unnamed>")
            .to_string();

        let check = collector.check(raw, sink);
        let result = match timeout {
            Some(limit) => match tokio::time::timeout(limit, check).await {
                Ok(result) => result.map_err(anyhow::Error::from),
                Err(_) => Err(anyhow!("timed out after {:?}", limit)),
            },
            None => check.await.map_err(anyhow::Error::from),
        };

        match result {
            Ok(scores) => debug!("{}: {:?}", label, scores),
            Err(e) => {
                if let Some(CheckError::UnexpectedResponseShape { stdout, .. }) =
                    e.downcast_ref::<CheckError>()
                {
                    debug!("{}: lighthouse output was {:?}", label, stdout);
                }
                error!("lighthouse check {} failed: {:#}", label, e);
                failures += 1;
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use custom_lighthouse::utils::RecordingSink;
    use custom_lighthouse::CommandOutput;
    use std::io;

    const REPORT: &str = r#"{"categories": {
        "accessibility": {"score": 0.9},
        "best-practices": {"score": 0.8},
        "performance": {"score": 0.7},
        "pwa": {"score": 0.6},
        "seo": {"score": 0.5}
    }}"#;

    // https://broken.test exits 1, https://slow.test never finishes, anything else succeeds
    struct FakeLighthouse;

    impl AuditRunner for FakeLighthouse {
        async fn run(&self, url: &str) -> io::Result<CommandOutput> {
            if url == "https://slow.test" {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            let (stdout, exit_code) = match url {
                "https://broken.test" => ("", 1),
                _ => (REPORT, 0),
            };
            Ok(CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                exit_code,
            })
        }
    }

    fn instance(url: &str, name: &str) -> RawInstance {
        RawInstance {
            url: Some(url.to_string()),
            name: Some(name.to_string()),
            tags: None,
        }
    }

    #[tokio::test]
    async fn failed_instance_does_not_stop_the_next() {
        let collector = ScoreCollector::new(FakeLighthouse);
        let instances = vec![
            instance("https://broken.test", "broken"),
            instance("https://x.test", "home"),
        ];
        let mut sink = RecordingSink::new();

        let failures = run_once(&collector, &instances, &mut sink, None).await;

        assert_eq!(failures, 1);
        assert_eq!(sink.gauges.len(), 5);
        assert!(sink
            .gauges
            .iter()
            .all(|g| g.tags.contains(&"lighthouse_name:home".to_string())));
    }

    #[tokio::test]
    async fn timed_out_instance_counts_as_failure() {
        let collector = ScoreCollector::new(FakeLighthouse);
        let instances = vec![
            instance("https://slow.test", "slow"),
            instance("https://x.test", "home"),
        ];
        let mut sink = RecordingSink::new();

        let failures = run_once(
            &collector,
            &instances,
            &mut sink,
            Some(Duration::from_millis(50)),
        )
        .await;

        assert_eq!(failures, 1);
        assert_eq!(sink.gauges.len(), 5);
    }

    #[test]
    fn repeated_tag_flags_become_a_sequence() {
        let cli = Cli::try_parse_from([
            "custom-lighthouse",
            "--url",
            "https://x.test",
            "--name",
            "home",
            "--tag",
            "env:prod",
            "--tag",
            "team:web",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.instances.len(), 1);
        let raw = &config.instances[0];
        assert_eq!(raw.url.as_deref(), Some("https://x.test"));
        assert_eq!(raw.name.as_deref(), Some("home"));
        assert_eq!(
            raw.tags,
            Some(Value::Sequence(vec![
                Value::String("env:prod".to_string()),
                Value::String("team:web".to_string()),
            ]))
        );
    }

    #[test]
    fn no_tag_flags_leave_tags_absent() {
        let cli =
            Cli::try_parse_from(["custom-lighthouse", "--url", "https://x.test", "--name", "home"])
                .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.instances[0].tags, None);
    }

    #[test]
    fn url_without_name_is_rejected() {
        assert!(Cli::try_parse_from(["custom-lighthouse", "--url", "https://x.test"]).is_err());
    }
}
