// src/models/mod.rs

pub mod config;
pub mod lighthouse;
pub mod metrics;

pub use config::{CheckConfig, InitConfig, InstanceConfig, RawInstance};
pub use lighthouse::{AuditReport, Categories, Category, CategoryScores, ScoreCategory};
pub use metrics::Gauge;
