// src/services/check_service/mod.rs

pub mod collector;
pub mod runner;

pub use collector::{ScoreCollector, UNEXPECTED_RESPONSE_WARNING};
pub use runner::{AuditRunner, CommandOutput, ProcessRunner, LIGHTHOUSE_ARGS};
