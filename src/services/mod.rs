pub mod check_service;

pub use check_service::{
    AuditRunner, CommandOutput, ProcessRunner, ScoreCollector, LIGHTHOUSE_ARGS,
    UNEXPECTED_RESPONSE_WARNING,
};
