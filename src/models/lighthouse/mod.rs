pub mod category;
pub mod report;

pub use category::{Categories, Category, ScoreCategory};
pub use report::{AuditReport, CategoryScores};
