use crate::models::lighthouse::category::{Categories, ScoreCategory};
use serde::{Deserialize, Serialize};

// Only `categories` is read from the report, everything else is ignored
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuditReport {
    pub categories: Categories,
}

impl AuditReport {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn scores(&self) -> CategoryScores {
        let pct = |category| self.categories.get(category).score * 100.0;
        CategoryScores {
            accessibility: pct(ScoreCategory::Accessibility),
            best_practices: pct(ScoreCategory::BestPractices),
            performance: pct(ScoreCategory::Performance),
            pwa: pct(ScoreCategory::Pwa),
            seo: pct(ScoreCategory::Seo),
        }
    }
}

/// Category scores as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScores {
    pub accessibility: f64,
    pub best_practices: f64,
    pub performance: f64,
    pub pwa: f64,
    pub seo: f64,
}

impl CategoryScores {
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Accessibility => self.accessibility,
            ScoreCategory::BestPractices => self.best_practices,
            ScoreCategory::Performance => self.performance,
            ScoreCategory::Pwa => self.pwa,
            ScoreCategory::Seo => self.seo,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, f64)> + '_ {
        ScoreCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
