use serde::{Deserialize, Serialize};
use std::fmt;

// The five categories reported by the check, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreCategory {
    Accessibility,
    BestPractices,
    Performance,
    Pwa,
    Seo,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Accessibility,
        ScoreCategory::BestPractices,
        ScoreCategory::Performance,
        ScoreCategory::Pwa,
        ScoreCategory::Seo,
    ];

    /// Key of the category under `categories` in the lighthouse JSON report.
    pub fn report_key(&self) -> &'static str {
        match self {
            ScoreCategory::Accessibility => "accessibility",
            ScoreCategory::BestPractices => "best-practices",
            ScoreCategory::Performance => "performance",
            ScoreCategory::Pwa => "pwa",
            ScoreCategory::Seo => "seo",
        }
    }

    pub fn metric_name(&self) -> &'static str {
        match self {
            ScoreCategory::Accessibility => "custom_lighthouse.accessibility",
            ScoreCategory::BestPractices => "custom_lighthouse.best_practices",
            ScoreCategory::Performance => "custom_lighthouse.performance",
            ScoreCategory::Pwa => "custom_lighthouse.pwa",
            ScoreCategory::Seo => "custom_lighthouse.seo",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_key())
    }
}

// pub struct for each category score, fraction in [0, 1]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Category {
    pub score: f64,
}

// pub struct for Lighthouse categories
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Categories {
    pub accessibility: Category,
    #[serde(rename = "best-practices")]
    pub best_practices: Category,
    pub performance: Category,
    pub pwa: Category,
    pub seo: Category,
}

impl Categories {
    pub fn get(&self, category: ScoreCategory) -> &Category {
        match category {
            ScoreCategory::Accessibility => &self.accessibility,
            ScoreCategory::BestPractices => &self.best_practices,
            ScoreCategory::Performance => &self.performance,
            ScoreCategory::Pwa => &self.pwa,
            ScoreCategory::Seo => &self.seo,
        }
    }
}
