//! Résumé analysis — pluggable, trait-based ATS compatibility report.
//!
//! Default: `StaticAnalyzer`, a fixed category breakdown. Real keyword or
//! semantic scoring is a separate backend; `AppState` holds an
//! `Arc<dyn ResumeAnalyzer>` so one can be swapped in at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Report model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32, // 0 – 100
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub label: String,
    pub categories: Vec<CategoryScore>,
    pub analyzer_backend: String,
}

pub fn score_label(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent ATS Score"
    } else if score >= 60 {
        "Good ATS Score"
    } else {
        "Needs Improvement"
    }
}

/// Rounded mean of the category scores; 0 when there are none.
pub fn overall_score(categories: &[CategoryScore]) -> u32 {
    if categories.is_empty() {
        return 0;
    }
    let total: u32 = categories.iter().map(|c| c.score).sum();
    (total as f64 / categories.len() as f64).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores the plain-text rendering of a résumé.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, content: &str) -> Result<AnalysisReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// StaticAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Returns the same breakdown for every résumé. Deterministic, no I/O.
pub struct StaticAnalyzer;

#[async_trait]
impl ResumeAnalyzer for StaticAnalyzer {
    async fn analyze(&self, _content: &str) -> Result<AnalysisReport, AppError> {
        let categories = vec![
            category(
                "Keywords",
                85,
                &[
                    "Good use of industry-specific keywords",
                    "Consider adding more technical skills",
                ],
            ),
            category("Format", 90, &["Clean and well-structured format"]),
            category(
                "Content",
                75,
                &[
                    "Quantify more achievements",
                    "Add more action verbs",
                    "Include specific metrics",
                ],
            ),
        ];
        let overall = overall_score(&categories);

        Ok(AnalysisReport {
            overall_score: overall,
            label: score_label(overall).to_string(),
            categories,
            analyzer_backend: "static".to_string(),
        })
    }
}

fn category(name: &str, score: u32, suggestions: &[&str]) -> CategoryScore {
    CategoryScore {
        category: name.to_string(),
        score,
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}
