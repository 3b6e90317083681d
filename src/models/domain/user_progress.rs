use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::objective::Domain;

/// Learner progress. Always loaded and saved as a whole record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UserProgress {
    #[serde(default)]
    pub completed_lessons: BTreeSet<String>,
    #[serde(default)]
    pub completed_labs: BTreeSet<String>,
    /// Domain name to score percentages, oldest first.
    #[serde(default)]
    pub quiz_scores: BTreeMap<String, Vec<f64>>,
    #[serde(default)]
    pub weak_objectives: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProgress {
    pub fn record_score(&mut self, domain: Domain, score_percent: f64) {
        self.quiz_scores
            .entry(domain.as_str().to_string())
            .or_default()
            .push(score_percent);
        self.touch();
    }

    pub fn scores_for(&self, domain: Domain) -> &[f64] {
        self.quiz_scores
            .get(domain.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
