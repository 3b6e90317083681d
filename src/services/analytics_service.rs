use std::collections::BTreeMap;

use crate::{
    models::domain::{Domain, UserProgress},
    services::grading_service::round1,
};

pub const REVIEW_THRESHOLD: f64 = 70.0;

pub struct AnalyticsService;

impl AnalyticsService {
    /// Mean score per domain, rounded to one decimal. Domains without
    /// attempts are 0.0.
    pub fn domain_scores(progress: &UserProgress) -> BTreeMap<Domain, f64> {
        Domain::ALL
            .into_iter()
            .map(|domain| {
                let scores = progress.scores_for(domain);
                let average = if scores.is_empty() {
                    0.0
                } else {
                    round1(scores.iter().sum::<f64>() / scores.len() as f64)
                };
                (domain, average)
            })
            .collect()
    }

    /// Mean of the per-domain averages. Unattempted domains count as 0.0.
    pub fn overall_progress(progress: &UserProgress) -> f64 {
        let scores = Self::domain_scores(progress);
        if scores.is_empty() {
            return 0.0;
        }
        round1(scores.values().sum::<f64>() / scores.len() as f64)
    }

    pub fn recommend_next_step(progress: &UserProgress) -> String {
        let scores = Self::domain_scores(progress);

        // Ties go to the earlier domain; BTreeMap iterates in catalog order.
        let weakest = scores
            .iter()
            .filter(|(_, average)| **average > 0.0)
            .fold(None, |weakest: Option<(&Domain, &f64)>, candidate| match weakest {
                Some(current) if current.1 <= candidate.1 => Some(current),
                _ => Some(candidate),
            });

        match weakest {
            None => format!("Start with '{}' to build your base.", Domain::ALL[0]),
            Some((domain, average)) if *average < REVIEW_THRESHOLD => format!(
                "Review '{}' - your average score is {:.1}%.",
                domain, average
            ),
            Some(_) => {
                "Great job! Try a comprehensive scenario or move to the next domain.".to_string()
            }
        }
    }
}
