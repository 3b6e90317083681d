use serde::Serialize;

use crate::models::domain::{
    objective::objectives_by_domain, Domain, GradeReport, UserProgress,
};

#[derive(Debug, Clone, Serialize)]
pub struct GradeQuizResponse {
    pub report: GradeReport,
    pub progress: UserProgress,
    /// False when the session is local-only and nothing was written.
    pub saved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainDto {
    pub name: Domain,
    pub objective_count: usize,
}

impl From<Domain> for DomainDto {
    fn from(domain: Domain) -> Self {
        DomainDto {
            name: domain,
            objective_count: objectives_by_domain(domain).len(),
        }
    }
}

/// Payload of an SSE `chunk` event.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkPayload<'a> {
    pub text: &'a str,
}
