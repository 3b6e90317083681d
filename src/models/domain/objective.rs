use std::fmt;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The five top-level curriculum domains, in catalog order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
pub enum Domain {
    #[serde(rename = "AI Fundamentals")]
    AiFundamentals,
    #[serde(rename = "AI Applications & Tools")]
    AiApplicationsTools,
    #[serde(rename = "Generative AI and Prompt Engineering")]
    GenerativeAiPromptEngineering,
    #[serde(rename = "Ethics & Security")]
    EthicsSecurity,
    #[serde(rename = "Business Value & Future Impact")]
    BusinessValueFutureImpact,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::AiFundamentals,
        Domain::AiApplicationsTools,
        Domain::GenerativeAiPromptEngineering,
        Domain::EthicsSecurity,
        Domain::BusinessValueFutureImpact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::AiFundamentals => "AI Fundamentals",
            Domain::AiApplicationsTools => "AI Applications & Tools",
            Domain::GenerativeAiPromptEngineering => "Generative AI and Prompt Engineering",
            Domain::EthicsSecurity => "Ethics & Security",
            Domain::BusinessValueFutureImpact => "Business Value & Future Impact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::ALL.into_iter().find(|d| d.as_str() == trimmed)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LearningObjective {
    pub id: &'static str,
    pub domain: Domain,
    pub title: &'static str,
    pub description: &'static str,
}

const fn objective(
    id: &'static str,
    domain: Domain,
    title: &'static str,
    description: &'static str,
) -> LearningObjective {
    LearningObjective {
        id,
        domain,
        title,
        description,
    }
}

static OBJECTIVES: Lazy<Vec<LearningObjective>> = Lazy::new(|| {
    use Domain::*;
    vec![
        objective("1.1", AiFundamentals, "Define AI & Terminology", "Define AI, model, training, inference, features, labels."),
        objective("1.2", AiFundamentals, "AI vs. Traditional Software", "Differentiate AI-based systems from traditional rule-based automation."),
        objective("1.3", AiFundamentals, "Machine Learning Types", "Describe Supervised, Unsupervised, and Reinforcement learning and outcomes."),
        objective("1.4", AiFundamentals, "Deep Learning & NNs", "Explain deep learning and neural networks at a high level."),
        objective("1.5", AiFundamentals, "Computer Vision & NLP", "Identify NLP and CV applications in real-world scenarios."),
        objective("2.1", AiApplicationsTools, "IT & Business Use Cases", "Identify common AI use cases across IT, security, and business functions."),
        objective("2.2", AiApplicationsTools, "AI Patterns", "Map scenarios to classification, prediction, anomaly detection, and recommendation."),
        objective("2.3", AiApplicationsTools, "Tool Categories", "Describe embedded AI, APIs, cloud services, and no-code/low-code platforms."),
        objective("2.4", AiApplicationsTools, "Data Types & Tooling", "Differentiate structured vs unstructured data and implications for tooling."),
        objective("2.5", AiApplicationsTools, "Constraints & Tradeoffs", "Recognize data quality, cost, latency, explainability, and governance constraints."),
        objective("3.1", GenerativeAiPromptEngineering, "GenAI Behavior", "Explain generative AI and LLM behavior at a high level (why it can be wrong)."),
        objective("3.2", GenerativeAiPromptEngineering, "Prompt Control", "Write prompts that control scope, quality, and output format."),
        objective("3.3", GenerativeAiPromptEngineering, "Productivity Workflows", "Use genAI to improve productivity in common IT workflows."),
        objective("3.4", GenerativeAiPromptEngineering, "Hallucinations & Risks", "Recognize hallucinations, overreach, and unsafe instructions."),
        objective("3.5", GenerativeAiPromptEngineering, "Validation & Safety", "Apply validation and safe-use practices (privacy, policy, review)."),
        objective("4.1", EthicsSecurity, "Ethical Concerns", "Identify ethical concerns in AI use (bias, fairness, transparency)."),
        objective("4.2", EthicsSecurity, "Privacy & Legal", "Explain privacy and legal considerations for AI (PII, consent, retention)."),
        objective("4.3", EthicsSecurity, "Security Threats", "Recognize common AI security threats (leakage, prompt injection, misuse)."),
        objective("4.4", EthicsSecurity, "Governance & Accountability", "Describe governance and accountability practices (policy, audit trails, approvals)."),
        objective("4.5", EthicsSecurity, "Controls & Mitigations", "Recommend controls and mitigations appropriate to scenario risk level."),
        objective("5.1", BusinessValueFutureImpact, "Productivity & Innovation", "Explain how AI enables productivity, decision support, and innovation."),
        objective("5.2", BusinessValueFutureImpact, "Identifying Opportunities", "Identify and prioritize AI opportunities based on impact and feasibility."),
        objective("5.3", BusinessValueFutureImpact, "Success Metrics & ROI", "Define success metrics and simple ROI indicators."),
        objective("5.4", BusinessValueFutureImpact, "Adoption Challenges", "Recognize adoption challenges (data readiness, governance, skills, change)."),
        objective("5.5", BusinessValueFutureImpact, "Future of Work", "Describe how AI affects roles, workflows, and the future of work."),
    ]
});

pub fn all_objectives() -> &'static [LearningObjective] {
    OBJECTIVES.as_slice()
}

pub fn objectives_by_domain(domain: Domain) -> Vec<&'static LearningObjective> {
    OBJECTIVES.iter().filter(|o| o.domain == domain).collect()
}

pub fn objective_by_id(id: &str) -> Option<&'static LearningObjective> {
    let id = id.trim();
    OBJECTIVES.iter().find(|o| o.id == id)
}
