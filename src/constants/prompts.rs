use crate::models::domain::{DifficultyLevel, Domain, LearningObjective};

pub const INSTRUCTOR_SYSTEM_PROMPT: &str = "You are an expert AI instructor for IT professionals preparing for the 'AI Essentials' exam.
Your goal is to produce high-quality, technically accurate, and exam-aligned training content.
Do not reproduce copyrighted real exam questions. Generate original items in the spirit of the objectives.
When structured output is requested, you must strictly follow the JSON schema.";

pub const LAB_SYSTEM_PROMPT: &str = "You are an expert lab instructor.";

pub const QUIZ_SYSTEM_PROMPT: &str = "You are an exam writer.";

pub const ASSIGNMENT_SYSTEM_PROMPT: &str = "You are a business simulation engine.";

pub const SECTION_WRITER_SYSTEM_PROMPT: &str = "You are a technical writer.";

pub const GRADER_SYSTEM_PROMPT: &str = "You are a strict grader. Evaluate the submission against the rubric/standards. Provide score and constructive feedback.";

pub const DEFAULT_QUIZ_QUESTIONS: u32 = 5;

const FALLBACK_LAB_TOOLS: &str = "standard office/web tools";

const DEFAULT_RUBRIC: &str = "No custom rubric provided; apply standard criteria for accuracy, completeness, and clarity.";

/// System instruction for structured output: the role line, the shared
/// instructor guidance, and the JSON Schema the reply must satisfy.
pub fn structured_system_prompt(role_line: &str, schema: &str) -> String {
    format!(
        "{role_line}\n\n{INSTRUCTOR_SYSTEM_PROMPT}\n\nRespond with a single JSON object that validates against this JSON Schema. No prose, no extra keys.\n{schema}"
    )
}

pub fn lesson_outline_prompt(
    objective: &LearningObjective,
    level: DifficultyLevel,
    duration_minutes: u32,
    role: &str,
) -> String {
    let domain = objective.domain;
    format!(
        r#"Act as an expert technical instructor. Plan a comprehensive lesson curriculum for:
- Domain: {domain}
- Objective: {id} {title} ({description})
- Difficulty: {level}
- Duration: {duration_minutes} minutes
- Audience: {role}

Generate the structure (Outline) only. Do not write the full body content yet.

Strict Requirements:
1. **Structure**: 3-5 distinct sections that cover the topic deeply.
2. **Key Terms**: Define 3-5 critical industry terms.
3. **Misconceptions**: Identify 2-3 common errors.
4. **Checks**: 3 conceptual review questions.

Output valid JSON structure (snake_case):
{{
    "title": "Lesson Title",
    "domain": "{domain}",
    "objective_id": "{id}",
    "level": "{level}",
    "duration_minutes": {duration_minutes},
    "overview": "Brief summary",
    "sections": [ {{ "title": "Section Title", "content": "", "duration_minutes": 5 }} ],
    "key_terms": ["Term 1", "Term 2"],
    "misconceptions": ["Misconception 1"],
    "checks": [
        {{ "question": "Question 1?", "answer": "Answer 1" }}
    ]
}}"#,
        id = objective.id,
        title = objective.title,
        description = objective.description,
        level = level.as_str(),
    )
}

pub fn section_content_prompt(
    section_title: &str,
    domain: Domain,
    role: &str,
    lesson_overview: &str,
) -> String {
    format!(
        r#"You are writing one specific section of a technical lesson.

Context:
- Course Domain: {domain}
- Audience: {role}
- Lesson Overview: {lesson_overview}

Current Section: "{section_title}"

Task: Write the FULL, DETAILED content for this section in Markdown.

Requirements:
1. **Depth**: Write at least 4-5 paragraphs. 400+ words.
2. **Technicality**: Explain 'How' and 'Why', not just 'What'. Use analogies.
3. **Formatting**: Use h3 headers (###) for subsections, bullet points, and **bold** text for emphasis.
4. **Examples**: Include at least one concrete scenario or code/config snippet.
5. **No Intro**: Start directly with the content. Do not repeat the Section Title as a header."#
    )
}

pub fn lab_prompt(objective: &LearningObjective, tools: &[String]) -> String {
    let domain = objective.domain;
    let tool_list = if tools.is_empty() {
        FALLBACK_LAB_TOOLS.to_string()
    } else {
        tools.join(", ")
    };
    let tools_json = if tools.is_empty() {
        r#"["Tool 1"]"#.to_string()
    } else {
        serde_json::to_string(tools).unwrap_or_default()
    };

    format!(
        r#"Create a hands-on lab activity for:
- Domain: {domain}
- Objective: {id} {title}
- Allowed Tools: {tool_list}

Output strictly valid JSON with the following structure (snake_case keys):
{{
    "title": "Lab Title",
    "domain": "{domain}",
    "objective_id": "{id}",
    "goal": "Learning goal...",
    "prerequisites": ["Prereq 1"],
    "tools": {tools_json},
    "steps": [
        {{ "step_number": 1, "instruction": "Do this...", "expected_result": "You see this..." }}
    ],
    "artifacts": [
        {{ "name": "Screenshot 1", "description": "evidence description" }}
    ],
    "rubric": {{ "Task 1 completed": 5, "Correct configuration": 5 }},
    "hints": ["Hint 1"]
}}"#,
        id = objective.id,
        title = objective.title,
    )
}

/// Quiz prompt. Without an objective the quiz covers the whole domain.
pub fn quiz_prompt(
    domain: Domain,
    objective: Option<&LearningObjective>,
    question_count: u32,
) -> String {
    let (objective_line, objective_id) = match objective {
        Some(o) => (format!("{} {}", o.id, o.title), o.id),
        None => ("General Domain Knowledge".to_string(), "OBJECTIVE_ID"),
    };

    format!(
        r#"Generate a {question_count}-question quiz for:
- Domain: {domain}
- Objective: {objective_line}

Include a varied mix of:
- Single Choice / Multi-select
- Matching (Pair terms to definitions)
- Dropdown (Complete the sentence)
- Scenario / PBL (Problem Based Learning): Real-world troubleshooting or architecture scenarios.

For Multi-select the answer is a list in the order the options appear. For Matching the answer maps each term to one of the options.

Output strictly valid JSON with the following structure (snake_case keys):
{{
    "domain": "{domain}",
    "objective_id": "{objective_id}",
    "questions": [
        {{
            "type": "Matching",
            "prompt": "Match the term to its definition.",
            "options": ["Definition 1", "Definition 2"],
            "answer": {{ "Term 1": "Definition 2", "Term 2": "Definition 1" }},
            "rationale": "Explanation...",
            "difficulty": "Intermediate",
            "tags": ["PBL"]
        }}
    ]
}}
"difficulty" must be one of Beginner, Intermediate, or Advanced."#
    )
}

pub fn assignment_prompt(domain: Domain, role: &str) -> String {
    format!(
        r#"Create a realistic business/IT scenario assignment for a {role} related to:
- Domain: {domain}

Output strictly valid JSON with the following structure (snake_case keys):
{{
    "title": "Assignment Title",
    "domain": "{domain}",
    "scenario": "Scenario description...",
    "task": "Task description...",
    "deliverables": ["Deliverable 1", "Deliverable 2"],
    "submission_requirements": "Format and length requirements...",
    "rubric": {{ "Criteria 1": 10, "Criteria 2": 10 }},
    "self_check": ["Did you include X?", "Did you consider Y?"]
}}"#
    )
}

pub fn submission_feedback_prompt(submission: &str, rubric: Option<&str>) -> String {
    let rubric = rubric
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_RUBRIC);
    format!("Submission: {submission}\n\nRubric Context: {rubric}")
}
