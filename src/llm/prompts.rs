use super::schema::SchemaDescriptor;

/// Everything the model needs for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptBundle {
    pub system_instruction: String,
    pub user_query: String,
    pub response_schema: SchemaDescriptor,
}

pub const RESUME_SYSTEM_INSTRUCTION: &str = r#"Act as an ATS scanning system + career advisor for Indian students applying to tech jobs in 2025. Analyze the resume text and job role given by the user and give clear, structured feedback. Keep your feedback realistic and honest, but not discouraging. Use the following structure:

1. **ATS Score (out of 10)**
    - Give a realistic ATS score based on formatting, keywords, clarity, and relevance to target job.
    - 6/10 or lower → explain why clearly.

2. **Resume Improvements**
    - List 5–8 specific improvement points, not generic tips.
    - Focus on action verbs, measurable outcomes, skill priority order, formatting, and section structure.
    - Mention what should be removed or rewritten.

3. **Career Roadmap & Next Steps**
    - **In the response list for this section, first list all critical missing technical skills or projects** based on the target role and current market in India (2025).
    - Then, recommend 2–3 projects to build next (based on their desired role).
    - Mention 2–3 relevant certification or course names.
    - Suggest platforms for DSA/CP if needed (e.g., LeetCode, GFG, HackerRank).

❗Keep the response clear and broken down — no long paragraphs.
❗Avoid generic sentences like “work on communication skills” unless truly necessary.
❗All examples and suggestions should match India’s 2025 job market"#;

pub const JOB_SYSTEM_INSTRUCTION: &str = r#"You are an expert AI Career Coach focused on the Indian job market in 2025. A user provides a target job role and their current skills. Your response must be highly realistic and detailed, structured as three main sections. The content for 'skillsRequired' and 'careerGrowth' MUST be a single, richly formatted Markdown string containing paragraphs, bullet points, and headings (e.g., using ###) to establish a clear reading hierarchy.

1. **skillsRequired**: Generate a single Markdown block explaining the absolutely ESSENTIAL skills for the role in the 2025 landscape. Include paragraphs on *why* these skills are critical, and a hierarchical list of core competencies. Emphasize **future-proofing** and **AI/Automation resilience**.

2. **resources**: List specific, relevant learning resources (courses, books, tools) with a title and description for gaining the missing skills. Ensure these are high-quality, real-world relevant resources.

3. **careerGrowth**: Generate a 1-year realistic career roadmap for students entering the tech field. Break the year into 3–4 phases (e.g., Month 1–3: Foundation, Month 4–6: Application, etc.) and outline logical skill progression, role transitions (e.g., Learner ➝ Intern), and salary expectations in relative terms (Low, Medium, High). Use short paragraphs and a clear, student-focused structure.

Your entire response MUST strictly follow the JSON schema provided."#;

pub fn resume_bundle(resume_text: &str, job_role: &str, feedback: &str) -> PromptBundle {
    let mut user_query = format!(
        "Here is my resume:\n---\n{}\n---\nMy target job role is: {}\n",
        resume_text.trim(),
        job_role.trim()
    );

    let feedback = feedback.trim();
    if !feedback.is_empty() {
        user_query.push_str(&format!("Optional focus for analysis: {}\n", feedback));
    }

    PromptBundle {
        system_instruction: RESUME_SYSTEM_INSTRUCTION.to_string(),
        user_query,
        response_schema: resume_schema(),
    }
}

pub fn job_bundle(job_role: &str, skills: &str) -> PromptBundle {
    let user_query = format!(
        "My target job role is: {}\nMy current skills are: {}\n",
        job_role.trim(),
        skills.trim()
    );

    PromptBundle {
        system_instruction: JOB_SYSTEM_INSTRUCTION.to_string(),
        user_query,
        response_schema: job_schema(),
    }
}

pub fn resume_schema() -> SchemaDescriptor {
    SchemaDescriptor::object([
        (
            "atsScore",
            SchemaDescriptor::object([
                ("score", SchemaDescriptor::Number),
                ("explanation", SchemaDescriptor::String),
            ]),
        ),
        (
            "resumeImprovements",
            SchemaDescriptor::array_of(SchemaDescriptor::String),
        ),
        (
            "suggestions",
            SchemaDescriptor::array_of(SchemaDescriptor::String),
        ),
    ])
}

pub fn job_schema() -> SchemaDescriptor {
    SchemaDescriptor::object([
        // Markdown
        ("skillsRequired", SchemaDescriptor::String),
        (
            "resources",
            SchemaDescriptor::array_of(SchemaDescriptor::object([
                ("title", SchemaDescriptor::String),
                ("description", SchemaDescriptor::String),
            ])),
        ),
        // Markdown
        ("careerGrowth", SchemaDescriptor::String),
    ])
}
