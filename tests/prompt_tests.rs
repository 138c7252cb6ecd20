use careercoach::llm::SchemaDescriptor;
use careercoach::llm::prompts::{
    JOB_SYSTEM_INSTRUCTION, RESUME_SYSTEM_INSTRUCTION, job_bundle, job_schema, resume_bundle,
    resume_schema,
};
use serde_json::json;

#[test]
fn test_resume_query_without_feedback() {
    let bundle = resume_bundle("Jane Doe\nRust, Go", "Backend Developer", "");
    assert!(bundle.user_query.contains("Backend Developer"));
    assert!(bundle.user_query.contains("Jane Doe\nRust, Go"));
    assert!(!bundle.user_query.contains("Optional focus"));
    assert_eq!(bundle.system_instruction, RESUME_SYSTEM_INSTRUCTION);
}

#[test]
fn test_resume_query_with_feedback() {
    let bundle = resume_bundle("text", "Backend Developer", "focus on cloud");
    assert!(
        bundle
            .user_query
            .contains("Optional focus for analysis: focus on cloud")
    );
}

#[test]
fn test_whitespace_feedback_is_omitted() {
    let bundle = resume_bundle("text", "Backend Developer", "   ");
    assert!(!bundle.user_query.contains("Optional focus"));
}

#[test]
fn test_resume_query_layout() {
    let bundle = resume_bundle("RESUME", "Backend Developer", "");
    assert_eq!(
        bundle.user_query,
        "Here is my resume:\n---\nRESUME\n---\nMy target job role is: Backend Developer\n"
    );
}

#[test]
fn test_job_query() {
    let bundle = job_bundle("Senior Data Analyst", "Python, SQL");
    assert!(
        bundle
            .user_query
            .contains("My target job role is: Senior Data Analyst")
    );
    assert!(bundle.user_query.contains("My current skills are: Python, SQL"));
    assert_eq!(bundle.system_instruction, JOB_SYSTEM_INSTRUCTION);
    assert_eq!(bundle.response_schema, job_schema());
}

#[test]
fn test_instructions_set_the_roles() {
    assert!(RESUME_SYSTEM_INSTRUCTION.contains("ATS scanning system"));
    assert!(JOB_SYSTEM_INSTRUCTION.contains("Career Coach"));
}

#[test]
fn test_resume_schema_shape() {
    let schema = resume_schema();
    assert_eq!(schema.property("atsScore.score"), Some(&SchemaDescriptor::Number));
    assert_eq!(
        schema.property("atsScore.explanation"),
        Some(&SchemaDescriptor::String)
    );
    assert_eq!(
        schema.property("resumeImprovements"),
        Some(&SchemaDescriptor::array_of(SchemaDescriptor::String))
    );
    assert_eq!(
        schema.property("suggestions"),
        Some(&SchemaDescriptor::array_of(SchemaDescriptor::String))
    );
    assert!(schema.property("atsScore.missing").is_none());
}

#[test]
fn test_job_schema_serializes_to_endpoint_format() {
    let value = serde_json::to_value(job_schema()).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "OBJECT",
            "properties": {
                "skillsRequired": { "type": "STRING" },
                "resources": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "description": { "type": "STRING" }
                        }
                    }
                },
                "careerGrowth": { "type": "STRING" }
            }
        })
    );
}

#[test]
fn test_resume_schema_serializes_numbers() {
    let value = serde_json::to_value(resume_schema()).unwrap();
    assert_eq!(
        value["properties"]["atsScore"]["properties"]["score"],
        json!({ "type": "NUMBER" })
    );
}
