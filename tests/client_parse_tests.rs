use careercoach::llm::{ModelError, ResumeAnalysis, extract_payload};
use serde_json::{Value, json};

fn envelope(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[test]
fn test_valid_payload_is_returned_unchanged() {
    let text = r#"{"atsScore":{"score":8,"explanation":"Good"},"resumeImprovements":["Add metrics"],"suggestions":[]}"#;
    let payload = extract_payload(&envelope(text)).unwrap();
    assert_eq!(
        payload,
        json!({
            "atsScore": { "score": 8, "explanation": "Good" },
            "resumeImprovements": ["Add metrics"],
            "suggestions": []
        })
    );

    let analysis: ResumeAnalysis = serde_json::from_value(payload).unwrap();
    assert_eq!(analysis.ats_score.as_ref().unwrap().score, 8.0);
    assert_eq!(analysis.resume_improvements, vec!["Add metrics"]);
    assert!(analysis.suggestions.is_empty());
}

#[test]
fn test_unparsable_text_is_malformed() {
    let err = extract_payload(&envelope("not json {")).unwrap_err();
    assert!(matches!(err, ModelError::MalformedPayload(_)));
}

#[test]
fn test_missing_text_is_invalid_structure() {
    let env = json!({ "candidates": [ { "content": { "parts": [] } } ] });
    let err = extract_payload(&env).unwrap_err();
    assert!(matches!(err, ModelError::InvalidResponseStructure(_)));
}

#[test]
fn test_missing_candidates_is_invalid_structure() {
    let err = extract_payload(&json!({ "error": "Invalid API response" })).unwrap_err();
    assert!(matches!(err, ModelError::InvalidResponseStructure(_)));
}

#[test]
fn test_empty_text_is_invalid_structure() {
    let err = extract_payload(&envelope("")).unwrap_err();
    assert!(matches!(err, ModelError::InvalidResponseStructure(_)));
}

#[test]
fn test_non_string_text_is_invalid_structure() {
    let env = json!({ "candidates": [ { "content": { "parts": [ { "text": 42 } ] } } ] });
    let err = extract_payload(&env).unwrap_err();
    assert!(matches!(err, ModelError::InvalidResponseStructure(_)));
}

#[test]
fn test_payload_ignoring_schema_still_parses() {
    // The client does not check the schema; only JSON validity.
    let payload = extract_payload(&envelope(r#"{"unexpected": true}"#)).unwrap();
    assert_eq!(payload, json!({ "unexpected": true }));

    let analysis: ResumeAnalysis = serde_json::from_value(payload).unwrap();
    assert!(analysis.ats_score.is_none());
    assert!(analysis.resume_improvements.is_empty());
}

#[test]
fn test_error_kinds() {
    assert_eq!(ModelError::Network("x".into()).kind(), "network");
    assert_eq!(
        ModelError::InvalidResponseStructure("x".into()).kind(),
        "invalid_response_structure"
    );
    assert_eq!(
        ModelError::MalformedPayload("x".into()).kind(),
        "malformed_payload"
    );
}
