use careercoach::input::validate::MAX_FILE_SIZE;
use careercoach::input::{
    JobInputError, ResumeInputError, SelectedFile, is_input_relevant, validate_job_input,
    validate_resume_input,
};

fn pdf(size: u64) -> SelectedFile {
    SelectedFile::new("/tmp/resume.pdf", size)
}

// --- Relevance heuristic ---

#[test]
fn test_short_input_is_irrelevant() {
    assert!(!is_input_relevant(""));
    assert!(!is_input_relevant("Dev"));
    assert!(!is_input_relevant("abcd"));
    assert!(!is_input_relevant("   abcd   "));
}

#[test]
fn test_five_letters_is_relevant() {
    assert!(is_input_relevant("abcde"));
}

#[test]
fn test_digits_only_is_irrelevant() {
    assert!(!is_input_relevant("12345678"));
}

#[test]
fn test_job_title_is_relevant() {
    assert!(is_input_relevant("Software Engineer"));
    assert!(is_input_relevant("  Senior Data Analyst  "));
}

#[test]
fn test_symbol_heavy_input_is_irrelevant() {
    assert!(!is_input_relevant("a1!@#$%^"));
}

#[test]
fn test_exactly_half_letters_is_relevant() {
    // 3 letters + 3 digits
    assert!(is_input_relevant("abc123"));
    // 2 letters + 3 digits
    assert!(!is_input_relevant("ab123"));
}

#[test]
fn test_inner_spaces_count_as_letters() {
    assert!(is_input_relevant("C++ Dev Role"));
}

// --- Resume input ---

#[test]
fn test_resume_missing_both() {
    assert_eq!(
        validate_resume_input(None, ""),
        Err(ResumeInputError::MissingFileAndRole)
    );
    assert_eq!(
        validate_resume_input(None, "   "),
        Err(ResumeInputError::MissingFileAndRole)
    );
}

#[test]
fn test_resume_missing_file_only() {
    assert_eq!(
        validate_resume_input(None, "Backend Developer"),
        Err(ResumeInputError::MissingFile)
    );
}

#[test]
fn test_resume_type_checked_before_size() {
    let file = SelectedFile::new("/tmp/resume.docx", MAX_FILE_SIZE * 2);
    assert_eq!(
        validate_resume_input(Some(&file), "Backend Developer"),
        Err(ResumeInputError::NotPdf)
    );
}

#[test]
fn test_resume_file_too_large() {
    let file = pdf(MAX_FILE_SIZE + 1);
    assert_eq!(
        validate_resume_input(Some(&file), "Backend Developer"),
        Err(ResumeInputError::FileTooLarge)
    );
}

#[test]
fn test_resume_file_at_limit_is_accepted() {
    let file = pdf(MAX_FILE_SIZE);
    assert_eq!(validate_resume_input(Some(&file), "Backend Developer"), Ok(()));
}

#[test]
fn test_resume_file_checks_precede_role_checks() {
    let file = pdf(MAX_FILE_SIZE + 1);
    assert_eq!(
        validate_resume_input(Some(&file), ""),
        Err(ResumeInputError::FileTooLarge)
    );
}

#[test]
fn test_resume_missing_role() {
    let file = pdf(1024);
    assert_eq!(
        validate_resume_input(Some(&file), "  "),
        Err(ResumeInputError::MissingRole)
    );
}

#[test]
fn test_resume_irrelevant_role() {
    let file = pdf(1024);
    assert_eq!(
        validate_resume_input(Some(&file), "12345678"),
        Err(ResumeInputError::IrrelevantRole)
    );
}

#[test]
fn test_resume_valid() {
    let file = pdf(200 * 1024);
    assert!(validate_resume_input(Some(&file), "Software Engineer Intern").is_ok());
}

#[test]
fn test_resume_messages_are_distinct() {
    let both = ResumeInputError::MissingFileAndRole.to_string();
    let file = ResumeInputError::MissingFile.to_string();
    let role = ResumeInputError::MissingRole.to_string();
    assert!(both.contains("Resume PDF") && both.contains("Job Role"));
    assert_ne!(both, file);
    assert_ne!(both, role);
}

#[test]
fn test_uppercase_pdf_extension() {
    let file = SelectedFile::new("/tmp/RESUME.PDF", 10);
    assert_eq!(file.mime_type, "application/pdf");
    assert!(validate_resume_input(Some(&file), "Software Engineer").is_ok());
}

// --- Job input ---

#[test]
fn test_job_missing_both() {
    assert_eq!(
        validate_job_input("", " "),
        Err(JobInputError::MissingRoleAndSkills)
    );
}

#[test]
fn test_job_missing_role() {
    assert_eq!(
        validate_job_input("", "Python, SQL"),
        Err(JobInputError::MissingRole)
    );
}

#[test]
fn test_job_irrelevant_role_checked_before_skills() {
    assert_eq!(
        validate_job_input("1234", ""),
        Err(JobInputError::IrrelevantRole)
    );
}

#[test]
fn test_job_missing_skills() {
    assert_eq!(
        validate_job_input("Senior Data Analyst", ""),
        Err(JobInputError::MissingSkills)
    );
}

#[test]
fn test_job_valid() {
    assert_eq!(validate_job_input("Senior Data Analyst", "Python, SQL"), Ok(()));
}
