use thiserror::Error;

use super::file::SelectedFile;

pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

const MIN_RELEVANT_LEN: usize = 5;
const MIN_LETTER_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeInputError {
    #[error("Please choose your Resume PDF and enter your target Job Role to continue.")]
    MissingFileAndRole,
    #[error("Please choose your Resume PDF. It is required for the analysis.")]
    MissingFile,
    #[error("Invalid file type. Please upload a .pdf file.")]
    NotPdf,
    #[error("File is too large. Maximum size is 5MB.")]
    FileTooLarge,
    #[error("Please enter your target Job Role. This guides the analysis.")]
    MissingRole,
    #[error(
        "The job role entered seems irrelevant or too vague. Please enter a proper job title (e.g., \"Software Engineer Intern\")."
    )]
    IrrelevantRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobInputError {
    #[error(
        "Please enter a target Job Role and your Current Skills to get a career path analysis."
    )]
    MissingRoleAndSkills,
    #[error("Please enter your target Job Role. This is required for the analysis.")]
    MissingRole,
    #[error(
        "The job role entered seems irrelevant or too vague. Please enter a proper job title (e.g., \"Senior Data Analyst\")."
    )]
    IrrelevantRole,
    #[error("Please enter your Current Skills. This is required for gap analysis.")]
    MissingSkills,
}

/// Cheap gibberish filter for free-text job roles: at least five characters
/// after trimming, and at least half of them ASCII letters or whitespace.
pub fn is_input_relevant(input: &str) -> bool {
    let trimmed = input.trim();
    let total = trimmed.chars().count();
    if total < MIN_RELEVANT_LEN {
        return false;
    }

    let letters_or_space = trimmed
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .count();

    letters_or_space as f64 / total as f64 >= MIN_LETTER_RATIO
}

/// Checks run in a fixed order; only the first failure is reported.
pub fn validate_resume_input(
    file: Option<&SelectedFile>,
    job_role: &str,
) -> Result<(), ResumeInputError> {
    let job_role = job_role.trim();

    let Some(file) = file else {
        return Err(if job_role.is_empty() {
            ResumeInputError::MissingFileAndRole
        } else {
            ResumeInputError::MissingFile
        });
    };

    if !file.is_pdf() {
        return Err(ResumeInputError::NotPdf);
    }
    if file.size > MAX_FILE_SIZE {
        return Err(ResumeInputError::FileTooLarge);
    }
    if job_role.is_empty() {
        return Err(ResumeInputError::MissingRole);
    }
    if !is_input_relevant(job_role) {
        return Err(ResumeInputError::IrrelevantRole);
    }
    Ok(())
}

pub fn validate_job_input(job_role: &str, skills: &str) -> Result<(), JobInputError> {
    let job_role = job_role.trim();
    let skills = skills.trim();

    match (job_role.is_empty(), skills.is_empty()) {
        (true, true) => Err(JobInputError::MissingRoleAndSkills),
        (true, false) => Err(JobInputError::MissingRole),
        _ if !is_input_relevant(job_role) => Err(JobInputError::IrrelevantRole),
        (false, true) => Err(JobInputError::MissingSkills),
        (false, false) => Ok(()),
    }
}
