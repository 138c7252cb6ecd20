pub mod file;
pub mod validate;

pub use file::SelectedFile;
pub use validate::{JobInputError, ResumeInputError, is_input_relevant, validate_job_input, validate_resume_input};
