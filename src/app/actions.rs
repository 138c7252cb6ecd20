use std::path::PathBuf;

use crate::app::analysis::{AnalysisError, JobRequest, ResumeRequest};
use crate::app::state::Screen;
use crate::input::SelectedFile;
use crate::llm::{JobAnalysis, ResumeAnalysis};

#[derive(Debug)]
pub enum Action {
    Navigate(Screen),
    Back,
    HomeToggle,
    HomeSelect,
    NextTab,
    PrevTab,
    SelectTabIndex(usize),
    ScrollUp(u16),
    ScrollDown(u16),
    NextField,
    PrevField,
    Input(char),
    Backspace,
    ChooseFile,
    Submit,
    FileSelected { id: u64, file: SelectedFile },
    FileRejected { id: u64, message: String },
    ResumeAnalysisFinished(Result<ResumeAnalysis, AnalysisError>),
    JobAnalysisFinished(Result<JobAnalysis, AnalysisError>),
    ToggleAbout,
    Quit,
    Tick,
}

#[derive(Debug, PartialEq)]
pub enum SideEffect {
    /// Stat a typed path; `id` ties the result back to the lookup that asked for it.
    InspectFile { id: u64, path: PathBuf },
    AnalyzeResume(ResumeRequest),
    AnalyzeJob(JobRequest),
}
