use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::app::analysis::{AnalysisError, JobRequest, ResumeRequest};
use crate::input::{SelectedFile, validate_job_input, validate_resume_input};
use crate::llm::{JobAnalysis, ResumeAnalysis};

/// Shown for every extraction or model failure; the concrete kind only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while analyzing. Please try again.";

const SPINNER_FRAMES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeTab {
    #[default]
    AtsScore,
    Improvements,
    Suggestions,
}

impl ResumeTab {
    pub const ALL: [ResumeTab; 3] = [
        ResumeTab::AtsScore,
        ResumeTab::Improvements,
        ResumeTab::Suggestions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeTab::AtsScore => "atsScore",
            ResumeTab::Improvements => "improvements",
            ResumeTab::Suggestions => "suggestions",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResumeTab::AtsScore => "ATS Score",
            ResumeTab::Improvements => "Improvements",
            ResumeTab::Suggestions => "Suggestions",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobTab {
    #[default]
    SkillsRequired,
    Resources,
    CareerGrowth,
}

impl JobTab {
    pub const ALL: [JobTab; 3] = [JobTab::SkillsRequired, JobTab::Resources, JobTab::CareerGrowth];

    pub fn as_str(self) -> &'static str {
        match self {
            JobTab::SkillsRequired => "skills_required",
            JobTab::Resources => "resources",
            JobTab::CareerGrowth => "careerGrowth",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            JobTab::SkillsRequired => "Skills Required",
            JobTab::Resources => "Resources",
            JobTab::CareerGrowth => "Career Growth",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Resume(ResumeTab),
    Job(JobTab),
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Resume(t) => t.as_str(),
            Tab::Job(t) => t.as_str(),
        }
    }
}

/// Current screen. Results screens carry their active tab, so a tab from
/// the wrong tab set cannot be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    ResumeInput,
    JobInput,
    ResumeResults(ResumeTab),
    JobResults(JobTab),
}

impl Screen {
    pub fn resume_results() -> Self {
        Screen::ResumeResults(ResumeTab::default())
    }

    pub fn job_results() -> Self {
        Screen::JobResults(JobTab::default())
    }

    pub fn active_tab(self) -> Option<Tab> {
        match self {
            Screen::ResumeResults(t) => Some(Tab::Resume(t)),
            Screen::JobResults(t) => Some(Tab::Job(t)),
            _ => None,
        }
    }

    /// Where "back" leads from here.
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Home => None,
            Screen::ResumeInput | Screen::JobInput => Some(Screen::Home),
            Screen::ResumeResults(_) => Some(Screen::ResumeInput),
            Screen::JobResults(_) => Some(Screen::JobInput),
        }
    }

    pub fn is_results(self) -> bool {
        self.active_tab().is_some()
    }

    pub fn is_form(self) -> bool {
        matches!(self, Screen::ResumeInput | Screen::JobInput)
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::ResumeInput => "resume_input",
            Screen::JobInput => "job_input",
            Screen::ResumeResults(_) => "resume_results",
            Screen::JobResults(_) => "job_results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeOption {
    #[default]
    Resume,
    Job,
}

impl HomeOption {
    pub fn target(self) -> Screen {
        match self {
            HomeOption::Resume => Screen::ResumeInput,
            HomeOption::Job => Screen::JobInput,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeField {
    #[default]
    FilePath,
    JobRole,
    Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobField {
    #[default]
    JobRole,
    Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeForm {
    pub file_path: String,
    pub job_role: String,
    pub feedback: String,
    pub focus: ResumeField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub job_role: String,
    pub skills: String,
    pub focus: JobField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Resume,
    Job,
}

/// A file lookup in flight. Completions carrying any other id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Inspection {
    id: u64,
    submit: bool,
}

/// The whole application state. Fields are only changed through the
/// transition methods below.
#[derive(Debug, Default)]
pub struct AppState {
    screen: Screen,
    validation_message: Option<String>,
    pending: Option<Flow>,
    resume_analysis: Option<ResumeAnalysis>,
    job_analysis: Option<JobAnalysis>,
    selected_file: Option<SelectedFile>,
    inspection: Option<Inspection>,
    inspection_seq: u64,

    resume_form: ResumeForm,
    job_form: JobForm,
    home_cursor: HomeOption,
    scroll: u16,

    spinner_frame: usize,
    loading_since: Option<DateTime<Utc>>,
    last_completed: Option<DateTime<Utc>>,
    show_about: bool,
    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Reads ---

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.screen.active_tab()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_flow(&self) -> Option<Flow> {
        self.pending
    }

    pub fn resume_analysis(&self) -> Option<&ResumeAnalysis> {
        self.resume_analysis.as_ref()
    }

    pub fn job_analysis(&self) -> Option<&JobAnalysis> {
        self.job_analysis.as_ref()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn resume_form(&self) -> &ResumeForm {
        &self.resume_form
    }

    pub fn job_form(&self) -> &JobForm {
        &self.job_form
    }

    pub fn home_cursor(&self) -> HomeOption {
        self.home_cursor
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn loading_since(&self) -> Option<&DateTime<Utc>> {
        self.loading_since.as_ref()
    }

    pub fn last_completed(&self) -> Option<&DateTime<Utc>> {
        self.last_completed.as_ref()
    }

    pub fn show_about(&self) -> bool {
        self.show_about
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_inspecting(&self) -> bool {
        self.inspection.is_some()
    }

    /// A typed path on the resume form that has not been inspected yet.
    pub fn uninspected_file_path(&self) -> Option<PathBuf> {
        let path = self.resume_form.file_path.trim();
        if self.screen != Screen::ResumeInput || path.is_empty() || self.selected_file.is_some() {
            return None;
        }
        Some(PathBuf::from(path))
    }

    // --- Navigation ---

    pub fn navigate(&mut self, screen: Screen) {
        debug!(from = self.screen.name(), to = screen.name(), "Navigate");
        self.screen = screen;
        self.validation_message = None;
        self.scroll = 0;
        self.show_about = false;
        self.inspection = None;

        if matches!(screen, Screen::Home | Screen::JobInput) {
            self.selected_file = None;
            self.resume_form.file_path.clear();
        }
    }

    /// Ignored when `tab` does not belong to the current screen.
    pub fn set_active_tab(&mut self, tab: Tab) -> bool {
        let next = match (self.screen, tab) {
            (Screen::ResumeResults(_), Tab::Resume(t)) => Screen::ResumeResults(t),
            (Screen::JobResults(_), Tab::Job(t)) => Screen::JobResults(t),
            _ => {
                debug!(screen = self.screen.name(), tab = tab.as_str(), "Tab not valid here");
                return false;
            }
        };
        self.screen = next;
        self.scroll = 0;
        true
    }

    pub fn next_tab(&mut self) {
        self.shift_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.shift_tab(2);
    }

    fn shift_tab(&mut self, by: usize) {
        let tab = match self.screen {
            Screen::ResumeResults(t) => Tab::Resume(ResumeTab::ALL[(t.index() + by) % 3]),
            Screen::JobResults(t) => Tab::Job(JobTab::ALL[(t.index() + by) % 3]),
            _ => return,
        };
        self.set_active_tab(tab);
    }

    pub fn select_tab_index(&mut self, index: usize) {
        let tab = match self.screen {
            Screen::ResumeResults(_) => ResumeTab::ALL.get(index).map(|t| Tab::Resume(*t)),
            Screen::JobResults(_) => JobTab::ALL.get(index).map(|t| Tab::Job(*t)),
            _ => None,
        };
        if let Some(tab) = tab {
            self.set_active_tab(tab);
        }
    }

    // --- Analysis flows ---

    pub fn begin_resume_analysis(&mut self, job_role: &str, feedback: &str) -> Option<ResumeRequest> {
        if let Some(flow) = self.pending {
            warn!(?flow, "Analysis already in flight");
            return None;
        }

        if let Err(e) = validate_resume_input(self.selected_file.as_ref(), job_role) {
            debug!(error = ?e, "Resume input rejected");
            self.validation_message = Some(e.to_string());
            return None;
        }
        let file = self.selected_file.clone()?;

        self.start_loading(Flow::Resume);
        self.navigate(Screen::resume_results());

        Some(ResumeRequest {
            file,
            job_role: job_role.trim().to_string(),
            feedback: feedback.trim().to_string(),
        })
    }

    pub fn begin_job_analysis(&mut self, job_role: &str, skills: &str) -> Option<JobRequest> {
        if let Some(flow) = self.pending {
            warn!(?flow, "Analysis already in flight");
            return None;
        }

        if let Err(e) = validate_job_input(job_role, skills) {
            debug!(error = ?e, "Job input rejected");
            self.validation_message = Some(e.to_string());
            return None;
        }

        self.start_loading(Flow::Job);
        self.navigate(Screen::job_results());

        Some(JobRequest {
            job_role: job_role.trim().to_string(),
            skills: skills.trim().to_string(),
        })
    }

    /// Submits the resume form as currently typed.
    pub fn submit_resume_form(&mut self) -> Option<ResumeRequest> {
        let ResumeForm {
            job_role, feedback, ..
        } = self.resume_form.clone();
        self.begin_resume_analysis(&job_role, &feedback)
    }

    pub fn submit_job_form(&mut self) -> Option<JobRequest> {
        let JobForm {
            job_role, skills, ..
        } = self.job_form.clone();
        self.begin_job_analysis(&job_role, &skills)
    }

    pub fn finish_resume_analysis(&mut self, result: Result<ResumeAnalysis, AnalysisError>) {
        if self.pending != Some(Flow::Resume) {
            warn!("Dropping resume analysis result with no resume flow in flight");
            return;
        }
        self.stop_loading();

        match result {
            Ok(analysis) => {
                debug!(
                    improvements = analysis.resume_improvements.len(),
                    suggestions = analysis.suggestions.len(),
                    "Resume analysis stored"
                );
                self.resume_analysis = Some(analysis);
                self.last_completed = Some(Utc::now());
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Resume analysis failed");
                self.navigate(Screen::ResumeInput);
                self.validation_message = Some(GENERIC_FAILURE_MESSAGE.to_string());
            }
        }
    }

    pub fn finish_job_analysis(&mut self, result: Result<JobAnalysis, AnalysisError>) {
        if self.pending != Some(Flow::Job) {
            warn!("Dropping job analysis result with no job flow in flight");
            return;
        }
        self.stop_loading();

        match result {
            Ok(analysis) => {
                debug!(resources = analysis.resources.len(), "Job analysis stored");
                self.job_analysis = Some(analysis);
                self.last_completed = Some(Utc::now());
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Job analysis failed");
                self.navigate(Screen::JobInput);
                self.validation_message = Some(GENERIC_FAILURE_MESSAGE.to_string());
            }
        }
    }

    fn start_loading(&mut self, flow: Flow) {
        self.pending = Some(flow);
        self.loading_since = Some(Utc::now());
        self.spinner_frame = 0;
    }

    fn stop_loading(&mut self) {
        self.pending = None;
        self.loading_since = None;
    }

    // --- File chooser ---

    /// Starts a lookup of the typed path, superseding any lookup in flight.
    /// `submit` re-runs the form submission once the file checks out.
    pub fn begin_inspection(&mut self, submit: bool) -> Option<(u64, PathBuf)> {
        let path = self.resume_form.file_path.trim();
        if self.screen != Screen::ResumeInput || path.is_empty() {
            return None;
        }
        let path = PathBuf::from(path);

        self.inspection_seq += 1;
        let id = self.inspection_seq;
        self.inspection = Some(Inspection { id, submit });
        debug!(id, path = %path.display(), submit, "Inspecting file");
        Some((id, path))
    }

    /// Claims the result of lookup `id`. `None` when the lookup was
    /// superseded, the path edited or the screen left since it started;
    /// otherwise whether the form should be submitted.
    pub fn finish_inspection(&mut self, id: u64) -> Option<bool> {
        match self.inspection.take() {
            Some(pending) if pending.id == id => Some(pending.submit),
            other => {
                debug!(id, current = ?other.map(|p| p.id), "Dropping stale file inspection");
                self.inspection = other;
                None
            }
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        if self.screen != Screen::ResumeInput {
            debug!(name = %file.name, "Ignoring file selected off the resume screen");
            return;
        }
        self.resume_form.file_path = file.path.display().to_string();
        self.selected_file = Some(file);
    }

    pub fn reject_file(&mut self, message: String) {
        if self.screen != Screen::ResumeInput {
            return;
        }
        self.selected_file = None;
        self.validation_message = Some(message);
    }

    // --- Form editing ---

    pub fn focus_next_field(&mut self) {
        match self.screen {
            Screen::ResumeInput => {
                self.resume_form.focus = match self.resume_form.focus {
                    ResumeField::FilePath => ResumeField::JobRole,
                    ResumeField::JobRole => ResumeField::Feedback,
                    ResumeField::Feedback => ResumeField::FilePath,
                }
            }
            Screen::JobInput => {
                self.job_form.focus = match self.job_form.focus {
                    JobField::JobRole => JobField::Skills,
                    JobField::Skills => JobField::JobRole,
                }
            }
            _ => {}
        }
    }

    pub fn focus_prev_field(&mut self) {
        match self.screen {
            Screen::ResumeInput => {
                self.resume_form.focus = match self.resume_form.focus {
                    ResumeField::FilePath => ResumeField::Feedback,
                    ResumeField::JobRole => ResumeField::FilePath,
                    ResumeField::Feedback => ResumeField::JobRole,
                }
            }
            // Two fields: previous is next.
            Screen::JobInput => self.focus_next_field(),
            _ => {}
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.screen {
            Screen::ResumeInput => Some(match self.resume_form.focus {
                ResumeField::FilePath => {
                    // Editing the path invalidates whatever was chosen or looked up before.
                    self.selected_file = None;
                    self.inspection = None;
                    &mut self.resume_form.file_path
                }
                ResumeField::JobRole => &mut self.resume_form.job_role,
                ResumeField::Feedback => &mut self.resume_form.feedback,
            }),
            Screen::JobInput => Some(match self.job_form.focus {
                JobField::JobRole => &mut self.job_form.job_role,
                JobField::Skills => &mut self.job_form.skills,
            }),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(buf) = self.focused_buffer() {
            buf.push(ch);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(buf) = self.focused_buffer() {
            buf.pop();
        }
    }

    // --- Home / scrolling / misc ---

    pub fn home_toggle(&mut self) {
        if self.screen == Screen::Home {
            self.home_cursor = match self.home_cursor {
                HomeOption::Resume => HomeOption::Job,
                HomeOption::Job => HomeOption::Resume,
            };
        }
    }

    pub fn scroll_down(&mut self, step: u16) {
        if self.screen.is_results() {
            self.scroll = self.scroll.saturating_add(step);
        }
    }

    pub fn scroll_up(&mut self, step: u16) {
        if self.screen.is_results() {
            self.scroll = self.scroll.saturating_sub(step);
        }
    }

    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
        }
    }

    pub fn toggle_about(&mut self) {
        self.show_about = !self.show_about;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
