use careercoach::app::analysis::AnalysisError;
use careercoach::app::state::{AppState, JobTab, ResumeTab, Screen, Tab};
use careercoach::app::view::{ResultsBody, render, results_body, tab_strip};
use careercoach::input::SelectedFile;
use careercoach::llm::{AtsScore, JobAnalysis, ModelError, Resource, ResumeAnalysis};
use ratatui::{Terminal, backend::TestBackend};

fn job_analysis() -> JobAnalysis {
    JobAnalysis {
        skills_required: "## Core Skills\n* **SQL** joins".into(),
        resources: vec![Resource {
            title: "Mode SQL Tutorial".into(),
            description: "Free and hands-on".into(),
        }],
        career_growth: "Month 1-3: Foundation".into(),
    }
}

fn job_state_with_result() -> AppState {
    let mut state = AppState::new();
    state.navigate(Screen::JobInput);
    state.begin_job_analysis("Senior Data Analyst", "Python, SQL");
    state.finish_job_analysis(Ok(job_analysis()));
    state
}

fn draw(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| render(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// --- results_body ---

#[test]
fn test_no_body_off_results() {
    let mut state = AppState::new();
    assert!(results_body(&state).is_none());
    state.navigate(Screen::JobInput);
    assert!(results_body(&state).is_none());
}

#[test]
fn test_loading_body_while_in_flight() {
    let mut state = AppState::new();
    state.navigate(Screen::JobInput);
    state.begin_job_analysis("Senior Data Analyst", "Python, SQL");
    assert_eq!(results_body(&state), Some(ResultsBody::Loading));
}

#[test]
fn test_waiting_body_without_result() {
    let mut state = AppState::new();
    state.navigate(Screen::resume_results());
    assert_eq!(results_body(&state), Some(ResultsBody::Waiting));
}

#[test]
fn test_job_body_follows_active_tab() {
    let mut state = job_state_with_result();
    state.set_active_tab(Tab::Job(JobTab::CareerGrowth));
    assert_eq!(
        results_body(&state),
        Some(ResultsBody::Job(&job_analysis(), JobTab::CareerGrowth))
    );
}

#[test]
fn test_failure_leaves_results_screen() {
    let mut state = AppState::new();
    state.navigate(Screen::JobInput);
    state.begin_job_analysis("Senior Data Analyst", "Python, SQL");
    state.finish_job_analysis(Err(AnalysisError::Model(ModelError::Network(
        "timeout".into(),
    ))));
    assert!(results_body(&state).is_none());
}

// --- tab_strip ---

#[test]
fn test_tab_strip_titles_and_selection() {
    let (titles, selected) = tab_strip(Screen::ResumeResults(ResumeTab::Suggestions)).unwrap();
    assert_eq!(titles, vec!["ATS Score", "Improvements", "Suggestions"]);
    assert_eq!(selected, 2);

    let (titles, selected) = tab_strip(Screen::job_results()).unwrap();
    assert_eq!(titles, vec!["Skills Required", "Resources", "Career Growth"]);
    assert_eq!(selected, 0);

    assert!(tab_strip(Screen::Home).is_none());
}

// --- Rendering ---

#[test]
fn test_home_renders_both_options() {
    let screen = draw(&AppState::new());
    assert!(screen.contains("Resume Based"));
    assert!(screen.contains("Job Based"));
}

#[test]
fn test_job_form_renders_validation_message() {
    let mut state = AppState::new();
    state.navigate(Screen::JobInput);
    state.begin_job_analysis("", "");
    let screen = draw(&state);
    assert!(screen.contains("Please enter a target Job Role"));
}

#[test]
fn test_skills_tab_renders_markdown() {
    let state = job_state_with_result();
    let screen = draw(&state);
    assert!(screen.contains("Core Skills"));
    assert!(!screen.contains("## Core Skills"));
    assert!(screen.contains("• SQL joins"));
}

#[test]
fn test_resources_tab_renders_titles() {
    let mut state = job_state_with_result();
    state.set_active_tab(Tab::Job(JobTab::Resources));
    let screen = draw(&state);
    assert!(screen.contains("Mode SQL Tutorial"));
    assert!(screen.contains("Free and hands-on"));
}

#[test]
fn test_resume_placeholders_for_empty_fields() {
    let mut state = AppState::new();
    state.navigate(Screen::ResumeInput);
    state.select_file(SelectedFile::new("/tmp/resume.pdf", 1024));
    state.begin_resume_analysis("Software Engineer", "");
    state.finish_resume_analysis(Ok(ResumeAnalysis::default()));

    let screen = draw(&state);
    assert!(screen.contains("ATS Score data is not available."));

    state.set_active_tab(Tab::Resume(ResumeTab::Improvements));
    let screen = draw(&state);
    assert!(screen.contains("No specific items found for this category."));
}

#[test]
fn test_resume_score_renders_out_of_ten() {
    let mut state = AppState::new();
    state.navigate(Screen::ResumeInput);
    state.select_file(SelectedFile::new("/tmp/resume.pdf", 1024));
    state.begin_resume_analysis("Software Engineer", "");
    state.finish_resume_analysis(Ok(ResumeAnalysis {
        ats_score: Some(AtsScore {
            score: 8.0,
            explanation: "Strong keyword match".into(),
        }),
        ..Default::default()
    }));

    let screen = draw(&state);
    assert!(screen.contains("8/10"));
    assert!(screen.contains("Strong keyword match"));
}

#[test]
fn test_about_modal_renders() {
    let mut state = AppState::new();
    state.toggle_about();
    let screen = draw(&state);
    assert!(screen.contains("About"));
    assert!(screen.contains("Press Esc or ? to close"));
}
