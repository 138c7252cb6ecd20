use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::{AppState, JobTab, ResumeTab, Screen};
use crate::llm::{JobAnalysis, ResumeAnalysis};
use crate::ui::widgets;

/// What the content area of a results screen shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsBody<'a> {
    Loading,
    Message(&'a str),
    Waiting,
    Resume(&'a ResumeAnalysis, ResumeTab),
    Job(&'a JobAnalysis, JobTab),
}

/// `None` off the results screens. Loading wins over a message, a message
/// over a missing result.
pub fn results_body(state: &AppState) -> Option<ResultsBody<'_>> {
    let screen = state.screen();
    if !screen.is_results() {
        return None;
    }
    if state.is_loading() {
        return Some(ResultsBody::Loading);
    }
    if let Some(msg) = state.validation_message().filter(|m| !m.is_empty()) {
        return Some(ResultsBody::Message(msg));
    }

    Some(match screen {
        Screen::ResumeResults(tab) => match state.resume_analysis() {
            Some(analysis) => ResultsBody::Resume(analysis, tab),
            None => ResultsBody::Waiting,
        },
        Screen::JobResults(tab) => match state.job_analysis() {
            Some(analysis) => ResultsBody::Job(analysis, tab),
            None => ResultsBody::Waiting,
        },
        _ => return None,
    })
}

/// Tab titles and the selected index for the current screen.
pub fn tab_strip(screen: Screen) -> Option<(Vec<&'static str>, usize)> {
    match screen {
        Screen::ResumeResults(active) => Some((
            ResumeTab::ALL.iter().map(|t| t.title()).collect(),
            ResumeTab::ALL.iter().position(|t| *t == active).unwrap_or(0),
        )),
        Screen::JobResults(active) => Some((
            JobTab::ALL.iter().map(|t| t.title()).collect(),
            JobTab::ALL.iter().position(|t| *t == active).unwrap_or(0),
        )),
        _ => None,
    }
}

pub fn render(f: &mut Frame, state: &AppState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header_area = vertical[0];
    let body_area = vertical[1];
    let status_area = vertical[2];

    widgets::render_header(f, header_area, state);

    match state.screen() {
        Screen::Home => widgets::render_home(f, body_area, state),
        Screen::ResumeInput => widgets::render_resume_form(f, body_area, state),
        Screen::JobInput => widgets::render_job_form(f, body_area, state),
        Screen::ResumeResults(_) | Screen::JobResults(_) => {
            widgets::render_results(f, body_area, state)
        }
    }

    widgets::render_status_bar(f, status_area, state);

    if state.show_about() {
        widgets::render_about_modal(f, f.area());
    }
}
