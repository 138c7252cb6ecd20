use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::app::state::{AppState, HomeOption, JobField, JobTab, ResumeField, ResumeTab, Screen};
use crate::app::view::{ResultsBody, results_body, tab_strip};
use crate::llm::{AtsScore, JobAnalysis, ResumeAnalysis};
use crate::ui::{markdown, theme};
use crate::util::time::{age_label, elapsed_label};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let subtitle = match state.screen() {
        Screen::Home => "",
        Screen::ResumeInput => "Drop Your Resume",
        Screen::JobInput => "Job Based Analysis",
        Screen::ResumeResults(_) => "Resume Analysis",
        Screen::JobResults(_) => "Career Path Analysis",
    };

    let mut spans = vec![Span::styled(" AI Career Coach", theme::TITLE)];
    if !subtitle.is_empty() {
        spans.push(Span::styled(format!("  ›  {}", subtitle), theme::BODY));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::BORDER_UNFOCUSED);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_home(f: &mut Frame, area: Rect, state: &AppState) {
    let option = |label: &str, opt: HomeOption| {
        let style = if state.home_cursor() == opt {
            theme::HIGHLIGHT
        } else {
            theme::BODY
        };
        Line::from(Span::styled(format!("  {}  ", label), style))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Analyze. Adapt. Achieve.", theme::TITLE)),
        Line::from(""),
        Line::from(Span::styled(
            "Get AI feedback on your resume, or a roadmap for the role you want.",
            theme::DIM,
        )),
        Line::from(""),
        option("Resume Based", HomeOption::Resume),
        Line::from(""),
        option("Job Based", HomeOption::Job),
    ];

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn render_banner(f: &mut Frame, area: Rect, msg: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::ERROR);
    let para = Paragraph::new(Span::styled(msg.to_string(), theme::ERROR))
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(para, area);
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, placeholder: &str, focused: bool) {
    let border = if focused {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    };
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border);

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(placeholder.to_string(), theme::DIM))
    } else {
        let mut spans = vec![Span::styled(value.to_string(), theme::BOLD)];
        if focused {
            spans.push(Span::styled("▏", theme::ACCENT));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Splits a form area into an optional banner row followed by `rows`.
fn form_layout(area: Rect, has_banner: bool, rows: &[Constraint]) -> (Option<Rect>, Vec<Rect>) {
    let mut constraints = Vec::new();
    if has_banner {
        constraints.push(Constraint::Length(4));
    }
    constraints.extend_from_slice(rows);
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    if has_banner {
        (Some(chunks[0]), chunks[1..].to_vec())
    } else {
        (None, chunks.to_vec())
    }
}

pub fn render_resume_form(f: &mut Frame, area: Rect, state: &AppState) {
    let form = state.resume_form();
    let message = state.validation_message();
    let (banner, rows) = form_layout(
        area,
        message.is_some(),
        &[
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ],
    );

    if let (Some(banner), Some(msg)) = (banner, message) {
        render_banner(f, banner, msg);
    }

    render_field(
        f,
        rows[0],
        "Resume PDF",
        &form.file_path,
        "Path to your resume (PDF, max 5MB), Enter to choose",
        form.focus == ResumeField::FilePath,
    );

    let file_line = match state.selected_file() {
        Some(file) => Line::from(Span::styled(
            format!("  Selected: {} ({})", file.name, file.size_label()),
            theme::SUCCESS,
        )),
        None if state.is_inspecting() => {
            Line::from(Span::styled("  Checking file...", theme::ACCENT))
        }
        None => Line::from(Span::styled(
            "  Supported formats: PDF | Maximum size: 5MB",
            theme::DIM,
        )),
    };
    f.render_widget(Paragraph::new(file_line), rows[1]);

    render_field(
        f,
        rows[2],
        "Job Role",
        &form.job_role,
        "e.g. Software Engineer Intern",
        form.focus == ResumeField::JobRole,
    );
    render_field(
        f,
        rows[3],
        "Feedback (Optional Focus)",
        &form.feedback,
        "e.g. focus on cloud projects",
        form.focus == ResumeField::Feedback,
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Tab: next field | Enter: analyze | Esc: back to home",
            theme::DIM,
        )),
        rows[4],
    );
}

pub fn render_job_form(f: &mut Frame, area: Rect, state: &AppState) {
    let form = state.job_form();
    let message = state.validation_message();
    let (banner, rows) = form_layout(
        area,
        message.is_some(),
        &[
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ],
    );

    if let (Some(banner), Some(msg)) = (banner, message) {
        render_banner(f, banner, msg);
    }

    render_field(
        f,
        rows[0],
        "Job Role",
        &form.job_role,
        "e.g. Senior Data Analyst",
        form.focus == JobField::JobRole,
    );
    render_field(
        f,
        rows[1],
        "Current Skills",
        &form.skills,
        "e.g. Python, SQL, Excel",
        form.focus == JobField::Skills,
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Tab: next field | Enter: analyze | Esc: back to home",
            theme::DIM,
        )),
        rows[2],
    );
}

pub fn render_results(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    if let Some((titles, selected)) = tab_strip(state.screen()) {
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(theme::TAB_INACTIVE)
            .highlight_style(theme::HIGHLIGHT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::BORDER_UNFOCUSED),
            );
        f.render_widget(tabs, chunks[0]);
    }

    let lines = match results_body(state) {
        Some(body) => body_lines(&body, state.spinner_frame()),
        None => Vec::new(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll(), 0))
        .block(block);
    f.render_widget(para, chunks[1]);
}

fn body_lines(body: &ResultsBody, spinner_frame: usize) -> Vec<Line<'static>> {
    match body {
        ResultsBody::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Analyzing...", SPINNER[spinner_frame % SPINNER.len()]),
                theme::ACCENT,
            )),
        ],
        ResultsBody::Message(msg) => vec![Line::from(Span::styled(msg.to_string(), theme::ERROR))],
        ResultsBody::Waiting => vec![Line::from(Span::styled(
            "Analysis complete. Waiting for data...",
            theme::DIM,
        ))],
        ResultsBody::Resume(analysis, tab) => resume_tab_lines(analysis, *tab),
        ResultsBody::Job(analysis, tab) => job_tab_lines(analysis, *tab),
    }
}

fn score_style(score: &AtsScore) -> Style {
    if score.score >= 7.0 {
        theme::SCORE_HIGH
    } else if score.score >= 4.0 {
        theme::SCORE_MID
    } else {
        theme::SCORE_LOW
    }
}

fn string_list(items: &[String]) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![Line::from(Span::styled(
            "No specific items found for this category.",
            theme::DIM,
        ))];
    }
    items
        .iter()
        .map(|item| {
            let mut spans = vec![Span::styled("  • ", theme::BULLET)];
            for inline in markdown::parse_inline(item) {
                spans.push(match inline {
                    markdown::Inline::Text(t) => Span::styled(t, theme::BODY),
                    markdown::Inline::Bold(t) => Span::styled(t, theme::BOLD),
                });
            }
            Line::from(spans)
        })
        .collect()
}

fn resume_tab_lines(analysis: &ResumeAnalysis, tab: ResumeTab) -> Vec<Line<'static>> {
    match tab {
        ResumeTab::AtsScore => match &analysis.ats_score {
            Some(score) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(score.score_label(), score_style(score)),
                    Span::styled("/10", theme::DIM),
                ])
                .alignment(Alignment::Center),
                Line::from(""),
                Line::from(Span::styled(score.explanation.clone(), theme::BODY)),
            ],
            None => vec![Line::from(Span::styled(
                "ATS Score data is not available.",
                theme::DIM,
            ))],
        },
        ResumeTab::Improvements => string_list(&analysis.resume_improvements),
        ResumeTab::Suggestions => string_list(&analysis.suggestions),
    }
}

fn job_tab_lines(analysis: &JobAnalysis, tab: JobTab) -> Vec<Line<'static>> {
    match tab {
        JobTab::SkillsRequired => {
            markdown::to_lines(&markdown::render_markdown(&analysis.skills_required))
        }
        JobTab::CareerGrowth => {
            markdown::to_lines(&markdown::render_markdown(&analysis.career_growth))
        }
        JobTab::Resources => {
            if analysis.resources.is_empty() {
                return vec![Line::from(Span::styled(
                    "No specific resources found.",
                    theme::DIM,
                ))];
            }
            let mut lines = Vec::new();
            for resource in &analysis.resources {
                lines.push(Line::from(vec![
                    Span::styled("  • ", theme::BULLET),
                    Span::styled(resource.title.clone(), theme::HEADING_3),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", resource.description),
                    theme::BODY,
                )));
                lines.push(Line::from(""));
            }
            lines
        }
    }
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = match state.screen() {
        _ if state.is_loading() => "q: quit",
        Screen::Home => "j/k: choose | Enter: select | ?: about | q: quit",
        Screen::ResumeInput | Screen::JobInput => "Tab: field | Enter: submit | Esc: back | Ctrl-C: quit",
        Screen::ResumeResults(_) | Screen::JobResults(_) => {
            "←/→: tab | j/k: scroll | Esc: back | ?: about | q: quit"
        }
    };

    let now = chrono::Utc::now();
    let right_text = if let Some(since) = state.loading_since() {
        format!("Analyzing {} ", elapsed_label(since, &now))
    } else if let Some(done) = state.last_completed() {
        format!("Last analysis {} ", age_label(done, &now))
    } else {
        String::new()
    };

    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(key_hints.chars().count() + right_text.chars().count() + 1);

    let line = Line::from(vec![
        Span::styled(format!(" {}", key_hints), theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(right_text, theme::STATUS_BAR),
    ]);

    f.render_widget(Paragraph::new(line).style(theme::STATUS_BAR), area);
}

pub fn render_about_modal(f: &mut Frame, area: Rect) {
    let modal_width = (area.width / 2).max(44).min(area.width.saturating_sub(4));
    let modal_height = 10u16.min(area.height);
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x,
        y,
        width: modal_width,
        height: modal_height,
    };

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);

    let text = vec![
        Line::from(Span::styled("AI Career Coach", theme::TITLE)),
        Line::from(""),
        Line::from("Resume Based: an ATS score, improvements and next steps for your resume."),
        Line::from("Job Based: skills, resources and a one-year roadmap for a target role."),
        Line::from(""),
        Line::from(Span::styled("Press Esc or ? to close", theme::DIM)),
    ];

    let para = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, modal_area);
}
