use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, SideEffect};
use crate::app::analysis;
use crate::app::state::{AppState, ResumeField, Screen};
use crate::app::update::update;
use crate::app::view;
use crate::extract::TextExtractor;
use crate::input::SelectedFile;
use crate::llm::ModelBackend;
use crate::util::config::AppConfig;

/// Collaborators the side effects run against.
#[derive(Clone)]
pub struct Services {
    pub model: Arc<dyn ModelBackend>,
    pub extractor: Arc<dyn TextExtractor>,
}

pub async fn run(config: AppConfig, services: Services) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal before the panic message is printed.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, services).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    services: Services,
) -> Result<()> {
    let mut state = AppState::new();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut event_stream = crossterm::event::EventStream::new();
    let mut ticker = tokio::time::interval(tokio::time::Duration::from_millis(
        config.ui.tick_rate_ms.max(16),
    ));

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit() {
            break;
        }

        let action = tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => map_event_to_action(&event, &state, config.ui.scroll_step),
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event error");
                        None
                    }
                    None => Some(Action::Quit),
                }
            }
            Some(action) = action_rx.recv() => Some(action),
            // Redraws the spinner and the status bar clock.
            _ = ticker.tick() => Some(Action::Tick),
        };

        if let Some(action) = action {
            let effects = update(&mut state, action);
            for effect in effects {
                spawn_side_effect(effect, &services, &action_tx);
            }
        }
    }

    Ok(())
}

pub fn map_event_to_action(event: &Event, state: &AppState, scroll_step: u16) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if let KeyCode::Char('c') = code
        && modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(Action::Quit);
    }

    // Nothing but quitting while a request is in flight.
    if state.is_loading() {
        return match code {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if state.show_about() {
        return match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleAbout),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match state.screen() {
        Screen::Home => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleAbout),
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up | KeyCode::Tab => {
                Some(Action::HomeToggle)
            }
            KeyCode::Char('1') => Some(Action::Navigate(Screen::ResumeInput)),
            KeyCode::Char('2') => Some(Action::Navigate(Screen::JobInput)),
            KeyCode::Enter => Some(Action::HomeSelect),
            _ => None,
        },
        Screen::ResumeInput | Screen::JobInput => match code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter
                if state.screen() == Screen::ResumeInput
                    && state.resume_form().focus == ResumeField::FilePath
                    && state.selected_file().is_none() =>
            {
                Some(Action::ChooseFile)
            }
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(*c)),
            _ => None,
        },
        Screen::ResumeResults(_) | Screen::JobResults(_) => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleAbout),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Action::NextTab),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Action::PrevTab),
            KeyCode::Char(c @ '1'..='3') => Some(Action::SelectTabIndex(*c as usize - '1' as usize)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown(scroll_step)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp(scroll_step)),
            _ => None,
        },
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    services: &Services,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    let tx = action_tx.clone();
    match effect {
        SideEffect::InspectFile { id, path } => {
            tokio::spawn(async move {
                let action = match SelectedFile::inspect(&path).await {
                    Ok(file) => Action::FileSelected { id, file },
                    Err(e) => {
                        debug!(id, path = %path.display(), error = %e, "File rejected");
                        Action::FileRejected {
                            id,
                            message: format!("{e:#}"),
                        }
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::AnalyzeResume(request) => {
            let services = services.clone();
            tokio::spawn(async move {
                debug!(role = %request.job_role, file = %request.file.name, "Starting resume analysis");
                let result = analysis::run_resume_analysis(
                    services.extractor.as_ref(),
                    services.model.as_ref(),
                    &request,
                )
                .await;
                let _ = tx.send(Action::ResumeAnalysisFinished(result));
            });
        }
        SideEffect::AnalyzeJob(request) => {
            let services = services.clone();
            tokio::spawn(async move {
                debug!(role = %request.job_role, "Starting job analysis");
                let result = analysis::run_job_analysis(services.model.as_ref(), &request).await;
                let _ = tx.send(Action::JobAnalysisFinished(result));
            });
        }
    }
}
