use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Screen};

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.quit();
            vec![]
        }
        Action::Navigate(screen) => {
            state.navigate(screen);
            vec![]
        }
        Action::Back => {
            if state.show_about() {
                state.toggle_about();
            } else if let Some(parent) = state.screen().parent() {
                state.navigate(parent);
            }
            vec![]
        }
        Action::HomeToggle => {
            state.home_toggle();
            vec![]
        }
        Action::HomeSelect => {
            if state.screen() == Screen::Home {
                state.navigate(state.home_cursor().target());
            }
            vec![]
        }
        Action::NextTab => {
            state.next_tab();
            vec![]
        }
        Action::PrevTab => {
            state.prev_tab();
            vec![]
        }
        Action::SelectTabIndex(index) => {
            state.select_tab_index(index);
            vec![]
        }
        Action::ScrollUp(step) => {
            state.scroll_up(step);
            vec![]
        }
        Action::ScrollDown(step) => {
            state.scroll_down(step);
            vec![]
        }
        Action::NextField => {
            state.focus_next_field();
            vec![]
        }
        Action::PrevField => {
            state.focus_prev_field();
            vec![]
        }
        Action::Input(ch) => {
            state.insert_char(ch);
            vec![]
        }
        Action::Backspace => {
            state.delete_char();
            vec![]
        }
        Action::ChooseFile => inspect(state, false),
        Action::Submit => submit(state),
        Action::FileSelected { id, file } => {
            let Some(then_submit) = state.finish_inspection(id) else {
                return vec![];
            };
            state.select_file(file);
            if then_submit {
                return submit(state);
            }
            vec![]
        }
        Action::FileRejected { id, message } => {
            if state.finish_inspection(id).is_some() {
                state.reject_file(message);
            }
            vec![]
        }
        Action::ResumeAnalysisFinished(result) => {
            state.finish_resume_analysis(result);
            vec![]
        }
        Action::JobAnalysisFinished(result) => {
            state.finish_job_analysis(result);
            vec![]
        }
        Action::ToggleAbout => {
            state.toggle_about();
            vec![]
        }
        Action::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn submit(state: &mut AppState) -> Vec<SideEffect> {
    match state.screen() {
        Screen::Home => {
            state.navigate(state.home_cursor().target());
            vec![]
        }
        Screen::ResumeInput => {
            if state.uninspected_file_path().is_some() {
                return inspect(state, true);
            }
            state
                .submit_resume_form()
                .map(SideEffect::AnalyzeResume)
                .into_iter()
                .collect()
        }
        Screen::JobInput => state
            .submit_job_form()
            .map(SideEffect::AnalyzeJob)
            .into_iter()
            .collect(),
        Screen::ResumeResults(_) | Screen::JobResults(_) => vec![],
    }
}

fn inspect(state: &mut AppState, then_submit: bool) -> Vec<SideEffect> {
    state
        .begin_inspection(then_submit)
        .map(|(id, path)| SideEffect::InspectFile { id, path })
        .into_iter()
        .collect()
}
