use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Style = Style::new().fg(Color::Rgb(249, 115, 22));

pub const TITLE: Style = Style::new()
    .fg(Color::Rgb(249, 115, 22))
    .add_modifier(Modifier::BOLD);

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Rgb(249, 115, 22))
    .add_modifier(Modifier::BOLD);

pub const TAB_INACTIVE: Style = Style::new().fg(Color::Gray);

pub const BODY: Style = Style::new().fg(Color::Gray);

pub const BOLD: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const SUCCESS: Style = Style::new().fg(Color::Green);

pub const SCORE_HIGH: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

pub const SCORE_MID: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub const SCORE_LOW: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const HEADING_1: Style = Style::new()
    .fg(Color::Rgb(249, 115, 22))
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

pub const HEADING_2: Style = Style::new()
    .fg(Color::Rgb(249, 115, 22))
    .add_modifier(Modifier::BOLD);

pub const HEADING_3: Style = Style::new()
    .fg(Color::Rgb(251, 146, 60))
    .add_modifier(Modifier::BOLD);

pub const BULLET: Style = Style::new().fg(Color::Rgb(249, 115, 22));

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Rgb(249, 115, 22));

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
