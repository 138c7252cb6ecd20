pub mod app;
pub mod extract;
pub mod input;
pub mod llm;
pub mod ui;
pub mod util;
