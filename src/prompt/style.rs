use indicatif::ProgressBar;
use inquire::ui::{Color, RenderConfig, Styled};
use owo_colors::OwoColorize;
use std::time::Duration;

pub fn info(text: &str) -> String {
    format!("INFO: {text}").bright_black().to_string()
}

pub fn warn(text: &str) -> String {
    format!("[WARN] {text}").yellow().to_string()
}

pub fn success(text: &str) -> String {
    text.green().to_string()
}

pub fn dim(text: &str) -> String {
    text.bright_black().to_string()
}

/// Prompt prefix used for environment questions.
pub fn gear_render_config() -> RenderConfig<'static> {
    RenderConfig::default().with_prompt_prefix(Styled::new("\u{2699}").with_fg(Color::LightCyan))
}

pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
