use super::style;
use crate::envfile::{Config, EnvQuestion};
use inquire::Text;
use inquire::error::InquireResult;

/// Presents the questions in order and collects the answers. Annotation
/// lines are printed above each prompt; a default is only pre-filled when
/// the example file carried one.
pub fn ask(questions: &[EnvQuestion]) -> InquireResult<Config> {
    let render_config = style::gear_render_config();
    let mut answers = Config::new();

    for question in questions {
        println!();
        for line in question.annotation.lines() {
            println!("{}", style::info(line));
        }

        let mut prompt = Text::new(&question.message).with_render_config(render_config);
        if let Some(default) = question.default.as_deref() {
            prompt = prompt.with_default(default);
        }

        answers.insert(question.name.clone(), prompt.prompt()?);
    }

    Ok(answers)
}
