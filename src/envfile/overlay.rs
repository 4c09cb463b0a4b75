use super::question::EnvQuestion;
use super::serialize::Config;

#[derive(Debug, Default)]
pub struct OverlayOutcome {
    pub remaining: Vec<EnvQuestion>,
    pub prefilled: Config,
}

/// Partitions the questions against a persisted configuration: every
/// question whose name is already configured (an empty value counts as
/// configured) moves into the pre-filled mapping, the rest stay in order.
pub fn overlay(questions: Vec<EnvQuestion>, persisted: &Config) -> OverlayOutcome {
    let mut outcome = OverlayOutcome::default();

    for question in questions {
        match persisted.get(&question.name) {
            Some(value) => {
                outcome.prefilled.insert(question.name, value.clone());
            }
            None => outcome.remaining.push(question),
        }
    }

    outcome
}

pub fn is_secret(name: &str) -> bool {
    name.contains("TOKEN")
}
