use super::assignment;
use super::line::{self, LineKind};
use std::collections::BTreeMap;

pub type Config = BTreeMap<String, String>;

pub fn merge(prefilled: Config, answers: Config) -> Config {
    let mut merged = prefilled;
    merged.extend(answers);
    merged
}

/// One `key=value` line per entry, in the mapping's order. Values are
/// written as-is, without quoting.
pub fn build_env(config: &Config) -> String {
    config
        .iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect()
}

pub fn parse_config(text: &str) -> Config {
    line::read_lines(text)
        .iter()
        .filter(|raw| line::classify(raw) == LineKind::Assignment)
        .map(|raw| assignment::parse(raw))
        .filter(|parsed| !parsed.name.is_empty())
        .map(|parsed| (parsed.name, parsed.value.unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_line_per_entry() {
        let config = Config::from([
            ("id".to_owned(), "123456".to_owned()),
            ("webhookPort".to_owned(), "8080".to_owned()),
        ]);

        assert_eq!(build_env(&config), "id=123456\nwebhookPort=8080\n");
    }

    #[test]
    fn serializing_then_parsing_recovers_the_mapping() {
        let config = Config::from([
            ("SIPGATE_TOKEN".to_owned(), "tok-123".to_owned()),
            ("GREETING".to_owned(), "hello world".to_owned()),
            ("EMPTY".to_owned(), String::new()),
        ]);

        assert_eq!(parse_config(&build_env(&config)), config);
    }

    #[test]
    fn parsing_skips_comments_and_blank_lines() {
        let config = parse_config("# a note\n\nNAME=\nPORT=8080\n");

        assert_eq!(
            config,
            Config::from([
                ("NAME".to_owned(), String::new()),
                ("PORT".to_owned(), "8080".to_owned()),
            ])
        );
    }

    #[test]
    fn parsing_strips_quotes_from_values() {
        let config = parse_config("GREETING='hello there'\n");

        assert_eq!(config.get("GREETING").map(String::as_str), Some("hello there"));
    }

    #[test]
    fn merge_unions_both_mappings() {
        let prefilled = Config::from([("A".to_owned(), "1".to_owned())]);
        let answers = Config::from([("B".to_owned(), "2".to_owned())]);

        let merged = merge(prefilled, answers);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("A").map(String::as_str), Some("1"));
        assert_eq!(merged.get("B").map(String::as_str), Some("2"));
    }
}
