#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: Option<String>,
}

pub fn parse(line: &str) -> Assignment {
    let (name, rest) = line.split_once('=').unwrap_or((line, ""));

    // Quotes delimit the value, they are never part of it. Escape
    // sequences are not interpreted.
    let value = rest
        .trim()
        .split(['\'', '"'])
        .find(|run| !run.is_empty())
        .map(str::to_owned);

    Assignment {
        name: name.trim().to_owned(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_value() {
        let parsed = parse("NAME=value");
        assert_eq!(parsed.name, "NAME");
        assert_eq!(parsed.value.as_deref(), Some("value"));
    }

    #[test]
    fn strips_surrounding_quotes() {
        assert_eq!(parse("NAME='a b'").value.as_deref(), Some("a b"));
        assert_eq!(parse("NAME=\"a b\"").value.as_deref(), Some("a b"));
    }

    #[test]
    fn missing_value_is_absent_not_empty() {
        assert_eq!(parse("NAME=").value, None);
        assert_eq!(parse("NAME=''").value, None);
        assert_eq!(parse("NAME=\"\"").value, None);
    }

    #[test]
    fn splits_on_the_first_equals_only() {
        let parsed = parse("  WEBHOOK_URL = http://host/a=b ");
        assert_eq!(parsed.name, "WEBHOOK_URL");
        assert_eq!(parsed.value.as_deref(), Some("http://host/a=b"));
    }

    #[test]
    fn keeps_whitespace_inside_a_bare_value() {
        assert_eq!(parse("GREETING=hello world").value.as_deref(), Some("hello world"));
    }

    #[test]
    fn empty_name_is_reported_to_the_caller() {
        assert_eq!(parse("=value").name, "");
    }
}
