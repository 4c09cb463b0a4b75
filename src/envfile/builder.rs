use super::assignment;
use super::line::{self, LineKind};
use super::question::{self, Annotation, EnvQuestion};

/// Walks the trimmed, non-empty lines of an example environment file in
/// order and produces one question per well-formed assignment. Comment
/// lines accumulate into the annotation of the next assignment; any other
/// line terminates a pending annotation. An assignment with an empty name
/// produces no question.
pub fn extract_questions(lines: &[String]) -> Vec<EnvQuestion> {
    let mut pending = Annotation::default();
    let mut questions = Vec::new();

    for raw in lines {
        match line::classify(raw) {
            LineKind::Comment => pending.push(line::comment_text(raw)),
            LineKind::Assignment => {
                let parsed = assignment::parse(raw);
                if parsed.name.is_empty() {
                    pending.clear();
                    continue;
                }
                questions.push(question::compose(parsed, std::mem::take(&mut pending)));
            }
            LineKind::Other => pending.clear(),
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn comment_attaches_to_the_next_assignment() {
        let questions = extract_questions(&lines(&["# your api token", "TOKEN=abc"]));

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].name, "TOKEN");
        assert_eq!(questions[0].default.as_deref(), Some("abc"));
        assert_eq!(questions[0].annotation.lines(), ["your api token"]);
    }

    #[test]
    fn annotation_is_never_split_across_assignments() {
        let questions = extract_questions(&lines(&["# help", "A=1", "B=2"]));

        assert_eq!(questions[0].annotation.lines(), ["help"]);
        assert!(questions[1].annotation.is_empty());
    }

    #[test]
    fn consecutive_comment_lines_form_one_annotation() {
        let questions = extract_questions(&lines(&["# first", "# second", "A="]));

        assert_eq!(questions[0].annotation.lines(), ["first", "second"]);
        assert_eq!(questions[0].default, None);
    }

    #[test]
    fn interrupted_comment_block_is_discarded() {
        let questions = extract_questions(&lines(&[
            "# stale block",
            "stray line",
            "# fresh block",
            "A=1",
        ]));

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].annotation.lines(), ["fresh block"]);
    }

    #[test]
    fn trailing_comments_attach_to_nothing() {
        let questions = extract_questions(&lines(&["A=1", "# dangling"]));

        assert_eq!(questions.len(), 1);
        assert!(questions[0].annotation.is_empty());
    }

    #[test]
    fn empty_name_produces_no_question() {
        let questions = extract_questions(&lines(&["# note", "=value", "A=1"]));

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].name, "A");
        assert!(questions[0].annotation.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let input = lines(&["# one", "A=1", "B='x y'", "# two", "C="]);

        assert_eq!(extract_questions(&input), extract_questions(&input));
    }

    #[test]
    fn questions_preserve_source_order() {
        let questions = extract_questions(&lines(&["B=2", "A=1", "C=3"]));
        let names: Vec<&str> = questions.iter().map(|q| q.name.as_str()).collect();

        assert_eq!(names, ["B", "A", "C"]);
    }
}
