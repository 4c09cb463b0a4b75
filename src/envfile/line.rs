pub fn read_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Assignment,
    Other,
}

pub fn classify(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Comment
    } else if line.contains('=') {
        LineKind::Assignment
    } else {
        LineKind::Other
    }
}

pub fn comment_text(line: &str) -> &str {
    match line.find('#') {
        Some(index) => line[index + 1..].trim(),
        None => line.trim(),
    }
}
