use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that delimit node shapes in the diagram grammar.
const BRACKET_PATTERN: &str = r"[\[\]{}()]";

static BRACKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(BRACKET_PATTERN).expect("bracket pattern is valid"));

/// Make a step name safe to place inside a node shape.
///
/// Double quotes become single quotes, brackets, braces and parentheses are
/// dropped, `>` becomes `->` and `<` becomes `<-`. Arrows that are already
/// escaped are left alone, so escaping twice equals escaping once.
pub fn escape_label(label: &str) -> String {
    let label = label.replace('"', "'");
    let label = BRACKET_RE.replace_all(&label, "");

    let mut escaped = String::with_capacity(label.len() + 4);
    let mut chars = label.chars().peekable();
    let mut prev = None;
    while let Some(c) = chars.next() {
        match c {
            '>' if prev != Some('-') => escaped.push_str("->"),
            '<' if chars.peek() != Some(&'-') => escaped.push_str("<-"),
            _ => escaped.push(c),
        }
        prev = Some(c);
    }
    escaped
}
