use std::sync::LazyLock;

use colored::{ColoredString, Colorize};
use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(red|green|blue|cyan|bold)>|</>").unwrap());

#[derive(Debug, Clone, Copy)]
enum Style {
    Red,
    Green,
    Blue,
    Cyan,
    Bold,
}

impl Style {
    fn from_token(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Style::Red),
            "green" => Some(Style::Green),
            "blue" => Some(Style::Blue),
            "cyan" => Some(Style::Cyan),
            "bold" => Some(Style::Bold),
            _ => None,
        }
    }

    fn apply(self, s: ColoredString) -> ColoredString {
        match self {
            Style::Red => s.red(),
            Style::Green => s.green(),
            Style::Blue => s.blue(),
            Style::Cyan => s.cyan(),
            Style::Bold => s.bold(),
        }
    }
}

/// Turn `<red>…</>`-style markup into styled terminal text.
///
/// Styles stack, `</>` pops the innermost one and a stray `</>` is ignored.
/// Anything that is not a known token is printed as-is.
pub fn render(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut stack: Vec<Style> = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(markup) {
        let Some(m) = caps.get(0) else { continue };
        push_styled(&mut out, &markup[last..m.start()], &stack);
        last = m.end();

        match caps.get(1).and_then(|name| Style::from_token(name.as_str())) {
            Some(style) => stack.push(style),
            None => {
                stack.pop();
            }
        }
    }
    push_styled(&mut out, &markup[last..], &stack);
    out
}

fn push_styled(out: &mut String, text: &str, stack: &[Style]) {
    if text.is_empty() {
        return;
    }
    if stack.is_empty() {
        out.push_str(text);
        return;
    }
    let styled = stack
        .iter()
        .fold(text.normal(), |acc, style| style.apply(acc));
    out.push_str(&styled.to_string());
}
