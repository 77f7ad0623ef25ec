use owo_colors::OwoColorize;
use serde::Serialize;
use wiki::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Color,
    Plain,
    Simple,
    Short,
}

impl Style {
    pub fn from_flags(simple: bool, short: bool, no_color: bool) -> Self {
        if simple {
            Self::Simple
        } else if short {
            Self::Short
        } else if no_color {
            Self::Plain
        } else {
            Self::Color
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemResponse<'a> {
    pub ok: bool,
    pub item: &'a Page,
}

#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub ok: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Renders `page` in `style`, newline terminated.
pub fn render(page: &Page, style: Style) -> String {
    match style {
        Style::Simple => format!("{}\n", page.content),
        Style::Short => format!("{}\n", first_sentence(&page.content)),
        Style::Plain => {
            let mut out = String::new();
            if let Some(redirect) = &page.redirect {
                out.push_str(&format!(
                    "Redirected from {} to {}\n\n",
                    redirect.from, redirect.to
                ));
            }
            out.push_str(&format!("{}\n\nRead more: {}\n", page.content, page.url));
            out
        }
        Style::Color => {
            let mut out = String::new();
            if let Some(redirect) = &page.redirect {
                out.push_str(&format!(
                    "{} {} {} {}\n\n",
                    "Redirected from".red(),
                    redirect.from.white().on_red(),
                    "to".red(),
                    redirect.to.white().on_red()
                ));
            }
            out.push_str(&page.content);
            out.push_str("\n\n");
            out.push_str(&format!("{}\n", format!("Read more: {}", page.url).green()));
            out
        }
    }
}

/// Word-wraps each blank-line separated paragraph to `width` columns.
pub fn wrap(text: &str, width: usize) -> String {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(|paragraph| wrap_paragraph(paragraph, width))
        .filter(|paragraph| !paragraph.is_empty())
        .collect();
    format!("{}\n", paragraphs.join("\n\n"))
}

fn wrap_paragraph(paragraph: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();
        if !line.is_empty() && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

fn first_sentence(input: &str) -> &str {
    // Common abbreviations that end with a dot but do not end a sentence
    const ABBREVS: &[&str] = &[
        "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "St.", "Jr.", "Sr.", "U.S.", "U.K.", "e.g.", "i.e.",
        "etc.", "vs.", "approx.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.",
        "Oct.", "Nov.", "Dec.",
    ];

    for (pos, _) in input.match_indices('.') {
        let ends_clause = input[pos + 1..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if !ends_clause {
            continue;
        }

        let candidate = &input[..=pos];
        let is_abbrev = ABBREVS.iter().any(|abbrev| {
            candidate
                .strip_suffix(abbrev)
                .is_some_and(|head| {
                    head.is_empty() || head.ends_with(|ch: char| ch.is_whitespace() || ch == '(')
                })
        });
        if !is_abbrev {
            return candidate;
        }
    }

    input
}
