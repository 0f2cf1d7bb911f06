use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Inline fragment of a narrative line. Bold spans use the `**text**`
/// convention the dashboard renders as emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Bold(String),
}

/// One parsed line of section content.
///
/// The generator writes content as plain text lines; the renderer upgrades
/// two line shapes into richer widgets:
/// - `"• {domain} - {count} impressions[ | {date}]"` becomes an impression
///   row with a calendar badge,
/// - any other `"• ..."` line becomes a plain bullet.
///
/// Lines that match neither shape are ordinary text. Malformed lines never
/// fail; they degrade to `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "line", rename_all = "snake_case")]
pub enum ContentLine {
    Text { spans: Vec<Span> },
    Bullet { spans: Vec<Span> },
    ImpressionBullet {
        domain: String,
        count: u32,
        date: Option<String>,
    },
}

fn impression_bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^•\s*(?P<domain>\S.*?)\s+-\s+(?P<count>\d+)\s+impressions(?:\s*\|\s*(?P<date>\S.*?))?\s*$")
            .expect("Failed to compile impression bullet regex")
    })
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Failed to compile bold span regex"))
}

/// Parse section content into renderer-ready lines. Blank lines act as
/// paragraph spacing in the timeline cards and are dropped here.
pub fn parse_content(content: &str) -> Vec<ContentLine> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> ContentLine {
    if let Some(caps) = impression_bullet_re().captures(line) {
        let count = caps["count"].parse::<u32>();
        if let Ok(count) = count {
            return ContentLine::ImpressionBullet {
                domain: caps["domain"].to_string(),
                count,
                date: caps.name("date").map(|m| m.as_str().to_string()),
            };
        }
    }

    if let Some(rest) = line.trim_start().strip_prefix('•') {
        return ContentLine::Bullet {
            spans: parse_spans(rest.trim_start()),
        };
    }

    ContentLine::Text {
        spans: parse_spans(line),
    }
}

/// Split one line into plain and bold spans. Unbalanced `**` markers are left
/// in the plain text as-is.
pub fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in bold_re().captures_iter(line) {
        let whole = caps.get(0).expect("capture 0 always present");
        if whole.start() > cursor {
            spans.push(Span::Plain(line[cursor..whole.start()].to_string()));
        }
        spans.push(Span::Bold(caps[1].to_string()));
        cursor = whole.end();
    }

    if cursor < line.len() {
        spans.push(Span::Plain(line[cursor..].to_string()));
    }

    spans
}
