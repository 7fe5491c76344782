//! Lightweight formatted text for bot replies.
//!
//! Bot texts use `**bold**` and `*italic*` markers. They are parsed once into
//! segments and rendered through explicit formatters, so user-controlled text
//! never reaches a renderer as trusted markup.

use std::fmt::Write;

use serde::{Serialize, Serializer};

/// One run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Bold(String),
    Italic(String),
}

/// Text split into styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedText {
    source: String,
    segments: Vec<Segment>,
}

impl FormattedText {
    /// Parse marker syntax. Markers without a closing partner stay literal.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut plain = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find('*') {
            plain.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(body) = tail.strip_prefix("**")
                && let Some(end) = body.find("**")
                && end > 0
            {
                flush(&mut segments, &mut plain);
                segments.push(Segment::Bold(body[..end].to_string()));
                rest = &body[end + 2..];
                continue;
            }

            let body = &tail[1..];
            match body.find('*') {
                Some(end) if end > 0 => {
                    flush(&mut segments, &mut plain);
                    segments.push(Segment::Italic(body[..end].to_string()));
                    rest = &body[end + 1..];
                }
                _ => {
                    plain.push('*');
                    rest = body;
                }
            }
        }

        plain.push_str(rest);
        flush(&mut segments, &mut plain);

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// Treat `text` as literal, with no marker parsing. Used for user input.
    pub fn plain(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Plain(text.to_string())]
        };
        Self {
            source: text.to_string(),
            segments,
        }
    }

    /// Text exactly as written, markers included.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text with markers removed.
    pub fn to_plain(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(text) | Segment::Bold(text) | Segment::Italic(text) => {
                    text.as_str()
                }
            })
            .collect()
    }

    /// HTML with every segment escaped and newlines turned into `<br>`.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => html.push_str(&escape_html(text)),
                Segment::Bold(text) => {
                    let _ = write!(html, "<strong>{}</strong>", escape_html(text));
                }
                Segment::Italic(text) => {
                    let _ = write!(html, "<em>{}</em>", escape_html(text));
                }
            }
        }
        html
    }

    /// Terminal rendering using ANSI bold and italic.
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => out.push_str(text),
                Segment::Bold(text) => {
                    let _ = write!(out, "\x1b[1m{text}\x1b[0m");
                }
                Segment::Italic(text) => {
                    let _ = write!(out, "\x1b[3m{text}\x1b[0m");
                }
            }
        }
        out
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.source.contains(needle)
    }
}

impl From<&str> for FormattedText {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<String> for FormattedText {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl Serialize for FormattedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

fn flush(segments: &mut Vec<Segment>, plain: &mut String) {
    if !plain.is_empty() {
        segments.push(Segment::Plain(std::mem::take(plain)));
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("<br>"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bold_and_italic() {
        let text = FormattedText::parse("Soy *Áron* de **ConectaT**.");
        assert_eq!(
            text.segments(),
            &[
                Segment::Plain("Soy ".to_string()),
                Segment::Italic("Áron".to_string()),
                Segment::Plain(" de ".to_string()),
                Segment::Bold("ConectaT".to_string()),
                Segment::Plain(".".to_string()),
            ]
        );
        assert_eq!(text.to_plain(), "Soy Áron de ConectaT.");
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        let text = FormattedText::parse("5 * 3 = 15");
        assert_eq!(text.to_plain(), "5 * 3 = 15");
        assert_eq!(text.segments().len(), 1);
    }

    #[test]
    fn html_escapes_user_controlled_text() {
        let text = FormattedText::parse("<script>alert('x')</script> **a&b**");
        assert_eq!(
            text.to_html(),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; <strong>a&amp;b</strong>"
        );
    }

    #[test]
    fn html_keeps_line_breaks() {
        let text = FormattedText::parse("*uno*\ndos");
        assert_eq!(text.to_html(), "<em>uno</em><br>dos");
    }

    #[test]
    fn bold_label_followed_by_plain_value() {
        let text = FormattedText::parse("📞 **Teléfono:** +573043756405");
        assert_eq!(
            text.segments()[1],
            Segment::Bold("Teléfono:".to_string())
        );
        assert_eq!(text.to_plain(), "📞 Teléfono: +573043756405");
    }

    #[test]
    fn plain_text_ignores_markers() {
        let text = FormattedText::plain("precio *urgente*");
        assert_eq!(text.to_plain(), "precio *urgente*");
        assert_eq!(text.to_html(), "precio *urgente*");
    }

    #[test]
    fn empty_input_has_no_segments() {
        let text = FormattedText::parse("");
        assert!(text.segments().is_empty());
        assert_eq!(text.to_html(), "");
    }
}
