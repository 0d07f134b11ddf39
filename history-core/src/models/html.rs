use std::fmt;

use serde::{Deserialize, Serialize};

/// HTML-escape a string for safe insertion into element content or a
/// double-quoted attribute value.
///
/// Escapes: & < > " '
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped(&mut out, s);
    out
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// A markup fragment from the reviewed content set.
///
/// Release notes carry links and `<code>` spans, so they are stored as
/// markup and written out verbatim. Anything derived from plain text must
/// go through [`TrustedHtml::text`] or [`TrustedHtml::push_text`], which
/// escape it first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup that has already been reviewed.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escape plain text into a fragment.
    pub fn text(s: &str) -> Self {
        Self(escape_html(s))
    }

    pub fn push_text(&mut self, s: &str) -> &mut Self {
        push_escaped(&mut self.0, s);
        self
    }

    pub fn push_html(&mut self, fragment: &TrustedHtml) -> &mut Self {
        self.0.push_str(&fragment.0);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("go1.14 (released 2020-02-25)"), "go1.14 (released 2020-02-25)");
    }

    #[test]
    fn trusted_markup_is_kept_verbatim() {
        let html = TrustedHtml::from_trusted("the <code>os/exec</code> package");
        assert_eq!(html.as_str(), "the <code>os/exec</code> package");
    }

    #[test]
    fn text_is_escaped_when_mixed_with_markup() {
        let mut html = TrustedHtml::text("go1.7.2 <withdrawn> ");
        html.push_html(&TrustedHtml::from_trusted("<b>ok</b>"));
        assert_eq!(html.as_str(), "go1.7.2 &lt;withdrawn&gt; <b>ok</b>");
    }

    #[test]
    fn deserializes_as_plain_string() {
        let html: TrustedHtml = serde_json::from_str(r#""<code>go</code>""#).unwrap();
        assert_eq!(html.as_str(), "<code>go</code>");
        assert!(TrustedHtml::from_trusted(" \n ").is_blank());
    }
}
