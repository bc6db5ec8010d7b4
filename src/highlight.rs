//! Keyword highlighting for rendered match text.
//!
//! Every case-insensitive occurrence of a keyword is wrapped in a marker tag
//! (`<b>…</b>` by default). Text that is already inside a marker span is
//! never rewritten, so highlighting several keywords in sequence over the
//! same text keeps earlier markers intact and applying the same keyword
//! twice is a no-op the second time.

use regex::Regex;

use crate::error::{Result, TweetyError};

/// Configuration for keyword highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// HTML tag to wrap highlighted keywords (e.g. "b", "mark", "em").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "b".to_string(),
            css_class: None,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class<S: Into<String>>(mut self, css_class: S) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// A keyword compiled for highlighting.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

impl KeywordPattern {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// Wraps keyword occurrences in marker tags.
#[derive(Debug, Clone)]
pub struct Highlighter {
    config: HighlightConfig,
    opening_tag: String,
    closing_tag: String,
    /// Matches one complete marker span, tags included.
    marked_span: Regex,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Result<Self> {
        if config.tag.is_empty() || !config.tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TweetyError::highlight(format!(
                "invalid highlight tag '{}'",
                config.tag
            )));
        }

        let opening_tag = config.opening_tag();
        let closing_tag = config.closing_tag();
        let marked_span = Regex::new(&format!(
            "(?s){}.*?{}",
            regex::escape(&opening_tag),
            regex::escape(&closing_tag)
        ))
        .map_err(|e| TweetyError::highlight(e.to_string()))?;

        Ok(Highlighter {
            config,
            opening_tag,
            closing_tag,
            marked_span,
        })
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Compile a keyword into a case-insensitive literal pattern.
    pub fn compile(&self, keyword: &str) -> Result<KeywordPattern> {
        if keyword.is_empty() {
            return Err(TweetyError::highlight("cannot highlight an empty keyword"));
        }

        let regex = Regex::new(&format!("(?i){}", regex::escape(keyword)))
            .map_err(|e| TweetyError::highlight(format!("keyword '{keyword}': {e}")))?;

        Ok(KeywordPattern {
            keyword: keyword.to_string(),
            regex,
        })
    }

    /// Highlight every occurrence of `pattern` in `text` outside existing
    /// marker spans.
    pub fn apply(&self, pattern: &KeywordPattern, text: &str) -> String {
        let mut output = String::with_capacity(text.len() + 16);
        let mut last_span_end = 0;

        for span in self.marked_span.find_iter(text) {
            self.wrap_matches(pattern, &text[last_span_end..span.start()], &mut output);
            output.push_str(span.as_str());
            last_span_end = span.end();
        }
        self.wrap_matches(pattern, &text[last_span_end..], &mut output);

        output
    }

    /// Compile `keyword` and highlight it in `text`.
    pub fn highlight(&self, text: &str, keyword: &str) -> Result<String> {
        Ok(self.apply(&self.compile(keyword)?, text))
    }

    /// Highlight several keywords in order, each over the output of the
    /// previous one.
    pub fn highlight_all(&self, text: &str, keywords: &[&str]) -> Result<String> {
        let mut rendered = text.to_string();
        for keyword in keywords {
            rendered = self.highlight(&rendered, keyword)?;
        }
        Ok(rendered)
    }

    fn wrap_matches(&self, pattern: &KeywordPattern, segment: &str, output: &mut String) {
        let mut last_match_end = 0;
        for m in pattern.regex.find_iter(segment) {
            output.push_str(&segment[last_match_end..m.start()]);
            output.push_str(&self.opening_tag);
            output.push_str(m.as_str());
            output.push_str(&self.closing_tag);
            last_match_end = m.end();
        }
        output.push_str(&segment[last_match_end..]);
    }
}
