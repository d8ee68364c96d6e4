/*!
 * Markdown formatting tokens.
 *
 * Five token classes are supported: bold, italic, link, inline code, and
 * strikethrough. Each class has its own matcher, applied in a fixed
 * declared priority order; stripping runs class by class over the
 * already-stripped result of the prior pass, so on nested or overlapping
 * delimiters the outer (higher-priority) pattern wins.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Bold spans: `**x**` or `__x__`
static BOLD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("Invalid bold regex")
});

/// Italic spans: `*x*` or `_x_`
static ITALIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*(.*?)\*|_(.*?)_").expect("Invalid italic regex")
});

/// Link spans: `[label](url)`; only the label is content
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex")
});

/// Inline code spans
static CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"`(.*?)`").expect("Invalid code regex")
});

/// Strikethrough spans
static STRIKETHROUGH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"~~(.*?)~~").expect("Invalid strikethrough regex")
});

/// Combined pattern matching any token class in one scan, with bold
/// taking priority over italic at the same start position
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*.*?\*\*|\*.*?\*|__.*?__|_.*?_|\[.*?\]\(.*?\)|`.*?`|~~.*?~~")
        .expect("Invalid combined token regex")
});

/// The supported Markdown token classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `**x**` or `__x__`
    Bold,
    /// `*x*` or `_x_`
    Italic,
    /// `[label](url)`
    Link,
    /// `` `x` ``
    Code,
    /// `~~x~~`
    Strikethrough,
}

impl TokenKind {
    /// Stripping priority order. Each pass scans the already-stripped
    /// result of the prior pass.
    pub const STRIP_ORDER: [TokenKind; 5] = [
        TokenKind::Bold,
        TokenKind::Italic,
        TokenKind::Link,
        TokenKind::Code,
        TokenKind::Strikethrough,
    ];

    /// The matcher for this token class
    pub fn matcher(&self) -> &'static Regex {
        match self {
            TokenKind::Bold => &BOLD_REGEX,
            TokenKind::Italic => &ITALIC_REGEX,
            TokenKind::Link => &LINK_REGEX,
            TokenKind::Code => &CODE_REGEX,
            TokenKind::Strikethrough => &STRIKETHROUGH_REGEX,
        }
    }

    /// Replace every span of this class with its inner content
    fn strip(&self, text: &str) -> String {
        match self {
            // Two alternation branches, one capture group each
            TokenKind::Bold | TokenKind::Italic => self
                .matcher()
                .replace_all(text, |caps: &Captures| {
                    caps.get(1)
                        .or_else(|| caps.get(2))
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default()
                })
                .into_owned(),
            // Group 1 is the content; a link's URL is discarded
            TokenKind::Link | TokenKind::Code | TokenKind::Strikethrough => {
                self.matcher().replace_all(text, "$1").into_owned()
            }
        }
    }

    /// Classify a raw token by its leading delimiter
    fn classify(raw: &str) -> TokenKind {
        if raw.starts_with("**") || raw.starts_with("__") {
            TokenKind::Bold
        } else if raw.starts_with("~~") {
            TokenKind::Strikethrough
        } else if raw.starts_with('[') {
            TokenKind::Link
        } else if raw.starts_with('`') {
            TokenKind::Code
        } else {
            TokenKind::Italic
        }
    }

    /// Extract the inner content of a raw token of this class
    fn inner(&self, raw: &str) -> String {
        let caps = match self.matcher().captures(raw) {
            Some(caps) => caps,
            None => return raw.to_string(),
        };
        match self {
            TokenKind::Bold | TokenKind::Italic => caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            TokenKind::Link | TokenKind::Code | TokenKind::Strikethrough => caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// One Markdown formatting span found in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingToken {
    /// Token class
    pub kind: TokenKind,

    /// Byte offset of the span start in the original text
    pub start: usize,

    /// Byte offset one past the span end in the original text
    pub end: usize,

    /// The span exactly as written, delimiters (and a link's URL) included
    pub raw: String,

    /// The content inside the delimiters
    pub inner: String,
}

/// Remove all Markdown formatting from a text.
///
/// Classes are stripped in `TokenKind::STRIP_ORDER`; each pass operates
/// on the output of the previous one. The result is stable under
/// repeated application.
pub fn remove_markdown(text: &str) -> String {
    TokenKind::STRIP_ORDER
        .iter()
        .fold(text.to_string(), |stripped, kind| kind.strip(&stripped))
}

/// Find all formatting tokens in a text, in order of appearance.
///
/// Spans are non-overlapping and strictly increasing in `start`.
/// Unbalanced or malformed delimiters simply do not match and are left
/// as literal content.
pub fn tokenize(text: &str) -> Vec<FormattingToken> {
    TOKEN_REGEX
        .find_iter(text)
        .map(|m| {
            let raw = m.as_str();
            let kind = TokenKind::classify(raw);
            FormattingToken {
                kind,
                start: m.start(),
                end: m.end(),
                raw: raw.to_string(),
                inner: kind.inner(raw),
            }
        })
        .collect()
}
