/*!
 * Two-pass Markdown translation.
 *
 * Pass one strips all formatting from the whole text and translates the
 * plain result in a single call. Pass two re-scans the original text for
 * formatting tokens, translates each token's inner content independently,
 * and splices the rewritten tokens between runs of the translated whole
 * text copied at the original span offsets.
 *
 * Known limitation: the translated whole text is not guaranteed to keep
 * the source's clause order or positions, so the cursor-copy step can
 * misplace boundaries when the translation reorders content. This is the
 * first-occurrence substring strategy; a marker-substitution scheme would
 * remove the dependency on positions but is not implemented here.
 */

use crate::errors::TranslateError;
use crate::gateway::TranslationGateway;

use super::tokens::{remove_markdown, tokenize};

/// Markdown-aware translator driving the gateway
pub struct MarkdownTranslator {
    /// Gateway carrying the injected backend
    gateway: TranslationGateway,
}

impl MarkdownTranslator {
    /// Create a translator around the given gateway
    pub fn new(gateway: TranslationGateway) -> Self {
        Self { gateway }
    }

    /// Translate a Markdown text, preserving its formatting tokens
    pub async fn translate(
        &self,
        text: &str,
        model_id: &str,
        src: &str,
        tgt: &str,
    ) -> Result<String, TranslateError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let plain_text = remove_markdown(text);
        let translated_whole = self.gateway.translate(model_id, &plain_text, src, tgt).await?;

        self.reapply(text, &translated_whole, model_id, src, tgt).await
    }

    /// Reapply the original text's formatting to the translated whole text
    async fn reapply(
        &self,
        original: &str,
        translated_whole: &str,
        model_id: &str,
        src: &str,
        tgt: &str,
    ) -> Result<String, TranslateError> {
        let mut result = String::new();
        let mut cursor = 0;

        for token in tokenize(original) {
            if cursor < token.start {
                result.push_str(slice_lossy(translated_whole, cursor, token.start));
            }

            let stripped = remove_markdown(&token.raw).trim().to_string();
            let translated_inner = self.gateway.translate(model_id, &stripped, src, tgt).await?;
            result.push_str(&token.raw.replace(&stripped, &translated_inner));

            cursor = token.end;
        }

        if cursor < original.len() {
            result.push_str(slice_lossy(translated_whole, cursor, translated_whole.len()));
        }

        Ok(result)
    }
}

/// Slice with offsets taken from a different string: clamp to length and
/// snap down to char boundaries so misaligned offsets degrade the output
/// instead of panicking.
fn slice_lossy(text: &str, start: usize, end: usize) -> &str {
    let mut start = start.min(text.len());
    let mut end = end.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    if start >= end { "" } else { &text[start..end] }
}
