/*!
 * Markdown-aware translation.
 *
 * This module splits a text into formatting tokens and plain content,
 * translates the content, and splices translated content back into the
 * original formatting:
 *
 * - `tokens`: the five supported token classes, stripping and scanning
 * - `translator`: the two-pass translate-and-reapply algorithm
 */

pub use self::tokens::{FormattingToken, TokenKind, remove_markdown, tokenize};
pub use self::translator::MarkdownTranslator;

pub mod tokens;
pub mod translator;
