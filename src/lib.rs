/*!
 * # markbridge - Structure-Preserving Machine Translation
 *
 * A Rust library for translating the natural-language content of
 * Markdown and HTML documents while preserving their structural
 * formatting verbatim.
 *
 * ## Features
 *
 * - Markdown-aware translation: strip formatting, translate the plain
 *   content, reapply formatting token by token (bold, italic, link,
 *   inline code, strikethrough)
 * - HTML-tree-aware translation: replace only leaf text nodes, skipping
 *   script and style subtrees at any depth
 * - Language-pair model resolution with multilingual fallback rules
 * - Sequential, order-preserving batch translation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `catalog`: Model registry and language catalog
 * - `resolver`: Language-pair to model resolution
 * - `markdown`: Markdown-aware translation:
 *   - `markdown::tokens`: Formatting token classes and stripping
 *   - `markdown::translator`: Two-pass translate-and-reapply
 * - `html_tree`: HTML document-tree translation
 * - `gateway`: Uniform entry point wrapping the backend
 * - `backend`: Translation backend implementations:
 *   - `backend::http`: HTTP client for an inference server
 * - `service`: Request-level facade over all pipelines
 * - `language_utils`: FLORES-200 language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod backend;
pub mod catalog;
pub mod errors;
pub mod gateway;
pub mod html_tree;
pub mod language_utils;
pub mod markdown;
pub mod resolver;
pub mod service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use backend::TranslationBackend;
pub use catalog::{InMemoryCatalog, ModelCatalog, ModelEntry};
pub use errors::{AppError, BackendError, TranslateError};
pub use gateway::TranslationGateway;
pub use markdown::{FormattingToken, MarkdownTranslator, TokenKind, remove_markdown, tokenize};
pub use resolver::{LanguagePair, Resolution, resolve};
pub use service::TranslationService;
