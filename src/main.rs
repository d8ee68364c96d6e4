// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::app_config::{Config, LogLevel};
use crate::backend::http::HttpBackend;
use crate::catalog::InMemoryCatalog;
use crate::service::{TranslationRequest, TranslationService};

mod app_config;
mod backend;
mod catalog;
mod errors;
mod gateway;
mod html_tree;
mod language_utils;
mod markdown;
mod resolver;
mod service;

/// Input document format, selecting the translation pipeline
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Plain text, translated as-is
    Plain,
    /// Markdown, formatting tokens preserved
    Markdown,
    /// HTML, markup preserved and text nodes translated
    Html,
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "markbridge", about = "Translate Markdown and HTML documents while preserving their formatting", version)]
struct CommandLineOptions {
    /// Input file to translate; reads stdin when omitted
    #[arg(value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Source language code (e.g. 'eng_Latn', 'en')
    #[arg(short, long, required_unless_present = "languages")]
    src: Option<String>,

    /// Target language code (e.g. 'kin_Latn', 'fr')
    #[arg(short, long, required_unless_present = "languages")]
    tgt: Option<String>,

    /// Alternate model identifier
    #[arg(long)]
    alt: Option<String>,

    /// Multilingual model flag; only the literal "True" enables it
    #[arg(long, value_name = "FLAG")]
    use_multi: Option<String>,

    /// Input document format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Plain)]
    format: InputFormat,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// List supported languages and models, then exit
    #[arg(long)]
    languages: bool,
}

// @struct: Console logger implementation
struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr();
            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Read the input document from the given file or from stdin
fn read_input(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            String::from_utf8(bytes).context("Input file is not valid UTF-8")
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    let config = Config::from_file(&cli.config_path)?;

    let log_level = cli.log_level.map(LogLevel::from).unwrap_or(config.log_level);
    ConsoleLogger::init(level_filter(log_level))?;

    let catalog = Arc::new(InMemoryCatalog::new(
        config.languages.clone(),
        config.models.clone(),
    ));
    let backend = Arc::new(HttpBackend::new(
        &config.backend.endpoint,
        config.backend.timeout_secs,
    )?);
    let translation_service = TranslationService::new(catalog, backend);

    if cli.languages {
        let listing = translation_service.languages();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let text = read_input(&cli.input)?;
    debug!("Read {} bytes of input", text.len());

    let request = TranslationRequest {
        text,
        src: cli.src.clone().context("Source language is required")?,
        tgt: cli.tgt.clone().context("Target language is required")?,
        alt: cli.alt.clone(),
        use_multi: cli.use_multi.clone(),
    };

    let response = match cli.format {
        InputFormat::Plain => translation_service.translate_sentence(&request).await?,
        InputFormat::Markdown => translation_service.translate_markdown(&request).await?,
        InputFormat::Html => translation_service.translate_html(&request).await?,
    };

    println!("{}", response.translation);
    Ok(())
}
