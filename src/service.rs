/*!
 * Translation service facade.
 *
 * Ties the resolver, the gateway, and the two document pipelines together
 * behind one set of request/response types. Every operation resolves the
 * model first, before any translation call is made, so resolution errors
 * never leave partial work behind.
 */

use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::TranslationBackend;
use crate::catalog::ModelCatalog;
use crate::errors::TranslateError;
use crate::gateway::TranslationGateway;
use crate::html_tree::{default_skip, parse_html, serialize_html, translate_tree};
use crate::markdown::MarkdownTranslator;
use crate::resolver::{LanguagePair, Resolution, resolve};

/// A single-text translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Raw text to translate (plain, Markdown, or HTML)
    pub text: String,

    /// Requested source language code
    pub src: String,

    /// Requested target language code
    pub tgt: String,

    /// Optional alternate-model identifier
    #[serde(default)]
    pub alt: Option<String>,

    /// Multilingual flag. External contract quirk: this is a string
    /// compared case-sensitively against the literal `"True"`; any other
    /// value, including `"true"`, means false.
    #[serde(default)]
    pub use_multi: Option<String>,
}

/// A batch translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTranslationRequest {
    /// Texts to translate, order-significant
    pub texts: Vec<String>,

    /// Requested source language code
    pub src: String,

    /// Requested target language code
    pub tgt: String,

    /// Optional alternate-model identifier
    #[serde(default)]
    pub alt: Option<String>,

    /// Multilingual flag, same string quirk as `TranslationRequest`
    #[serde(default)]
    pub use_multi: Option<String>,
}

/// A single-text translation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated text
    pub translation: String,
}

/// A batch translation response; order matches the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTranslationResponse {
    /// Translated texts
    pub translation: Vec<String>,
}

/// The supported languages and registered models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    /// Supported language codes
    pub languages: Vec<String>,

    /// Registered model ids
    pub models: Vec<String>,
}

/// The literal the multilingual request flag is compared against
const USE_MULTI_LITERAL: &str = "True";

/// Main translation service
pub struct TranslationService {
    /// Model catalog, read-only within a request
    catalog: Arc<dyn ModelCatalog>,

    /// Gateway around the injected backend, built once at service init
    gateway: TranslationGateway,
}

impl TranslationService {
    /// Create a service around a catalog and a backend
    pub fn new(catalog: Arc<dyn ModelCatalog>, backend: Arc<dyn TranslationBackend>) -> Self {
        Self {
            catalog,
            gateway: TranslationGateway::new(backend),
        }
    }

    /// Resolve the model for a request's language parameters
    fn resolve_request(
        &self,
        src: &str,
        tgt: &str,
        alt: Option<&str>,
        use_multi: Option<&str>,
    ) -> Result<Resolution, TranslateError> {
        let pair = LanguagePair {
            src: src.to_string(),
            tgt: tgt.to_string(),
            alt_id: alt.map(|a| a.to_string()),
            use_multi: use_multi == Some(USE_MULTI_LITERAL),
        };
        resolve(self.catalog.as_ref(), &pair)
    }

    /// Translate a single plain-text sentence
    pub async fn translate_sentence(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let resolution = self.resolve_request(
            &request.src,
            &request.tgt,
            request.alt.as_deref(),
            request.use_multi.as_deref(),
        )?;

        let translation = self
            .gateway
            .translate(&resolution.model_id, &request.text, &resolution.src, &resolution.tgt)
            .await?;

        Ok(TranslationResponse { translation })
    }

    /// Translate a batch of texts, preserving order
    pub async fn translate_batch(
        &self,
        request: &BatchTranslationRequest,
    ) -> Result<BatchTranslationResponse, TranslateError> {
        let resolution = self.resolve_request(
            &request.src,
            &request.tgt,
            request.alt.as_deref(),
            request.use_multi.as_deref(),
        )?;

        info!(
            "Translating batch of {} texts with {}",
            request.texts.len(),
            resolution.model_id
        );

        let translation = self
            .gateway
            .translate_batch(&resolution.model_id, &request.texts, &resolution.src, &resolution.tgt)
            .await?;

        Ok(BatchTranslationResponse { translation })
    }

    /// Translate a Markdown text, preserving formatting tokens
    pub async fn translate_markdown(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let resolution = self.resolve_request(
            &request.src,
            &request.tgt,
            request.alt.as_deref(),
            request.use_multi.as_deref(),
        )?;

        let translator = MarkdownTranslator::new(self.gateway.clone());
        let translation = translator
            .translate(&request.text, &resolution.model_id, &resolution.src, &resolution.tgt)
            .await?;

        Ok(TranslationResponse { translation })
    }

    /// Translate the text content of an HTML page, preserving the markup
    pub async fn translate_html(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let resolution = self.resolve_request(
            &request.src,
            &request.tgt,
            request.alt.as_deref(),
            request.use_multi.as_deref(),
        )?;

        let dom = parse_html(request.text.as_bytes())?;
        translate_tree(
            &dom.document,
            &self.gateway,
            &resolution.model_id,
            &resolution.src,
            &resolution.tgt,
            &default_skip,
        )
        .await?;

        Ok(TranslationResponse {
            translation: serialize_html(&dom),
        })
    }

    /// List the supported languages and registered models
    pub fn languages(&self) -> LanguagesResponse {
        LanguagesResponse {
            languages: self.catalog.language_codes(),
            models: self.catalog.model_ids(),
        }
    }
}
