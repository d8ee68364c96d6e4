/*!
 * Uniform entry point for translation calls.
 *
 * The gateway wraps the external backend with the resolved model and
 * language pair. It is constructed once at service initialization with
 * an injected backend and is read-only thereafter; it adds no caching
 * and no retries, so backend failures propagate unchanged.
 */

use log::debug;
use std::sync::Arc;

use crate::backend::TranslationBackend;
use crate::errors::TranslateError;

/// Gateway delegating translation calls to the injected backend
#[derive(Clone)]
pub struct TranslationGateway {
    /// Backend implementation, shared across requests
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationGateway {
    /// Create a gateway around the given backend
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// Translate a single text string
    pub async fn translate(
        &self,
        model_id: &str,
        text: &str,
        src: &str,
        tgt: &str,
    ) -> Result<String, TranslateError> {
        debug!("translate {} -> {} via {} ({} chars)", src, tgt, model_id, text.len());
        Ok(self.backend.invoke(model_id, text, src, tgt).await?)
    }

    /// Translate several texts, strictly sequentially.
    ///
    /// One backend call per item; the output order matches the input
    /// order. A failing item aborts the batch.
    pub async fn translate_batch(
        &self,
        model_id: &str,
        texts: &[String],
        src: &str,
        tgt: &str,
    ) -> Result<Vec<String>, TranslateError> {
        let mut translated = Vec::with_capacity(texts.len());
        for text in texts {
            translated.push(self.translate(model_id, text, src, tgt).await?);
        }
        Ok(translated)
    }
}
