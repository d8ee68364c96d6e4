/*!
 * Translation backend implementations.
 *
 * The backend is the external collaborator that actually performs the
 * translation. This core treats it as a black box behind the
 * `TranslationBackend` trait: one blocking, uninterruptible invocation
 * per call, no retries and no caching on this side of the seam.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;

/// Common trait for translation backends
///
/// Implementations receive the resolved model id together with the
/// normalized language pair and return the translated text.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate one text with the given model
    ///
    /// # Arguments
    /// * `model_id` - Resolved model identifier
    /// * `text` - Text to translate
    /// * `src` - Normalized source language code
    /// * `tgt` - Normalized target language code
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The translated text or an error
    async fn invoke(
        &self,
        model_id: &str,
        text: &str,
        src: &str,
        tgt: &str,
    ) -> Result<String, BackendError>;
}

pub mod http;
