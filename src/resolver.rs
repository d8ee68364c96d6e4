/*!
 * Model resolution for translation requests.
 *
 * Given a requested language pair plus the optional alternate-model and
 * multilingual flags, the resolver picks the concrete model id to invoke.
 * Resolution is a pure function of the catalog snapshot at call time: no
 * state is mutated, nothing is cached, and all resolution errors are
 * raised before any translation call is made.
 */

use log::{debug, warn};

use crate::catalog::{MULTILINGUAL_CODE, ModelCatalog, default_model_id};
use crate::errors::TranslateError;

/// A source/target language combination as requested by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Requested source language code
    pub src: String,

    /// Requested target language code
    pub tgt: String,

    /// Optional alternate-model identifier suffix
    pub alt_id: Option<String>,

    /// Whether the caller explicitly requested a multilingual model
    pub use_multi: bool,
}

impl LanguagePair {
    /// Create a pair with neither alternate-model nor multilingual flags
    pub fn new(src: &str, tgt: &str) -> Self {
        Self {
            src: src.to_string(),
            tgt: tgt.to_string(),
            alt_id: None,
            use_multi: false,
        }
    }
}

/// The outcome of model resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Concrete model id to invoke
    pub model_id: String,

    /// Normalized source language code
    pub src: String,

    /// Normalized target language code
    pub tgt: String,
}

/// Resolve the model to use for a language pair.
///
/// The regular (bilingual) model id is derived from the normalized pair.
/// When that model is not loaded, the caller did not ask for multilingual
/// translation, and a multilingual model serves the pair, the request is
/// silently upgraded to the multilingual model. An explicit multilingual
/// request without a multilingual candidate is an error; several
/// candidates resolve to the first in catalog order, with a warning.
pub fn resolve(catalog: &dyn ModelCatalog, pair: &LanguagePair) -> Result<Resolution, TranslateError> {
    let src = catalog.closest_language(&pair.src);
    let tgt = catalog.closest_language(&pair.tgt);
    let mut use_multi = pair.use_multi;

    let mut model_id = default_model_id(&src, &tgt, pair.alt_id.as_deref());

    let compatible_model_ids = catalog.lookup_compatible_models(&src, &tgt, pair.alt_id.as_deref());
    if compatible_model_ids.is_empty() {
        return Err(TranslateError::UnsupportedLanguagePair { src, tgt });
    }
    debug!("compatible_model_ids {:?}", compatible_model_ids);

    let regular_model_loaded = catalog.is_loaded(&model_id);
    let multilingual_ids: Vec<&String> = compatible_model_ids
        .iter()
        .filter(|id| id.starts_with(MULTILINGUAL_CODE))
        .collect();

    // Fallback-availability optimization: serve the pair from a
    // multilingual model rather than fail on an unloaded bilingual one.
    if !regular_model_loaded && !use_multi && !multilingual_ids.is_empty() {
        use_multi = true;
    }

    if use_multi {
        let first = match multilingual_ids.first() {
            Some(id) => id.as_str(),
            None => return Err(TranslateError::NoMultilingualSupport { src, tgt }),
        };
        if multilingual_ids.len() > 1 {
            warn!(
                "More than one compatible multilingual model. Choosing {} among {:?}",
                first, multilingual_ids
            );
        }
        model_id = catalog
            .pair_to_model_id(first)
            .ok_or(TranslateError::UnsupportedLanguagePair {
                src: src.clone(),
                tgt: tgt.clone(),
            })?;
    }

    debug!("model_id {}", model_id);

    Ok(Resolution { model_id, src, tgt })
}
