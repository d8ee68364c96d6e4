/*!
 * Model catalog: which models exist, which language pairs they serve,
 * and which of them are currently loaded.
 *
 * The catalog is read-only from the translation core's perspective. The
 * resolver queries it once per request and never caches the answer, so
 * registry updates between requests are picked up automatically.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::language_utils::closest_supported;

/// Reserved sentinel prefix identifying multilingual models.
///
/// A catalog id starting with this prefix denotes one model instance
/// serving many language pairs rather than a single bilingual pair.
pub const MULTILINGUAL_CODE: &str = "multi";

/// Compute the default (regular, bilingual) model id for a language pair.
///
/// Bilingual model ids use the short language part of the FLORES-200
/// codes, joined by `-`: `eng_Latn`/`kin_Latn` becomes `eng-kin`, with an
/// optional alternate-model suffix (`eng-kin-bt`).
pub fn default_model_id(src: &str, tgt: &str, alt_id: Option<&str>) -> String {
    let short = |code: &str| match code.split_once('_') {
        Some((lang, _script)) => lang.to_string(),
        None => code.to_string(),
    };

    match alt_id {
        Some(alt) => format!("{}-{}-{}", short(src), short(tgt), alt),
        None => format!("{}-{}", short(src), short(tgt)),
    }
}

/// Read-only interface the resolver uses to query the model registry
pub trait ModelCatalog: Send + Sync {
    /// Map a requested language code to the closest supported code.
    /// Unknown codes are passed through unchanged.
    fn closest_language(&self, code: &str) -> String;

    /// All catalog ids compatible with the given pair, in catalog order
    fn lookup_compatible_models(&self, src: &str, tgt: &str, alt_id: Option<&str>) -> Vec<String>;

    /// Whether the given model is currently loaded and ready to serve
    fn is_loaded(&self, model_id: &str) -> bool;

    /// Map a compatible catalog id to the concrete model id to invoke
    fn pair_to_model_id(&self, pair_id: &str) -> Option<String>;

    /// The supported language codes, for the languages listing
    fn language_codes(&self) -> Vec<String>;

    /// All registered model ids, for the languages listing
    fn model_ids(&self) -> Vec<String>;
}

/// One entry of the model registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Model identifier (bilingual ids are pair-derived, e.g. `eng-kin`)
    pub model_id: String,

    /// Source language codes this model accepts
    pub src_langs: Vec<String>,

    /// Target language codes this model produces
    pub tgt_langs: Vec<String>,

    /// Whether this is a multilingual model serving many pairs
    #[serde(default)]
    pub multilingual: bool,

    /// Whether the model is currently loaded
    #[serde(default)]
    pub loaded: bool,
}

impl ModelEntry {
    /// Whether this entry can translate the given pair
    fn supports_pair(&self, src: &str, tgt: &str) -> bool {
        self.src_langs.iter().any(|l| l == src) && self.tgt_langs.iter().any(|l| l == tgt)
    }
}

/// In-memory catalog backed by the deserialized model registry
pub struct InMemoryCatalog {
    /// Supported language codes, used for closest-match normalization
    languages: Vec<String>,

    /// Registry entries in declaration order; this order is the
    /// deterministic tie-break when several models serve one pair
    entries: Vec<ModelEntry>,
}

impl InMemoryCatalog {
    /// Create a catalog from a language list and registry entries
    pub fn new(languages: Vec<String>, entries: Vec<ModelEntry>) -> Self {
        Self { languages, entries }
    }

    fn entry(&self, model_id: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.model_id == model_id)
    }
}

impl ModelCatalog for InMemoryCatalog {
    fn closest_language(&self, code: &str) -> String {
        match closest_supported(code, &self.languages) {
            Some(found) => found.to_string(),
            None => {
                debug!("No supported language close to '{}', passing through", code);
                code.to_string()
            }
        }
    }

    fn lookup_compatible_models(&self, src: &str, tgt: &str, alt_id: Option<&str>) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| {
                if !entry.supports_pair(src, tgt) {
                    return false;
                }
                // An alternate-model request only matches bilingual ids
                // carrying that suffix; multilingual entries serve the
                // pair regardless.
                match alt_id {
                    Some(alt) if !entry.multilingual => {
                        entry.model_id.ends_with(&format!("-{}", alt))
                    }
                    _ => true,
                }
            })
            .map(|entry| entry.model_id.clone())
            .collect()
    }

    fn is_loaded(&self, model_id: &str) -> bool {
        self.entry(model_id).map(|e| e.loaded).unwrap_or(false)
    }

    fn pair_to_model_id(&self, pair_id: &str) -> Option<String> {
        self.entry(pair_id).map(|e| e.model_id.clone())
    }

    fn language_codes(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn model_ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.model_id.clone()).collect()
    }
}
