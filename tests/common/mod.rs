/*!
 * Common test utilities for the markbridge test suite
 */

use markbridge::catalog::{InMemoryCatalog, ModelEntry};


/// Supported languages used across tests
pub fn test_languages() -> Vec<String> {
    vec![
        "eng_Latn".to_string(),
        "kin_Latn".to_string(),
        "fra_Latn".to_string(),
    ]
}

/// A catalog with a loaded bilingual eng->kin model, an unloaded
/// bilingual eng->fra model, and a loaded multilingual model covering
/// both pairs
pub fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(
        test_languages(),
        vec![
            ModelEntry {
                model_id: "eng-kin".to_string(),
                src_langs: vec!["eng_Latn".to_string()],
                tgt_langs: vec!["kin_Latn".to_string()],
                multilingual: false,
                loaded: true,
            },
            ModelEntry {
                model_id: "eng-fra".to_string(),
                src_langs: vec!["eng_Latn".to_string()],
                tgt_langs: vec!["fra_Latn".to_string()],
                multilingual: false,
                loaded: false,
            },
            ModelEntry {
                model_id: "multi-1".to_string(),
                src_langs: vec!["eng_Latn".to_string(), "fra_Latn".to_string()],
                tgt_langs: vec!["kin_Latn".to_string(), "fra_Latn".to_string()],
                multilingual: true,
                loaded: true,
            },
        ],
    )
}

/// Word replacements for a deterministic English -> Kinyarwanda mock
pub fn eng_kin_replacements() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Hello", "Muraho"),
        ("world", "isi"),
        ("Hi", "Muraho"),
        ("there", "ngaho"),
        ("good", "byiza"),
    ]
}

/// Word replacements for a deterministic English -> French mock where
/// every replacement keeps the source word's length
pub fn eng_fra_replacements() -> Vec<(&'static str, &'static str)> {
    vec![("Hello", "Salut"), ("world", "monde"), ("cat", "une")]
}
