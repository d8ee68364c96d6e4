/*!
 * Language utilities for FLORES-200-style language codes
 *
 * Models in the catalog identify languages by FLORES-200 codes, which
 * combine an ISO 639-3 language code with an ISO 15924 script tag
 * (e.g. `eng_Latn`, `kin_Latn`). This module provides functions for
 * splitting and validating those codes, normalizing shorter ISO codes,
 * and finding the closest supported code for a requested language.
 */

use anyhow::{Result, anyhow};
use isolang::Language;

/// Split a FLORES-200 code into its language and script parts
pub fn split_flores_code(code: &str) -> Option<(&str, &str)> {
    let (lang, script) = code.split_once('_')?;
    if lang.is_empty() || script.is_empty() {
        return None;
    }
    Some((lang, script))
}

/// Normalize a language code to ISO 639-3 (3-letter) format
///
/// Accepts ISO 639-1 (2-letter) codes, ISO 639-3 (3-letter) codes, and
/// full FLORES-200 codes (the script tag is dropped).
pub fn normalize_to_iso639_3(code: &str) -> Result<String> {
    let trimmed = code.trim();

    // Drop the script tag of a FLORES-200 code before normalizing
    let bare = match split_flores_code(trimmed) {
        Some((lang, _script)) => lang,
        None => trimmed,
    };
    let lowered = bare.to_lowercase();

    if lowered.len() == 2 {
        if let Some(lang) = Language::from_639_1(&lowered) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if lowered.len() == 3 && Language::from_639_3(&lowered).is_some() {
        return Ok(lowered);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Check if two language codes refer to the same language, ignoring
/// script tags and ISO 639-1/639-3 differences
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let normalized1 = match normalize_to_iso639_3(code1) {
        Ok(n) => n,
        Err(_) => return false,
    };

    let normalized2 = match normalize_to_iso639_3(code2) {
        Ok(n) => n,
        Err(_) => return false,
    };

    normalized1 == normalized2
}

/// Find the supported code closest to the requested one
///
/// An exact match wins. Otherwise the first supported code whose language
/// part matches the requested language is returned, so `en` and `eng`
/// both map to `eng_Latn` when that is the supported form.
pub fn closest_supported<'a>(code: &str, supported: &'a [String]) -> Option<&'a str> {
    if let Some(exact) = supported.iter().find(|s| s.as_str() == code) {
        return Some(exact.as_str());
    }

    let requested = normalize_to_iso639_3(code).ok()?;
    supported
        .iter()
        .find(|s| {
            let lang = match split_flores_code(s) {
                Some((lang, _)) => lang,
                None => s.as_str(),
            };
            lang == requested
        })
        .map(|s| s.as_str())
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_iso639_3(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
