/*!
 * Tests for language-pair model resolution
 */

use markbridge::catalog::{InMemoryCatalog, ModelEntry, default_model_id};
use markbridge::errors::TranslateError;
use markbridge::resolver::{LanguagePair, resolve};

use crate::common::{test_catalog, test_languages};

/// Test the default bilingual model id derivation
#[test]
fn test_default_model_id_withFloresCodes_shouldUseShortForms() {
    assert_eq!(default_model_id("eng_Latn", "kin_Latn", None), "eng-kin");
    assert_eq!(default_model_id("eng_Latn", "fra_Latn", Some("bt")), "eng-fra-bt");
    assert_eq!(default_model_id("eng", "kin", None), "eng-kin");
}

/// Test that a loaded regular model resolves to itself
#[test]
fn test_resolve_withLoadedRegularModel_shouldKeepRegularId() {
    let catalog = test_catalog();
    let pair = LanguagePair::new("eng_Latn", "kin_Latn");

    let resolution = resolve(&catalog, &pair).unwrap();

    assert_eq!(resolution.model_id, "eng-kin");
    assert_eq!(resolution.src, "eng_Latn");
    assert_eq!(resolution.tgt, "kin_Latn");
}

/// Test the silent auto-upgrade: regular model not loaded, multilingual
/// available, multi not requested
#[test]
fn test_resolve_withUnloadedRegularAndMultiAvailable_shouldAutoUpgrade() {
    let catalog = test_catalog();
    // eng-fra is registered but not loaded; multi-1 covers the pair
    let pair = LanguagePair::new("eng_Latn", "fra_Latn");

    let resolution = resolve(&catalog, &pair).unwrap();

    assert_eq!(resolution.model_id, "multi-1");
}

/// Test explicit multilingual selection
#[test]
fn test_resolve_withUseMultiRequested_shouldPickMultilingualModel() {
    let catalog = test_catalog();
    let pair = LanguagePair {
        src: "eng_Latn".to_string(),
        tgt: "kin_Latn".to_string(),
        alt_id: None,
        use_multi: true,
    };

    let resolution = resolve(&catalog, &pair).unwrap();

    assert_eq!(resolution.model_id, "multi-1");
}

/// Test that a pair with zero compatible models is rejected
#[test]
fn test_resolve_withUnsupportedPair_shouldReturnUnsupportedLanguagePair() {
    let catalog = test_catalog();
    let pair = LanguagePair::new("kin_Latn", "eng_Latn");

    let result = resolve(&catalog, &pair);

    assert!(matches!(
        result,
        Err(TranslateError::UnsupportedLanguagePair { .. })
    ));
}

/// Test multilingual request on a pair with no multilingual candidate
#[test]
fn test_resolve_withUseMultiButNoMultilingualModel_shouldFail() {
    let catalog = InMemoryCatalog::new(
        test_languages(),
        vec![ModelEntry {
            model_id: "eng-kin".to_string(),
            src_langs: vec!["eng_Latn".to_string()],
            tgt_langs: vec!["kin_Latn".to_string()],
            multilingual: false,
            loaded: true,
        }],
    );
    let pair = LanguagePair {
        src: "eng_Latn".to_string(),
        tgt: "kin_Latn".to_string(),
        alt_id: None,
        use_multi: true,
    };

    let result = resolve(&catalog, &pair);

    assert!(matches!(
        result,
        Err(TranslateError::NoMultilingualSupport { .. })
    ));
}

/// Test that several multilingual candidates resolve to the first in
/// catalog order
#[test]
fn test_resolve_withSeveralMultilingualCandidates_shouldPickFirstInCatalogOrder() {
    let multilingual = |id: &str| ModelEntry {
        model_id: id.to_string(),
        src_langs: vec!["eng_Latn".to_string()],
        tgt_langs: vec!["kin_Latn".to_string()],
        multilingual: true,
        loaded: true,
    };
    let catalog = InMemoryCatalog::new(
        test_languages(),
        vec![multilingual("multi-a"), multilingual("multi-b")],
    );
    let pair = LanguagePair {
        src: "eng_Latn".to_string(),
        tgt: "kin_Latn".to_string(),
        alt_id: None,
        use_multi: true,
    };

    let resolution = resolve(&catalog, &pair).unwrap();

    assert_eq!(resolution.model_id, "multi-a");
}

/// Test that resolution is deterministic for an identical catalog snapshot
#[test]
fn test_resolve_withSameCatalogAndRequest_shouldBeDeterministic() {
    let catalog = test_catalog();
    let pair = LanguagePair::new("eng_Latn", "fra_Latn");

    let first = resolve(&catalog, &pair).unwrap();
    let second = resolve(&catalog, &pair).unwrap();

    assert_eq!(first, second);
}

/// Test that short ISO codes are normalized before resolution
#[test]
fn test_resolve_withShortIsoCodes_shouldNormalizeToCatalogCodes() {
    let catalog = test_catalog();
    let pair = LanguagePair::new("en", "rw");

    let resolution = resolve(&catalog, &pair).unwrap();

    assert_eq!(resolution.src, "eng_Latn");
    assert_eq!(resolution.tgt, "kin_Latn");
    assert_eq!(resolution.model_id, "eng-kin");
}
