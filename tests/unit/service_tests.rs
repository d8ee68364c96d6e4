/*!
 * Tests for the translation service facade
 */

use std::sync::Arc;

use markbridge::errors::TranslateError;
use markbridge::service::{BatchTranslationRequest, TranslationRequest, TranslationService};

use crate::common::mock_backend::MockBackend;
use crate::common::{eng_kin_replacements, test_catalog};

fn request(text: &str) -> TranslationRequest {
    TranslationRequest {
        text: text.to_string(),
        src: "eng_Latn".to_string(),
        tgt: "kin_Latn".to_string(),
        alt: None,
        use_multi: None,
    }
}

fn service_with(backend: MockBackend) -> TranslationService {
    TranslationService::new(Arc::new(test_catalog()), Arc::new(backend))
}

/// Test plain sentence translation with the resolved model id
#[tokio::test]
async fn test_translate_sentence_withServedPair_shouldUseResolvedModel() {
    let backend = MockBackend::with_replacements(&eng_kin_replacements());
    let tracker = backend.tracker();
    let service = service_with(backend);

    let response = service.translate_sentence(&request("Hello world")).await.unwrap();

    assert_eq!(response.translation, "Muraho isi");
    assert_eq!(tracker.lock().unwrap().last_model_id.as_deref(), Some("eng-kin"));
}

/// Test the case-sensitive multilingual flag quirk: only the literal
/// "True" enables multilingual selection
#[tokio::test]
async fn test_translate_sentence_withUseMultiLiterals_shouldOnlyHonorExactTrue() {
    let backend = MockBackend::new();
    let tracker = backend.tracker();
    let service = service_with(backend);

    let mut multi_request = request("Hello");
    multi_request.use_multi = Some("True".to_string());
    service.translate_sentence(&multi_request).await.unwrap();
    assert_eq!(tracker.lock().unwrap().last_model_id.as_deref(), Some("multi-1"));

    let mut lowercase_request = request("Hello");
    lowercase_request.use_multi = Some("true".to_string());
    service.translate_sentence(&lowercase_request).await.unwrap();
    assert_eq!(tracker.lock().unwrap().last_model_id.as_deref(), Some("eng-kin"));
}

/// Test that resolution failures happen before any backend call
#[tokio::test]
async fn test_translate_sentence_withUnsupportedPair_shouldFailBeforeTranslating() {
    let backend = MockBackend::new();
    let tracker = backend.tracker();
    let service = service_with(backend);

    let mut unsupported = request("Hello");
    unsupported.src = "kin_Latn".to_string();
    unsupported.tgt = "eng_Latn".to_string();

    let result = service.translate_sentence(&unsupported).await;

    assert!(matches!(result, Err(TranslateError::UnsupportedLanguagePair { .. })));
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

/// Test batch translation order and per-item calls
#[tokio::test]
async fn test_translate_batch_withSeveralTexts_shouldPreserveOrder() {
    let backend = MockBackend::with_replacements(&eng_kin_replacements());
    let tracker = backend.tracker();
    let service = service_with(backend);

    let batch = BatchTranslationRequest {
        texts: vec!["Hello".to_string(), "world".to_string(), "there".to_string()],
        src: "eng_Latn".to_string(),
        tgt: "kin_Latn".to_string(),
        alt: None,
        use_multi: None,
    };

    let response = service.translate_batch(&batch).await.unwrap();

    assert_eq!(
        response.translation,
        vec!["Muraho".to_string(), "isi".to_string(), "ngaho".to_string()]
    );
    assert_eq!(tracker.lock().unwrap().call_count, 3);
}

/// Test that a failing item aborts the whole batch
#[tokio::test]
async fn test_translate_batch_withFailingItem_shouldFailWholeRequest() {
    let backend = MockBackend::new();
    backend.fail_on_call(2);
    let service = service_with(backend);

    let batch = BatchTranslationRequest {
        texts: vec!["one".to_string(), "two".to_string(), "three".to_string()],
        src: "eng_Latn".to_string(),
        tgt: "kin_Latn".to_string(),
        alt: None,
        use_multi: None,
    };

    let result = service.translate_batch(&batch).await;

    assert!(matches!(result, Err(TranslateError::Backend(_))));
}

/// Test the Markdown route end to end
#[tokio::test]
async fn test_translate_markdown_withBoldText_shouldPreserveDelimiters() {
    let backend = MockBackend::with_replacements(&eng_kin_replacements());
    let service = service_with(backend);

    let response = service
        .translate_markdown(&request("Hello **world**!"))
        .await
        .unwrap();

    assert!(response.translation.contains("**isi**"), "got {:?}", response.translation);
}

/// Test the HTML route end to end
#[tokio::test]
async fn test_translate_html_withScript_shouldTranslateOnlyTextNodes() {
    let backend = MockBackend::with_replacements(&eng_kin_replacements());
    let service = service_with(backend);

    let response = service
        .translate_html(&request("<div>Hi <script>var x=1;</script> there</div>"))
        .await
        .unwrap();

    assert!(response.translation.contains("Muraho "));
    assert!(response.translation.contains(" ngaho"));
    assert!(response.translation.contains("var x=1;"));
}

/// Test the languages listing
#[tokio::test]
async fn test_languages_shouldListCatalogContents() {
    let service = service_with(MockBackend::new());

    let listing = service.languages();

    assert_eq!(listing.languages.len(), 3);
    assert!(listing.models.contains(&"multi-1".to_string()));
}
