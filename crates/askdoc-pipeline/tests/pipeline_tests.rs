//! End-to-end pipeline tests against the deterministic mock provider
//!
//! No test here touches the network; the remote service is always a
//! [`MockProvider`].

use askdoc_domain::UploadedDocument;
use askdoc_extract::{ExtractError, ExtractorRegistry};
use askdoc_llm::{MockFailure, MockProvider};
use askdoc_pipeline::{
    Pipeline, PipelineError, PipelineSettings, PromptBuilder, AUTHENTICATION_FALLBACK,
    EMPTY_RESPONSE_FALLBACK, SYSTEM_INSTRUCTION, TRANSPORT_FALLBACK,
};

fn pipeline(provider: MockProvider) -> Pipeline<MockProvider> {
    Pipeline::new(provider, PipelineSettings::default())
}

#[tokio::test]
async fn full_pipeline_answers_from_a_text_document() {
    let provider = MockProvider::new("The sky is blue.");
    let p = pipeline(provider.clone());

    let doc = UploadedDocument::new("facts.txt", b"The sky is blue.".to_vec());
    let answer = p.ask(&doc, "What color is the sky?").await.unwrap();

    assert_eq!(answer, "The sky is blue.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn markdown_documents_are_supported() {
    let p = pipeline(MockProvider::new("It is a heading."));

    let doc = UploadedDocument::new("notes.md", b"# The Heading\nBody text.".to_vec());
    let answer = p.ask(&doc, "What is the first line?").await.unwrap();

    assert_eq!(answer, "It is a heading.");
}

#[tokio::test]
async fn unsupported_extension_halts_before_the_provider_is_called() {
    let provider = MockProvider::new("should never be returned");
    let p = pipeline(provider.clone());

    let doc = UploadedDocument::new("table.csv", b"a,b,c".to_vec());
    let result = p.ask(&doc, "What is in the table?").await;

    assert!(matches!(
        result,
        Err(PipelineError::Extract(ExtractError::UnsupportedFormat(_)))
    ));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn the_prompt_carries_instruction_document_and_question() {
    // The mock echoes only for the exact expected prompt, proving the
    // pipeline sends precisely what the builder assembles
    let text = "The sky is blue.";
    let question = "What color is the grass?";
    let expected_prompt = PromptBuilder::new(text, question).build();

    assert!(expected_prompt.contains(SYSTEM_INSTRUCTION));
    assert!(expected_prompt.contains(text));
    assert!(expected_prompt.contains(question));

    let mut provider = MockProvider::new("wrong prompt reached the provider");
    provider.add_response(expected_prompt, "The document does not state the grass color.");

    let p = pipeline(provider);
    let doc = UploadedDocument::new("sky.txt", text.as_bytes().to_vec());
    let answer = p.ask(&doc, question).await.unwrap();

    // The model's "not stated" phrasing passes through the normalizer intact
    assert_eq!(answer, "The document does not state the grass color.");
}

#[tokio::test]
async fn identical_inputs_yield_identical_output() {
    let p = pipeline(MockProvider::new("Deterministic answer."));
    let doc = UploadedDocument::new("doc.txt", b"Stable content.".to_vec());

    let first = p.ask(&doc, "Same question?").await.unwrap();
    let second = p.ask(&doc, "Same question?").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn invalid_credential_normalizes_to_the_authentication_fallback() {
    let p = pipeline(MockProvider::failing(MockFailure::Authentication));
    let doc = UploadedDocument::new("doc.txt", b"content".to_vec());

    let answer = p.ask(&doc, "anything").await.unwrap();

    assert_eq!(answer, AUTHENTICATION_FALLBACK);
    assert_ne!(answer, TRANSPORT_FALLBACK);
}

#[tokio::test]
async fn transport_failure_normalizes_distinctly_from_authentication() {
    let p = pipeline(MockProvider::failing(MockFailure::Transport));
    let doc = UploadedDocument::new("doc.txt", b"content".to_vec());

    let answer = p.ask(&doc, "anything").await.unwrap();

    assert_eq!(answer, TRANSPORT_FALLBACK);
}

#[tokio::test]
async fn empty_document_still_builds_a_valid_prompt() {
    // An image-only PDF extracts to empty text; the pipeline must still ask,
    // and an empty model reply must read differently from an extraction error
    let provider = MockProvider::failing(MockFailure::EmptyResponse);
    let p = pipeline(provider.clone());

    let doc = UploadedDocument::new("empty.txt", Vec::new());
    let answer = p.ask(&doc, "Is anything written here?").await.unwrap();

    assert_eq!(provider.call_count(), 1);
    assert_eq!(answer, EMPTY_RESPONSE_FALLBACK);
}

#[tokio::test]
async fn extracted_text_can_be_reused_across_questions() {
    let provider = MockProvider::new("Reply.");
    let p = pipeline(provider.clone());

    let doc = UploadedDocument::new("doc.txt", b"Shared snapshot.".to_vec());
    let text = p.extract(&doc).unwrap();

    p.answer(&text, "first question").await;
    p.answer(&text, "second question").await;
    p.answer(&text, "third question").await;

    // One provider call per question, no re-extraction required
    assert_eq!(provider.call_count(), 3);
    assert_eq!(text.as_str(), "Shared snapshot.");
}

#[tokio::test]
async fn a_missing_capability_degrades_only_that_format() {
    let registry = ExtractorRegistry::empty()
        .register(std::sync::Arc::new(askdoc_extract::PlainTextExtractor::new()));
    let p = pipeline(MockProvider::new("ok")).with_registry(registry);

    let pdf = UploadedDocument::new("paper.pdf", b"%PDF-1.5".to_vec());
    let result = p.ask(&pdf, "q").await;
    assert!(matches!(
        result,
        Err(PipelineError::Extract(ExtractError::UnsupportedFormat(_)))
    ));

    let txt = UploadedDocument::new("ok.txt", b"fine".to_vec());
    assert_eq!(p.ask(&txt, "q").await.unwrap(), "ok");
}

#[tokio::test]
async fn concurrent_questions_share_no_mutable_state() {
    let p = std::sync::Arc::new(pipeline(MockProvider::new("answer")));
    let doc = UploadedDocument::new("doc.txt", b"content".to_vec());
    let text = p.extract(&doc).unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let p = std::sync::Arc::clone(&p);
        let text = text.clone();
        handles.push(tokio::spawn(async move {
            p.answer(&text, &format!("question {}", i)).await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "answer");
    }
}
