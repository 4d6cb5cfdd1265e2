//! Translation from the feed, and the Gemini client against a local HTTP
//! server.

mod common;

use std::time::Duration;

use common::{key, press, pump_until, signed_in_app, TestAppBuilder};
use crossterm::event::KeyCode;
use kizuna::adapters::mock::TranslatorCall;
use kizuna::adapters::{MockTranslator, ReqwestHttpClient};
use kizuna::error::TranslationError;
use kizuna::translation::{
    GeminiTranslator, TargetLanguage, Translator, INTERPRETATION_FAILED, TRANSLATION_FAILED,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

#[tokio::test]
async fn test_post_translation_toggles_without_refetch() {
    let translator = MockTranslator::new();
    translator.set_translation(
        "新しいデザインシステムを公開しました！フィードバックお待ちしています。",
        "我们发布了新的设计系统！",
    );
    let (mut app, mut rx) = TestAppBuilder::new().with_translator(translator.clone()).build();

    press(&mut app, &[key(KeyCode::Char('t'))]);
    assert!(app.card("p1").unwrap().translating);
    assert!(
        pump_until(&mut app, &mut rx, WAIT, |app| !app.card("p1").unwrap().translating).await
    );
    let card = app.card("p1").unwrap();
    assert_eq!(card.visible_translation(), Some("我们发布了新的设计系统！"));

    press(&mut app, &[key(KeyCode::Char('t'))]);
    assert_eq!(app.card("p1").unwrap().visible_translation(), None);
    press(&mut app, &[key(KeyCode::Char('t'))]);
    assert!(app.card("p1").unwrap().visible_translation().is_some());

    assert_eq!(
        translator.calls(),
        vec![TranslatorCall::Translate {
            text: "新しいデザインシステムを公開しました！フィードバックお待ちしています。".into(),
            target: TargetLanguage::Chinese,
        }]
    );
}

#[tokio::test]
async fn test_failed_post_translation_leaves_card_clean() {
    let (mut app, mut rx) = TestAppBuilder::new()
        .with_translator(MockTranslator::failing())
        .build();

    press(&mut app, &[key(KeyCode::Char('t'))]);
    assert!(
        pump_until(&mut app, &mut rx, WAIT, |app| !app.card("p1").unwrap().translating).await
    );
    let card = app.card("p1").unwrap();
    assert!(card.translated.is_none());
    assert!(!card.show_translation);
}

#[tokio::test]
async fn test_comment_translation_and_show_original() {
    let (mut app, mut rx) = signed_in_app();

    press(&mut app, &[key(KeyCode::Char(']'))]);
    let comment_id = app.selected_comment_id().expect("p1 has comments");
    let original = comment(&app, &comment_id).text.clone();

    press(&mut app, &[key(KeyCode::Char('y'))]);
    assert!(comment(&app, &comment_id).is_translating);
    assert!(
        pump_until(&mut app, &mut rx, WAIT, |app| {
            !comment(app, &comment_id).is_translating
        })
        .await
    );
    let translated = comment(&app, &comment_id);
    assert!(translated.translation.is_some());
    assert_eq!(translated.original_text.as_deref(), Some(original.as_str()));

    // A second request for an already translated comment is refused.
    press(&mut app, &[key(KeyCode::Char('y'))]);
    assert!(!comment(&app, &comment_id).is_translating);

    press(&mut app, &[key(KeyCode::Char('o'))]);
    let restored = comment(&app, &comment_id);
    assert_eq!(restored.text, original);
    assert!(restored.translation.is_none());
}

fn comment<'a>(app: &'a kizuna::app::App, id: &str) -> &'a kizuna::models::Comment {
    app.store
        .get("p1")
        .and_then(|p| p.comments.iter().find(|c| c.id == id))
        .expect("comment exists")
}

#[tokio::test]
async fn test_gemini_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("Translate the following text to Japanese"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("  こんにちは  ")))
        .expect(1)
        .mount(&server)
        .await;

    let translator = GeminiTranslator::new(ReqwestHttpClient::new(), Some("test-key".into()))
        .with_base_url(server.uri());
    let text = translator
        .translate("Hello", TargetLanguage::Japanese)
        .await
        .unwrap();
    assert_eq!(text, "こんにちは");
}

#[tokio::test]
async fn test_gemini_errors_fold_into_sentinels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let translator = GeminiTranslator::new(ReqwestHttpClient::new(), Some("test-key".into()))
        .with_base_url(server.uri());
    assert!(matches!(
        translator.translate("Hello", TargetLanguage::Chinese).await,
        Err(TranslationError::Status { status: 503, .. })
    ));
    assert_eq!(
        translator.translate_text("Hello", TargetLanguage::Chinese).await,
        TRANSLATION_FAILED
    );
    assert_eq!(translator.live_interpretation("Hello").await, INTERPRETATION_FAILED);
}

#[tokio::test]
async fn test_gemini_without_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("x")))
        .expect(0)
        .mount(&server)
        .await;

    let translator =
        GeminiTranslator::new(ReqwestHttpClient::new(), None).with_base_url(server.uri());
    assert!(matches!(
        translator.interpret("你好").await,
        Err(TranslationError::MissingApiKey)
    ));
}
