//! Exercises [`HttpBackend`] against a local axum server.

use axum::{
    extract::Multipart,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use krishi_core::{
    chat::{AudioClip, ChatBackend, HttpBackend},
    models::Language,
    KrishiError,
};
use serde_json::{json, Value};

async fn chat(Json(body): Json<Value>) -> Json<Value> {
    let message = body["message"].as_str().unwrap_or_default();
    Json(json!({
        "reply_en": format!("echo: {message}"),
        "reply_ml": "മറുപടി",
    }))
}

async fn voice_demo(mut multipart: Multipart) -> Json<Value> {
    let mut prompt = String::new();
    let mut audio_bytes = 0;
    let mut audio_type = String::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        match field.name() {
            Some("prompt") => prompt = field.text().await.unwrap(),
            Some("audio") => {
                audio_type = field.content_type().unwrap_or_default().to_string();
                audio_bytes = field.bytes().await.unwrap().len();
            }
            _ => {}
        }
    }
    Json(json!({
        "reply_ml": format!("{audio_bytes} {audio_type}"),
        "reply_en": prompt,
    }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "model unavailable")
}

/// Starts the fake API and returns its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });
    format!("http://{addr}/api")
}

fn backend(base_url: &str) -> HttpBackend {
    HttpBackend::builder()
        .with_base_url(Some(base_url))
        .build()
        .expect("Failed to build backend")
}

#[tokio::test]
async fn test_chat_posts_json() {
    let base = spawn_server(Router::new().route("/api/chat", post(chat))).await;

    let reply = backend(&base).chat("hello").await.expect("chat failed");

    assert_eq!(reply.reply_en.as_deref(), Some("echo: hello"));
    assert_eq!(reply.best_text(Language::Malayalam), Some("മറുപടി"));
    assert_eq!(reply.reply, None);
}

#[tokio::test]
async fn test_voice_demo_posts_multipart() {
    let base = spawn_server(Router::new().route("/api/voice-demo", post(voice_demo))).await;
    let http = backend(&base);

    let clip = AudioClip::webm(vec![1, 2, 3, 4]);
    let with_audio = http
        .voice_demo(Some(&clip), "advise")
        .await
        .expect("voice failed");
    assert_eq!(with_audio.reply_ml, "4 audio/webm");
    assert_eq!(with_audio.reply_en, "advise");

    let prompt_only = http.voice_demo(None, "advise").await.expect("voice failed");
    assert_eq!(prompt_only.reply_ml, "0 ");
}

#[tokio::test]
async fn test_non_success_status_maps_to_backend_error() {
    let base = spawn_server(Router::new().route("/api/chat", post(broken))).await;

    let err = backend(&base).chat("hello").await.unwrap_err();

    match err {
        KrishiError::Backend { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    let err = backend(&format!("http://{addr}/api"))
        .chat("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, KrishiError::Transport { .. }));
    assert_eq!(err.kind(), krishi_core::ErrorKind::Transport);
}
