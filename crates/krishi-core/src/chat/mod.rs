//! Conversation Manager.
//!
//! The [`ConversationManager`] owns the chat history and talks to the remote
//! model through a [`ChatBackend`]. Speech output and microphone input are
//! host capabilities injected as [`Speaker`] and [`Microphone`]; hosts without
//! them use [`SilentSpeaker`] and [`NoMicrophone`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use krishi_core::chat::{ConversationManager, HttpBackend};
//! use krishi_core::models::Language;
//!
//! # async fn run() -> krishi_core::Result<()> {
//! let backend = HttpBackend::builder().build()?;
//! let chat = ConversationManager::builder(Arc::new(backend))
//!     .with_language(Language::English)
//!     .build();
//!
//! chat.submit("When should I water tomato seedlings?").await;
//! for message in chat.messages().iter() {
//!     println!("{}", message.content);
//! }
//! # Ok(())
//! # }
//! ```

mod backend;
mod conversation;
mod microphone;
mod speech;

pub use backend::{
    AudioClip, ChatBackend, ChatReply, HttpBackend, HttpBackendBuilder, VoiceReply, BASE_URL_ENV,
    DEFAULT_BASE_URL,
};
pub use conversation::{
    apology, ConversationBuilder, ConversationManager, NO_REPLY_TEXT, VOICE_DEMO_PROMPT,
    VOICE_MESSAGE_TEXT,
};
pub use microphone::{FileMicrophone, Microphone, NoMicrophone, Recording};
pub use speech::{select_voice, SilentSpeaker, Speaker, SpeechController, Utterance, Voice, SPEECH_RATE};
