#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use krishi_core::{
    chat::{
        AudioClip, ChatBackend, ChatReply, ConversationManager, Microphone, Recording, Speaker,
        Utterance, Voice, VoiceReply,
    },
    ids::SequentialIds,
    models::Language,
    KrishiError, Result,
};
use tokio::sync::Semaphore;

/// Canned backend outcome.
pub enum Canned {
    Chat(ChatReply),
    Voice(VoiceReply),
    Status(u16, &'static str),
}

/// Backend answering from a queue of canned outcomes.
///
/// When gated, every call waits for one permit before answering.
#[derive(Default)]
pub struct MockBackend {
    queue: Mutex<VecDeque<Canned>>,
    gate: Option<Semaphore>,
    pub chat_calls: Mutex<Vec<String>>,
    pub voice_calls: Mutex<Vec<(Option<AudioClip>, String)>>,
}

impl MockBackend {
    pub fn new(outcomes: Vec<Canned>) -> Self {
        Self {
            queue: Mutex::new(outcomes.into()),
            ..Self::default()
        }
    }

    pub fn gated(outcomes: Vec<Canned>) -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new(outcomes)
        }
    }

    /// Lets one gated call answer.
    pub fn release_one(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn chat_count(&self) -> usize {
        self.chat_calls.lock().unwrap().len()
    }

    async fn next(&self) -> Option<Canned> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        self.queue.lock().unwrap().pop_front()
    }
}

fn unexpected(status: Option<(u16, &str)>) -> KrishiError {
    let (status, body) = status.unwrap_or((503, "no reply queued"));
    KrishiError::Backend {
        status,
        body: body.to_string(),
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn chat(&self, message: &str) -> Result<ChatReply> {
        self.chat_calls.lock().unwrap().push(message.to_string());
        match self.next().await {
            Some(Canned::Chat(reply)) => Ok(reply),
            Some(Canned::Status(status, body)) => Err(unexpected(Some((status, body)))),
            _ => Err(unexpected(None)),
        }
    }

    async fn voice_demo(&self, audio: Option<&AudioClip>, prompt: &str) -> Result<VoiceReply> {
        self.voice_calls
            .lock()
            .unwrap()
            .push((audio.cloned(), prompt.to_string()));
        match self.next().await {
            Some(Canned::Voice(reply)) => Ok(reply),
            Some(Canned::Status(status, body)) => Err(unexpected(Some((status, body)))),
            _ => Err(unexpected(None)),
        }
    }
}

pub fn chat_reply(reply: Option<&str>, reply_ml: Option<&str>, reply_en: Option<&str>) -> Canned {
    Canned::Chat(ChatReply {
        reply: reply.map(str::to_string),
        reply_ml: reply_ml.map(str::to_string),
        reply_en: reply_en.map(str::to_string),
    })
}

pub fn voice_reply(reply_ml: &str, reply_en: &str) -> Canned {
    Canned::Voice(VoiceReply {
        reply_ml: reply_ml.to_string(),
        reply_en: reply_en.to_string(),
    })
}

/// Speaker that records requests instead of speaking.
#[derive(Default)]
pub struct FakeSpeaker {
    pub voices: Vec<Voice>,
    pub spoken: Mutex<Vec<Utterance>>,
    pub cancels: AtomicUsize,
}

impl FakeSpeaker {
    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl Speaker for FakeSpeaker {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        self.spoken.lock().unwrap().push(utterance.clone());
        Ok(())
    }

    fn cancel_all(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

/// Microphone producing a fixed clip, or a recording that fails to stop.
pub struct FakeMicrophone {
    clip: Option<AudioClip>,
    pub opened: AtomicUsize,
}

impl FakeMicrophone {
    pub fn with_clip(bytes: &[u8]) -> Self {
        Self {
            clip: Some(AudioClip::webm(bytes.to_vec())),
            opened: AtomicUsize::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            clip: None,
            opened: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Microphone for FakeMicrophone {
    async fn open(&self) -> Result<Box<dyn Recording>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeRecording {
            clip: self.clip.clone(),
        }))
    }
}

struct FakeRecording {
    clip: Option<AudioClip>,
}

#[async_trait]
impl Recording for FakeRecording {
    async fn stop(&mut self) -> Result<AudioClip> {
        self.clip
            .take()
            .ok_or_else(|| KrishiError::unavailable("Recorder"))
    }
}

/// English conversation without greeting, numbered from 1.
pub fn english_chat(backend: Arc<MockBackend>) -> ConversationManager {
    ConversationManager::builder(backend)
        .with_language(Language::English)
        .with_greeting(false)
        .with_ids(Arc::new(SequentialIds::new()))
        .build()
}
