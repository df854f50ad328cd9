//! Conversation manager: message history, pending replies and voice capture.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use super::{
    backend::ChatBackend,
    microphone::{Microphone, NoMicrophone, Recording},
    speech::{SilentSpeaker, Speaker, SpeechController},
};
use crate::{
    error::{KrishiError, Result},
    ids::{IdGenerator, SequentialIds},
    models::{Language, Message, MessageKind, Sender},
};

/// Prompt sent along with every recorded voice question.
pub const VOICE_DEMO_PROMPT: &str =
    "Listen to the farmer's question and give short, practical advice for Kerala conditions.";

/// Shown when the backend answered but carried no usable text.
pub const NO_REPLY_TEXT: &str = "I could not generate a response.";

/// Placeholder content of the user's side of a voice exchange.
pub const VOICE_MESSAGE_TEXT: &str = "🎤 Voice message";

/// Apology appended in place of a reply when the backend cannot be reached.
pub fn apology(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Sorry, I could not reach the assistant right now. Please try again in a moment."
        }
        Language::Malayalam => {
            "ക്ഷമിക്കണം, ഇപ്പോൾ സഹായിയുമായി ബന്ധപ്പെടാൻ കഴിഞ്ഞില്ല. അൽപ്പസമയത്തിനു ശേഷം വീണ്ടും ശ്രമിക്കുക."
        }
    }
}

fn greeting(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Hello! I'm Krishi Mitra, your AI farming assistant. How can I help you today? \
             You can ask me about crops, weather, pest control, or any farming-related questions."
        }
        Language::Malayalam => {
            "നമസ്കാരം! ഞാൻ കൃഷി മിത്ര, നിങ്ങളുടെ AI കൃഷി സഹായി. ഇന്ന് ഞാൻ എങ്ങനെ സഹായിക്കണം? \
             വിളകൾ, കാലാവസ്ഥ, കീടനിയന്ത്രണം തുടങ്ങി കൃഷിയെക്കുറിച്ച് എന്തും ചോദിക്കാം."
        }
    }
}

#[derive(Debug, Default)]
struct ConversationState {
    messages: Arc<Vec<Message>>,
    draft: String,
    pending: usize,
}

impl ConversationState {
    /// Replaces the history with a copy that ends in `message`.
    fn append(&mut self, message: Message) {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend(self.messages.iter().cloned());
        messages.push(message);
        self.messages = Arc::new(messages);
    }
}

/// Lowers the pending count when the request that raised it ends, however
/// it ends.
struct PendingGuard<'a> {
    state: &'a Mutex<ConversationState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.pending = state.pending.saturating_sub(1);
    }
}

/// State container behind the chat screen.
///
/// Overlapping [`submit`](Self::submit) calls are allowed; replies are
/// appended in completion order. Every append swaps in a new history, so a
/// snapshot from [`messages`](Self::messages) never changes.
pub struct ConversationManager {
    backend: Arc<dyn ChatBackend>,
    ids: Arc<dyn IdGenerator>,
    microphone: Arc<dyn Microphone>,
    speech: SpeechController,
    language: Language,
    state: Mutex<ConversationState>,
    capture: tokio::sync::Mutex<Option<Box<dyn Recording>>>,
}

impl ConversationManager {
    pub fn builder(backend: Arc<dyn ChatBackend>) -> ConversationBuilder {
        ConversationBuilder::new(backend)
    }

    fn state(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn append(&self, message: Message) {
        self.state().append(message);
    }

    fn raise_pending(&self) -> PendingGuard<'_> {
        self.state().pending += 1;
        PendingGuard { state: &self.state }
    }

    fn bot_message(&self, content: impl Into<String>) -> Message {
        Message::text(self.ids.next_id(), Sender::Bot, content)
    }

    /// Primary language of the conversation.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Snapshot of the history in append order.
    pub fn messages(&self) -> Arc<Vec<Message>> {
        Arc::clone(&self.state().messages)
    }

    /// Whether a backend reply is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.state().pending > 0
    }

    pub fn draft(&self) -> String {
        self.state().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state().draft = text.into();
    }

    /// Submits the current draft.
    pub async fn submit_draft(&self) {
        let draft = self.draft();
        self.submit(&draft).await;
    }

    /// Sends `text` to the backend and appends the reply.
    ///
    /// Blank text is ignored. The user message is appended before the
    /// request starts. Any backend failure is replaced by the apology in the
    /// conversation language; nothing is returned to the caller and nothing
    /// is retried.
    pub async fn submit(&self, text: &str) {
        if text.trim().is_empty() {
            debug!("Ignoring blank message");
            return;
        }

        let user = Message::text(self.ids.next_id(), Sender::User, text);
        {
            let mut state = self.state();
            state.append(user);
            state.draft.clear();
        }
        let _pending = self.raise_pending();

        let reply = match self.backend.chat(text).await {
            Ok(reply) => {
                let content = reply
                    .best_text(self.language)
                    .unwrap_or(NO_REPLY_TEXT)
                    .to_string();
                let mut message = self.bot_message(content);
                if let (Some(primary), Some(secondary)) = (
                    reply.text_in(self.language),
                    reply.text_in(self.language.other()),
                ) {
                    message = message.with_translations(primary.to_string(), secondary.to_string());
                }
                message
            }
            Err(e) => {
                warn!("Chat request failed: {e}");
                self.bot_message(apology(self.language))
            }
        };
        self.append(reply);
    }

    /// Starts recording a voice question.
    ///
    /// # Errors
    ///
    /// `CaptureInProgress` if a capture is already running and
    /// `CapabilityUnavailable` if there is no microphone. The conversation is
    /// unchanged on error.
    pub async fn start_voice_capture(&self) -> Result<()> {
        let mut slot = self.capture.lock().await;
        if slot.is_some() {
            return Err(KrishiError::CaptureInProgress);
        }

        let recording = self.microphone.open().await?;
        *slot = Some(recording);
        info!("Voice capture started");
        Ok(())
    }

    pub fn is_capturing(&self) -> bool {
        self.capture
            .try_lock()
            .map(|slot| slot.is_some())
            .unwrap_or(true)
    }

    /// Stops recording and sends the clip with [`VOICE_DEMO_PROMPT`].
    ///
    /// A voice placeholder is appended for the user, then the bilingual
    /// reply, or the apology if the backend fails.
    ///
    /// # Errors
    ///
    /// `NoActiveCapture` if no capture was started.
    pub async fn stop_voice_capture(&self) -> Result<()> {
        let mut recording = self
            .capture
            .lock()
            .await
            .take()
            .ok_or(KrishiError::NoActiveCapture)?;

        let clip = match recording.stop().await {
            Ok(clip) => Some(clip),
            Err(e) => {
                warn!("Recording could not be read, sending prompt only: {e}");
                None
            }
        };
        drop(recording);
        info!("Voice capture stopped");

        self.append(
            Message::text(self.ids.next_id(), Sender::User, VOICE_MESSAGE_TEXT)
                .with_kind(MessageKind::Voice),
        );
        let _pending = self.raise_pending();

        let reply = match self.backend.voice_demo(clip.as_ref(), VOICE_DEMO_PROMPT).await {
            Ok(reply) => {
                let (primary, secondary) = reply.split(self.language);
                self.bot_message(primary.clone())
                    .with_translations(primary, secondary)
            }
            Err(e) => {
                warn!("Voice request failed: {e}");
                self.bot_message(apology(self.language))
            }
        };
        self.append(reply);
        Ok(())
    }

    /// Speaks `text`, replacing whatever is being spoken.
    pub fn speak(&self, key: &str, text: &str, lang: Language) {
        self.speech.speak(key, text, lang);
    }

    /// Speaks a message from the history in `lang`, keyed by its id.
    /// Returns `false` if the id is unknown.
    pub fn speak_message(&self, message_id: &str, lang: Language) -> bool {
        let messages = self.messages();
        let Some(message) = messages.iter().find(|m| m.id == message_id) else {
            return false;
        };
        self.speech
            .speak(&message.id, message.text_for(lang, self.language), lang);
        true
    }

    pub fn stop_speaking(&self) {
        self.speech.stop();
    }

    pub fn speech_finished(&self, key: &str) {
        self.speech.finished(key);
    }

    /// Key of the segment being spoken, if any.
    pub fn speaking_key(&self) -> Option<String> {
        self.speech.speaking_key()
    }
}

/// Builder for [`ConversationManager`].
pub struct ConversationBuilder {
    backend: Arc<dyn ChatBackend>,
    ids: Option<Arc<dyn IdGenerator>>,
    speaker: Option<Arc<dyn Speaker>>,
    microphone: Option<Arc<dyn Microphone>>,
    language: Language,
    greeting: bool,
}

impl ConversationBuilder {
    /// Starts from Malayalam, sequential ids, no speech, no microphone and a
    /// greeting message.
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            ids: None,
            speaker: None,
            microphone: None,
            language: Language::default(),
            greeting: true,
        }
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.speaker = Some(speaker);
        self
    }

    pub fn with_microphone(mut self, microphone: Arc<dyn Microphone>) -> Self {
        self.microphone = Some(microphone);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Whether the history starts with the assistant's greeting.
    pub fn with_greeting(mut self, greeting: bool) -> Self {
        self.greeting = greeting;
        self
    }

    pub fn build(self) -> ConversationManager {
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(SequentialIds::new()));
        let speaker = self.speaker.unwrap_or_else(|| Arc::new(SilentSpeaker));
        let microphone = self.microphone.unwrap_or_else(|| Arc::new(NoMicrophone));

        let mut state = ConversationState::default();
        if self.greeting {
            let lang = self.language;
            state.append(
                Message::text(ids.next_id(), Sender::Bot, greeting(lang))
                    .with_translations(greeting(lang).to_string(), greeting(lang.other()).to_string()),
            );
        }

        ConversationManager {
            backend: self.backend,
            ids,
            microphone,
            speech: SpeechController::new(speaker),
            language: self.language,
            state: Mutex::new(state),
            capture: tokio::sync::Mutex::new(None),
        }
    }
}
