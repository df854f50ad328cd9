//! Text-to-speech capability and the single-utterance controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::{
    error::{KrishiError, Result},
    models::Language,
};

/// Speaking rate requested for every utterance.
pub const SPEECH_RATE: f32 = 0.95;

/// Lowercase name fragments that suggest a female voice.
const FEMALE_HINTS: [&str; 7] = ["female", "woman", "heera", "veena", "kalpana", "zira", "samantha"];

/// A system voice offered by the speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `ml-IN`
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Voice name; `None` leaves the engine default
    pub voice: Option<String>,
}

/// Speech synthesis capability.
pub trait Speaker: Send + Sync {
    /// Voices currently installed.
    fn voices(&self) -> Vec<Voice>;

    /// Starts speaking. Must not block until the speech ends.
    fn speak(&self, utterance: &Utterance) -> Result<()>;

    /// Stops everything that is speaking or queued.
    fn cancel_all(&self);
}

/// Speaker for hosts without speech synthesis. Every request fails.
#[derive(Debug, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, _utterance: &Utterance) -> Result<()> {
        Err(KrishiError::unavailable("Speech synthesis"))
    }

    fn cancel_all(&self) {}
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Picks the voice for `lang_tag`.
///
/// Voices with the exact tag win over voices sharing only the primary
/// subtag (`ml` for `ml-IN`). Within the winning group a voice whose name
/// hints at a female speaker is preferred. `None` means no voice matches and
/// the engine default should be used.
pub fn select_voice<'a>(voices: &'a [Voice], lang_tag: &str) -> Option<&'a Voice> {
    let wanted = normalize_tag(lang_tag);
    let wanted_primary = primary_subtag(&wanted);

    let exact: Vec<&Voice> = voices
        .iter()
        .filter(|v| normalize_tag(&v.lang) == wanted)
        .collect();
    let candidates = if exact.is_empty() {
        voices
            .iter()
            .filter(|v| primary_subtag(&normalize_tag(&v.lang)) == wanted_primary)
            .collect()
    } else {
        exact
    };

    candidates
        .iter()
        .find(|v| {
            let name = v.name.to_lowercase();
            FEMALE_HINTS.iter().any(|hint| name.contains(hint))
        })
        .or_else(|| candidates.first())
        .copied()
}

/// Speaks one segment at a time and remembers which one.
///
/// A new request cancels the current one instead of queueing. The key of the
/// segment being spoken lets a UI show a single Stop control. Dropping the
/// controller cancels all speech.
pub struct SpeechController {
    speaker: Arc<dyn Speaker>,
    speaking: Mutex<Option<String>>,
}

impl SpeechController {
    pub fn new(speaker: Arc<dyn Speaker>) -> Self {
        Self {
            speaker,
            speaking: Mutex::new(None),
        }
    }

    fn speaking(&self) -> MutexGuard<'_, Option<String>> {
        self.speaking.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Speaks `text` in `lang`, tagging it with `key`.
    ///
    /// Failures are logged and leave nothing marked as speaking.
    pub fn speak(&self, key: &str, text: &str, lang: Language) {
        self.speaker.cancel_all();

        let voices = self.speaker.voices();
        let voice = select_voice(&voices, lang.tag()).map(|v| v.name.clone());
        let utterance = Utterance {
            text: text.to_string(),
            lang: lang.tag().to_string(),
            rate: SPEECH_RATE,
            pitch: 1.0,
            volume: 1.0,
            voice,
        };

        match self.speaker.speak(&utterance) {
            Ok(()) => {
                debug!("Speaking {key} in {} with voice {:?}", utterance.lang, utterance.voice);
                *self.speaking() = Some(key.to_string());
            }
            Err(e) => {
                warn!("Speech failed for {key}: {e}");
                *self.speaking() = None;
            }
        }
    }

    /// Cancels speech and clears the speaking key.
    pub fn stop(&self) {
        self.speaker.cancel_all();
        *self.speaking() = None;
    }

    /// Called when the engine reports the end of an utterance.
    pub fn finished(&self, key: &str) {
        let mut speaking = self.speaking();
        if speaking.as_deref() == Some(key) {
            *speaking = None;
        }
    }

    pub fn speaking_key(&self) -> Option<String> {
        self.speaking().clone()
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        self.speaker.cancel_all();
    }
}
