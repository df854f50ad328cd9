//! Speech output through an external text-to-speech program.

use std::{
    process::{Child, Command, Stdio},
    sync::{Mutex, MutexGuard, PoisonError},
};

use krishi_core::{
    chat::{Speaker, Utterance, Voice},
    KrishiError, Result,
};
use log::{debug, warn};

/// Program used when none is configured.
pub const DEFAULT_TTS_PROGRAM: &str = "espeak-ng";

/// Words per minute of espeak at rate 1.0.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// [`Speaker`] that spawns an espeak-compatible program per utterance.
pub struct CommandSpeaker {
    program: String,
    child: Mutex<Option<Child>>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: Mutex::new(None),
        }
    }

    fn child(&self) -> MutexGuard<'_, Option<Child>> {
        self.child.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks until the current utterance has been spoken.
    pub fn wait(&self) {
        if let Some(mut child) = self.child().take() {
            if let Err(e) = child.wait() {
                warn!("Failed to wait for {}: {e}", self.program);
            }
        }
    }
}

impl Default for CommandSpeaker {
    fn default() -> Self {
        Self::new(DEFAULT_TTS_PROGRAM)
    }
}

/// Parses the table printed by `espeak-ng --voices`:
/// `Pty Language Age/Gender VoiceName File Other Languages`.
fn parse_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [_, lang, _, name, ..] => Some(Voice::new(*name, *lang)),
                _ => None,
            }
        })
        .collect()
}

impl Speaker for CommandSpeaker {
    fn voices(&self) -> Vec<Voice> {
        match Command::new(&self.program).arg("--voices").output() {
            Ok(output) => parse_voices(&String::from_utf8_lossy(&output.stdout)),
            Err(e) => {
                debug!("Cannot list voices of {}: {e}", self.program);
                Vec::new()
            }
        }
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        let voice = utterance.voice.as_deref().unwrap_or(&utterance.lang);
        let words_per_minute = (BASE_WORDS_PER_MINUTE * utterance.rate).round();
        let amplitude = (100.0 * utterance.volume).round();
        let pitch = (50.0 * utterance.pitch).round();

        let child = Command::new(&self.program)
            .args(["-v", voice])
            .args(["-s", &words_per_minute.to_string()])
            .args(["-a", &amplitude.to_string()])
            .args(["-p", &pitch.to_string()])
            .arg(&utterance.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                debug!("Failed to start {}: {e}", self.program);
                KrishiError::unavailable(format!("Speech program '{}'", self.program))
            })?;

        *self.child() = Some(child);
        Ok(())
    }

    fn cancel_all(&self) {
        if let Some(mut child) = self.child().take() {
            // Already-finished children report an error here
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
