//! Chat and voice front-end over the conversation manager.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use krishi_core::{
    chat::{FileMicrophone, HttpBackend, Microphone, NoMicrophone},
    display::{Notice, Transcript},
    models::Language,
    ConversationManager,
};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{renderer::TerminalRenderer, speech::CommandSpeaker};

pub struct ChatFrontend {
    manager: ConversationManager,
    speaker: Option<Arc<CommandSpeaker>>,
    renderer: TerminalRenderer,
    shown: usize,
}

impl ChatFrontend {
    /// Connects to the assistant API. With `speak`, replies are read aloud;
    /// with `audio`, that file stands in for the microphone.
    pub fn new(
        base_url: Option<String>,
        language: Language,
        speak: bool,
        audio: Option<PathBuf>,
        renderer: TerminalRenderer,
    ) -> Result<Self> {
        let backend = HttpBackend::builder()
            .with_base_url(base_url)
            .build()
            .context("Failed to configure the assistant API")?;
        info!("Using assistant API at {}", backend.base_url());

        let microphone: Arc<dyn Microphone> = match audio {
            Some(path) => Arc::new(FileMicrophone::new(path)),
            None => Arc::new(NoMicrophone),
        };
        let mut builder = ConversationManager::builder(Arc::new(backend))
            .with_language(language)
            .with_microphone(microphone)
            .with_greeting(false);

        let speaker = speak.then(|| Arc::new(CommandSpeaker::default()));
        if let Some(speaker) = &speaker {
            builder = builder.with_speaker(speaker.clone());
        }

        Ok(Self {
            manager: builder.build(),
            speaker,
            renderer,
            shown: 0,
        })
    }

    /// Prints messages appended since the last call and reads the newest
    /// bot reply aloud when speech is enabled.
    fn show_new_messages(&mut self) {
        let messages = self.manager.messages();
        let fresh = messages.get(self.shown..).unwrap_or_default().to_vec();
        self.shown = messages.len();
        if fresh.is_empty() {
            return;
        }
        self.renderer.render(&Transcript(fresh).to_string());

        if let (Some(speaker), Some(reply)) =
            (&self.speaker, messages.iter().rev().find(|m| m.is_bot()))
        {
            let language = self.manager.language();
            if self.manager.speak_message(&reply.id, language) {
                speaker.wait();
                self.manager.speech_finished(&reply.id);
            }
        }
    }

    pub async fn ask(&mut self, question: &str) {
        self.manager.set_draft(question);
        self.manager.submit_draft().await;
        self.show_new_messages();
    }

    /// Asks every non-empty stdin line as a question.
    pub async fn ask_from_stdin(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        {
            self.ask(&line).await;
        }
        Ok(())
    }

    /// Records a voice question and prints the exchange. A missing
    /// microphone is reported as a notice.
    pub async fn voice(&mut self) -> Result<()> {
        if let Err(e) = self.manager.start_voice_capture().await {
            self.renderer.notice(&Notice::from(&e));
            return Ok(());
        }
        self.manager
            .stop_voice_capture()
            .await
            .context("Voice capture failed")?;
        self.show_new_messages();
        Ok(())
    }
}
