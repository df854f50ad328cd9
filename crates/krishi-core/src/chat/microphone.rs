//! Microphone capability used for voice questions.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::backend::AudioClip;
use crate::error::{KrishiError, Result};

/// Access to an audio input device.
#[async_trait]
pub trait Microphone: Send + Sync {
    /// Asks for permission and starts recording.
    ///
    /// Returns `KrishiError::CapabilityUnavailable` when the host has no
    /// microphone support.
    async fn open(&self) -> Result<Box<dyn Recording>>;
}

/// A running recording. Stopping releases the device.
#[async_trait]
pub trait Recording: Send {
    async fn stop(&mut self) -> Result<AudioClip>;
}

/// Host without any audio input.
#[derive(Debug, Default)]
pub struct NoMicrophone;

#[async_trait]
impl Microphone for NoMicrophone {
    async fn open(&self) -> Result<Box<dyn Recording>> {
        Err(KrishiError::unavailable("Microphone"))
    }
}

/// Uses a pre-recorded audio file as the captured clip.
#[derive(Debug, Clone)]
pub struct FileMicrophone {
    path: PathBuf,
}

impl FileMicrophone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Microphone for FileMicrophone {
    async fn open(&self) -> Result<Box<dyn Recording>> {
        tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| KrishiError::FileSystem {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(Box::new(FileRecording {
            path: self.path.clone(),
        }))
    }
}

struct FileRecording {
    path: PathBuf,
}

#[async_trait]
impl Recording for FileRecording {
    async fn stop(&mut self) -> Result<AudioClip> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| KrishiError::FileSystem {
                path: self.path.clone(),
                source: e,
            })?;
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "voice.webm".to_string());

        Ok(AudioClip {
            bytes,
            media_type: media_type_for(&self.path).to_string(),
            file_name,
        })
    }
}

fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "webm" => "audio/webm",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_no_microphone_is_unavailable() {
        let err = NoMicrophone.open().await.err().expect("open should fail");
        assert!(matches!(err, KrishiError::CapabilityUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_file_microphone_reads_clip() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("question.wav");
        std::fs::write(&path, b"RIFF").expect("Failed to write audio");

        let mut recording = FileMicrophone::new(&path)
            .open()
            .await
            .expect("Failed to open microphone");
        let clip = recording.stop().await.expect("Failed to stop recording");

        assert_eq!(clip.bytes, b"RIFF");
        assert_eq!(clip.media_type, "audio/wav");
        assert_eq!(clip.file_name, "question.wav");
    }

    #[tokio::test]
    async fn test_file_microphone_missing_file() {
        let err = FileMicrophone::new("/no/such/clip.webm")
            .open()
            .await
            .err()
            .expect("open should fail");
        assert!(matches!(err, KrishiError::FileSystem { .. }));
    }
}
