use std::path::PathBuf;

use clap::{Parser, Subcommand};
use krishi_core::{chat::BASE_URL_ENV, models::Language};

/// Krishi Mitra, a bilingual farming assistant
///
/// Chat with the assistant, ask a recorded voice question, or track crop care
/// plans from the terminal. Without a subcommand the dashboard is shown.
#[derive(Parser)]
#[command(version, about, name = "krishi")]
pub struct Args {
    /// Base URL of the assistant API, e.g. http://127.0.0.1:8000/api
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub api_base_url: Option<String>,

    /// Primary language of the conversation (ml or en)
    #[arg(long, global = true, default_value = "ml")]
    pub language: Language,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the assistant a question; reads questions from stdin when none is given
    #[command(alias = "c")]
    Chat {
        /// The question to ask
        message: Vec<String>,
        /// Read the reply aloud
        #[arg(long)]
        speak: bool,
    },
    /// Send a recorded voice question
    #[command(alias = "v")]
    Voice {
        /// Audio file standing in for the microphone recording
        #[arg(long)]
        audio: Option<PathBuf>,
    },
    /// Reformat text from stdin as markdown
    Normalize,
    /// Track crop care plans interactively (commands are read from stdin)
    #[command(alias = "t")]
    Tracker {
        /// Start without the sample crops and plan
        #[arg(long)]
        empty: bool,
    },
    /// Show the weather outlook
    Weather,
    /// Show the market price trend for a crop
    Prices {
        /// Crop name, e.g. Tomato
        crop: String,
    },
}
