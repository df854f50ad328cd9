//! Krishi Mitra CLI
//!
//! Terminal front-end for the farming assistant: chat, voice questions, the
//! crop plan tracker and the dashboard panels.

mod args;
mod chat;
mod cli;
mod renderer;
mod session;
mod speech;

use std::io::Read;

use anyhow::{Context, Result};
use args::{Args, Commands};
use chat::ChatFrontend;
use clap::Parser;
use krishi_core::{
    display::{Crops, Plans, PriceTrend, WeatherOutlook},
    market::{price_trend, weather_outlook},
    normalize_to_markdown, CropPlanTracker,
};
use log::{debug, info};
use renderer::TerminalRenderer;
use session::TrackerSession;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Loaded before the logger so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("No .env loaded: {e}");
    }

    let Args {
        api_base_url,
        language,
        no_color,
        command,
    } = Args::parse();
    let renderer = TerminalRenderer::new(!no_color);

    info!("Krishi Mitra started");

    match command {
        Some(Chat { message, speak }) => {
            let mut frontend = ChatFrontend::new(api_base_url, language, speak, None, renderer)?;
            if message.is_empty() {
                frontend.ask_from_stdin().await
            } else {
                frontend.ask(&message.join(" ")).await;
                Ok(())
            }
        }
        Some(Voice { audio }) => {
            ChatFrontend::new(api_base_url, language, false, audio, renderer)?
                .voice()
                .await
        }
        Some(Normalize) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            println!("{}", normalize_to_markdown(&text));
            Ok(())
        }
        Some(Tracker { empty }) => {
            let tracker = if empty {
                CropPlanTracker::new()
            } else {
                CropPlanTracker::new().with_demo_data()
            };
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            TrackerSession::new(tracker, renderer).run(input).await
        }
        Some(Weather) => {
            renderer.render(&WeatherOutlook(weather_outlook()).to_string());
            Ok(())
        }
        Some(Prices { crop }) => {
            let points = price_trend(&crop)
                .with_context(|| format!("No price data for '{crop}'"))?;
            renderer.render(&PriceTrend { crop: &crop, points }.to_string());
            Ok(())
        }
        None => {
            show_dashboard(&renderer);
            Ok(())
        }
    }
}

fn show_dashboard(renderer: &TerminalRenderer) {
    let tracker = CropPlanTracker::new().with_demo_data();

    renderer.render("# Krishi Mitra / കൃഷി മിത്ര\n\n");
    renderer.render(&Crops(tracker.crops().to_vec()).to_string());
    renderer.render(&Plans(tracker.plans().to_vec()).to_string());
    renderer.render(&WeatherOutlook(weather_outlook()).to_string());
    for crop in tracker.crops().iter() {
        if let Some(points) = price_trend(&crop.name) {
            renderer.render("\n");
            renderer.render(&PriceTrend { crop: &crop.name, points }.to_string());
        }
    }
}
