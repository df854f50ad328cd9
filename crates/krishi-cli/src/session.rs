//! Line-oriented tracker session over stdin.

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use krishi_core::{
    display::{Crops, Notice, Plans},
    params::{AttachEvidence, CreatePlan, NewCrop, StepRef},
    CropPlanTracker, KrishiError,
};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    cli::{split_words, CropCommands, PlanCommands, SessionCommand, SessionLine, StepCommands},
    renderer::TerminalRenderer,
};

/// Whether the session should keep reading lines.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct TrackerSession {
    tracker: CropPlanTracker,
    renderer: TerminalRenderer,
}

impl TrackerSession {
    pub fn new(tracker: CropPlanTracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        let words = split_words(line);
        if words.is_empty() || words[0].starts_with('#') {
            return Flow::Continue;
        }
        debug!("Session command: {words:?}");

        match SessionLine::try_parse_from(words) {
            Ok(SessionLine { command }) => self.dispatch(command),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                print!("{e}");
                Flow::Continue
            }
            Err(e) => {
                eprint!("{e}");
                Flow::Continue
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Flow {
        match command {
            SessionCommand::Plan { command } => self.plan(command),
            SessionCommand::Step { command } => self.step(command),
            SessionCommand::Crop { command } => self.crop(command),
            SessionCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn plan(&mut self, command: PlanCommands) {
        match command {
            PlanCommands::Create(args) => {
                let params = CreatePlan::from(args);
                match self.tracker.create_plan(&params) {
                    Ok(plan) => {
                        self.renderer.notice(&Notice::plan_created(&plan.crop_name));
                        self.renderer.render(&plan.to_string());
                    }
                    Err(e) => self.report(&e),
                }
            }
            PlanCommands::List => self
                .renderer
                .render(&Plans(self.tracker.plans().to_vec()).to_string()),
            PlanCommands::Show { id } => match self.tracker.plan(&id) {
                Some(plan) => self.renderer.render(&plan.to_string()),
                None => self.report(&KrishiError::PlanNotFound { id }),
            },
        }
    }

    fn step(&mut self, command: StepCommands) {
        let (day, result) = match command {
            StepCommands::Complete(args) => {
                let params = StepRef::from(args);
                (params.day, self.tracker.complete_step(&params))
            }
            StepCommands::Evidence(args) => {
                let params = AttachEvidence::from(args);
                (params.step.day, self.tracker.attach_evidence(&params))
            }
        };

        match result {
            Ok(plan) => {
                self.renderer.notice(&Notice::day_completed(day));
                if let Some(advice) = plan.step(day).and_then(|s| s.suggestion.as_deref()) {
                    self.renderer.render(&format!("{advice}\n"));
                }
                self.renderer.render(&plan.to_string());
            }
            Err(e) => self.report(&e),
        }
    }

    fn crop(&mut self, command: CropCommands) {
        match command {
            CropCommands::Add(args) => match self.tracker.add_crop(&NewCrop::from(args)) {
                Ok(crop) => {
                    self.renderer.notice(&Notice::crop_added());
                    self.renderer.render(&crop.to_string());
                }
                Err(e) => self.report(&e),
            },
            CropCommands::List => self
                .renderer
                .render(&Crops(self.tracker.crops().to_vec()).to_string()),
        }
    }

    fn report(&self, err: &KrishiError) {
        debug!("Tracker operation failed: {err}");
        self.renderer.notice(&Notice::from(err));
    }
}
