//! Fire-and-forget sound cues.
//!
//! Cues run an external audio player on a detached thread. A missing file,
//! a missing player or a failing player is logged at debug level and
//! otherwise ignored.

use crate::config::SoundConfig;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tictac_engine::{RoundEvent, RoundListener};
use tracing::{debug, instrument};

/// Which cue to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// A round was won.
    Win,
    /// A round was drawn.
    Draw,
}

impl Cue {
    /// Maps an engine event to its cue.
    pub fn for_event(event: &RoundEvent) -> Self {
        match event {
            RoundEvent::MovePlayed { .. } => Cue::Move,
            RoundEvent::RoundWon { .. } => Cue::Win,
            RoundEvent::RoundDrawn => Cue::Draw,
        }
    }
}

/// Plays cue files through an external command.
#[derive(Debug, Clone)]
pub struct SoundCues {
    command: Option<String>,
    move_file: PathBuf,
    win_file: PathBuf,
    draw_file: PathBuf,
}

impl SoundCues {
    /// Builds cues from config. Returns `None` when sound is disabled.
    #[instrument(skip(config))]
    pub fn from_config(config: &SoundConfig) -> Option<Self> {
        if !config.enabled() {
            debug!("Sound disabled");
            return None;
        }
        Some(Self {
            command: config.command().clone().or_else(platform_player),
            move_file: config.move_file().clone(),
            win_file: config.win_file().clone(),
            draw_file: config.draw_file().clone(),
        })
    }

    /// File played for a cue.
    pub fn file_for(&self, cue: Cue) -> &Path {
        match cue {
            Cue::Move => &self.move_file,
            Cue::Win => &self.win_file,
            Cue::Draw => &self.draw_file,
        }
    }

    /// Starts playing a cue and returns immediately.
    #[instrument(skip(self))]
    pub fn play(&self, cue: Cue) {
        let Some(command) = self.command.clone() else {
            debug!("No audio player configured");
            return;
        };
        let file = self.file_for(cue).to_path_buf();
        if !file.is_file() {
            debug!(file = %file.display(), "Cue file missing");
            return;
        }

        let spawned = std::thread::Builder::new()
            .name(format!("cue-{cue}"))
            .spawn(move || {
                let status = Command::new(&command)
                    .arg(&file)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status();
                match status {
                    Ok(status) if status.success() => debug!(%cue, "Cue played"),
                    Ok(status) => debug!(%cue, ?status, "Audio player failed"),
                    Err(e) => debug!(%cue, error = %e, "Audio player unavailable"),
                }
            });
        if let Err(e) = spawned {
            debug!(error = %e, "Could not start cue thread");
        }
    }
}

impl RoundListener for SoundCues {
    fn on_event(&self, event: RoundEvent) {
        self.play(Cue::for_event(&event));
    }
}

fn platform_player() -> Option<String> {
    if cfg!(target_os = "macos") {
        Some("afplay".to_string())
    } else if cfg!(target_os = "linux") {
        Some("paplay".to_string())
    } else {
        None
    }
}
