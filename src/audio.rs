//! Audio cues
//!
//! The game only fires cues and never waits on them. `AudioSink` is the seam
//! for whatever mixer the host has; the bundled sink just logs.

use serde::{Deserialize, Serialize};

use crate::sim::Species;

/// Sound cue handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Apple eaten
    Chew,
    /// Superpower, one call per species
    Call(Species),
}

impl SoundCue {
    /// Asset name the host should resolve
    pub fn asset(&self) -> &'static str {
        match self {
            SoundCue::Chew => "sounds/apple.wav",
            SoundCue::Call(Species::Pig) => "sounds/pig.wav",
            SoundCue::Call(Species::Elephant) => "sounds/elephant.wav",
            SoundCue::Call(Species::Cow) => "sounds/cow.wav",
        }
    }
}

/// Background track, looped from process start
pub const MUSIC_TRACK: &str = "sounds/music.wav";

/// Fire-and-forget audio output
pub trait AudioSink {
    /// Play a one-shot cue
    fn play(&mut self, cue: SoundCue);

    /// Start the looping background track
    fn start_music(&mut self);
}

/// Sink that logs cues instead of playing them
#[derive(Debug, Clone)]
pub struct LogAudio {
    sfx_volume: f32,
    music_volume: f32,
}

impl LogAudio {
    pub fn new(sfx_volume: f32, music_volume: f32) -> Self {
        Self {
            sfx_volume: sfx_volume.clamp(0.0, 1.0),
            music_volume: music_volume.clamp(0.0, 1.0),
        }
    }
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        log::debug!("♪ {} (vol {:.2})", cue.asset(), self.sfx_volume);
    }

    fn start_music(&mut self) {
        if self.music_volume <= 0.0 {
            return;
        }
        log::info!("Looping {MUSIC_TRACK} (vol {:.2})", self.music_volume);
    }
}

/// Sink that remembers every cue, for tests
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundCue>,
    pub music_started: bool,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }

    fn start_music(&mut self) {
        self.music_started = true;
    }
}
