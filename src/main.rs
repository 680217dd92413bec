//! Piglet vs Apples entry point
//!
//! Loads settings, opens the score file and runs the game in the terminal.
//! The terminal owns the screen while playing, so send logs elsewhere:
//! `RUST_LOG=info piglet-vs-apples 2>game.log`.

use std::path::PathBuf;

use glam::Vec2;
use piglet_vs_apples::audio::LogAudio;
use piglet_vs_apples::persistence::CsvScoreFile;
use piglet_vs_apples::platform::terminal::{TerminalInput, TerminalPresenter, TerminalSession};
use piglet_vs_apples::{Game, Result, Settings};

/// Env var overriding the settings file location
const SETTINGS_ENV: &str = "PIGLET_SETTINGS";
const DEFAULT_SETTINGS: &str = "settings.json";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("piglet-vs-apples: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings_path = std::env::var_os(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));
    let settings = Settings::load_or_default(&settings_path);

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Starting with seed {}", seed);

    // Fail before touching the terminal if the ranking can't be read
    let store = CsvScoreFile::new(&settings.scores_path);
    let field = Vec2::new(
        settings.screen_width as f32,
        settings.screen_height as f32,
    );
    let mut audio = LogAudio::new(
        settings.effective_sfx_volume(),
        settings.effective_music_volume(),
    );
    let mut game = Game::new(settings, seed, store)?;

    let mut stdout = std::io::stdout();
    let session = TerminalSession::enter(&mut stdout)?;
    let mut input = TerminalInput::new(field, session.reports_releases())?;
    let mut presenter = TerminalPresenter::new(stdout);

    game.run(&mut input, &mut presenter, &mut audio)
}
