//! Game flow state machine
//!
//! Owns the session: the current screen, the simulation state, the ranking
//! table and the name being typed. Each loop iteration feeds one batch of
//! input events through `Game::step`, then the current screen is rendered.

use crate::audio::AudioSink;
use crate::error::Result;
use crate::highscores::{RankingTable, capitalize};
use crate::persistence::ScoreStore;
use crate::platform::{FrameClock, HeldKeys, InputEvent, InputSource, Key};
use crate::renderer::{self, Frame, Presenter};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::ui::{self, NameInput};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Ranking,
    Naming,
    CharSelect,
    Play,
    Over,
}

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// A whole game session
pub struct Game<S: ScoreStore> {
    screen: Screen,
    pub state: GameState,
    pub ranking: RankingTable,
    pub name: NameInput,
    store: S,
    /// Rank reached by the last finished run, if it made the table
    last_rank: Option<usize>,
}

impl<S: ScoreStore> Game<S> {
    /// Start a session on the menu, loading the ranking from `store`
    pub fn new(settings: Settings, seed: u64, mut store: S) -> Result<Self> {
        let ranking = store.load(settings.ranking_size)?;
        Ok(Self {
            screen: Screen::Menu,
            state: GameState::new(settings, seed),
            ranking,
            name: NameInput::new(),
            store,
            last_rank: None,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    fn go(&mut self, next: Screen) {
        log::info!("{:?} -> {:?}", self.screen, next);
        self.screen = next;
    }

    /// Process one loop iteration of input
    ///
    /// Events are handled in order by whichever screen is current when they
    /// arrive. The simulation ticks only if the iteration started in play.
    pub fn step(
        &mut self,
        events: &[InputEvent],
        held: HeldKeys,
        audio: &mut dyn AudioSink,
    ) -> Result<Control> {
        let started_in = self.screen;
        let mut superpowers = 0;

        for &event in events {
            if event == InputEvent::Quit {
                log::info!("Quit requested");
                return Ok(Control::Exit);
            }

            match (self.screen, event) {
                (Screen::Menu, InputEvent::PointerDown(p)) => {
                    if ui::NEW_GAME.contains(p) {
                        self.go(Screen::Naming);
                    } else if ui::RANKING.contains(p) {
                        self.go(Screen::Ranking);
                    } else if ui::QUIT.contains(p) {
                        return Ok(Control::Exit);
                    }
                }

                (Screen::Ranking, InputEvent::PointerDown(p)) => {
                    if ui::BACK.contains(p) {
                        self.go(Screen::Menu);
                    }
                }

                (Screen::Naming, InputEvent::PointerDown(p)) => {
                    if ui::OK.contains(p) {
                        self.go(Screen::CharSelect);
                    }
                }
                (Screen::Naming, InputEvent::KeyDown(Key::Backspace)) => self.name.pop(),
                (Screen::Naming, InputEvent::KeyDown(Key::Enter | Key::KeypadEnter)) => {
                    self.go(Screen::CharSelect);
                }
                (Screen::Naming, InputEvent::TextInput(c)) if !c.is_control() => {
                    self.name.push(c);
                }

                (Screen::CharSelect, InputEvent::PointerDown(p)) => {
                    if let Some(species) = ui::avatar_at(p) {
                        self.state.select(species);
                        log::info!("Playing as {}", species.name());
                        self.go(Screen::Play);
                    }
                }

                (Screen::Play, InputEvent::KeyDown(Key::Space)) => superpowers += 1,

                (Screen::Over, InputEvent::PointerUp(p)) => {
                    if ui::PLAY_AGAIN.contains(p) {
                        self.state.score.reset();
                        self.go(Screen::Menu);
                    } else if ui::QUIT_OVER.contains(p) {
                        return Ok(Control::Exit);
                    }
                }

                _ => {}
            }
        }

        if started_in == Screen::Play && self.screen == Screen::Play {
            let input = TickInput {
                left: held.left,
                right: held.right,
                up: held.up,
                down: held.down,
                superpowers,
            };
            for event in tick(&mut self.state, &input) {
                match event {
                    GameEvent::AppleEaten { cue, .. } | GameEvent::Superpower { cue } => {
                        audio.play(cue)
                    }
                    GameEvent::PredatorSpawned { id, count } => {
                        log::info!("Wolf {id} joined, {count} on the field");
                    }
                    GameEvent::Caught { predator } => {
                        log::info!("Caught by wolf {predator}");
                        self.finish_run()?;
                        break;
                    }
                }
            }
        }

        Ok(Control::Continue)
    }

    /// Record the run, reset the pack and show the game-over panel
    fn finish_run(&mut self) -> Result<()> {
        let name = capitalize(self.name.as_str());
        let score = self.state.score.get();
        self.last_rank = self.ranking.add_score(name.clone(), score);
        match self.last_rank {
            Some(rank) => log::info!("{name} scored {score}, rank {rank}"),
            None => log::info!("{name} scored {score}, off the table"),
        }
        self.store.save(&self.ranking)?;

        self.state.reset_after_death();
        self.go(Screen::Over);
        Ok(())
    }

    /// Describe the current screen for the presentation adapter
    pub fn frame(&self) -> Frame {
        renderer::build_frame(self.screen, &self.state, &self.ranking, &self.name)
    }

    /// Run until quit: poll, step, render, and pace while playing
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        presenter: &mut impl Presenter,
        audio: &mut dyn AudioSink,
    ) -> Result<()> {
        audio.start_music();
        let mut clock = FrameClock::new(self.state.settings.tick_rate);

        loop {
            let events = input.poll_events()?;
            let held = input.held_keys();
            let started_in = self.screen;

            if self.step(&events, held, audio)? == Control::Exit {
                break;
            }

            presenter.present(&self.frame())?;

            if started_in == Screen::Play {
                clock.tick();
            } else {
                clock.restart();
            }
        }

        log::info!("Bye");
        Ok(())
    }
}
