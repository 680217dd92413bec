//! One simulation step of active play
//!
//! Order within a tick: held-key movement, superpower presses, settle the
//! frame (clamp, growth, score floor, wolf motion), apples, reinforcement,
//! and finally the wolf collision check.

use super::growth::apply_growth;
use super::state::{GameEvent, GameState};
use crate::clamp_to_bounds;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys (independent axes, diagonals allowed)
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Superpower key presses since the previous tick
    pub superpowers: u32,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Movement happens before the clamp, so a held key can push the
    // character briefly past the edge within the tick
    let character = state.character_mut();
    let vel = character.velocity;
    if input.left {
        character.pos.x -= vel;
    }
    if input.right {
        character.pos.x += vel;
    }
    if input.up {
        character.pos.y -= vel;
    }
    if input.down {
        character.pos.y += vel;
    }

    for _ in 0..input.superpowers {
        let cue = state.character().cue;
        for predator in &mut state.predators {
            predator.reverse();
        }
        state.score.sub(1);
        log::debug!("Superpower used, ledger at {}", state.score.raw());
        events.push(GameEvent::Superpower { cue });
    }

    // Frame settle
    let bounds = state.settings.bounds();
    let score = state.score.raw();
    let settings = state.settings.clone();
    let character = state.character_mut();
    character.pos = clamp_to_bounds(character.pos, bounds);
    apply_growth(character, score, &settings);
    state.score.settle();
    state.advance_predators();

    events.extend(state.consume_apples());
    events.extend(state.reinforce_predators());

    let character = state.character();
    if let Some(predator) = state.predators.iter().find(|p| character.touches(p.pos)) {
        events.push(GameEvent::Caught {
            predator: predator.id,
        });
    }

    events
}
